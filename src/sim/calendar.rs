//! 事件日历
//!
//! 每类定时事件最多只有一个待处理时间；`None` 表示当前不活跃。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 事件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    StartOfDay,
    Arrival,
    ServiceCompletion,
    ImpatienceExpiry,
    IntakeClose,
    EndOfSimulation,
}

impl EventKind {
    /// 定时事件，按同时刻时的优先级排列
    pub const TIMED: [EventKind; 4] = [
        EventKind::Arrival,
        EventKind::ServiceCompletion,
        EventKind::ImpatienceExpiry,
        EventKind::IntakeClose,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::StartOfDay => "Start of Day",
            EventKind::Arrival => "Customer Arrival",
            EventKind::ServiceCompletion => "Service Completion",
            EventKind::ImpatienceExpiry => "Impatience Expiry",
            EventKind::IntakeClose => "Intake Close",
            EventKind::EndOfSimulation => "End of Simulation",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
    pub arrival: Option<f64>,
    pub completion: Option<f64>,
    /// 队列中最早的耐心截止时间
    pub impatience: Option<f64>,
    pub intake_close: Option<f64>,
}

impl Calendar {
    pub fn get(&self, kind: EventKind) -> Option<f64> {
        match kind {
            EventKind::Arrival => self.arrival,
            EventKind::ServiceCompletion => self.completion,
            EventKind::ImpatienceExpiry => self.impatience,
            EventKind::IntakeClose => self.intake_close,
            EventKind::StartOfDay | EventKind::EndOfSimulation => None,
        }
    }

    /// 没有到达、没有服务、队列为空：当天结束。
    /// 仍未触发的停止接待事件不会让这一天继续。
    pub fn day_is_over(&self) -> bool {
        self.arrival.is_none() && self.completion.is_none() && self.impatience.is_none()
    }

    /// 时间最小的定时事件；同时刻按 `EventKind::TIMED` 的顺序取第一个。
    pub fn earliest(&self) -> Option<(EventKind, f64)> {
        EventKind::TIMED
            .iter()
            .filter_map(|&kind| self.get(kind).map(|at| (kind, at)))
            .fold(None, |best, (kind, at)| match best {
                Some((_, best_at)) if best_at <= at => best,
                _ => Some((kind, at)),
            })
    }

    /// 下一个事件；当天结束时返回 `None`（隐含的新一天开始）。
    pub fn select(&self) -> Option<(EventKind, f64)> {
        if self.day_is_over() {
            return None;
        }
        self.earliest()
    }
}

/// 选中的下一个事件。`at` 为当天时刻，新一天开始没有时刻。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NextEvent {
    pub kind: EventKind,
    pub at: Option<f64>,
}

impl NextEvent {
    pub fn start_of_day() -> Self {
        Self {
            kind: EventKind::StartOfDay,
            at: None,
        }
    }
}
