//! 仿真时间
//!
//! 时间单位为分钟（f64）。时钟由（天序号，当天内时钟）组成，
//! 绝对时间 = 已结束各天的时长之和 + 当天时钟。

use serde::{Deserialize, Serialize};

/// 名义营业时长（分钟），也是当天停止接待新顾客的时刻。
pub const DAY_MINUTES: f64 = 480.0;

/// 顾客排队的耐心（分钟）
pub const PATIENCE_MINUTES: f64 = 30.0;

/// 按小时计的终点会额外放宽这个量，避免恰好落在终点的事件被浮点误差挡掉。
const HORIZON_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    /// 从 1 开始的天序号
    pub day: u32,
    /// 当天内时钟
    pub now: f64,
    /// 已结束各天的时长之和
    pub completed: f64,
}

impl Default for SimClock {
    fn default() -> Self {
        Self {
            day: 1,
            now: 0.0,
            completed: 0.0,
        }
    }
}

impl SimClock {
    pub fn absolute(&self) -> f64 {
        self.completed + self.now
    }

    pub fn advance_to(&mut self, at: f64) {
        self.now = at;
    }

    /// 结束当天并开始新的一天，返回前一天最后的时钟值。
    pub fn start_next_day(&mut self) -> f64 {
        let previous = self.now;
        self.completed += previous;
        self.day += 1;
        self.now = 0.0;
        previous
    }
}

/// 当天是否恰好在名义时长结束（与 numpy.isclose 的默认容差一致）
pub fn closed_on_time(last_clock: f64) -> bool {
    (last_clock - DAY_MINUTES).abs() <= 1e-8 + 1e-5 * DAY_MINUTES
}

/// 仿真终点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Horizon {
    Hours(u32),
    Days(u32),
}

impl Default for Horizon {
    fn default() -> Self {
        Horizon::Hours(8)
    }
}

impl Horizon {
    /// 名义总时长（分钟）；按天计时每天按 480 分钟折算。
    pub fn minutes(&self) -> f64 {
        match *self {
            Horizon::Hours(h) => h as f64 * 60.0,
            Horizon::Days(d) => d as f64 * DAY_MINUTES,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(*self, Horizon::Hours(0) | Horizon::Days(0))
    }

    /// 处理下一个事件之前检查：是否已经到达终点。
    pub fn exhausted(&self, clock: &SimClock) -> bool {
        match *self {
            Horizon::Hours(_) => clock.absolute() >= self.minutes() + HORIZON_EPSILON,
            Horizon::Days(d) => clock.day > d,
        }
    }

    /// 选中的定时事件（当天时刻 `at`）是否应改为仿真结束。
    pub fn cuts(&self, clock: &SimClock, at: f64) -> bool {
        match *self {
            Horizon::Hours(_) => clock.completed + at >= self.minutes() + HORIZON_EPSILON,
            Horizon::Days(_) => clock.completed >= self.minutes(),
        }
    }
}
