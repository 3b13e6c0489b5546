//! 仿真器
//!
//! 单线程的下一事件循环：选事件、记录快照、执行转换，直到到达终点或迭代上限。

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use super::calendar::{EventKind, NextEvent};
use super::time::Horizon;
use crate::error::SimError;
use crate::salon::{IntegrationStore, Salon, SalonConfig};
use crate::trace::{Metrics, Recorder, TraceRow};
use crate::variate::UniformSource;

/// 处理事件数的硬上限，防止失控
pub const MAX_ITERATIONS: u64 = 200_000;

/// 循环结束的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// 正常到达终点
    Completed,
    /// 触发迭代上限，结果不完整
    IterationLimit,
}

/// 一次运行的全部输出
#[derive(Debug)]
pub struct RunOutcome {
    pub rows: Vec<TraceRow>,
    pub metrics: Metrics,
    pub termination: Termination,
    /// 已处理的事件数
    pub processed: u64,
    pub store: IntegrationStore,
}

pub struct Simulator<R> {
    salon: Salon<R>,
    horizon: Horizon,
    recorder: Recorder,
    processed: u64,
    max_iterations: u64,
}

impl<R: UniformSource> Simulator<R> {
    pub fn new(cfg: SalonConfig, rng: R) -> Result<Self, SimError> {
        let horizon = cfg.horizon;
        let recorder = Recorder::new(cfg.display_from, cfg.max_rows);
        let salon = Salon::new(cfg, rng)?;
        Ok(Self {
            salon,
            horizon,
            recorder,
            processed: 0,
            max_iterations: MAX_ITERATIONS,
        })
    }

    /// 覆盖迭代上限
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn salon(&self) -> &Salon<R> {
        &self.salon
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// 选择下一个事件：日历中最早的定时事件，超过终点则改为仿真结束。
    pub fn next_event(&self) -> NextEvent {
        let clock = self.salon.clock();
        let Some((kind, at)) = self.salon.calendar().select() else {
            return NextEvent::start_of_day();
        };
        if self.horizon.cuts(clock, at) {
            trace!(?kind, at, "事件超过终点");
            NextEvent {
                kind: EventKind::EndOfSimulation,
                at: Some(at),
            }
        } else {
            NextEvent { kind, at: Some(at) }
        }
    }

    /// 处理一个事件；返回 `false` 表示已到达仿真结束。
    pub fn step(&mut self) -> Result<bool, SimError> {
        let next = self.next_event();
        let elapsed = self.salon.clock().absolute();
        if self.recorder.wants(elapsed) {
            self.recorder
                .push(self.salon.snapshot(self.processed + 1, next.kind));
        }
        self.processed += 1;

        debug!(
            event_num = self.processed,
            day = self.salon.clock().day,
            elapsed,
            next = %next.kind,
            at = ?next.at,
            queue_len = self.salon.queue().len(),
            "执行事件"
        );

        if next.kind == EventKind::EndOfSimulation {
            return Ok(false);
        }
        self.salon.apply(next)?;
        Ok(true)
    }

    #[tracing::instrument(skip(self), fields(horizon = ?self.horizon))]
    pub fn run(mut self) -> Result<RunOutcome, SimError> {
        info!("▶️  开始运行仿真");

        let termination = loop {
            if self.processed >= self.max_iterations {
                warn!(max_iterations = self.max_iterations, "达到迭代上限，提前停止");
                break Termination::IterationLimit;
            }
            if self.horizon.exhausted(self.salon.clock()) {
                break Termination::Completed;
            }
            if !self.step()? {
                break Termination::Completed;
            }
        };

        let summary = self.salon.summary(self.processed, &self.horizon);
        self.recorder.finish(summary);
        let metrics = self.salon.metrics();

        info!(
            total_events = self.processed,
            ?termination,
            served = metrics.total_served,
            abandoned = metrics.total_abandoned,
            "✅ 仿真完成"
        );

        Ok(RunOutcome {
            rows: self.recorder.into_rows(),
            metrics,
            termination,
            processed: self.processed,
            store: self.salon.into_store(),
        })
    }
}
