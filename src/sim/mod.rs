//! 仿真核心模块
//!
//! 此模块包含离散事件仿真的核心组件：仿真时钟与终点、事件日历、仿真器。

// 子模块声明
mod calendar;
mod simulator;
mod time;

// 重新导出公共接口
pub use calendar::{Calendar, EventKind, NextEvent};
pub use simulator::{MAX_ITERATIONS, RunOutcome, Simulator, Termination};
pub use time::{DAY_MINUTES, Horizon, PATIENCE_MINUTES, SimClock, closed_on_time};
