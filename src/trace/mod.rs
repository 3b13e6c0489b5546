//! 状态快照与汇总指标
//!
//! 每处理一个事件之前，若满足显示窗口和行数上限，就把完整状态记录为一行；
//! 仿真结束后再追加（或替换最后一行为）一行汇总。

mod metrics;
mod recorder;
mod types;

pub use metrics::Metrics;
pub use recorder::Recorder;
pub use types::{QueueEntry, ServerState, TraceRow};
