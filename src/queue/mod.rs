//! 等候队列
//!
//! 先来先服务；任何成员都可能因为耐心耗尽提前离开。

mod waiting;

pub use waiting::{QueuedCustomer, WaitingQueue};
