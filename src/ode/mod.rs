//! 数值积分
//!
//! 每位顾客的服务时长由 `dD/dt = C + 0.2*T + t^2` 的 Euler 积分给出：
//! 从 D(0)=0 出发，D 首次超过截止阈值时停止。

mod euler;

pub use euler::{AttentionOde, EulerOutcome, EulerStep, EulerSteps, integrate};
