//! 理发店排队模型
//!
//! - `config`：输入参数及校验
//! - `state`：状态机（到达、服务完成、放弃、停止接待、新的一天）
//! - `store`：每位顾客的积分输入，用于导出时重算

mod config;
mod state;
mod store;

pub use config::{MAX_RND_DECIMALS, MAX_ROWS_LIMIT, SalonConfig, UniformRange};
pub use state::{Counters, InService, Salon};
pub use store::{EulerReport, IntegrationRecord, IntegrationStore};

use tracing::info;

use crate::error::SimError;
use crate::sim::{RunOutcome, Simulator};
use crate::variate::Lcg;

/// 校验参数并运行一次完整仿真。
///
/// 未指定种子时从系统熵源取种子，结果不可复现。
pub fn run_simulation(cfg: &SalonConfig) -> Result<RunOutcome, SimError> {
    cfg.validate()?;
    let rng = match cfg.seed {
        Some(seed) => Lcg::new(seed),
        None => {
            let rng = Lcg::from_entropy();
            info!(seed = rng.state(), "使用系统熵源种子");
            rng
        }
    };
    Simulator::new(cfg.clone(), rng)?.run()
}
