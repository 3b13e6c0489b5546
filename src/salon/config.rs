//! 仿真参数

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::sim::Horizon;
use crate::variate::uniform_range;

/// 一次最多保留的行数上限
pub const MAX_ROWS_LIMIT: usize = 100_000;

/// 均匀数取整允许的最大小数位
pub const MAX_RND_DECIMALS: u32 = 15;

/// 均匀区间 [a, b)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformRange {
    pub a: f64,
    pub b: f64,
}

impl UniformRange {
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    pub fn sample(&self, u: f64) -> f64 {
        uniform_range(self.a, self.b, u)
    }

    fn validate(&self, field: &'static str) -> Result<(), SimError> {
        if self.a.is_finite() && self.b.is_finite() && self.a < self.b {
            Ok(())
        } else {
            Err(SimError::InvalidRange {
                field,
                a: self.a,
                b: self.b,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalonConfig {
    pub horizon: Horizon,
    /// 最多保留多少行状态快照
    pub max_rows: usize,
    /// 从哪个绝对分钟开始记录快照
    pub display_from: f64,
    /// Euler 步长 h
    pub step: f64,
    /// 到达间隔区间（分钟）
    pub arrival: UniformRange,
    /// 服务参数 T 的区间
    pub attention: UniformRange,
    /// D 的截止阈值
    pub cutoff: f64,
    /// 抽到的均匀数保留几位小数；`None` 表示不取整
    pub rnd_decimals: Option<u32>,
    /// 固定种子；为空时从系统熵源取
    pub seed: Option<u32>,
}

impl Default for SalonConfig {
    fn default() -> Self {
        Self {
            horizon: Horizon::Hours(8),
            max_rows: 500,
            display_from: 0.0,
            step: 0.1,
            arrival: UniformRange::new(2.0, 12.0),
            attention: UniformRange::new(130.0, 180.0),
            cutoff: 700.0,
            rnd_decimals: Some(2),
            seed: None,
        }
    }
}

impl SalonConfig {
    /// 在创建任何仿真状态之前检查参数。
    pub fn validate(&self) -> Result<(), SimError> {
        if self.horizon.is_empty() {
            return Err(SimError::EmptyHorizon);
        }
        if self.max_rows == 0 || self.max_rows > MAX_ROWS_LIMIT {
            return Err(SimError::InvalidRowCap {
                got: self.max_rows,
                max: MAX_ROWS_LIMIT,
            });
        }
        if !(self.display_from.is_finite() && self.display_from >= 0.0) {
            return Err(SimError::InvalidDisplayStart {
                got: self.display_from,
            });
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(SimError::NonPositiveStep { h: self.step });
        }
        self.arrival.validate("arrival")?;
        self.attention.validate("attention")?;
        if !(self.cutoff.is_finite() && self.cutoff > 0.0) {
            return Err(SimError::InvalidCutoff {
                cutoff: self.cutoff,
            });
        }
        if let Some(decimals) = self.rnd_decimals {
            if decimals > MAX_RND_DECIMALS {
                return Err(SimError::InvalidParameter {
                    name: "rnd_decimals",
                    value: decimals as f64,
                });
            }
        }
        Ok(())
    }
}
