//! 可配置的分布与批量采样

use serde::{Deserialize, Serialize};

use super::lcg::uniform_stream;
use super::transform::{box_muller, exponential, round_to, uniform_range};
use crate::error::SimError;

/// 单次采样允许的最大样本量
pub const MAX_SAMPLE_SIZE: usize = 1_000_000;

/// 正态分布使用独立的种子偏移，和其他分布的均匀序列错开
const NORMAL_SEED_OFFSET: u32 = 1000;

/// 输出样本保留的小数位
const SAMPLE_DECIMALS: u32 = 4;

/// 指数分布频数表的右端点取样本的这个分位数
const EXPONENTIAL_TAIL_PERCENTILE: f64 = 99.5;

/// 正态分布频数表覆盖均值两侧各几个标准差
const NORMAL_SIGMAS: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Distribution {
    Uniform { a: f64, b: f64 },
    Exponential { lambda: f64 },
    Normal { mu: f64, sigma: f64 },
}

impl Distribution {
    pub fn validate(&self) -> Result<(), SimError> {
        match *self {
            Distribution::Uniform { a, b } => {
                if !(a.is_finite() && b.is_finite() && a < b) {
                    return Err(SimError::InvalidRange {
                        field: "uniform",
                        a,
                        b,
                    });
                }
            }
            Distribution::Exponential { lambda } => {
                if !(lambda.is_finite() && lambda > 0.0) {
                    return Err(SimError::InvalidParameter {
                        name: "lambda",
                        value: lambda,
                    });
                }
            }
            Distribution::Normal { sigma, .. } => {
                if !(sigma.is_finite() && sigma > 0.0) {
                    return Err(SimError::InvalidParameter {
                        name: "sigma",
                        value: sigma,
                    });
                }
            }
        }
        Ok(())
    }

    /// 频数表的区间范围：
    /// - 均匀：[a, b]
    /// - 指数：[0, 样本的 99.5% 分位数]
    /// - 正态：[μ-4σ, μ+4σ]
    ///
    /// 样本为空时返回 `None`（交给频数表自己处理）。
    pub fn histogram_range(&self, values: &[f64]) -> Option<(f64, f64)> {
        match *self {
            Distribution::Uniform { a, b } => Some((a, b)),
            Distribution::Exponential { .. } => {
                percentile(values, EXPONENTIAL_TAIL_PERCENTILE).map(|hi| (0.0, hi))
            }
            Distribution::Normal { mu, sigma } => {
                Some((mu - NORMAL_SIGMAS * sigma, mu + NORMAL_SIGMAS * sigma))
            }
        }
    }

    /// 从 `seed` 出发生成 `n` 个样本，结果保留 4 位小数。
    pub fn sample(&self, seed: u32, n: usize) -> Result<Vec<f64>, SimError> {
        if n == 0 || n > MAX_SAMPLE_SIZE {
            return Err(SimError::InvalidSampleSize {
                got: n,
                max: MAX_SAMPLE_SIZE,
            });
        }
        self.validate()?;

        let values: Vec<f64> = match *self {
            Distribution::Uniform { a, b } => uniform_stream(seed, n)
                .into_iter()
                .map(|u| round_to(uniform_range(a, b, u), SAMPLE_DECIMALS))
                // 取整后可能碰到右端点，折回 a
                .map(|x| if x >= b { a } else { x })
                .collect(),
            Distribution::Exponential { lambda } => uniform_stream(seed, n)
                .into_iter()
                .map(|u| exponential(lambda, u))
                .collect(),
            Distribution::Normal { mu, sigma } => {
                let even = n + n % 2;
                let uniforms = uniform_stream(seed.wrapping_add(NORMAL_SEED_OFFSET), even);
                let mut out = box_muller(mu, sigma, &uniforms);
                out.truncate(n);
                out
            }
        };

        Ok(values
            .into_iter()
            .map(|x| round_to(x, SAMPLE_DECIMALS))
            .collect())
    }
}

/// 分位数（`p` 为百分数），相邻秩之间线性插值。
fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}
