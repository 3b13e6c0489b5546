//! 频数表（等宽区间）

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// 频数表最多的区间个数
pub const MAX_BINS: usize = 1_000;

/// 一个区间及其频数。除最后一个区间外均为左闭右开。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    pub relative: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    pub bins: Vec<FrequencyBin>,
    pub total: usize,
}

impl FrequencyTable {
    /// 把 `values` 分到 `bins` 个等宽区间。
    ///
    /// `range` 为 `None` 时使用样本的 [min, max]；区间外的值不计数。
    pub fn build(values: &[f64], bins: usize, range: Option<(f64, f64)>) -> Result<Self, SimError> {
        if bins == 0 || bins > MAX_BINS {
            return Err(SimError::InvalidParameter {
                name: "bins",
                value: bins as f64,
            });
        }
        let (mut lo, mut hi) = match range {
            Some(r) => r,
            None => {
                if values.is_empty() {
                    return Err(SimError::InvalidSampleSize {
                        got: 0,
                        max: super::MAX_SAMPLE_SIZE,
                    });
                }
                values
                    .iter()
                    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                        (lo.min(v), hi.max(v))
                    })
            }
        };
        if !(lo.is_finite() && hi.is_finite()) || lo > hi {
            return Err(SimError::InvalidRange {
                field: "histogram",
                a: lo,
                b: hi,
            });
        }
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let mut counts = vec![0usize; bins];
        for &v in values {
            if v < lo || v > hi {
                continue;
            }
            let idx = if v == hi {
                bins - 1
            } else {
                (((v - lo) / width).floor() as usize).min(bins - 1)
            };
            counts[idx] += 1;
        }

        let total = values.len();
        let table = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| FrequencyBin {
                lower: lo + width * i as f64,
                upper: if i + 1 == bins {
                    hi
                } else {
                    lo + width * (i + 1) as f64
                },
                count,
                relative: if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                },
            })
            .collect();

        Ok(Self {
            bins: table,
            total,
        })
    }
}
