//! 错误类型
//!
//! 输入校验错误在仿真开始前返回；仿真循环本身不会失败。

use thiserror::Error;

/// 仿真与采样过程中可能返回的全部错误
#[derive(Debug, Error)]
pub enum SimError {
    /// 区间参数必须满足 a < b 且均为有限值
    #[error("invalid range for {field}: a={a} must be less than b={b}")]
    InvalidRange { field: &'static str, a: f64, b: f64 },

    /// Euler 步长必须为正
    #[error("euler step size must be positive, got {h}")]
    NonPositiveStep { h: f64 },

    /// D 的截止阈值必须为正的有限值
    #[error("cutoff threshold must be positive and finite, got {cutoff}")]
    InvalidCutoff { cutoff: f64 },

    #[error("simulation horizon must be at least one unit")]
    EmptyHorizon,

    #[error("max rows must be between 1 and {max}, got {got}")]
    InvalidRowCap { got: usize, max: usize },

    #[error("display start must be a non-negative number of minutes, got {got}")]
    InvalidDisplayStart { got: f64 },

    #[error("sample size must be between 1 and {max}, got {got}")]
    InvalidSampleSize { got: usize, max: usize },

    /// 分布参数非法（λ、σ、区间数等）
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// 请求的 (day, customer) 没有对应的积分记录
    #[error("no euler integration recorded for customer {customer} on day {day}")]
    RecordNotFound { day: u32, customer: u32 },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
