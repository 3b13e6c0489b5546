use serde::{Deserialize, Serialize};

/// 运行结束时的汇总指标
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total_arrivals: u64,
    pub total_served: u64,
    pub total_abandoned: u64,
    pub cumulative_service_time: f64,
    pub mean_service_time: f64,
    pub days_closed_on_time: u32,
}

impl Metrics {
    pub fn new(
        total_arrivals: u64,
        total_served: u64,
        total_abandoned: u64,
        cumulative_service_time: f64,
        days_closed_on_time: u32,
    ) -> Self {
        // 没有完成服务的顾客时均值记为 0
        let mean_service_time = if total_served > 0 {
            cumulative_service_time / total_served as f64
        } else {
            0.0
        };
        Self {
            total_arrivals,
            total_served,
            total_abandoned,
            cumulative_service_time,
            mean_service_time,
            days_closed_on_time,
        }
    }
}
