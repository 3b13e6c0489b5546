use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sim::EventKind;

/// 理发师状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerState {
    Free,
    Busy,
}

/// 队列中的一位顾客（快照）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: u32,
    pub patience_deadline: f64,
}

/// 一行状态快照（JSON）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRow {
    /// 行号，等于已处理事件数 + 1（汇总行等于已处理事件数）
    pub index: u64,
    pub day: u32,
    /// 当天时钟（分钟）
    pub clock: f64,
    /// 绝对分钟
    pub elapsed: f64,
    /// 产生当前状态的事件
    pub event: EventKind,
    /// 事件涉及的顾客
    pub customer: Option<u32>,
    /// 汇总行没有下一事件
    pub next_event: Option<EventKind>,
    pub arrival_rnd: Option<f64>,
    pub arrival_interval: Option<f64>,
    pub next_arrival: Option<f64>,
    pub queue: Vec<QueueEntry>,
    pub queue_len: usize,
    pub service_rnd: Option<f64>,
    /// 抽到的服务参数 T
    pub service_param: Option<f64>,
    pub service_duration: Option<f64>,
    pub service_end: Option<f64>,
    /// 当天各顾客开始服务的时刻
    pub service_starts: BTreeMap<u32, f64>,
    pub server: ServerState,
    pub in_service: Option<u32>,
    pub arrivals: u64,
    pub served: u64,
    pub abandoned: u64,
    pub service_time_total: f64,
    pub days_closed_on_time: u32,
}
