//! 积分记录
//!
//! 只保存每位顾客的积分输入 (C, T, cutoff)；导出时用调用方给定的步长重新积分。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::ode::{EulerStep, integrate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegrationRecord {
    /// 开始服务时的队列长度
    pub c: f64,
    pub t_param: f64,
    pub cutoff: f64,
}

/// 按 (day, customer) 索引，归属于一次仿真运行
#[derive(Debug, Clone, Default)]
pub struct IntegrationStore {
    records: HashMap<(u32, u32), IntegrationRecord>,
}

impl IntegrationStore {
    pub fn insert(&mut self, day: u32, customer: u32, record: IntegrationRecord) {
        self.records.insert((day, customer), record);
    }

    pub fn get(&self, day: u32, customer: u32) -> Result<&IntegrationRecord, SimError> {
        self.records
            .get(&(day, customer))
            .ok_or(SimError::RecordNotFound { day, customer })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 用步长 `h` 重新跑一遍该顾客的积分
    pub fn replay(&self, day: u32, customer: u32, h: f64) -> Result<EulerReport, SimError> {
        let record = *self.get(day, customer)?;
        let outcome = integrate(record.c, record.t_param, h, record.cutoff)?;
        Ok(EulerReport {
            day,
            customer,
            record,
            h,
            initial_value: 0.0,
            final_time: outcome.final_time,
            final_value: outcome.final_value,
            steps: outcome.steps,
        })
    }
}

/// 单个顾客的积分明细（用于导出）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EulerReport {
    pub day: u32,
    pub customer: u32,
    #[serde(flatten)]
    pub record: IntegrationRecord,
    pub h: f64,
    /// D(0)
    pub initial_value: f64,
    pub final_time: f64,
    pub final_value: f64,
    pub steps: Vec<EulerStep>,
}
