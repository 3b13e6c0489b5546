//! 带耐心截止时间的 FIFO 队列

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// 排队中的顾客
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueuedCustomer {
    /// 当天内的顾客序号
    pub id: u32,
    pub arrival: f64,
    /// 超过该时刻仍在排队则放弃
    pub patience_deadline: f64,
}

#[derive(Debug, Clone, Default)]
pub struct WaitingQueue {
    q: VecDeque<QueuedCustomer>,
}

impl WaitingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, customer: QueuedCustomer) {
        self.q.push_back(customer);
    }

    /// 出队：队首进入服务
    pub fn pop_front(&mut self) -> Option<QueuedCustomer> {
        self.q.pop_front()
    }

    /// 最早的耐心截止时间
    pub fn next_expiry(&self) -> Option<f64> {
        self.most_impatient().map(|(_, c)| c.patience_deadline)
    }

    /// 移除截止时间最小的顾客；并列时取排在前面的那个。
    pub fn remove_most_impatient(&mut self) -> Option<QueuedCustomer> {
        let (idx, _) = self.most_impatient()?;
        self.q.remove(idx)
    }

    fn most_impatient(&self) -> Option<(usize, &QueuedCustomer)> {
        self.q.iter().enumerate().fold(None, |best, (idx, c)| match best {
            Some((_, b)) if b.patience_deadline <= c.patience_deadline => best,
            _ => Some((idx, c)),
        })
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueuedCustomer> {
        self.q.iter()
    }
}
