//! 理发店状态机
//!
//! 单个理发师、一条等候队列。每个事件对状态做一次转换；
//! 服务时长在顾客开始服务时由 Euler 积分求得。

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::config::SalonConfig;
use super::store::{IntegrationRecord, IntegrationStore};
use crate::error::SimError;
use crate::ode::{AttentionOde, EulerSteps};
use crate::queue::{QueuedCustomer, WaitingQueue};
use crate::sim::{
    Calendar, DAY_MINUTES, EventKind, Horizon, NextEvent, PATIENCE_MINUTES, SimClock,
    closed_on_time,
};
use crate::trace::{Metrics, QueueEntry, ServerState, TraceRow};
use crate::variate::{UniformSource, round_to};

/// 正在服务的顾客
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InService {
    pub id: u32,
    pub start: f64,
    pub duration: f64,
    pub completion: f64,
}

/// 最近一次到达间隔抽样
#[derive(Debug, Clone, Copy, PartialEq)]
struct ArrivalDraw {
    rnd: f64,
    interval: f64,
}

/// 最近一次服务参数抽样
#[derive(Debug, Clone, Copy, PartialEq)]
struct ServiceDraw {
    rnd: f64,
    t_param: f64,
    duration: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Counters {
    pub arrivals: u64,
    pub served: u64,
    pub abandoned: u64,
    pub service_time_total: f64,
    pub days_closed_on_time: u32,
}

pub struct Salon<R> {
    cfg: SalonConfig,
    rng: R,
    clock: SimClock,
    /// 当天的顾客序号
    customer_seq: u32,
    queue: WaitingQueue,
    server: Option<InService>,
    next_arrival: Option<f64>,
    intake_close: Option<f64>,
    service_starts: BTreeMap<u32, f64>,
    last_event: EventKind,
    last_customer: Option<u32>,
    arrival_draw: Option<ArrivalDraw>,
    service_draw: Option<ServiceDraw>,
    counters: Counters,
    store: IntegrationStore,
}

impl<R: UniformSource> Salon<R> {
    /// 第一天的初始状态：已抽好第一位顾客的到达时间。
    pub fn new(cfg: SalonConfig, rng: R) -> Result<Self, SimError> {
        cfg.validate()?;
        let mut salon = Self {
            cfg,
            rng,
            clock: SimClock::default(),
            customer_seq: 0,
            queue: WaitingQueue::new(),
            server: None,
            next_arrival: None,
            intake_close: Some(DAY_MINUTES),
            service_starts: BTreeMap::new(),
            last_event: EventKind::StartOfDay,
            last_customer: None,
            arrival_draw: None,
            service_draw: None,
            counters: Counters::default(),
            store: IntegrationStore::default(),
        };
        salon.schedule_arrival();
        Ok(salon)
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn queue(&self) -> &WaitingQueue {
        &self.queue
    }

    pub fn in_service(&self) -> Option<&InService> {
        self.server.as_ref()
    }

    pub fn store(&self) -> &IntegrationStore {
        &self.store
    }

    pub fn into_store(self) -> IntegrationStore {
        self.store
    }

    pub fn calendar(&self) -> Calendar {
        Calendar {
            arrival: self.next_arrival,
            completion: self.server.map(|s| s.completion),
            impatience: self.queue.next_expiry(),
            intake_close: self.intake_close,
        }
    }

    pub fn metrics(&self) -> Metrics {
        Metrics::new(
            self.counters.arrivals,
            self.counters.served,
            self.counters.abandoned,
            self.counters.service_time_total,
            self.counters.days_closed_on_time,
        )
    }

    fn uniform(&mut self) -> f64 {
        let u = self.rng.next_uniform();
        match self.cfg.rnd_decimals {
            Some(decimals) => round_to(u, decimals),
            None => u,
        }
    }

    fn schedule_arrival(&mut self) {
        let rnd = self.uniform();
        let interval = self.cfg.arrival.sample(rnd);
        self.next_arrival = Some(self.clock.now + interval);
        self.arrival_draw = Some(ArrivalDraw { rnd, interval });
    }

    /// 执行选中的事件。仿真结束事件不改变状态。
    pub fn apply(&mut self, next: NextEvent) -> Result<(), SimError> {
        self.arrival_draw = None;
        self.service_draw = None;
        self.last_customer = None;
        self.last_event = next.kind;

        if let Some(at) = next.at {
            if next.kind != EventKind::EndOfSimulation {
                self.clock.advance_to(at);
            }
        }

        match next.kind {
            EventKind::StartOfDay => self.start_day(),
            EventKind::Arrival => self.arrive()?,
            EventKind::ServiceCompletion => self.complete_service()?,
            EventKind::ImpatienceExpiry => self.expire_patience(),
            EventKind::IntakeClose => self.close_intake(),
            EventKind::EndOfSimulation => {}
        }
        Ok(())
    }

    fn start_day(&mut self) {
        let previous = self.clock.start_next_day();
        if closed_on_time(previous) {
            self.counters.days_closed_on_time += 1;
        }
        self.customer_seq = 0;
        self.service_starts.clear();
        self.schedule_arrival();
        self.intake_close = Some(DAY_MINUTES);
        debug!(day = self.clock.day, previous_day_end = previous, "新的一天开始");
    }

    fn arrive(&mut self) -> Result<(), SimError> {
        self.customer_seq += 1;
        self.counters.arrivals += 1;
        let id = self.customer_seq;
        self.last_customer = Some(id);
        let now = self.clock.now;

        if self.server.is_none() {
            let c = self.queue.len();
            self.admit(id, c)?;
        } else {
            self.queue.push(QueuedCustomer {
                id,
                arrival: now,
                patience_deadline: now + PATIENCE_MINUTES,
            });
            trace!(id, queue_len = self.queue.len(), "顾客排队");
        }

        match self.intake_close {
            Some(close) if now < close => self.schedule_arrival(),
            _ => self.next_arrival = None,
        }
        Ok(())
    }

    fn complete_service(&mut self) -> Result<(), SimError> {
        if let Some(done) = self.server.take() {
            self.counters.service_time_total += done.duration;
            self.counters.served += 1;
            self.last_customer = Some(done.id);
        }
        if let Some(next) = self.queue.pop_front() {
            let c = self.queue.len();
            self.admit(next.id, c)?;
        }
        Ok(())
    }

    fn expire_patience(&mut self) {
        if let Some(gone) = self.queue.remove_most_impatient() {
            self.counters.abandoned += 1;
            self.last_customer = Some(gone.id);
            trace!(id = gone.id, deadline = gone.patience_deadline, "顾客放弃排队");
        }
    }

    fn close_intake(&mut self) {
        self.next_arrival = None;
        self.intake_close = None;
    }

    /// 顾客开始服务：抽样 T，以队列长度 C 积分得到服务时长，并保存积分输入。
    #[tracing::instrument(skip(self), fields(day = self.clock.day))]
    fn admit(&mut self, id: u32, c: usize) -> Result<(), SimError> {
        let rnd = self.uniform();
        let t_param = self.cfg.attention.sample(rnd);
        let c = c as f64;
        let outcome =
            EulerSteps::new(AttentionOde::new(c, t_param), self.cfg.step, self.cfg.cutoff)?
                .finish();
        let duration = outcome.final_time;
        let now = self.clock.now;

        self.store.insert(
            self.clock.day,
            id,
            IntegrationRecord {
                c,
                t_param,
                cutoff: self.cfg.cutoff,
            },
        );
        self.service_starts.insert(id, now);
        self.server = Some(InService {
            id,
            start: now,
            duration,
            completion: now + duration,
        });
        self.service_draw = Some(ServiceDraw {
            rnd,
            t_param,
            duration,
        });
        debug!(t_param, duration, completion = now + duration, "开始服务");
        Ok(())
    }

    fn queue_entries(&self) -> Vec<QueueEntry> {
        self.queue
            .iter()
            .map(|c| QueueEntry {
                id: c.id,
                patience_deadline: c.patience_deadline,
            })
            .collect()
    }

    fn server_state(&self) -> ServerState {
        if self.server.is_some() {
            ServerState::Busy
        } else {
            ServerState::Free
        }
    }

    /// 当前状态的快照；`next` 为即将处理的事件。
    pub fn snapshot(&self, index: u64, next: EventKind) -> TraceRow {
        TraceRow {
            index,
            day: self.clock.day,
            clock: self.clock.now,
            elapsed: self.clock.absolute(),
            event: self.last_event,
            customer: self.last_customer,
            next_event: Some(next),
            arrival_rnd: self.arrival_draw.map(|d| d.rnd),
            arrival_interval: self.arrival_draw.map(|d| d.interval),
            next_arrival: self.next_arrival,
            queue: self.queue_entries(),
            queue_len: self.queue.len(),
            service_rnd: self.service_draw.map(|d| d.rnd),
            service_param: self.service_draw.map(|d| d.t_param),
            service_duration: self.service_draw.map(|d| d.duration),
            service_end: self.server.map(|s| s.completion),
            service_starts: self.service_starts.clone(),
            server: self.server_state(),
            in_service: self.server.map(|s| s.id),
            arrivals: self.counters.arrivals,
            served: self.counters.served,
            abandoned: self.counters.abandoned,
            service_time_total: self.counters.service_time_total,
            days_closed_on_time: self.counters.days_closed_on_time,
        }
    }

    /// 仿真结束的汇总行：时钟截到终点，累计值为最终值。
    ///
    /// 按天计时时前几天可能超过 480 分钟（停止接待后仍在服务），
    /// 此时 `end - completed` 为负，时钟取 0。
    pub fn summary(&self, index: u64, horizon: &Horizon) -> TraceRow {
        let end = horizon.minutes();
        TraceRow {
            index,
            day: self.clock.day,
            clock: (end - self.clock.completed).min(self.clock.now).max(0.0),
            elapsed: end,
            event: EventKind::EndOfSimulation,
            customer: None,
            next_event: None,
            arrival_rnd: None,
            arrival_interval: None,
            next_arrival: None,
            queue: self.queue_entries(),
            queue_len: self.queue.len(),
            service_rnd: None,
            service_param: None,
            service_duration: None,
            service_end: None,
            service_starts: BTreeMap::new(),
            server: self.server_state(),
            in_service: self.server.map(|s| s.id),
            arrivals: self.counters.arrivals,
            served: self.counters.served,
            abandoned: self.counters.abandoned,
            service_time_total: self.counters.service_time_total,
            days_closed_on_time: self.counters.days_closed_on_time,
        }
    }
}
