//! Euler 法（固定步长）

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// 服务时长方程 `dD/dt = C + 0.2*T + t^2` 的参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttentionOde {
    /// 顾客开始服务时的队列长度
    pub c: f64,
    /// 抽样得到的服务参数
    pub t_param: f64,
}

impl AttentionOde {
    pub fn new(c: f64, t_param: f64) -> Self {
        Self { c, t_param }
    }

    /// 变化率；与 D 无关
    pub fn rate(&self, t: f64, _d: f64) -> f64 {
        self.c + 0.2 * self.t_param + t * t
    }
}

/// 积分表中的一行
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerStep {
    pub t: f64,
    pub d: f64,
    pub rate: f64,
    /// f(t, D) * h
    pub increment: f64,
    pub d_next: f64,
}

/// 逐步推进的 Euler 迭代器。越过阈值的那一步也会产出，然后结束。
#[derive(Debug, Clone)]
pub struct EulerSteps {
    ode: AttentionOde,
    h: f64,
    cutoff: f64,
    t: f64,
    d: f64,
}

impl EulerSteps {
    /// `h` 必须为正，否则循环不会结束。
    pub fn new(ode: AttentionOde, h: f64, cutoff: f64) -> Result<Self, SimError> {
        if !(h.is_finite() && h > 0.0) {
            return Err(SimError::NonPositiveStep { h });
        }
        if cutoff.is_nan() || cutoff == f64::INFINITY {
            return Err(SimError::InvalidCutoff { cutoff });
        }
        Ok(Self {
            ode,
            h,
            cutoff,
            t: 0.0,
            d: 0.0,
        })
    }

    /// 当前时间 t（已经走过的步数 * h，按浮点累加）
    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn d(&self) -> f64 {
        self.d
    }

    /// 跑完所有步骤，不保留步骤表。
    pub fn finish(mut self) -> EulerOutcome {
        for _ in self.by_ref() {}
        self.outcome(Vec::new())
    }

    fn outcome(&self, steps: Vec<EulerStep>) -> EulerOutcome {
        EulerOutcome {
            // 报告的是越过阈值那一步之前的时间
            final_time: self.t - self.h,
            final_value: self.d,
            steps,
        }
    }
}

impl Iterator for EulerSteps {
    type Item = EulerStep;

    fn next(&mut self) -> Option<EulerStep> {
        if self.d > self.cutoff {
            return None;
        }
        let rate = self.ode.rate(self.t, self.d);
        let increment = rate * self.h;
        let step = EulerStep {
            t: self.t,
            d: self.d,
            rate,
            increment,
            d_next: self.d + increment,
        };
        self.d = step.d_next;
        self.t += self.h;
        Some(step)
    }
}

/// 积分结果
///
/// `final_time` 是 t - h（越过阈值前的时间），`final_value` 是越过阈值后的 D。
/// 服务时长取 `final_time`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EulerOutcome {
    pub final_time: f64,
    pub final_value: f64,
    pub steps: Vec<EulerStep>,
}

/// 对 `(C, T)` 做完整积分并保留步骤表。
pub fn integrate(c: f64, t_param: f64, h: f64, cutoff: f64) -> Result<EulerOutcome, SimError> {
    let mut it = EulerSteps::new(AttentionOde::new(c, t_param), h, cutoff)?;
    let steps: Vec<EulerStep> = it.by_ref().collect();
    Ok(it.outcome(steps))
}
