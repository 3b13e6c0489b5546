use crate::variate::UniformSource;

mod queues;
mod sim_time;
mod simulator;

/// 按顺序循环返回给定的均匀数
pub(crate) struct Scripted {
    values: Vec<f64>,
    idx: usize,
}

impl Scripted {
    pub(crate) fn new(values: &[f64]) -> Self {
        assert!(!values.is_empty(), "scripted uniforms must not be empty");
        Self {
            values: values.to_vec(),
            idx: 0,
        }
    }

    pub(crate) fn constant(u: f64) -> Self {
        Self::new(&[u])
    }
}

impl UniformSource for Scripted {
    fn next_uniform(&mut self) -> f64 {
        let u = self.values[self.idx % self.values.len()];
        self.idx += 1;
        u
    }
}
