//! 线性同余发生器（LCG）
//!
//! `x_{i} = (a*x_{i-1} + c) mod 2^32`，再除以 2^32 归一化。

/// 乘数
pub const LCG_A: u32 = 1_664_525;
/// 增量
pub const LCG_C: u32 = 1_013_904_223;
/// 模数 2^32（以 f64 表示，用于归一化）
const LCG_M: f64 = 4_294_967_296.0;

/// 均匀数来源：仿真中每次抽样都从这里取一个 [0,1) 的值。
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

/// 32 位状态的线性同余发生器。
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// 从系统熵源取种子（不可复现）。
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u32>())
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// 推进一步并返回新的寄存器值。u32 上的 wrapping 运算即 mod 2^32。
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(LCG_A).wrapping_add(LCG_C);
        self.state
    }
}

impl UniformSource for Lcg {
    fn next_uniform(&mut self) -> f64 {
        // x < 2^32 严格成立，所以结果永远不会等于 1.0
        self.next_u32() as f64 / LCG_M
    }
}

impl Iterator for Lcg {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_uniform())
    }
}

/// 从 `seed` 开始生成 `count` 个 [0,1) 均匀数；同样的输入总是得到同样的序列。
pub fn uniform_stream(seed: u32, count: usize) -> Vec<f64> {
    Lcg::new(seed).take(count).collect()
}
