//! 均匀数到目标分布的变换

use std::f64::consts::PI;

/// Box–Muller 中 u1 的下限，避免 ln(0)
const MIN_U1: f64 = 1e-10;

/// 区间 [a, b) 上的均匀变量
pub fn uniform_range(a: f64, b: f64, u: f64) -> f64 {
    a + (b - a) * u
}

/// 逆变换法：`-ln(1-u)/λ`
pub fn exponential(lambda: f64, u: f64) -> f64 {
    -(1.0 - u).ln() / lambda
}

/// Box–Muller：每两个均匀数产生两个 N(mu, sigma) 变量。
///
/// 输入个数为奇数时丢弃最后一个。
pub fn box_muller(mu: f64, sigma: f64, uniforms: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(uniforms.len() & !1);
    for pair in uniforms.chunks_exact(2) {
        let u1 = pair[0].max(MIN_U1);
        let u2 = pair[1];
        let radius = (-2.0 * u1.ln()).sqrt();
        let angle = 2.0 * PI * u2;
        out.push(mu + sigma * radius * angle.cos());
        out.push(mu + sigma * radius * angle.sin());
    }
    out
}

/// 四舍五入到 `decimals` 位小数
pub fn round_to(x: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (x * scale).round() / scale
}
