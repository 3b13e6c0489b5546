//! 随机变量生成
//!
//! 线性同余发生器产生 [0,1) 均匀数，其余分布均由均匀数变换得到：
//! - 线性缩放：`a + (b-a)*u`
//! - 逆变换：指数分布
//! - Box–Muller：正态分布

mod distribution;
mod histogram;
mod lcg;
mod transform;

pub use distribution::{Distribution, MAX_SAMPLE_SIZE};
pub use histogram::{FrequencyBin, FrequencyTable, MAX_BINS};
pub use lcg::{Lcg, UniformSource, uniform_stream};
pub use transform::{box_muller, exponential, round_to, uniform_range};
