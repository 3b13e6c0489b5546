pub mod error;
pub mod ode;
pub mod queue;
pub mod salon;
pub mod sim;
pub mod trace;
pub mod variate;

pub use error::SimError;

#[cfg(test)]
mod test;
