//! Baseline and deviation sampling
//!
//! Sensor noise is smoothed by averaging power-of-two sample counts,
//! so every mean is a shift of the running sum.

pub mod average;
pub mod meter;

pub use average::{accumulate, truncated_mean};
pub use meter::Meter;
