//! Two-wire bus drivers

pub mod soft_i2c;

pub use soft_i2c::{BusPins, SoftI2c, DISPLAY_ADDRESS, EDGE_HOLD_NS};
