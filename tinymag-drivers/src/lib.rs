//! Hardware driver implementations
//!
//! This crate provides concrete implementations on top of the
//! `tinymag-hal` capabilities and the traits defined in `tinymag-core`:
//!
//! - Bit-banged two-wire bus master (no pull-ups, ACK ignored)
//! - SSD1306 command layer with a 4x scaled digit renderer
//! - Hall sensor sampling through the on-chip ADC

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bus;
pub mod display;
pub mod sensor;

#[cfg(test)]
pub(crate) mod sim;

pub use bus::{BusPins, SoftI2c};
pub use display::{Cursor, Ssd1306};
pub use sensor::HallSensor;
