//! ATtiny13A HAL for the Tinymag firmware
//!
//! Register-level implementations of the `tinymag-hal` traits on top of
//! the `avr-device` peripheral access crate:
//!
//! - [`gpio::PortB`]: the single 6-pin port
//! - [`adc::Adc`]: the 10-bit successive-approximation converter
//! - [`delay::CycleDelay`]: busy-wait `DelayNs` counted in CPU cycles
//!
//! The [`board`] module fixes the pin assignment of the sensor board.
//!
//! # Usage
//!
//! Only builds for `avr-unknown-gnu-attiny13a`-style targets; it is not a
//! default workspace member.

#![cfg_attr(not(test), no_std)]

pub mod adc;
pub mod board;
pub mod delay;
pub mod gpio;

pub use adc::Adc;
pub use delay::CycleDelay;
pub use gpio::PortB;
