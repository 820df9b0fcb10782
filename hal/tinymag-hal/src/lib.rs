//! Tinymag Hardware Abstraction Layer
//!
//! This crate defines the hardware-access capabilities the rest of the
//! firmware is written against. A chip-specific crate binds them to
//! memory-mapped registers; host tests bind them to simulations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tinymag-firmware / tinymag-drivers     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tinymag-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ tinymag-hal-  │       │  host-side    │
//! │   attiny13    │       │  simulation   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::GpioPort`] - Pin direction and level control
//! - [`adc::AdcPeripheral`] - Single-shot analog conversions
//! - [`i2c::TwoWireWriter`] - Write-only two-wire bus transactions
//!
//! Timing goes through `embedded_hal::delay::DelayNs` rather than a
//! trait of our own.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use adc::{AdcChannel, AdcPeripheral, Prescaler, ADC_MAX};
pub use gpio::{Direction, GpioPort, Level, PinId};
pub use i2c::TwoWireWriter;
