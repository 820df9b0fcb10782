//! Sensor board pin assignment
//!
//! ```text
//!            ┌──────┐
//!   RESET  1 │●     │ 8  VCC
//!   SDA    2 │ PB3  │ 7  PB2  HALL (ADC1)
//!   SCL    3 │ PB4  │ 6  PB1
//!   GND    4 │      │ 5  PB0
//!            └──────┘
//! ```

use tinymag_hal::{AdcChannel, PinId};

/// Core clock: 9.6 MHz internal oscillator with the CKDIV8 fuse set
pub const CPU_HZ: u32 = 1_200_000;

/// Two-wire data line
pub const SDA_PIN: PinId = 3;

/// Two-wire clock line
pub const SCL_PIN: PinId = 4;

/// Hall sensor output
pub const HALL_CHANNEL: AdcChannel = AdcChannel::Adc1;
