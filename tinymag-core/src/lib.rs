//! Board-agnostic core logic for the hall sensor firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Seam traits between the logic and the drivers (sample source, glyph display)
//! - Division-free signed 3-digit formatting
//! - Baseline calibration and deviation averaging
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod format;
pub mod sampling;
pub mod traits;


pub use config::{MeterConfig, ReadoutPosition};
pub use sampling::Meter;
pub use traits::{GlyphDisplay, GlyphDisplayExt, SampleSource};
