//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and the driver implementations.

pub mod display;
pub mod sensor;

pub use display::{GlyphDisplay, GlyphDisplayExt};
pub use sensor::SampleSource;
