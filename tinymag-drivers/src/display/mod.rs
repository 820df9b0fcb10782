//! Display drivers
//!
//! SSD1306 command layer plus the scaled digit renderer that implements
//! [`tinymag_core::GlyphDisplay`] on top of it.

pub mod font;
pub mod glyph;
pub mod ssd1306;

pub use glyph::{scaled_row, GLYPH_ADVANCE};
pub use ssd1306::{Cursor, Ssd1306, POWER_UP_SETTLE_MS};
