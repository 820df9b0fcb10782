//! Glyph display trait for the numeric readout

use crate::format::{in_display_range, signed_digits};

/// Trait for displays that draw scaled glyphs at a page/column cursor
///
/// The display owns its cursor. Drawing a glyph advances the cursor
/// horizontally so consecutive glyphs chain on one text row.
pub trait GlyphDisplay {
    /// Move the cursor
    ///
    /// - `column`: Device column (0-127)
    /// - `page`: Page (0-7)
    fn set_cursor(&mut self, column: u8, page: u8);

    /// Draw one symbol at the cursor and advance past it
    ///
    /// `symbol` must be one of `' '`, `'-'` or `'0'..='9'`.
    fn put_glyph(&mut self, symbol: u8);
}

impl<T: GlyphDisplay + ?Sized> GlyphDisplay for &mut T {
    fn set_cursor(&mut self, column: u8, page: u8) {
        (**self).set_cursor(column, page);
    }

    fn put_glyph(&mut self, symbol: u8) {
        (**self).put_glyph(symbol);
    }
}

/// Helper trait for drawing formatted values
pub trait GlyphDisplayExt: GlyphDisplay {
    /// Draw a signed value as a sign column and three digits
    ///
    /// Always draws exactly four glyphs. Values outside -999..=999 are
    /// outside the readout's contract and come out garbled.
    fn print_signed_value(&mut self, value: i32) {
        debug_assert!(
            in_display_range(value),
            "value outside the 3-digit readout range"
        );
        for symbol in signed_digits(value) {
            self.put_glyph(symbol);
        }
    }
}

// Blanket implementation for all GlyphDisplay types
impl<T: GlyphDisplay + ?Sized> GlyphDisplayExt for T {}
