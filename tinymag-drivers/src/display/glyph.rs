//! 4x scaled glyph rendering
//!
//! A 5x8 source glyph becomes 20x32 pixels: four pages tall, each
//! source column repeated four times. Each output page row covers two
//! source bits, one nibble per bit:
//!
//! ```text
//! source column bit:  0 1 | 2 3 | 4 5 | 6 7
//! output page:        +0  | +1  | +2  | +3
//! nibble (low, high): L H | L H | L H | L H
//! ```

use tinymag_core::format::is_supported_symbol;
use tinymag_core::GlyphDisplay;
use tinymag_hal::TwoWireWriter;

use super::font::{glyph, Glyph, GLYPH_WIDTH};
use super::ssd1306::{control, Ssd1306};

/// Horizontal and vertical magnification
pub const SCALE: usize = 4;

/// Pages covered by one scaled glyph
pub const GLYPH_ROWS: u8 = 4;

/// Cursor advance after a glyph: 5 columns plus 1 spacing column, scaled
pub const GLYPH_ADVANCE: u8 = ((GLYPH_WIDTH + 1) * SCALE) as u8;

/// Column bytes for one output page of a scaled glyph
///
/// `row` selects source bits `2 * row` and `2 * row + 1`.
pub fn scaled_row(glyph: &Glyph, row: u8) -> [u8; GLYPH_WIDTH] {
    let low = 2 * row;
    let high = low + 1;
    let mut out = [0u8; GLYPH_WIDTH];
    for (byte, &column) in out.iter_mut().zip(glyph.iter()) {
        if column & (1 << low) != 0 {
            *byte |= 0x0F;
        }
        if column & (1 << high) != 0 {
            *byte |= 0xF0;
        }
    }
    out
}

impl<B: TwoWireWriter> GlyphDisplay for Ssd1306<B> {
    fn set_cursor(&mut self, column: u8, page: u8) {
        Ssd1306::set_cursor(self, column, page);
    }

    fn put_glyph(&mut self, symbol: u8) {
        debug_assert!(is_supported_symbol(symbol), "symbol has no glyph");

        let origin = self.cursor;
        let bitmap = glyph(symbol);

        for row in 0..GLYPH_ROWS {
            self.bus.start();
            self.bus.write_byte(control::DATA);
            for byte in scaled_row(&bitmap, row) {
                for _ in 0..SCALE {
                    self.bus.write_byte(byte);
                }
            }
            self.bus.stop();

            let next_page = self.cursor.page + 1;
            Ssd1306::set_cursor(self, origin.column, next_page);
        }

        Ssd1306::set_cursor(self, origin.column.wrapping_add(GLYPH_ADVANCE), origin.page);
    }
}
