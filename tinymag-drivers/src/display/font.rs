//! 5x8 digit font
//!
//! Each glyph is five column bytes, bit 0 at the top. Only the symbols
//! the readout needs are stored: space, minus and the ten digits.

/// Source columns per glyph
pub const GLYPH_WIDTH: usize = 5;

/// Source rows per glyph (one bit per row in a column byte)
pub const GLYPH_HEIGHT: usize = 8;

/// One glyph as column bytes
pub type Glyph = [u8; GLYPH_WIDTH];

/// Subtracted from a digit symbol to get its table index ('0' -> 2)
pub const DIGIT_OFFSET: u8 = b'0' - 2;

/// Glyph table: space, '-', '0'..'9'
pub const FONT_5X8: [Glyph; 12] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x08, 0x08, 0x08, 0x08, 0x08], // '-'
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // '0'
    [0x00, 0x42, 0x7F, 0x40, 0x00], // '1'
    [0x42, 0x61, 0x51, 0x49, 0x46], // '2'
    [0x21, 0x41, 0x45, 0x4B, 0x31], // '3'
    [0x18, 0x14, 0x12, 0x7F, 0x10], // '4'
    [0x27, 0x45, 0x45, 0x45, 0x39], // '5'
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // '6'
    [0x01, 0x71, 0x09, 0x05, 0x03], // '7'
    [0x36, 0x49, 0x49, 0x49, 0x36], // '8'
    [0x06, 0x49, 0x49, 0x29, 0x1E], // '9'
];

/// Table index for a symbol
///
/// Space and minus are special-cased; everything else is treated as a
/// digit and offset arithmetically, without range checking.
pub fn glyph_index(symbol: u8) -> usize {
    match symbol {
        b' ' => 0,
        b'-' => 1,
        _ => symbol.wrapping_sub(DIGIT_OFFSET) as usize,
    }
}

/// Glyph for a symbol
///
/// Indices past the end of the table read as empty columns.
pub fn glyph(symbol: u8) -> Glyph {
    FONT_5X8
        .get(glyph_index(symbol))
        .copied()
        .unwrap_or([0; GLYPH_WIDTH])
}
