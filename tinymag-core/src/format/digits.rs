//! Sign and three-digit decomposition

/// Glyph drawn in the sign column for negative values
pub const SIGN_NEGATIVE: u8 = b'-';

/// Glyph drawn in the sign column for zero and positive values
pub const SIGN_POSITIVE: u8 = b' ';

/// Largest magnitude the readout can show
pub const READOUT_LIMIT: i32 = 999;

/// Glyphs per readout: sign plus three digits
pub const READOUT_WIDTH: usize = 4;

/// Check whether a value fits the readout
pub fn in_display_range(value: i32) -> bool {
    (-READOUT_LIMIT..=READOUT_LIMIT).contains(&value)
}

/// Check whether a symbol has a glyph in the font table
pub fn is_supported_symbol(symbol: u8) -> bool {
    matches!(symbol, b' ' | b'-' | b'0'..=b'9')
}

/// Count how many times `step` can be taken off `value`
///
/// Leaves the remainder in `value`. The count is returned as an ASCII
/// digit offset from `'0'` and is not clamped, so more than nine steps
/// walk past `'9'`.
fn peel(value: &mut i32, step: i32) -> u8 {
    let mut digit = b'0';
    while *value >= step {
        *value -= step;
        digit = digit.wrapping_add(1);
    }
    digit
}

/// Split a value into sign, hundreds, tens and units glyphs
///
/// There is no leading-zero suppression: 7 becomes `" 007"`.
///
/// Only -999..=999 is decomposed correctly. Larger magnitudes keep
/// counting hundreds past `'9'` (1234 becomes `" <34"`); the readout
/// does not clamp or flag them.
pub fn signed_digits(value: i32) -> [u8; READOUT_WIDTH] {
    let (sign, mut rest) = if value < 0 {
        (SIGN_NEGATIVE, value.wrapping_neg())
    } else {
        (SIGN_POSITIVE, value)
    };

    let hundreds = peel(&mut rest, 100);
    let tens = peel(&mut rest, 10);
    let units = b'0'.wrapping_add(rest as u8);

    [sign, hundreds, tens, units]
}
