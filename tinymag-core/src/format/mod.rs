//! Numeric readout formatting
//!
//! The target has no hardware divider, so decimal digits are peeled
//! off by repeated subtraction instead of `/` and `%`.

pub mod digits;

pub use digits::{
    in_display_range, is_supported_symbol, signed_digits, READOUT_LIMIT, READOUT_WIDTH,
    SIGN_NEGATIVE, SIGN_POSITIVE,
};
