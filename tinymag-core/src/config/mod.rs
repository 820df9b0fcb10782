//! Configuration types
//!
//! The firmware has no runtime configuration source; these are
//! compile-time values with the defaults the board ships with.

/// Samples averaged for the baseline, as a power of two (1024)
pub const BASELINE_SHIFT: u8 = 10;

/// Samples averaged per displayed reading, as a power of two (256)
pub const WINDOW_SHIFT: u8 = 8;

/// Largest shift for which a sum of 10-bit samples still fits in `u32`
pub const MAX_SHIFT: u8 = 22;

/// Where the deviation readout is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReadoutPosition {
    /// Device column (0-127)
    pub column: u8,
    /// Page (0-7)
    pub page: u8,
}

impl ReadoutPosition {
    pub const fn new(column: u8, page: u8) -> Self {
        Self { column, page }
    }
}

impl Default for ReadoutPosition {
    fn default() -> Self {
        Self::new(16, 2)
    }
}

/// Sampling loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeterConfig {
    /// log2 of the number of samples averaged for the baseline
    pub baseline_shift: u8,
    /// log2 of the number of samples averaged per reading
    pub window_shift: u8,
    /// Screen location of the readout
    pub readout: ReadoutPosition,
}

impl MeterConfig {
    /// Configuration used by the firmware
    pub const DEFAULT: Self = Self {
        baseline_shift: BASELINE_SHIFT,
        window_shift: WINDOW_SHIFT,
        readout: ReadoutPosition::new(16, 2),
    };

    /// Number of samples in the baseline average
    pub const fn baseline_samples(&self) -> u32 {
        1 << self.baseline_shift
    }

    /// Number of samples in each reading
    pub const fn window_samples(&self) -> u32 {
        1 << self.window_shift
    }
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
