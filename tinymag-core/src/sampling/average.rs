//! Shift-based averaging

use crate::config::MAX_SHIFT;
use crate::traits::sensor::SAMPLE_MAX;
use crate::traits::SampleSource;

/// Sum `2^shift` consecutive samples
pub fn accumulate<S: SampleSource + ?Sized>(source: &mut S, shift: u8) -> u32 {
    debug_assert!(shift <= MAX_SHIFT, "sample sum would overflow u32");

    let count: u32 = 1 << shift;
    let mut sum: u32 = 0;
    for _ in 0..count {
        let sample = source.read_sample();
        debug_assert!(sample <= SAMPLE_MAX, "sample wider than 10 bits");
        sum = sum.wrapping_add(u32::from(sample));
    }
    sum
}

/// Mean of `2^shift` consecutive samples, rounded toward zero
pub fn truncated_mean<S: SampleSource + ?Sized>(source: &mut S, shift: u8) -> u32 {
    accumulate(source, shift) >> shift
}
