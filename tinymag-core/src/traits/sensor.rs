//! Sample source trait

/// Largest value a 10-bit sample can take
pub const SAMPLE_MAX: u16 = 0x3FF;

/// Trait for analog sample sources
///
/// Implementations perform one blocking conversion per call. There is
/// no failure path; a converter that never finishes hangs the caller.
pub trait SampleSource {
    /// Take one 10-bit sample (0-1023)
    fn read_sample(&mut self) -> u16;
}

impl<T: SampleSource + ?Sized> SampleSource for &mut T {
    fn read_sample(&mut self) -> u16 {
        (**self).read_sample()
    }
}
