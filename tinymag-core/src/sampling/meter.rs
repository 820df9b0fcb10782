//! Hall sensor meter
//!
//! Calibrates a zero reference once at startup, then keeps producing
//! the deviation of fresh readings from it:
//!
//! ```text
//! calibrate:  baseline = mean(1024 samples)         (once)
//! measure:    deviation = mean(256 samples) - baseline
//! step:       cursor -> readout position, draw deviation
//! run:        loop { step }
//! ```

use crate::config::MeterConfig;
use crate::traits::{GlyphDisplay, GlyphDisplayExt, SampleSource};

use super::average::truncated_mean;

/// Startup zero reference
///
/// Only [`Meter::calibrate`] creates one, so a meter's baseline is set
/// exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Baseline(u32);

impl Baseline {
    /// Mean sensor reading at startup
    pub fn value(self) -> u32 {
        self.0
    }
}

/// Baseline/deviation meter over a sample source
pub struct Meter<S> {
    source: S,
    config: MeterConfig,
    baseline: Baseline,
}

impl<S: SampleSource> Meter<S> {
    /// Take the startup baseline and build a meter around it
    ///
    /// Blocks for `config.baseline_samples()` conversions.
    pub fn calibrate(mut source: S, config: MeterConfig) -> Self {
        let baseline = Baseline(truncated_mean(&mut source, config.baseline_shift));

        #[cfg(feature = "defmt")]
        defmt::debug!("Baseline established: {=u32}", baseline.value());

        Self {
            source,
            config,
            baseline,
        }
    }

    /// The startup zero reference
    pub fn baseline(&self) -> Baseline {
        self.baseline
    }

    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    /// Average a fresh window and return its deviation from the baseline
    pub fn measure(&mut self) -> i32 {
        let mean = truncated_mean(&mut self.source, self.config.window_shift);
        mean as i32 - self.baseline.value() as i32
    }

    /// Measure once and draw the deviation at the readout position
    ///
    /// Returns the deviation that was drawn.
    pub fn step<D: GlyphDisplay + ?Sized>(&mut self, display: &mut D) -> i32 {
        let deviation = self.measure();

        #[cfg(feature = "defmt")]
        defmt::trace!("Deviation: {=i32}", deviation);

        let readout = self.config.readout;
        display.set_cursor(readout.column, readout.page);
        display.print_signed_value(deviation);
        deviation
    }

    /// Refresh the readout forever, back to back
    pub fn run<D: GlyphDisplay + ?Sized>(&mut self, display: &mut D) -> ! {
        loop {
            self.step(display);
        }
    }

    /// Give back the sample source
    pub fn into_source(self) -> S {
        self.source
    }
}
