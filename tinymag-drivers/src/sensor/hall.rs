//! Analog hall-effect sensor
//!
//! A ratiometric hall sensor on one ADC input. Each sample is a full
//! single-shot conversion; the converter is powered down between
//! samples.

use tinymag_core::SampleSource;
use tinymag_hal::{AdcChannel, AdcPeripheral, Prescaler, ADC_MAX};

/// Slowest converter clock, for the quietest result
pub const CONVERSION_PRESCALER: Prescaler = Prescaler::Div128;

/// Hall sensor on an ADC channel
pub struct HallSensor<A> {
    adc: A,
    channel: AdcChannel,
}

impl<A: AdcPeripheral> HallSensor<A> {
    pub fn new(adc: A, channel: AdcChannel) -> Self {
        Self { adc, channel }
    }

    /// Run one blocking conversion and return the 10-bit result
    ///
    /// Spins on the completion flag with no timeout.
    pub fn read_channel(&mut self) -> u16 {
        self.adc.select_channel(self.channel);
        self.adc.start_conversion(CONVERSION_PRESCALER);
        while !self.adc.is_conversion_done() {
            core::hint::spin_loop();
        }
        let value = self.adc.read_result() & ADC_MAX;
        self.adc.power_down();
        value
    }

    pub fn channel(&self) -> AdcChannel {
        self.channel
    }

    /// Give back the converter
    pub fn release(self) -> A {
        self.adc
    }
}

impl<A: AdcPeripheral> SampleSource for HallSensor<A> {
    fn read_sample(&mut self) -> u16 {
        self.read_channel()
    }
}
