//! 10-bit ADC
//!
//! VCC reference, right-adjusted result. ADSC stays set while a
//! conversion runs and clears itself when the result is ready.

use avr_device::attiny13a::ADC as AdcRegs;
use tinymag_hal::{AdcChannel, AdcPeripheral, Prescaler, ADC_MAX};

/// ADCSRA: converter enable
const ADEN: u8 = 1 << 7;
/// ADCSRA: start conversion
const ADSC: u8 = 1 << 6;

/// Owned ADC peripheral
pub struct Adc {
    regs: AdcRegs,
}

impl Adc {
    pub fn new(regs: AdcRegs) -> Self {
        Self { regs }
    }

    pub fn free(self) -> AdcRegs {
        self.regs
    }
}

impl AdcPeripheral for Adc {
    fn select_channel(&mut self, channel: AdcChannel) {
        // SAFETY: REFS0 and ADLAR clear, MUX1:0 from a valid channel
        self.regs.admux.write(|w| unsafe { w.bits(channel.mux_bits()) });
    }

    fn start_conversion(&mut self, prescaler: Prescaler) {
        // SAFETY: ADEN | ADSC plus a 3-bit prescaler selection
        self.regs
            .adcsra
            .write(|w| unsafe { w.bits(ADEN | ADSC | prescaler.bits()) });
    }

    fn is_conversion_done(&self) -> bool {
        self.regs.adcsra.read().bits() & ADSC == 0
    }

    fn read_result(&self) -> u16 {
        self.regs.adc.read().bits() & ADC_MAX
    }

    fn power_down(&mut self) {
        // SAFETY: clearing ADCSRA disables the converter
        self.regs.adcsra.write(|w| unsafe { w.bits(0) });
    }
}
