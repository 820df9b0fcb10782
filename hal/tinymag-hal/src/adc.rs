//! Analog converter abstractions
//!
//! Models a single successive-approximation ADC with a channel
//! multiplexer, as found on small 8-bit parts:
//! - ADC0: PB5
//! - ADC1: PB2
//! - ADC2: PB4
//! - ADC3: PB3

/// Largest value a 10-bit conversion can produce
pub const ADC_MAX: u16 = 0x3FF;

/// ADC multiplexer channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AdcChannel {
    /// ADC0 on PB5
    Adc0 = 0,
    /// ADC1 on PB2
    Adc1 = 1,
    /// ADC2 on PB4
    Adc2 = 2,
    /// ADC3 on PB3
    Adc3 = 3,
}

impl AdcChannel {
    /// Multiplexer selection bits (MUX1:0)
    pub fn mux_bits(self) -> u8 {
        self as u8
    }

    /// Port pin shared with this channel
    pub fn pin(self) -> u8 {
        match self {
            AdcChannel::Adc0 => 5,
            AdcChannel::Adc1 => 2,
            AdcChannel::Adc2 => 4,
            AdcChannel::Adc3 => 3,
        }
    }

    /// Get the channel from its multiplexer bits
    pub fn from_mux_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(AdcChannel::Adc0),
            1 => Some(AdcChannel::Adc1),
            2 => Some(AdcChannel::Adc2),
            3 => Some(AdcChannel::Adc3),
            _ => None,
        }
    }
}

/// ADC clock prescaler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Prescaler {
    Div2,
    Div4,
    Div8,
    Div16,
    Div32,
    Div64,
    Div128,
}

impl Prescaler {
    /// Prescaler selection bits (ADPS2:0)
    pub fn bits(self) -> u8 {
        match self {
            Prescaler::Div2 => 0b001,
            Prescaler::Div4 => 0b010,
            Prescaler::Div8 => 0b011,
            Prescaler::Div16 => 0b100,
            Prescaler::Div32 => 0b101,
            Prescaler::Div64 => 0b110,
            Prescaler::Div128 => 0b111,
        }
    }

    /// Clock division factor
    pub fn divisor(self) -> u16 {
        1 << self.bits()
    }
}

/// Single-shot analog converter
///
/// A conversion walks Idle → Converting → Result. There is no
/// asynchronous completion; callers poll [`is_conversion_done`].
///
/// [`is_conversion_done`]: AdcPeripheral::is_conversion_done
pub trait AdcPeripheral {
    /// Route a channel to the converter input
    fn select_channel(&mut self, channel: AdcChannel);

    /// Enable the converter and start one conversion
    fn start_conversion(&mut self, prescaler: Prescaler);

    /// Check whether the running conversion has finished
    fn is_conversion_done(&self) -> bool;

    /// Read the 10-bit result of the last conversion
    fn read_result(&self) -> u16;

    /// Switch the converter off until the next conversion
    fn power_down(&mut self);
}

impl<T: AdcPeripheral + ?Sized> AdcPeripheral for &mut T {
    fn select_channel(&mut self, channel: AdcChannel) {
        (**self).select_channel(channel);
    }

    fn start_conversion(&mut self, prescaler: Prescaler) {
        (**self).start_conversion(prescaler);
    }

    fn is_conversion_done(&self) -> bool {
        (**self).is_conversion_done()
    }

    fn read_result(&self) -> u16 {
        (**self).read_result()
    }

    fn power_down(&mut self) {
        (**self).power_down();
    }
}
