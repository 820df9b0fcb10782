//! GPIO port abstractions
//!
//! The two-wire bus is bit-banged by flipping pin direction and level
//! on a single port, so pins are addressed by their bit number instead
//! of being split into typed per-pin handles.

/// Bit number of a pin within the port (PB3 = 3)
pub type PinId = u8;

/// Pin data direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// High impedance; the output latch selects the internal pull-up
    Input,
    /// Driven from the output latch
    Output,
}

/// Logic level of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Level matching a single bit
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Level::High
        } else {
            Level::Low
        }
    }

    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

impl From<bool> for Level {
    fn from(bit: bool) -> Self {
        Level::from_bit(bit)
    }
}

/// Direct access to a GPIO port
///
/// Implementations manipulate the direction, output and input registers
/// of the port. None of the operations can fail.
pub trait GpioPort {
    /// Switch a pin between input and output
    fn set_direction(&mut self, pin: PinId, direction: Direction);

    /// Set the output latch of a pin
    ///
    /// For an input pin this only selects the pull-up state.
    fn set_level(&mut self, pin: PinId, level: Level);

    /// Read the level currently present on a pin
    fn read_level(&self, pin: PinId) -> Level;

    /// Set the output latch high
    fn set_high(&mut self, pin: PinId) {
        self.set_level(pin, Level::High);
    }

    /// Set the output latch low
    fn set_low(&mut self, pin: PinId) {
        self.set_level(pin, Level::Low);
    }
}

impl<T: GpioPort + ?Sized> GpioPort for &mut T {
    fn set_direction(&mut self, pin: PinId, direction: Direction) {
        (**self).set_direction(pin, direction);
    }

    fn set_level(&mut self, pin: PinId, level: Level) {
        (**self).set_level(pin, level);
    }

    fn read_level(&self, pin: PinId) -> Level {
        (**self).read_level(pin)
    }
}
