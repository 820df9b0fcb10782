//! PORTB GPIO
//!
//! One bit per pin in each of DDRB (direction), PORTB (output latch)
//! and PINB (input). Pins past PB5 do not exist and are ignored.

use avr_device::attiny13a::PORTB;
use tinymag_hal::{Direction, GpioPort, Level, PinId};

/// Pins on the port (PB0-PB5)
const PIN_COUNT: PinId = 6;

/// Owned PORTB peripheral
pub struct PortB {
    port: PORTB,
}

impl PortB {
    pub fn new(port: PORTB) -> Self {
        Self { port }
    }

    pub fn free(self) -> PORTB {
        self.port
    }
}

fn mask(pin: PinId) -> u8 {
    if pin < PIN_COUNT {
        1 << pin
    } else {
        0
    }
}

fn apply(bits: u8, pin: PinId, set: bool) -> u8 {
    if set {
        bits | mask(pin)
    } else {
        bits & !mask(pin)
    }
}

impl GpioPort for PortB {
    fn set_direction(&mut self, pin: PinId, direction: Direction) {
        let output = direction == Direction::Output;
        // SAFETY: every bit of DDRB is a plain direction flag
        self.port
            .ddrb
            .modify(|r, w| unsafe { w.bits(apply(r.bits(), pin, output)) });
    }

    fn set_level(&mut self, pin: PinId, level: Level) {
        // SAFETY: every bit of PORTB is a plain latch/pull-up flag
        self.port
            .portb
            .modify(|r, w| unsafe { w.bits(apply(r.bits(), pin, level.is_high())) });
    }

    fn read_level(&self, pin: PinId) -> Level {
        Level::from_bit(self.port.pinb.read().bits() & mask(pin) != 0)
    }
}
