//! Bit-banged two-wire bus master
//!
//! Drives SDA and SCL directly from GPIO with no pull-up resistors on
//! the lines, so both are push-pull outputs except during the
//! acknowledgment slot, where SDA is briefly released.
//!
//! Byte timing (each edge followed by an `EDGE_HOLD_NS` hold):
//!
//! ```text
//!        b7    b6         b0    ack
//! SDA  =X=====X=====...=X=====X~~~~~X=
//! SCL  __/‾‾\__/‾‾\__...__/‾‾\__/‾‾\__
//! ```
//!
//! Limitations:
//! - No arbitration and no clock-stretch detection. A target that holds
//!   SCL low desynchronizes every following bit.
//! - The ACK bit is clocked and read, then dropped. Nothing is retried.

use embedded_hal::delay::DelayNs;
use tinymag_hal::{Direction, GpioPort, Level, PinId, TwoWireWriter};

/// 7-bit address of the display controller
pub const DISPLAY_ADDRESS: u8 = 0x3C;

/// Minimum time every line level is held after a transition
pub const EDGE_HOLD_NS: u32 = 1_300;

/// Port pins carrying the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusPins {
    /// Serial data
    pub sda: PinId,
    /// Serial clock
    pub scl: PinId,
}

/// Software two-wire master for a single fixed target
pub struct SoftI2c<P, D> {
    port: P,
    delay: D,
    pins: BusPins,
    address: u8,
}

impl<P, D> SoftI2c<P, D>
where
    P: GpioPort,
    D: DelayNs,
{
    /// Create a bus addressing the display controller
    ///
    /// The lines are not touched until [`TwoWireWriter::init`].
    pub fn new(port: P, delay: D, pins: BusPins) -> Self {
        Self {
            port,
            delay,
            pins,
            address: DISPLAY_ADDRESS,
        }
    }

    /// First byte of every transaction: address with the write bit clear
    pub fn address_byte(&self) -> u8 {
        self.address << 1
    }

    pub fn pins(&self) -> BusPins {
        self.pins
    }

    /// Give back the port and delay
    pub fn release(self) -> (P, D) {
        (self.port, self.delay)
    }

    fn hold(&mut self) {
        self.delay.delay_ns(EDGE_HOLD_NS);
    }

    fn drive(&mut self, pin: PinId, level: Level) {
        self.port.set_level(pin, level);
        self.hold();
    }

    /// Raise and drop SCL, sampling SDA while it is high
    fn clock_pulse(&mut self) -> Level {
        self.drive(self.pins.scl, Level::High);
        let sampled = self.port.read_level(self.pins.sda);
        self.drive(self.pins.scl, Level::Low);
        sampled
    }

    fn clock_bit(&mut self, level: Level) {
        self.drive(self.pins.sda, level);
        self.drive(self.pins.scl, Level::High);
        self.drive(self.pins.scl, Level::Low);
    }
}

impl<P, D> TwoWireWriter for SoftI2c<P, D>
where
    P: GpioPort,
    D: DelayNs,
{
    fn init(&mut self) {
        // Latch high before switching to output so the lines never glitch low
        for pin in [self.pins.sda, self.pins.scl] {
            self.port.set_level(pin, Level::High);
            self.port.set_direction(pin, Direction::Output);
        }
        self.hold();
    }

    fn start(&mut self) {
        self.drive(self.pins.sda, Level::Low);
        self.drive(self.pins.scl, Level::Low);
        let address = self.address_byte();
        self.write_byte(address);
    }

    fn write_byte(&mut self, byte: u8) {
        let mut data = byte;
        for _ in 0..8 {
            self.clock_bit(Level::from_bit(data & 0x80 != 0));
            data <<= 1;
        }

        // ACK slot: latch high (pull-up) and let the target drive SDA
        self.port.set_level(self.pins.sda, Level::High);
        self.port.set_direction(self.pins.sda, Direction::Input);
        self.hold();
        let _ack = self.clock_pulse();
        self.port.set_direction(self.pins.sda, Direction::Output);
    }

    fn stop(&mut self) {
        self.drive(self.pins.sda, Level::Low);
        self.drive(self.pins.scl, Level::High);
        self.drive(self.pins.sda, Level::High);
    }
}
