//! Two-wire bus abstractions
//!
//! Write-only master side of an I2C-style bus. The target address is
//! fixed by the implementation and sent as part of [`start`].
//!
//! [`start`]: TwoWireWriter::start

/// Write-only two-wire bus master
///
/// There is no error channel: the acknowledgment slot is clocked but
/// its value is not reported.
pub trait TwoWireWriter {
    /// Put both lines into the idle (high) state
    fn init(&mut self);

    /// Issue a start condition followed by the target address byte
    fn start(&mut self);

    /// Clock one byte out, MSB first, plus the acknowledgment slot
    fn write_byte(&mut self, byte: u8);

    /// Issue a stop condition, leaving the bus idle
    fn stop(&mut self);

    /// Write a complete transaction: start, bytes, stop
    fn write(&mut self, bytes: &[u8]) {
        self.start();
        for &byte in bytes {
            self.write_byte(byte);
        }
        self.stop();
    }
}

impl<T: TwoWireWriter + ?Sized> TwoWireWriter for &mut T {
    fn init(&mut self) {
        (**self).init();
    }

    fn start(&mut self) {
        (**self).start();
    }

    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte);
    }

    fn stop(&mut self) {
        (**self).stop();
    }
}
