//! SSD1306 OLED command layer
//!
//! Page-addressed writes straight to the controller's RAM; no frame
//! buffer is kept on the host side. Every command travels in its own
//! transaction behind the command-mode control byte.

use embedded_hal::delay::DelayNs;
use tinymag_hal::TwoWireWriter;

/// Power-up settle time before the controller accepts commands
pub const POWER_UP_SETTLE_MS: u32 = 200;

/// Display dimensions
pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
pub const PAGES: usize = HEIGHT / 8;

/// SSD1306 commands
#[allow(dead_code)]
pub(crate) mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const CHARGE_PUMP_ENABLE: u8 = 0x14;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
}

/// Control byte prefixes
pub(crate) mod control {
    /// Following bytes are commands
    pub const COMMAND: u8 = 0x00;
    /// Following bytes go to display RAM
    pub const DATA: u8 = 0x40;
}

/// Tracked write position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    /// Column (0-127)
    pub column: u8,
    /// Page (0-7)
    pub page: u8,
}

/// SSD1306 driver over a write-only two-wire bus
pub struct Ssd1306<B> {
    pub(crate) bus: B,
    pub(crate) cursor: Cursor,
}

impl<B: TwoWireWriter> Ssd1306<B> {
    /// Create a driver; nothing is sent until [`init`](Self::init)
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            cursor: Cursor::default(),
        }
    }

    /// Bring the panel up and blank it
    ///
    /// Idles the bus, waits out the power-up settle time, enables the
    /// charge pump, turns the display on and clears all of RAM.
    pub fn init(&mut self, delay: &mut impl DelayNs) {
        self.bus.init();
        delay.delay_ms(POWER_UP_SETTLE_MS);

        for command in [
            cmd::SET_CHARGE_PUMP,
            cmd::CHARGE_PUMP_ENABLE,
            cmd::DISPLAY_ON,
        ] {
            self.send_command(command);
        }
        self.clear_screen();

        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1306 initialized");
    }

    /// Send a single command byte
    pub fn send_command(&mut self, command: u8) {
        self.bus.start();
        self.bus.write_byte(control::COMMAND);
        self.bus.write_byte(command);
        self.bus.stop();
    }

    /// Address RAM at `column` on `page`
    ///
    /// The page is masked to 0-7. The column nibbles are sent as given,
    /// so a column past 127 addresses whatever the controller makes of
    /// it; the tracked cursor keeps `column & 0x7F`.
    pub fn set_cursor(&mut self, column: u8, page: u8) {
        self.bus.start();
        self.bus.write_byte(control::COMMAND);
        self.bus.write_byte(cmd::SET_PAGE_ADDR | (page & 0x07));
        self.bus.write_byte(cmd::SET_LOW_COLUMN | (column & 0x0F));
        self.bus.write_byte(cmd::SET_HIGH_COLUMN | (column >> 4));
        self.bus.stop();

        self.cursor = Cursor {
            column: column & 0x7F,
            page: page & 0x07,
        };
    }

    /// Zero every page, then home the cursor
    pub fn clear_screen(&mut self) {
        for page in 0..PAGES as u8 {
            self.set_cursor(0, page);
            self.bus.start();
            self.bus.write_byte(control::DATA);
            for _ in 0..WIDTH {
                self.bus.write_byte(0x00);
            }
            self.bus.stop();
        }
        self.set_cursor(0, 0);
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Give back the bus
    pub fn release(self) -> B {
        self.bus
    }
}
