//! Tinymag Firmware
//!
//! Hall sensor readout for the ATtiny13A: calibrates a zero reference
//! at power-up, then shows the live deviation from it as a signed
//! three-digit number on an SSD1306 panel driven over bit-banged I2C.

#![no_std]
#![no_main]

use panic_halt as _;

use avr_device::attiny13a::Peripherals;
use tinymag_core::{Meter, MeterConfig};
use tinymag_drivers::bus::{BusPins, SoftI2c};
use tinymag_drivers::display::Ssd1306;
use tinymag_drivers::sensor::HallSensor;
use tinymag_hal_attiny13::board::{HALL_CHANNEL, SCL_PIN, SDA_PIN};
use tinymag_hal_attiny13::{Adc, CycleDelay, PortB};

/// Bus pins on the sensor board
const BUS_PINS: BusPins = BusPins {
    sda: SDA_PIN,
    scl: SCL_PIN,
};

#[avr_device::entry]
fn main() -> ! {
    let Some(dp) = Peripherals::take() else {
        // Entry runs once; nothing can have taken them before
        loop {
            avr_device::asm::nop();
        }
    };

    let bus = SoftI2c::new(PortB::new(dp.PORTB), CycleDelay::new(), BUS_PINS);
    let mut display = Ssd1306::new(bus);
    display.init(&mut CycleDelay::new());

    let sensor = HallSensor::new(Adc::new(dp.ADC), HALL_CHANNEL);
    let mut meter = Meter::calibrate(sensor, MeterConfig::DEFAULT);

    meter.run(&mut display)
}
