//! Host-side simulation of the bus, panel and clock
//!
//! - [`SimClock`] / [`SimDelay`]: virtual nanosecond clock behind `DelayNs`
//! - [`SimPort`]: GPIO port that logs every direction, level and read
//! - [`decode_wire`] / [`decode_transactions`]: reconstruct start, stop
//!   and bytes from a port log
//! - [`SimPanel`]: page-addressed framebuffer fed with decoded transactions
//! - [`RecordingBus`]: `TwoWireWriter` that records bytes directly

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use tinymag_hal::{Direction, GpioPort, Level, PinId, TwoWireWriter};

use crate::bus::{BusPins, DISPLAY_ADDRESS};
use crate::display::font::{Glyph, GLYPH_WIDTH};

/// Pins used by the simulated board
pub const PINS: BusPins = BusPins { sda: 3, scl: 4 };

/// Address byte as it appears on the wire
pub const ADDRESS_BYTE: u8 = DISPLAY_ADDRESS << 1;

/// Shared virtual time in nanoseconds
#[derive(Clone, Default)]
pub struct SimClock(Rc<Cell<u64>>);

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.0.get()
    }

    fn advance(&self, ns: u64) {
        self.0.set(self.0.get() + ns);
    }
}

/// Delay that only advances the virtual clock
pub struct SimDelay {
    clock: SimClock,
}

impl SimDelay {
    pub fn new(clock: &SimClock) -> Self {
        Self {
            clock: clock.clone(),
        }
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance(ns as u64);
    }
}

/// What happened to a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOp {
    Direction(Direction),
    Level(Level),
    Read(Level),
}

/// One logged port operation and the resulting line state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinEvent {
    pub at_ns: u64,
    pub pin: PinId,
    pub op: PinOp,
    /// Level on the wire after the operation
    pub line: Level,
    /// Direction after the operation
    pub direction: Direction,
}

struct PortState {
    directions: [Direction; 8],
    latches: [Level; 8],
    /// Level seen on a released line (a target pulling SDA low to ACK)
    released_level: Level,
    events: Vec<PinEvent>,
}

impl PortState {
    fn line(&self, pin: PinId) -> Level {
        match self.directions[pin as usize] {
            Direction::Output => self.latches[pin as usize],
            Direction::Input => self.released_level,
        }
    }
}

/// Simulated GPIO port
///
/// Clones share the same state, so a test can keep a handle while the
/// driver owns another.
#[derive(Clone)]
pub struct SimPort {
    clock: SimClock,
    state: Rc<RefCell<PortState>>,
}

impl SimPort {
    /// All pins start as inputs with the latch low
    pub fn new(clock: &SimClock) -> Self {
        Self {
            clock: clock.clone(),
            state: Rc::new(RefCell::new(PortState {
                directions: [Direction::Input; 8],
                latches: [Level::Low; 8],
                released_level: Level::High,
                events: Vec::new(),
            })),
        }
    }

    pub fn line(&self, pin: PinId) -> Level {
        self.state.borrow().line(pin)
    }

    pub fn direction(&self, pin: PinId) -> Direction {
        self.state.borrow().directions[pin as usize]
    }

    /// Level a released line reads as (High when nothing drives it)
    pub fn set_released_level(&self, level: Level) {
        self.state.borrow_mut().released_level = level;
    }

    pub fn events(&self) -> Vec<PinEvent> {
        self.state.borrow().events.clone()
    }

    /// Both bus lines driven high
    pub fn is_idle(&self, pins: BusPins) -> bool {
        [pins.sda, pins.scl]
            .iter()
            .all(|&pin| self.direction(pin) == Direction::Output && self.line(pin) == Level::High)
    }

    fn record(&self, pin: PinId, op: PinOp) {
        let mut state = self.state.borrow_mut();
        let event = PinEvent {
            at_ns: self.clock.now(),
            pin,
            op,
            line: state.line(pin),
            direction: state.directions[pin as usize],
        };
        state.events.push(event);
    }
}

impl GpioPort for SimPort {
    fn set_direction(&mut self, pin: PinId, direction: Direction) {
        self.state.borrow_mut().directions[pin as usize] = direction;
        self.record(pin, PinOp::Direction(direction));
    }

    fn set_level(&mut self, pin: PinId, level: Level) {
        self.state.borrow_mut().latches[pin as usize] = level;
        self.record(pin, PinOp::Level(level));
    }

    fn read_level(&self, pin: PinId) -> Level {
        let level = self.line(pin);
        self.record(pin, PinOp::Read(level));
        level
    }
}

/// A clock pulse as seen on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bit {
    /// SDA level sampled on the rising clock edge
    pub level: Level,
    /// SDA was released (input) during the pulse
    pub released: bool,
    /// The master read SDA while the clock was high
    pub read: bool,
}

/// Decoded line activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wire {
    Start,
    Stop,
    Bit(Bit),
}

/// Turn a port log into start/stop conditions and clock pulses
///
/// Both lines are assumed high when the log starts. A pulse counts once
/// its clock falls again, so the clock rise inside a stop condition is
/// not reported as a bit.
pub fn decode_wire(events: &[PinEvent], pins: BusPins) -> Vec<Wire> {
    let mut wire = Vec::new();
    let mut sda = Level::High;
    let mut sda_released = false;
    let mut scl = Level::High;
    let mut pending: Option<Bit> = None;

    for event in events {
        if event.pin == pins.scl {
            match (scl, event.line) {
                (Level::Low, Level::High) => {
                    pending = Some(Bit {
                        level: sda,
                        released: sda_released,
                        read: false,
                    });
                }
                (Level::High, Level::Low) => {
                    if let Some(bit) = pending.take() {
                        wire.push(Wire::Bit(bit));
                    }
                }
                _ => {}
            }
            scl = event.line;
        } else if event.pin == pins.sda {
            if let PinOp::Read(_) = event.op {
                if let Some(bit) = pending.as_mut() {
                    bit.read = true;
                }
                continue;
            }
            if scl == Level::High {
                match (sda, event.line) {
                    (Level::High, Level::Low) => {
                        pending = None;
                        wire.push(Wire::Start);
                    }
                    (Level::Low, Level::High) => {
                        pending = None;
                        wire.push(Wire::Stop);
                    }
                    _ => {}
                }
            }
            sda = event.line;
            sda_released = event.direction == Direction::Input;
        }
    }

    wire
}

/// Group decoded activity into start..stop transactions of bytes
///
/// Panics if a byte is not followed by a released ACK slot or a
/// transaction ends mid-byte.
pub fn decode_transactions(wire: &[Wire]) -> Vec<Vec<u8>> {
    let mut transactions = Vec::new();
    let mut current: Option<Vec<u8>> = None;
    let mut bits: Vec<Bit> = Vec::new();

    for item in wire {
        match item {
            Wire::Start => {
                assert!(current.is_none(), "start inside a transaction");
                current = Some(Vec::new());
                bits.clear();
            }
            Wire::Bit(bit) => {
                let bytes = current.as_mut().expect("clock pulse outside a transaction");
                bits.push(*bit);
                if bits.len() == 9 {
                    let mut byte = 0u8;
                    for data in &bits[..8] {
                        assert!(!data.released, "data bit sent on a released line");
                        byte = (byte << 1) | data.level.is_high() as u8;
                    }
                    assert!(bits[8].released, "ACK slot not released");
                    bytes.push(byte);
                    bits.clear();
                }
            }
            Wire::Stop => {
                assert!(bits.is_empty(), "stop in the middle of a byte");
                transactions.push(current.take().expect("stop without start"));
            }
        }
    }

    assert!(current.is_none(), "transaction left open");
    transactions
}

/// Decode everything a port has seen
pub fn transactions(port: &SimPort) -> Vec<Vec<u8>> {
    decode_transactions(&decode_wire(&port.events(), PINS))
}

/// Framebuffer of a page-addressed 128x64 controller
pub struct SimPanel {
    pages: [[u8; 128]; 8],
    page: u8,
    column: u16,
    awaiting_argument: bool,
    commands: Vec<u8>,
}

impl SimPanel {
    /// Panel RAM starts filled with noise
    pub fn new() -> Self {
        Self {
            pages: [[0xA5; 128]; 8],
            page: 0,
            column: 0,
            awaiting_argument: false,
            commands: Vec::new(),
        }
    }

    /// Feed one transaction, address byte included
    pub fn apply(&mut self, transaction: &[u8]) {
        assert_eq!(transaction[0], ADDRESS_BYTE, "wrong target address");
        match transaction[1] {
            0x00 => {
                for &command in &transaction[2..] {
                    self.command(command);
                }
            }
            0x40 => {
                for &data in &transaction[2..] {
                    self.data(data);
                }
            }
            other => panic!("unknown control byte {:#04x}", other),
        }
    }

    pub fn apply_all(&mut self, transactions: &[Vec<u8>]) {
        for transaction in transactions {
            self.apply(transaction);
        }
    }

    fn command(&mut self, command: u8) {
        if self.awaiting_argument {
            self.awaiting_argument = false;
            self.commands.push(command);
            return;
        }
        match command {
            0x00..=0x0F => self.column = (self.column & 0xF0) | command as u16,
            0x10..=0x1F => self.column = ((command as u16 & 0x0F) << 4) | (self.column & 0x0F),
            0xB0..=0xB7 => self.page = command & 0x07,
            0x8D => {
                self.awaiting_argument = true;
                self.commands.push(command);
            }
            _ => self.commands.push(command),
        }
    }

    fn data(&mut self, data: u8) {
        if self.column < 128 {
            self.pages[self.page as usize][self.column as usize] = data;
        }
        self.column += 1;
    }

    /// Non-addressing commands received, with their arguments
    pub fn commands(&self) -> &[u8] {
        &self.commands
    }

    /// Current RAM write position (column, page)
    pub fn position(&self) -> (u16, u8) {
        (self.column, self.page)
    }

    pub fn page(&self, page: u8) -> &[u8; 128] {
        &self.pages[page as usize]
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        (self.pages[(y / 8) % 8][x] >> (y % 8)) & 1 != 0
    }

    pub fn is_blank(&self) -> bool {
        self.pages.iter().all(|page| page.iter().all(|&b| b == 0))
    }

    /// Sample a 4x glyph back down to its 5x8 source form
    pub fn read_glyph(&self, column: u8, page: u8) -> Glyph {
        let mut glyph = [0u8; GLYPH_WIDTH];
        for (c, out) in glyph.iter_mut().enumerate() {
            let x = column as usize + c * 4;
            for bit in 0..8 {
                let y = page as usize * 8 + bit * 4;
                if self.pixel(x, y) {
                    *out |= 1 << bit;
                }
            }
        }
        glyph
    }
}

/// Bus that records transactions instead of driving pins
///
/// Each transaction starts with the address byte, as on the wire.
#[derive(Default)]
pub struct RecordingBus {
    init_calls: usize,
    transactions: Vec<Vec<u8>>,
    open: Option<Vec<u8>>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init_calls(&self) -> usize {
        self.init_calls
    }

    pub fn transactions(&self) -> &[Vec<u8>] {
        &self.transactions
    }

    pub fn clear(&mut self) {
        self.transactions.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.open.is_none()
    }
}

impl TwoWireWriter for RecordingBus {
    fn init(&mut self) {
        assert!(self.is_idle(), "init inside a transaction");
        self.init_calls += 1;
    }

    fn start(&mut self) {
        assert!(self.is_idle(), "start inside a transaction");
        self.open = Some(vec![ADDRESS_BYTE]);
    }

    fn write_byte(&mut self, byte: u8) {
        self.open
            .as_mut()
            .expect("byte written outside a transaction")
            .push(byte);
    }

    fn stop(&mut self) {
        let transaction = self.open.take().expect("stop without start");
        self.transactions.push(transaction);
    }
}
