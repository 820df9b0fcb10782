//! Cycle-counted busy-wait delay
//!
//! Delays spin on `nop` with timer 0 left free. The core runs
//! at [`CPU_HZ`], i.e. 833 ns per cycle; one loop iteration costs about
//! four cycles. Waits are rounded up so a short hold is never skipped.

use embedded_hal::delay::DelayNs;

use crate::board::CPU_HZ;

/// Approximate cycles per loop iteration (nop, decrement, branch)
const CYCLES_PER_ITERATION: u32 = 4;

/// Nanoseconds per loop iteration, rounded down so waits come out long
const NS_PER_ITERATION: u32 = 1_000_000_000 / CPU_HZ * CYCLES_PER_ITERATION;

/// Busy-wait delay
#[derive(Debug, Default, Clone, Copy)]
pub struct CycleDelay;

impl CycleDelay {
    pub fn new() -> Self {
        Self
    }
}

/// Loop iterations covering at least `ns`
pub(crate) const fn iterations(ns: u32) -> u32 {
    ns / NS_PER_ITERATION + 1
}

impl DelayNs for CycleDelay {
    fn delay_ns(&mut self, ns: u32) {
        for _ in 0..iterations(ns) {
            avr_device::asm::nop();
        }
    }
}
