// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Timekeeping for the blink loop.
//!
//! Bare-metal images wait on the SysTick down-counter clocked from the core,
//! for a cycle count derived from a declared clock frequency. The RTOS image
//! converts milliseconds to OS ticks with [`ms_to_ticks`] and sleeps.

use embedded_hal::delay::DelayNs;

const NS_PER_S: u64 = 1_000_000_000;

/// Core cycles needed to cover `ns` at `core_hz`, rounded up.
pub const fn cycles_for_ns(ns: u32, core_hz: u32) -> u64 {
    (ns as u64 * core_hz as u64).div_ceil(NS_PER_S)
}

/// Core cycles needed to cover `ms` at `core_hz`, rounded up.
pub const fn cycles_for_ms(ms: u32, core_hz: u32) -> u64 {
    (ms as u64 * core_hz as u64).div_ceil(1000)
}

/// OS ticks covering `ms` at `tick_hz`. Rounded up so the sleep is never
/// shorter than asked; a non-zero request is at least one tick.
pub const fn ms_to_ticks(ms: u32, tick_hz: u32) -> u32 {
    let ticks = (ms as u64 * tick_hz as u64).div_ceil(1000);
    if ticks > u32::MAX as u64 {
        u32::MAX
    } else {
        ticks as u32
    }
}

/// Burn `count` loop iterations. Each iteration issues a no-op and the
/// counter goes through `black_box`, so the loop survives optimisation.
/// How long this takes depends on clock, flash wait states and pipeline.
pub fn spin(count: u32) {
    let mut remaining = count;
    while core::hint::black_box(remaining) != 0 {
        core::hint::spin_loop();
        remaining -= 1;
    }
}

/// Something that can block for a number of core clock cycles.
pub trait CycleWait {
    fn wait_cycles(&mut self, cycles: u32);
}

/// Host stand-in: one [`spin`] iteration per cycle, so only roughly timed.
pub struct Spin;

impl CycleWait for Spin {
    fn wait_cycles(&mut self, cycles: u32) {
        spin(cycles);
    }
}

/// SysTick clocked from the core, polled until it wraps.
#[cfg(feature = "cortex-m")]
pub struct SysTick {
    syst: cortex_m::peripheral::SYST,
}

#[cfg(feature = "cortex-m")]
impl SysTick {
    /// Largest SysTick reload value (24-bit counter).
    const MAX_RELOAD: u32 = 0x00FF_FFFF;

    pub fn new(mut syst: cortex_m::peripheral::SYST) -> Self {
        syst.set_clock_source(cortex_m::peripheral::syst::SystClkSource::Core);
        Self { syst }
    }

    pub fn free(self) -> cortex_m::peripheral::SYST {
        self.syst
    }
}

#[cfg(feature = "cortex-m")]
impl CycleWait for SysTick {
    fn wait_cycles(&mut self, cycles: u32) {
        let mut left = cycles;
        while left != 0 {
            let reload = left.min(Self::MAX_RELOAD);
            self.syst.set_reload(reload);
            self.syst.clear_current();
            self.syst.enable_counter();
            left -= reload;
            while !self.syst.has_wrapped() {}
            self.syst.disable_counter();
        }
    }
}

/// Blocking delay counted in core cycles at a declared clock.
pub struct ClockDelay<C> {
    counter: C,
    core_hz: u32,
}

impl<C: CycleWait> ClockDelay<C> {
    pub const fn new(counter: C, core_hz: u32) -> Self {
        Self { counter, core_hz }
    }

    pub fn core_hz(&self) -> u32 {
        self.core_hz
    }

    pub fn release(self) -> C {
        self.counter
    }

    fn wait(&mut self, cycles: u64) {
        let mut left = cycles;
        while left > 0 {
            let chunk = left.min(u32::MAX as u64) as u32;
            self.counter.wait_cycles(chunk);
            left -= chunk as u64;
        }
    }
}

impl<C: CycleWait> DelayNs for ClockDelay<C> {
    fn delay_ns(&mut self, ns: u32) {
        self.wait(cycles_for_ns(ns, self.core_hz));
    }

    fn delay_us(&mut self, us: u32) {
        self.wait((us as u64 * self.core_hz as u64).div_ceil(1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wait(cycles_for_ms(ms, self.core_hz));
    }
}
