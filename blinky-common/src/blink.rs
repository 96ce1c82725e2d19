// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! The blink loop: a two-state oscillator driving an LED.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, StatefulOutputPin};

/// Time spent in each state.
pub const HALF_PERIOD_MS: u32 = 1000;

const _: () = assert!(HALF_PERIOD_MS >= 500 && HALF_PERIOD_MS <= 2000);

/// LED state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedState {
    Off,
    On,
}

impl LedState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }
}

/// Drives `led` through On/Off forever, waiting `half_period_ms` in each
/// state. Starts from `Off`, the reset level of the pin.
pub struct Blinker<L, D> {
    led: L,
    delay: D,
    half_period_ms: u32,
    state: LedState,
}

impl<L, D> Blinker<L, D> {
    pub fn new(led: L, delay: D, half_period_ms: u32) -> Self {
        Self {
            led,
            delay,
            half_period_ms,
            state: LedState::Off,
        }
    }

    pub fn state(&self) -> LedState {
        self.state
    }

    pub fn half_period_ms(&self) -> u32 {
        self.half_period_ms
    }

    pub fn release(self) -> (L, D) {
        (self.led, self.delay)
    }
}

impl<L: OutputPin, D: DelayNs> Blinker<L, D> {
    /// One half-period: move to the other state, drive the pin, wait.
    pub fn step(&mut self) -> Result<LedState, L::Error> {
        self.step_with(|_| {})
    }

    /// Like [`step`](Self::step), calling `on_transition` with the new state
    /// before the pin is driven.
    pub fn step_with<F>(&mut self, on_transition: F) -> Result<LedState, L::Error>
    where
        F: FnOnce(LedState),
    {
        let next = self.state.toggled();
        on_transition(next);
        match next {
            LedState::On => self.led.set_high()?,
            LedState::Off => self.led.set_low()?,
        }
        self.state = next;
        self.delay.delay_ms(self.half_period_ms);
        Ok(next)
    }

    /// Blink until reset. Pin errors are ignored; there is nowhere to report them.
    pub fn run(mut self) -> ! {
        loop {
            self.step().ok();
        }
    }
}

impl<L: StatefulOutputPin, D: DelayNs> Blinker<L, D> {
    /// One half-period with the pin flipped in a single operation, so every
    /// line of a multi-LED bank changes together.
    pub fn toggle_step(&mut self) -> Result<LedState, L::Error> {
        self.led.toggle()?;
        self.state = self.state.toggled();
        self.delay.delay_ms(self.half_period_ms);
        Ok(self.state)
    }

    pub fn run_toggling(mut self) -> ! {
        loop {
            self.toggle_step().ok();
        }
    }
}
