// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Shared pieces of the LED blink template images.
//!
//! This crate is `no_std` and builds for the host as well, which is where
//! its tests run. The firmware images pick the pieces they need:
//! - `cortex-m` feature: SysTick-timed delays
//! - `defmt` feature: `defmt::Format` for the public value types

#![no_std]

pub mod announce;
pub mod blink;
pub mod board;
pub mod delay;
pub mod led;
pub mod mmio;
pub mod nrf52840;
pub mod stm32f4;

// Re-export commonly used types
pub use announce::{Announcement, PROJECT_NAME_TOKEN};
pub use blink::{Blinker, LedState, HALF_PERIOD_MS};
pub use board::BoardInfo;
pub use delay::{ms_to_ticks, spin, ClockDelay, CycleWait};
pub use led::{LedBank, LedPin, Port};
pub use mmio::{Mmio, RegisterBus};
