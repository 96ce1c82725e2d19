// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! STM32F4 RCC and GPIOD, enough to drive the Discovery LEDs.
//!
//! GPIOD is held in reset until its AHB1 clock is enabled. MODER carries
//! two bits per pin: 00 input, 01 output, 10 alternate, 11 analog.

use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

use crate::led::{self, Port};
use crate::mmio::RegisterBus;

/// Core clock out of reset (HSI).
pub const CORE_HZ: u32 = 16_000_000;

pub const RCC_BASE: u32 = 0x4002_3800;
pub const AHB1ENR: u32 = RCC_BASE + 0x30;
pub const GPIODEN: u32 = 1 << 3;

pub const GPIOD_BASE: u32 = 0x4002_0C00;
pub const MODER: u32 = GPIOD_BASE;
pub const ODR: u32 = GPIOD_BASE + 0x14;

const MODE_OUTPUT: u32 = 0b01;

/// MODER bits covering every pin of `mask`.
pub const fn moder_field(mask: u32) -> u32 {
    let mut field: u32 = 0;
    let mut pin: u32 = 0;
    while pin < 16 {
        if mask & (1 << pin) != 0 {
            field |= 0b11 << (2 * pin);
        }
        pin += 1;
    }
    field
}

/// MODER value selecting general-purpose output for every pin of `mask`.
pub const fn moder_output(mask: u32) -> u32 {
    let mut bits: u32 = 0;
    let mut pin: u32 = 0;
    while pin < 16 {
        if mask & (1 << pin) != 0 {
            bits |= MODE_OUTPUT << (2 * pin);
        }
        pin += 1;
    }
    bits
}

/// Output pins on GPIOD driven as one.
pub struct LedBank<B> {
    bus: B,
    mask: u32,
}

/// Board-init: clock GPIOD and switch the bank's pins to output.
pub fn init_leds<B: RegisterBus>(bus: B, bank: led::LedBank) -> LedBank<B> {
    debug_assert_eq!(bank.port, Port::D);
    let mask = bank.mask();

    bus.set_bits(AHB1ENR, GPIODEN);
    // Read back so the port clock is running before MODER is written.
    let _ = bus.read(AHB1ENR);

    bus.modify(MODER, |v| (v & !moder_field(mask)) | moder_output(mask));

    LedBank { bus, mask }
}

impl<B> LedBank<B> {
    pub fn mask(&self) -> u32 {
        self.mask
    }
}

impl<B> ErrorType for LedBank<B> {
    type Error = Infallible;
}

impl<B: RegisterBus> OutputPin for LedBank<B> {
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.bus.set_bits(ODR, self.mask);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.bus.clear_bits(ODR, self.mask);
        Ok(())
    }
}

impl<B: RegisterBus> StatefulOutputPin for LedBank<B> {
    /// True only when every pin of the bank is high.
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.bus.read(ODR) & self.mask == self.mask)
    }

    /// True only when every pin of the bank is low.
    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.bus.read(ODR) & self.mask == 0)
    }

    fn toggle(&mut self) -> Result<(), Infallible> {
        self.bus.modify(ODR, |v| v ^ self.mask);
        Ok(())
    }
}
