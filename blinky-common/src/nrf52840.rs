// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! nRF52840 port 0 GPIO.
//!
//! OUTSET, OUTCLR and DIRSET are write-one-to-act registers: a 1 in bit n
//! acts on pin n and 0s are ignored, so no read-modify-write is needed.

use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

use crate::led::{LedPin, Port};
use crate::mmio::RegisterBus;

/// Core clock out of reset (HFINT).
pub const CORE_HZ: u32 = 64_000_000;

pub const P0_BASE: u32 = 0x5000_0000;
pub const OUT: u32 = P0_BASE + 0x504;
pub const OUTSET: u32 = P0_BASE + 0x508;
pub const OUTCLR: u32 = P0_BASE + 0x50C;
pub const DIRSET: u32 = P0_BASE + 0x518;

/// An output pin on P0.
pub struct Led<B> {
    bus: B,
    mask: u32,
}

/// Board-init: make `pin` an output. One write to DIRSET.
pub fn init_led<B: RegisterBus>(bus: B, pin: LedPin) -> Led<B> {
    debug_assert_eq!(pin.port, Port::P0);
    let mask = pin.mask();
    bus.write(DIRSET, mask);
    Led { bus, mask }
}

impl<B> Led<B> {
    pub fn mask(&self) -> u32 {
        self.mask
    }
}

impl<B> ErrorType for Led<B> {
    type Error = Infallible;
}

impl<B: RegisterBus> OutputPin for Led<B> {
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.bus.write(OUTSET, self.mask);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.bus.write(OUTCLR, self.mask);
        Ok(())
    }
}

impl<B: RegisterBus> StatefulOutputPin for Led<B> {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.bus.read(OUT) & self.mask != 0)
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.bus.read(OUT) & self.mask == 0)
    }
}
