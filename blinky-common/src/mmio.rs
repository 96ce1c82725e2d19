// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Memory-mapped register access.
//!
//! Drivers never dereference peripheral addresses themselves; they go
//! through a [`RegisterBus`]. On hardware that is [`Mmio`], which turns each
//! call into exactly one volatile load or store. Host tests substitute a
//! bus that records the traffic instead.

/// 32-bit, word-aligned register access.
pub trait RegisterBus {
    /// Read the register at `addr`.
    fn read(&self, addr: u32) -> u32;

    /// Write `value` to the register at `addr`.
    fn write(&self, addr: u32, value: u32);

    /// Read-modify-write: one read followed by one write of `f(old)`.
    fn modify<F>(&self, addr: u32, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read(addr);
        self.write(addr, f(value));
    }

    /// Set the bits of `mask`, leaving the others untouched.
    fn set_bits(&self, addr: u32, mask: u32) {
        self.modify(addr, |v| v | mask);
    }

    /// Clear the bits of `mask`, leaving the others untouched.
    fn clear_bits(&self, addr: u32, mask: u32) {
        self.modify(addr, |v| v & !mask);
    }
}

impl<B: RegisterBus + ?Sized> RegisterBus for &B {
    fn read(&self, addr: u32) -> u32 {
        (**self).read(addr)
    }

    fn write(&self, addr: u32, value: u32) {
        (**self).write(addr, value)
    }
}

/// Volatile access to the chip's peripheral address space.
#[derive(Clone, Copy)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// # Safety
    /// Every address later passed to this bus must be a valid, word-aligned
    /// peripheral register, and the caller must be the only code touching
    /// the bits it writes for the rest of the program.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl RegisterBus for Mmio {
    #[inline(always)]
    fn read(&self, addr: u32) -> u32 {
        unsafe { (addr as *const u32).read_volatile() }
    }

    #[inline(always)]
    fn write(&self, addr: u32, value: u32) {
        unsafe { (addr as *mut u32).write_volatile(value) }
    }
}
