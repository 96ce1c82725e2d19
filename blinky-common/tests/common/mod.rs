// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Host doubles for registers, pins and delays.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;

use blinky_common::{CycleWait, RegisterBus};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read(u32),
    Write(u32, u32),
}

/// Register file that remembers values and logs every access in order.
#[derive(Default)]
pub struct RecordingBus {
    regs: RefCell<HashMap<u32, u32>>,
    log: RefCell<Vec<Access>>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload a register without logging it.
    pub fn preset(&self, addr: u32, value: u32) {
        self.regs.borrow_mut().insert(addr, value);
    }

    pub fn value(&self, addr: u32) -> u32 {
        self.regs.borrow().get(&addr).copied().unwrap_or(0)
    }

    pub fn log(&self) -> Vec<Access> {
        self.log.borrow().clone()
    }

    pub fn writes(&self) -> Vec<(u32, u32)> {
        self.log
            .borrow()
            .iter()
            .filter_map(|a| match *a {
                Access::Write(addr, value) => Some((addr, value)),
                Access::Read(_) => None,
            })
            .collect()
    }

    pub fn clear_log(&self) {
        self.log.borrow_mut().clear();
    }
}

impl RegisterBus for RecordingBus {
    fn read(&self, addr: u32) -> u32 {
        self.log.borrow_mut().push(Access::Read(addr));
        self.value(addr)
    }

    fn write(&self, addr: u32, value: u32) {
        self.log.borrow_mut().push(Access::Write(addr, value));
        self.regs.borrow_mut().insert(addr, value);
    }
}

/// Output pin that records the levels it was driven to.
#[derive(Default)]
pub struct RecordingPin {
    pub levels: Vec<bool>,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.levels.push(true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.levels.push(false);
        Ok(())
    }
}

/// Delay that records each request instead of waiting.
#[derive(Default)]
pub struct RecordingDelay {
    pub ns: Vec<u64>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.ns.push(ns as u64);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.ns.push(ms as u64 * 1_000_000);
    }
}

/// Cycle counter that records each wait instead of performing it.
#[derive(Default)]
pub struct RecordingCycles {
    pub waits: Vec<u32>,
}

impl RecordingCycles {
    pub fn total(&self) -> u64 {
        self.waits.iter().map(|&c| c as u64).sum()
    }
}

impl CycleWait for RecordingCycles {
    fn wait_cycles(&mut self, cycles: u32) {
        self.waits.push(cycles);
    }
}
