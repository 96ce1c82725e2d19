// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Static LED pin descriptors for the supported boards.

/// GPIO port an LED hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    /// ESP32 GPIO matrix, addressed by pin number only
    Gpio,
    /// nRF52840 port 0
    P0,
    /// STM32F4 GPIOD
    D,
}

/// A single LED: a (port, index) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedPin {
    pub port: Port,
    pub index: u8,
}

impl LedPin {
    pub const fn new(port: Port, index: u8) -> Self {
        assert!(index < 32);
        Self { port, index }
    }

    /// Bit of this pin in a 32-bit port register.
    pub const fn mask(&self) -> u32 {
        1 << self.index
    }
}

/// Several LEDs on one port, driven together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedBank {
    pub port: Port,
    mask: u32,
}

impl LedBank {
    pub const fn from_pins(port: Port, pins: &[u8]) -> Self {
        let mut mask = 0;
        let mut i = 0;
        while i < pins.len() {
            assert!(pins[i] < 32);
            mask |= 1 << pins[i];
            i += 1;
        }
        Self { port, mask }
    }

    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Pin indices in ascending order.
    pub fn pins(&self) -> impl Iterator<Item = u8> {
        let mask = self.mask;
        (0..32u8).filter(move |i| mask & (1 << i) != 0)
    }
}

/// On-board LED of the ESP32 DevKit.
pub const ESP32_LED: LedPin = LedPin::new(Port::Gpio, 2);

/// LED1 of the nRF52840 DK.
pub const NRF52840_LED1: LedPin = LedPin::new(Port::P0, 13);

/// Green, orange, red and blue LEDs of the STM32F4 Discovery.
pub const STM32F4_LEDS: LedBank = LedBank::from_pins(Port::D, &[12, 13, 14, 15]);
