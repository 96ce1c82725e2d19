// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Description of each board a template exists for, logged at boot.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub mcu: &'static str,
    pub architecture: &'static str,
    pub ram_kb: u32,
    pub flash_kb: u32,
}

pub const ESP32_DEVKIT: BoardInfo = BoardInfo {
    id: "esp32",
    name: "ESP32 DevKitC",
    mcu: "ESP32-D0WD",
    architecture: "xtensa-lx6",
    ram_kb: 520,
    flash_kb: 4096,
};

pub const NRF52840_DK: BoardInfo = BoardInfo {
    id: "nrf52840",
    name: "nRF52840 DK",
    mcu: "nRF52840",
    architecture: "cortex-m4f",
    ram_kb: 256,
    flash_kb: 1024,
};

pub const STM32F4_DISCOVERY: BoardInfo = BoardInfo {
    id: "stm32f4",
    name: "STM32F4 Discovery",
    mcu: "STM32F407VG",
    architecture: "cortex-m4f",
    ram_kb: 192,
    flash_kb: 1024,
};
