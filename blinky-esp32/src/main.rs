// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

use anyhow::anyhow;
use blinky_common::board::ESP32_DEVKIT;
use blinky_common::led::ESP32_LED;
use blinky_common::{ms_to_ticks, Announcement, Blinker, LedState, HALF_PERIOD_MS};
use embedded_hal::delay::DelayNs;
use esp_idf_svc::hal::gpio::PinDriver;
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::sys;
use log::info;

const PROJECT_NAME: &str = env!("BLINKY_PROJECT_NAME");

/// Suspends the calling FreeRTOS task; the scheduler runs other tasks meanwhile.
struct TaskDelay;

impl DelayNs for TaskDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns.div_ceil(1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        let ticks = ms_to_ticks(ms, sys::configTICK_RATE_HZ);
        unsafe { sys::vTaskDelay(ticks) };
    }
}

fn main() -> anyhow::Result<()> {
    sys::link_patches();

    // First application line on the console.
    println!("{}", Announcement(PROJECT_NAME));

    esp_idf_svc::log::EspLogger::initialize_default();
    info!(
        "{} ({}), firmware v{}",
        ESP32_DEVKIT.name,
        ESP32_DEVKIT.mcu,
        env!("BLINKY_VERSION")
    );

    let peripherals = Peripherals::take()?;

    sys::esp!(unsafe { sys::gpio_reset_pin(ESP32_LED.index as sys::gpio_num_t) })?;
    let led = PinDriver::output(peripherals.pins.gpio2)?;
    debug_assert_eq!(led.pin(), ESP32_LED.index as i32);

    info!("Blinking GPIO{}", ESP32_LED.index);

    let mut blinker = Blinker::new(led, TaskDelay, HALF_PERIOD_MS);
    loop {
        blinker
            .step_with(|state| match state {
                LedState::On => println!("LED ON"),
                LedState::Off => println!("LED OFF"),
            })
            .map_err(|e| anyhow!("LED pin: {e:?}"))?;
    }
}
