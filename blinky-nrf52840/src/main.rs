// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

defmt::timestamp!("{=u64:us}", { 0 });

use blinky_common::board::NRF52840_DK;
use blinky_common::delay::SysTick;
use blinky_common::led::NRF52840_LED1;
use blinky_common::{nrf52840, Announcement, Blinker, ClockDelay, Mmio, HALF_PERIOD_MS};
use cortex_m_rt::entry;

const PROJECT_NAME: &str = env!("BLINKY_PROJECT_NAME");

#[entry]
fn main() -> ! {
    defmt::println!("{}", Announcement(PROJECT_NAME));
    defmt::println!(
        "{=str} ({=str}), firmware v{=str}",
        NRF52840_DK.name,
        NRF52840_DK.mcu,
        env!("BLINKY_VERSION")
    );

    let Some(cp) = cortex_m::Peripherals::take() else {
        defmt::panic!("core peripherals already taken");
    };
    let delay = ClockDelay::new(SysTick::new(cp.SYST), nrf52840::CORE_HZ);

    // SAFETY: nothing else in this image touches P0.
    let bus = unsafe { Mmio::new() };
    let led = nrf52840::init_led(bus, NRF52840_LED1);

    defmt::println!("Blinking P0.{=u8}", NRF52840_LED1.index);

    Blinker::new(led, delay, HALF_PERIOD_MS).run()
}
