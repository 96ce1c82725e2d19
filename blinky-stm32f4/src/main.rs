// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

defmt::timestamp!("{=u64:us}", { 0 });

use blinky_common::board::STM32F4_DISCOVERY;
use blinky_common::delay::SysTick;
use blinky_common::led::STM32F4_LEDS;
use blinky_common::{stm32f4, Announcement, Blinker, ClockDelay, Mmio, HALF_PERIOD_MS};
use cortex_m_rt::entry;

const PROJECT_NAME: &str = env!("BLINKY_PROJECT_NAME");

#[entry]
fn main() -> ! {
    defmt::println!("{}", Announcement(PROJECT_NAME));
    defmt::println!(
        "{=str} ({=str}), firmware v{=str}",
        STM32F4_DISCOVERY.name,
        STM32F4_DISCOVERY.mcu,
        env!("BLINKY_VERSION")
    );

    let Some(cp) = cortex_m::Peripherals::take() else {
        defmt::panic!("core peripherals already taken");
    };
    let delay = ClockDelay::new(SysTick::new(cp.SYST), stm32f4::CORE_HZ);

    // SAFETY: RCC.AHB1ENR and GPIOD are only written here and by the LED bank.
    let bus = unsafe { Mmio::new() };
    let leds = stm32f4::init_leds(bus, STM32F4_LEDS);

    defmt::println!("Blinking PD12-PD15, mask {=u32:#x}", leds.mask());

    // All four LEDs flip together, once per half-period.
    Blinker::new(leds, delay, HALF_PERIOD_MS).run_toggling()
}
