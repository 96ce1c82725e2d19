// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Delay and tick arithmetic.

mod common;

use blinky_common::delay::{cycles_for_ms, cycles_for_ns, Spin};
use blinky_common::{ms_to_ticks, nrf52840, spin, stm32f4, ClockDelay, HALF_PERIOD_MS};
use common::RecordingCycles;
use embedded_hal::delay::DelayNs;

#[test]
fn test_cycles_for_one_second() {
    assert_eq!(cycles_for_ns(1_000_000_000, nrf52840::CORE_HZ), 64_000_000);
    assert_eq!(cycles_for_ms(1000, stm32f4::CORE_HZ), 16_000_000);
}

#[test]
fn test_cycles_round_up() {
    // 1 ns at 16 MHz is a fraction of a cycle.
    assert_eq!(cycles_for_ns(1, 16_000_000), 1);
    assert_eq!(cycles_for_ns(0, 16_000_000), 0);
}

#[test]
fn test_half_period_requests_one_second_of_cycles_nrf52840() {
    let mut delay = ClockDelay::new(RecordingCycles::default(), nrf52840::CORE_HZ);
    delay.delay_ms(HALF_PERIOD_MS);

    let counter = delay.release();
    assert_eq!(counter.total(), 64_000_000);
    // One request, not one per millisecond.
    assert_eq!(counter.waits, vec![64_000_000]);
}

#[test]
fn test_half_period_requests_one_second_of_cycles_stm32f4() {
    let mut delay = ClockDelay::new(RecordingCycles::default(), stm32f4::CORE_HZ);
    delay.delay_ms(HALF_PERIOD_MS);

    assert_eq!(delay.release().total(), 16_000_000);
}

#[test]
fn test_long_delay_split_into_u32_chunks() {
    let mut delay = ClockDelay::new(RecordingCycles::default(), nrf52840::CORE_HZ);
    // 100 s at 64 MHz does not fit in one u32 request.
    delay.delay_ms(100_000);

    let counter = delay.release();
    assert_eq!(counter.total(), 6_400_000_000);
    assert!(counter.waits.len() > 1);
}

#[test]
fn test_us_and_ns_cycle_counts() {
    let mut delay = ClockDelay::new(RecordingCycles::default(), stm32f4::CORE_HZ);
    delay.delay_us(10);
    delay.delay_ns(500);

    assert_eq!(delay.release().waits, vec![160, 8]);
}

#[test]
fn test_ms_to_ticks_at_100hz() {
    assert_eq!(ms_to_ticks(1000, 100), 100);
    assert_eq!(ms_to_ticks(10, 100), 1);
}

#[test]
fn test_ms_to_ticks_never_shorter() {
    assert_eq!(ms_to_ticks(1, 100), 1);
    assert_eq!(ms_to_ticks(15, 100), 2);
    assert_eq!(ms_to_ticks(0, 100), 0);
}

#[test]
fn test_ms_to_ticks_at_1khz() {
    assert_eq!(ms_to_ticks(1000, 1000), 1000);
}

#[test]
fn test_spin_returns() {
    spin(0);
    spin(1_000);
}

#[test]
fn test_host_spin_delay_returns() {
    let mut delay = ClockDelay::new(Spin, stm32f4::CORE_HZ);
    assert_eq!(delay.core_hz(), 16_000_000);
    delay.delay_us(1);
}
