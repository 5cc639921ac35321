// hud-board bring-up: log the pin map, claim every board pin, idle.
//
// Driver bring-up builds on this: each subsystem takes its bundle out of
// `Board` and configures its own bus.

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use log::info;

use hud_board::board::hw::{Board, TouchHw};
use hud_board::board::{PIN_MAP, log_pin_map};

esp_bootloader_esp_idf::esp_app_desc!();

const IDLE_MS: u32 = 1000;

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("booting...");
    log_pin_map(&PIN_MAP);
    info!("touch controller at {:#04x}", TouchHw::ADDR);

    let _board = Board::init(peripherals);
    info!("board pins claimed.");

    let delay = Delay::new();
    loop {
        delay.delay_millis(IDLE_MS);
    }
}
