//! Flat pin map: every GPIO the board uses, tagged with its bus.
//!
//! `PIN_MAP` is derived from [`BOARD`](super::BOARD), so the table and the
//! grouped structs can never disagree.

use log::{info, warn};

use super::BOARD;
use super::check::is_strapping_pin;

/// Number of GPIOs claimed by the board.
pub const PIN_COUNT: usize = 16;

/// Peripheral bus a pin belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bus {
    Display,
    Touch,
    Mic,
    Speaker,
}

impl Bus {
    pub const fn name(self) -> &'static str {
        match self {
            Bus::Display => "Display",
            Bus::Touch => "Touch",
            Bus::Mic => "Mic",
            Bus::Speaker => "Speaker",
        }
    }
}

impl core::fmt::Display for Bus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// One GPIO and the net wired to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinAssignment {
    pub gpio: u8,
    pub bus: Bus,
    pub net: &'static str,
}

impl PinAssignment {
    pub const fn new(gpio: u8, bus: Bus, net: &'static str) -> Self {
        Self { gpio, bus, net }
    }
}

pub static PIN_MAP: [PinAssignment; PIN_COUNT] = BOARD.assignments();

/// Net that owns `gpio`, if the board uses it.
pub fn lookup(gpio: u8) -> Option<PinAssignment> {
    PIN_MAP.iter().copied().find(|p| p.gpio == gpio)
}

pub fn pins_on(bus: Bus) -> impl Iterator<Item = PinAssignment> {
    PIN_MAP.iter().copied().filter(move |p| p.bus == bus)
}

/// Log the map, one line per pin. Strapping pins get a warning since the
/// attached peripheral must not drive them during reset.
pub fn log_pin_map(map: &[PinAssignment]) {
    info!("pin map ({} pins):", map.len());
    for p in map {
        info!("  GPIO{:<2} | {:<7} | {}", p.gpio, p.bus, p.net);
        if is_strapping_pin(p.gpio) {
            warn!("  GPIO{} ({}) is a strapping pin", p.gpio, p.net);
        }
    }
}
