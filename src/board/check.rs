//! Pin map validation for the ESP32-S3.
//!
//! Everything here is `const fn` so the board map is checked at compile time
//! (see the assertion in `board/mod.rs`); the same functions are usable at
//! runtime for maps built elsewhere.

use super::map::PinAssignment;

/// Highest GPIO on the ESP32-S3.
pub const MAX_GPIO: u8 = 48;

/// Sampled at reset to select the boot mode / flash voltage.
pub const STRAPPING_PINS: [u8; 4] = [0, 3, 45, 46];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    /// Not a GPIO on this chip (GPIO22..=25 and anything above 48).
    InvalidGpio { gpio: u8, net: &'static str },
    /// Wired to in-package SPI flash or octal PSRAM.
    ReservedGpio { gpio: u8, net: &'static str },
    /// Two nets claim the same GPIO.
    Conflict {
        gpio: u8,
        first: &'static str,
        second: &'static str,
    },
    /// Does not fit in 7 bits.
    InvalidAddress(u8),
    /// Inside the I2C reserved ranges 0x00..=0x07 / 0x78..=0x7F.
    ReservedAddress(u8),
}

impl core::fmt::Display for PinError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            PinError::InvalidGpio { gpio, net } => {
                write!(f, "{net}: GPIO{gpio} does not exist on the ESP32-S3")
            }
            PinError::ReservedGpio { gpio, net } => {
                write!(f, "{net}: GPIO{gpio} is reserved for flash/PSRAM")
            }
            PinError::Conflict { gpio, first, second } => {
                write!(f, "GPIO{gpio} claimed by both {first} and {second}")
            }
            PinError::InvalidAddress(addr) => {
                write!(f, "I2C address {addr:#04x} is not 7-bit")
            }
            PinError::ReservedAddress(addr) => {
                write!(f, "I2C address {addr:#04x} is reserved")
            }
        }
    }
}

pub const fn is_valid_gpio(gpio: u8) -> bool {
    matches!(gpio, 0..=21 | 26..=MAX_GPIO)
}

/// GPIO26..=32 go to SPI flash, 33..=37 to octal PSRAM on R8 modules.
pub const fn is_reserved_gpio(gpio: u8) -> bool {
    matches!(gpio, 26..=37)
}

pub const fn is_strapping_pin(gpio: u8) -> bool {
    let mut i = 0;
    while i < STRAPPING_PINS.len() {
        if STRAPPING_PINS[i] == gpio {
            return true;
        }
        i += 1;
    }
    false
}

pub const fn is_valid_i2c_addr(addr: u8) -> bool {
    addr <= 0x7F
}

pub const fn is_reserved_i2c_addr(addr: u8) -> bool {
    matches!(addr, 0x00..=0x07 | 0x78..=0x7F)
}

/// Check a pin map and the touch controller address.
///
/// Pins are checked in map order; for each one: existence, reservation, then
/// conflicts with any earlier pin. The address is checked last.
pub const fn validate(map: &[PinAssignment], touch_addr: u8) -> Result<(), PinError> {
    let mut i = 0;
    while i < map.len() {
        let pin = map[i];
        if !is_valid_gpio(pin.gpio) {
            return Err(PinError::InvalidGpio {
                gpio: pin.gpio,
                net: pin.net,
            });
        }
        if is_reserved_gpio(pin.gpio) {
            return Err(PinError::ReservedGpio {
                gpio: pin.gpio,
                net: pin.net,
            });
        }
        let mut j = 0;
        while j < i {
            if map[j].gpio == pin.gpio {
                return Err(PinError::Conflict {
                    gpio: pin.gpio,
                    first: map[j].net,
                    second: pin.net,
                });
            }
            j += 1;
        }
        i += 1;
    }

    if !is_valid_i2c_addr(touch_addr) {
        return Err(PinError::InvalidAddress(touch_addr));
    }
    if is_reserved_i2c_addr(touch_addr) {
        return Err(PinError::ReservedAddress(touch_addr));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::map::{Bus, PIN_MAP};
    use crate::board::pins;
    use test_case::test_case;

    #[test]
    fn board_map_validates() {
        assert_eq!(validate(&PIN_MAP, pins::TOUCH_ADDR), Ok(()));
    }

    #[test]
    fn board_pins_are_usable_gpios() {
        for p in PIN_MAP.iter() {
            assert!(is_valid_gpio(p.gpio), "{}", p.net);
            assert!(!is_reserved_gpio(p.gpio), "{}", p.net);
        }
    }

    #[test]
    fn strapping_pins_on_board() {
        let strapped: Vec<&str> = PIN_MAP
            .iter()
            .filter(|p| is_strapping_pin(p.gpio))
            .map(|p| p.net)
            .collect();
        assert_eq!(strapped, ["TFT_CS", "TOUCH_INT"]);
    }

    #[test_case(0, true)]
    #[test_case(21, true)]
    #[test_case(22, false)]
    #[test_case(25, false)]
    #[test_case(26, true)]
    #[test_case(48, true)]
    #[test_case(49, false)]
    fn gpio_range(gpio: u8, valid: bool) {
        assert_eq!(is_valid_gpio(gpio), valid);
    }

    #[test_case(0x00, false, true)]
    #[test_case(0x07, false, true)]
    #[test_case(0x08, false, false)]
    #[test_case(0x3B, false, false)]
    #[test_case(0x77, false, false)]
    #[test_case(0x78, false, true)]
    #[test_case(0x80, true, false)]
    fn i2c_address(addr: u8, too_wide: bool, reserved: bool) {
        assert_eq!(is_valid_i2c_addr(addr), !too_wide);
        assert_eq!(is_reserved_i2c_addr(addr), reserved);
    }

    fn map_with(gpio: u8) -> [PinAssignment; 2] {
        [
            PinAssignment::new(4, Bus::Touch, "TOUCH_SDA"),
            PinAssignment::new(gpio, Bus::Mic, "MIC_I2S_WS"),
        ]
    }

    #[test_case(23 => Err(PinError::InvalidGpio { gpio: 23, net: "MIC_I2S_WS" }); "nonexistent")]
    #[test_case(50 => Err(PinError::InvalidGpio { gpio: 50, net: "MIC_I2S_WS" }); "out of range")]
    #[test_case(30 => Err(PinError::ReservedGpio { gpio: 30, net: "MIC_I2S_WS" }); "flash")]
    #[test_case(35 => Err(PinError::ReservedGpio { gpio: 35, net: "MIC_I2S_WS" }); "psram")]
    #[test_case(4 => Err(PinError::Conflict { gpio: 4, first: "TOUCH_SDA", second: "MIC_I2S_WS" }); "shared")]
    #[test_case(5 => Ok(()); "free")]
    fn validate_pin(gpio: u8) -> Result<(), PinError> {
        validate(&map_with(gpio), 0x3B)
    }

    #[test]
    fn validate_address() {
        assert_eq!(validate(&[], 0x80), Err(PinError::InvalidAddress(0x80)));
        assert_eq!(validate(&[], 0x03), Err(PinError::ReservedAddress(0x03)));
    }

    #[test]
    fn pins_checked_before_address() {
        assert_eq!(
            validate(&map_with(4), 0xFF),
            Err(PinError::Conflict {
                gpio: 4,
                first: "TOUCH_SDA",
                second: "MIC_I2S_WS"
            })
        );
    }

    #[test]
    fn error_messages() {
        let e = PinError::Conflict {
            gpio: 4,
            first: "TOUCH_SDA",
            second: "MIC_I2S_WS",
        };
        assert_eq!(e.to_string(), "GPIO4 claimed by both TOUCH_SDA and MIC_I2S_WS");
        assert_eq!(
            PinError::ReservedAddress(0x78).to_string(),
            "I2C address 0x78 is reserved"
        );
        assert_eq!(
            PinError::InvalidGpio { gpio: 22, net: "TFT_BL" }.to_string(),
            "TFT_BL: GPIO22 does not exist on the ESP32-S3"
        );
    }
}
