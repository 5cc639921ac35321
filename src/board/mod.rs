//! ESP32-S3 HUD Board Support Package (BSP)
//!
//! Maps the board's physical wiring to named subsystems so that driver code
//! never needs a raw GPIO number:
//!
//! - **Display**: QSPI TFT (backlight, CS, clock, four data lines)
//! - **Touch**: capacitive controller on I2C, address `0x3B`
//! - **Mic**: INMP441 on I2S (input)
//! - **Speaker**: MAX98357A on I2S (output)
//!
//! The numbers live in [`pins`]; [`BOARD`] groups them per peripheral and
//! [`map::PIN_MAP`] flattens them for lookup. The map is validated at compile
//! time. With the `hal` feature, [`hw::Board`] hands out the matching esp-hal
//! pin singletons.

pub mod check;
#[cfg(feature = "hal")]
pub mod hw;
pub mod map;
pub mod pins;

pub use check::{PinError, validate};
pub use map::{Bus, PIN_COUNT, PIN_MAP, PinAssignment, log_pin_map, lookup, pins_on};

/// TFT display, quad SPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPins {
    pub backlight: u8,
    pub cs: u8,
    pub sck: u8,
    pub data: [u8; 4],
}

/// Touch controller on I2C.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPins {
    pub sda: u8,
    pub scl: u8,
    pub int: u8,
    /// 7-bit I2C address.
    pub addr: u8,
}

/// I2S microphone (the board receives data).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MicPins {
    pub ws: u8,
    pub sd: u8,
    pub sck: u8,
}

/// I2S amplifier (the board transmits data).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeakerPins {
    pub dout: u8,
    pub bclk: u8,
    pub lrc: u8,
}

/// Complete board wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPins {
    pub display: DisplayPins,
    pub touch: TouchPins,
    pub mic: MicPins,
    pub speaker: SpeakerPins,
}

pub const BOARD: BoardPins = BoardPins {
    display: DisplayPins {
        backlight: pins::TFT_BL,
        cs: pins::TFT_CS,
        sck: pins::TFT_SCK,
        data: [pins::TFT_SDA0, pins::TFT_SDA1, pins::TFT_SDA2, pins::TFT_SDA3],
    },
    touch: TouchPins {
        sda: pins::TOUCH_SDA,
        scl: pins::TOUCH_SCL,
        int: pins::TOUCH_INT,
        addr: pins::TOUCH_ADDR,
    },
    mic: MicPins {
        ws: pins::MIC_I2S_WS,
        sd: pins::MIC_I2S_SD,
        sck: pins::MIC_I2S_SCK,
    },
    speaker: SpeakerPins {
        dout: pins::SPK_I2S_DOUT,
        bclk: pins::SPK_I2S_BCLK,
        lrc: pins::SPK_I2S_LRC,
    },
};

impl BoardPins {
    /// Every GPIO with its bus and net name: display, touch, mic, speaker.
    pub const fn assignments(&self) -> [PinAssignment; PIN_COUNT] {
        let d = self.display;
        let t = self.touch;
        let m = self.mic;
        let s = self.speaker;
        [
            PinAssignment::new(d.backlight, Bus::Display, "TFT_BL"),
            PinAssignment::new(d.cs, Bus::Display, "TFT_CS"),
            PinAssignment::new(d.sck, Bus::Display, "TFT_SCK"),
            PinAssignment::new(d.data[0], Bus::Display, "TFT_SDA0"),
            PinAssignment::new(d.data[1], Bus::Display, "TFT_SDA1"),
            PinAssignment::new(d.data[2], Bus::Display, "TFT_SDA2"),
            PinAssignment::new(d.data[3], Bus::Display, "TFT_SDA3"),
            PinAssignment::new(t.sda, Bus::Touch, "TOUCH_SDA"),
            PinAssignment::new(t.scl, Bus::Touch, "TOUCH_SCL"),
            PinAssignment::new(t.int, Bus::Touch, "TOUCH_INT"),
            PinAssignment::new(m.ws, Bus::Mic, "MIC_I2S_WS"),
            PinAssignment::new(m.sd, Bus::Mic, "MIC_I2S_SD"),
            PinAssignment::new(m.sck, Bus::Mic, "MIC_I2S_SCK"),
            PinAssignment::new(s.dout, Bus::Speaker, "SPK_I2S_DOUT"),
            PinAssignment::new(s.bclk, Bus::Speaker, "SPK_I2S_BCLK"),
            PinAssignment::new(s.lrc, Bus::Speaker, "SPK_I2S_LRC"),
        ]
    }

    pub const fn validate(&self) -> Result<(), PinError> {
        check::validate(&self.assignments(), self.touch.addr)
    }
}

// Refuse to build a firmware with a broken pin map.
const _: () = match BOARD.validate() {
    Ok(()) => (),
    Err(_) => panic!("board pin map failed validation"),
};
