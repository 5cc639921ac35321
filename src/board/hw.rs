//! Pin ownership on real hardware.
//!
//! `Board::init` moves the esp-hal GPIO singletons listed in [`pins`] into
//! per-peripheral bundles, together with the controller each bus is meant to
//! run on. Nothing is configured here: a driver takes its bundle and sets the
//! bus up itself. Once a pin sits in a bundle no other code can claim it.
//!
//! The `GPIOn` types below must stay in step with [`pins`]; the tests for
//! `pins` pin the numbers down.

use esp_hal::peripherals::{
    GPIO1, GPIO2, GPIO3, GPIO4, GPIO5, GPIO6, GPIO7, GPIO8, GPIO21, GPIO39, GPIO40, GPIO41, GPIO42,
    GPIO45, GPIO47, GPIO48, I2C0, I2S0, I2S1, Peripherals, SPI2,
};
use log::debug;

use super::pins;

// Type Aliases
pub type TftBl = GPIO1<'static>;
pub type TftCs = GPIO45<'static>;
pub type TftSck = GPIO47<'static>;
pub type TftSda0 = GPIO21<'static>;
pub type TftSda1 = GPIO48<'static>;
pub type TftSda2 = GPIO40<'static>;
pub type TftSda3 = GPIO39<'static>;

pub type TouchSda = GPIO4<'static>;
pub type TouchScl = GPIO8<'static>;
pub type TouchInt = GPIO3<'static>;

pub type MicWs = GPIO5<'static>;
pub type MicSd = GPIO6<'static>;
pub type MicSck = GPIO7<'static>;

pub type SpkDout = GPIO41<'static>;
pub type SpkBclk = GPIO42<'static>;
pub type SpkLrc = GPIO2<'static>;

// Hardware Bundles
/// Display: QSPI controller plus backlight, CS, clock and data lines.
pub struct DisplayHw {
    pub spi: SPI2<'static>,
    pub backlight: TftBl,
    pub cs: TftCs,
    pub sck: TftSck,
    pub sda0: TftSda0,
    pub sda1: TftSda1,
    pub sda2: TftSda2,
    pub sda3: TftSda3,
}

/// Touch: I2C controller, bus pins and interrupt line.
pub struct TouchHw {
    pub i2c: I2C0<'static>,
    pub sda: TouchSda,
    pub scl: TouchScl,
    pub int: TouchInt,
}

impl TouchHw {
    pub const ADDR: u8 = pins::TOUCH_ADDR;
}

/// Microphone: receive-side I2S controller and its pins.
pub struct MicHw {
    pub i2s: I2S0<'static>,
    pub ws: MicWs,
    pub sd: MicSd,
    pub sck: MicSck,
}

/// Speaker: transmit-side I2S controller and its pins. The mic keeps I2S0,
/// so both can stream at once.
pub struct SpeakerHw {
    pub i2s: I2S1<'static>,
    pub dout: SpkDout,
    pub bclk: SpkBclk,
    pub lrc: SpkLrc,
}

/// Complete board hardware, ready for driver initialization.
pub struct Board {
    pub display: DisplayHw,
    pub touch: TouchHw,
    pub mic: MicHw,
    pub speaker: SpeakerHw,
}

impl Board {
    pub fn init(p: Peripherals) -> Self {
        let display = DisplayHw {
            spi: p.SPI2,
            backlight: p.GPIO1,
            cs: p.GPIO45,
            sck: p.GPIO47,
            sda0: p.GPIO21,
            sda1: p.GPIO48,
            sda2: p.GPIO40,
            sda3: p.GPIO39,
        };
        debug!(
            "display: bl={} cs={} sck={} data={},{},{},{}",
            pins::TFT_BL,
            pins::TFT_CS,
            pins::TFT_SCK,
            pins::TFT_SDA0,
            pins::TFT_SDA1,
            pins::TFT_SDA2,
            pins::TFT_SDA3
        );

        let touch = TouchHw {
            i2c: p.I2C0,
            sda: p.GPIO4,
            scl: p.GPIO8,
            int: p.GPIO3,
        };
        debug!(
            "touch: sda={} scl={} int={} addr={:#04x}",
            pins::TOUCH_SDA,
            pins::TOUCH_SCL,
            pins::TOUCH_INT,
            TouchHw::ADDR
        );

        let mic = MicHw {
            i2s: p.I2S0,
            ws: p.GPIO5,
            sd: p.GPIO6,
            sck: p.GPIO7,
        };
        debug!(
            "mic: ws={} sd={} sck={}",
            pins::MIC_I2S_WS,
            pins::MIC_I2S_SD,
            pins::MIC_I2S_SCK
        );

        let speaker = SpeakerHw {
            i2s: p.I2S1,
            dout: p.GPIO41,
            bclk: p.GPIO42,
            lrc: p.GPIO2,
        };
        debug!(
            "speaker: dout={} bclk={} lrc={}",
            pins::SPK_I2S_DOUT,
            pins::SPK_I2S_BCLK,
            pins::SPK_I2S_LRC
        );

        Board {
            display,
            touch,
            mic,
            speaker,
        }
    }
}
