//! GPIO |     Function     |      Notes
//! -----+------------------+----------------------------------
//!  1   | TFT backlight    | Display
//!  2   | SPK I2S LRC      | MAX98357A left/right clock
//!  3   | Touch INT        | Strapping pin, touch interrupt
//!  4   | Touch SDA        | I2C data
//!  5   | MIC I2S WS       | INMP441 word select (LRC)
//!  6   | MIC I2S SD       | INMP441 serial data (DOUT)
//!  7   | MIC I2S SCK      | INMP441 serial clock (BCLK)
//!  8   | Touch SCL        | I2C clock
//! 21   | TFT SDA0         | QSPI data 0
//! 39   | TFT SDA3         | QSPI data 3
//! 40   | TFT SDA2         | QSPI data 2
//! 41   | SPK I2S DOUT     | MAX98357A data in
//! 42   | SPK I2S BCLK     | MAX98357A bit clock
//! 45   | TFT CS           | Strapping pin, display chip select
//! 47   | TFT SCK          | QSPI clock
//! 48   | TFT SDA1         | QSPI data 1

// ----- TFT Display (QSPI) -----
pub const TFT_BL: u8 = 1;
pub const TFT_CS: u8 = 45;
pub const TFT_SCK: u8 = 47;
pub const TFT_SDA0: u8 = 21;
pub const TFT_SDA1: u8 = 48;
pub const TFT_SDA2: u8 = 40;
pub const TFT_SDA3: u8 = 39;

// ----- Touch (I2C) -----
pub const TOUCH_SDA: u8 = 4;
pub const TOUCH_SCL: u8 = 8;
pub const TOUCH_INT: u8 = 3;
pub const TOUCH_ADDR: u8 = 0x3B; // 7-bit

// ----- INMP441 Microphone (I2S) -----
pub const MIC_I2S_WS: u8 = 5; // Word Select (LRC)
pub const MIC_I2S_SD: u8 = 6; // Serial Data (DOUT)
pub const MIC_I2S_SCK: u8 = 7; // Serial Clock (BCLK)

// ----- MAX98357A Speaker (I2S) -----
pub const SPK_I2S_DOUT: u8 = 41; // Data Out
pub const SPK_I2S_BCLK: u8 = 42; // Bit Clock
pub const SPK_I2S_LRC: u8 = 2; // Left/Right Clock

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(TFT_BL, 1; "tft backlight")]
    #[test_case(TFT_CS, 45; "tft chip select")]
    #[test_case(TFT_SCK, 47; "tft clock")]
    #[test_case(TFT_SDA0, 21; "tft data 0")]
    #[test_case(TFT_SDA1, 48; "tft data 1")]
    #[test_case(TFT_SDA2, 40; "tft data 2")]
    #[test_case(TFT_SDA3, 39; "tft data 3")]
    #[test_case(TOUCH_SDA, 4; "touch data")]
    #[test_case(TOUCH_SCL, 8; "touch clock")]
    #[test_case(TOUCH_INT, 3; "touch interrupt")]
    #[test_case(MIC_I2S_WS, 5; "mic word select")]
    #[test_case(MIC_I2S_SD, 6; "mic serial data")]
    #[test_case(MIC_I2S_SCK, 7; "mic serial clock")]
    #[test_case(SPK_I2S_DOUT, 41; "speaker data out")]
    #[test_case(SPK_I2S_BCLK, 42; "speaker bit clock")]
    #[test_case(SPK_I2S_LRC, 2; "speaker lr clock")]
    fn pin_numbers(actual: u8, expected: u8) {
        assert_eq!(actual, expected);
    }

    #[test]
    fn touch_address_is_7bit() {
        assert_eq!(TOUCH_ADDR, 0x3B);
        assert!(TOUCH_ADDR <= 0x7F);
    }

    fn assert_distinct(group: &[u8]) {
        for (i, a) in group.iter().enumerate() {
            for b in &group[i + 1..] {
                assert_ne!(a, b, "GPIO{a} used twice in {group:?}");
            }
        }
    }

    #[test]
    fn groups_have_distinct_pins() {
        assert_distinct(&[TFT_BL, TFT_CS, TFT_SCK, TFT_SDA0, TFT_SDA1, TFT_SDA2, TFT_SDA3]);
        assert_distinct(&[TOUCH_SDA, TOUCH_SCL, TOUCH_INT]);
        assert_distinct(&[MIC_I2S_WS, MIC_I2S_SD, MIC_I2S_SCK]);
        assert_distinct(&[SPK_I2S_DOUT, SPK_I2S_BCLK, SPK_I2S_LRC]);
    }
}
