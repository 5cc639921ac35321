// board support for the ESP32-S3 HUD (QSPI TFT, I2C touch, I2S mic + speaker)

#![cfg_attr(not(test), no_std)]

pub mod board;
