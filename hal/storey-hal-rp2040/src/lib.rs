//! RP2040-specific HAL for the elevator emulator firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `storey-hal` traits, plus RP2040-specific functionality:
//!
//! - Pin bank for config-driven GPIO assignment
//! - GPIO wrappers honouring active-low and pull-up settings
//! - Blocking SPI link to the LED matrix
//! - PWM tone generation for the buzzer
//! - Serial terminal adapters over the buffered UART

#![no_std]

pub mod gpio;
pub mod pins;
pub mod pwm;
pub mod spi;
pub mod uart;

pub use gpio::{BoardInput, BoardOutput};
pub use pins::{FixedFunctionPeripherals, PinBank, PinError};
pub use pwm::PwmTone;
pub use spi::{spi_config, SpiLink};
pub use uart::{uart_config, SerialRx, SerialTx};
