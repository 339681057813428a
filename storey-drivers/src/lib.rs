//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in storey-core for the emulator board's peripherals:
//!
//! - LED matrix renderer (floors, cabin, traveller, splash doors) over an
//!   SPI matrix board or an in-memory frame buffer
//! - Seven-segment direction/floor display
//! - Door LEDs and piezo buzzer
//! - Button mailbox, slide switches and serial input
//! - VT100 terminal backend for the status panel

#![no_std]
#![deny(unsafe_code)]

pub mod annunciator;
pub mod input;
pub mod matrix;
pub mod segment;
pub mod terminal;

pub use annunciator::{Buzzer, DoorLeds};
pub use input::{ButtonMailbox, OperatorInputs, SlideSwitches};
pub use matrix::{Colour, FrameBuffer, MatrixError, MatrixRenderer, PixelSink, SpiMatrix};
pub use segment::SegmentDisplay;
pub use terminal::TerminalBackend;
