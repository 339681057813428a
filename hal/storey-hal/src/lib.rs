//! Storey Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that are implemented
//! by chip-specific HALs. The drivers in `storey-drivers` are written
//! against these traits only, so they can be unit tested on the host
//! with mock pins and buses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  storey-drivers / storey-firmware       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  storey-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  storey-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O (LEDs, segments, switches)
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial terminal
//! - [`spi::SpiBus`] - LED matrix link
//! - [`pwm::ToneChannel`] - Buzzer

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pwm;
pub mod spi;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use pwm::ToneChannel;
pub use spi::SpiBus;
pub use uart::{UartRx, UartTx};
