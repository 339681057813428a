//! Board-agnostic core logic for the elevator emulator firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Floor and LED-row position types
//! - Elevator state (cabin, traveller request, floor counters)
//! - Motion engine (one row per tick)
//! - Request broker (pickup intake, pickup/drop-off matching)
//! - Status projection for the displays
//! - Feedback timers (door animation, tones, splash animation)
//! - Controller tying the above into one polling cycle
//! - Collaborator traits implemented by the drivers
//! - Configuration types and input diagnostics

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod broker;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod feedback;
pub mod floor;
pub mod motion;
pub mod state;
pub mod status;
pub mod traits;

pub use floor::{Floor, Position};
