//! Input diagnostics
//!
//! Counts inputs the controller ignored, for the firmware to log.

pub mod input;

pub use input::InputDiagnostics;
