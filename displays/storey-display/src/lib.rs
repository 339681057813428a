//! Text-mode status panel for Storey
//!
//! This crate provides:
//! - `DisplayBackend` trait for character displays (serial terminal, LCD)
//! - `Screen`, a line buffer that tracks which rows changed
//! - `StatusPanel`, the four-line elevator status layout, usable as a
//!   `StatusSink` by the controller
//!
//! # Architecture
//!
//! The panel formats a `StatusRecord` into the screen buffer and redraws
//! only the lines whose text changed. The backend decides how a line is
//! put on the glass; the VT100 backend in `storey-drivers` moves the
//! cursor and erases to the end of the line.

#![no_std]

pub mod backend;
pub mod panel;
pub mod screen;

// Re-export key types
pub use backend::DisplayBackend;
pub use panel::{PanelLayout, StatusPanel};
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
pub use storey_core::traits::DisplayError;
