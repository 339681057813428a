//! Inter-task communication
//!
//! The button tasks and the segment task talk to the controller loop
//! through these statics only.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use storey_core::status::StatusRecord;
use storey_drivers::ButtonMailbox;

/// Latest button press (written by button tasks, drained by the controller)
pub static BUTTONS: ButtonMailbox = ButtonMailbox::new();

/// Latest status for the seven-segment display
pub static SEGMENT_STATUS: Signal<CriticalSectionRawMutex, StatusRecord> = Signal::new();
