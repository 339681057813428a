//! Embassy async tasks
//!
//! Each task runs independently and communicates via the statics in
//! `channels`.

pub mod buttons;
pub mod controller;
pub mod segment;

pub use buttons::button_task;
pub use controller::{controller_task, ControllerPeripherals};
pub use segment::segment_task;
