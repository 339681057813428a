//! Controller
//!
//! Ties the motion engine, request broker, status projector and feedback
//! timers into one non-blocking polling cycle. The firmware samples its
//! inputs, calls [`Controller::poll`] and hands the returned [`Outputs`]
//! to the drivers.

pub mod cycle;
pub mod mode;
pub mod outputs;

pub use cycle::{Controller, PollInputs};
pub use mode::Mode;
pub use outputs::Outputs;
