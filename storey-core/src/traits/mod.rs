//! Hardware abstraction traits
//!
//! These traits define the interface between the controller and the
//! drivers for the displays, indicators, inputs and clock.

pub mod annunciator;
pub mod clock;
pub mod display;
pub mod input;

pub use annunciator::{DoorIndicator, ToneOutput};
pub use clock::Clock;
pub use display::{DisplayError, StatusSink};
pub use input::{InputSource, SwitchBank};
