//! Timed feedback: door LEDs, buzzer and the splash animation
//!
//! All three are driven by [`PhaseTimer`], polled from the control loop
//! with the current time. None of them block.

pub mod door;
pub mod splash;
pub mod timer;
pub mod tone;

pub use door::{DoorAnimation, DoorPattern, DoorPhase};
pub use splash::{SplashAnimation, SplashFrame};
pub use timer::PhaseTimer;
pub use tone::{ToneCommand, ToneTimer};
