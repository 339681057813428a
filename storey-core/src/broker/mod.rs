//! Request broker
//!
//! Accepts new pickup requests while the cabin is idle and matches the
//! active request against the cabin position after every tick.

pub mod intake;
pub mod matching;

pub use intake::{accepts_requests, intake, select_call, CallRequest, CallSource, IntakeOutcome};
pub use matching::{match_transfer, Transfer};
