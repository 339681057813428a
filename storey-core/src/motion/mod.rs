//! Cabin motion
//!
//! One row of travel per elapsed tick interval, never more.

pub mod engine;

pub use engine::{MotionEngine, Step};
