//! Elevator state
//!
//! The cabin, the single traveller request and the floor counters are
//! plain data owned by the controller. The motion engine and the request
//! broker mutate them through `&mut ElevatorState`; nothing else does.

pub mod cabin;
pub mod counters;
pub mod elevator;
pub mod request;

pub use cabin::{CabinState, Direction};
pub use counters::FloorCounters;
pub use elevator::ElevatorState;
pub use request::TravellerRequest;
