//! Aggregate elevator state owned by the control loop

use super::{CabinState, FloorCounters, TravellerRequest};
use crate::floor::Floor;

/// Everything the motion engine and request broker operate on
///
/// The `dirty` flag is raised by any change that should reach the
/// displays and cleared by the status projector.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ElevatorState {
    pub cabin: CabinState,
    pub request: TravellerRequest,
    pub counters: FloorCounters,
    dirty: bool,
}

impl ElevatorState {
    /// Power-on state: parked at the ground floor, no traveller
    ///
    /// Starts dirty so the first projection always happens.
    pub fn new(speed_ms: u32) -> Self {
        Self::from_parts(
            CabinState::parked(Floor::Ground, speed_ms),
            TravellerRequest::Empty,
            FloorCounters::new(),
        )
    }

    /// Build a state from explicit parts (dirty)
    pub fn from_parts(
        cabin: CabinState,
        request: TravellerRequest,
        counters: FloorCounters,
    ) -> Self {
        Self {
            cabin,
            request,
            counters,
            dirty: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning whether it was set
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }
}
