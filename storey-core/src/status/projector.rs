//! Status projector
//!
//! A pure function from elevator state to what the matrix, the seven
//! segment display and the terminal panel show.

use core::ops::RangeInclusive;

use crate::floor::{Floor, Position};
use crate::state::{Direction, ElevatorState};

/// Waiting traveller shown on the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TravellerMarker {
    /// Floor the traveller is waiting on
    pub floor: Floor,
    /// Floor they want to reach (sets the marker colour)
    pub destination: Floor,
}

/// Snapshot of everything the displays need
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusRecord {
    /// Last floor the cabin was aligned with
    pub displayed_floor: Floor,
    pub direction: Direction,
    /// Floors crossed with a traveller aboard
    pub onboard_count: u32,
    /// Floors crossed empty
    pub empty_count: u32,
    /// Waiting traveller, if any
    pub traveller: Option<TravellerMarker>,
    pub cabin_position: Position,
    pub between_floors: bool,
}

impl StatusRecord {
    /// Matrix rows covered by the cabin sprite
    ///
    /// The sprite sits in the three rows above its position so it never
    /// overlaps a floor row.
    pub fn cabin_rows(&self) -> RangeInclusive<u8> {
        let base = self.cabin_position.row();
        base + 1..=base + 3
    }
}

impl Default for StatusRecord {
    fn default() -> Self {
        project(&ElevatorState::new(0))
    }
}

/// Project the current state
pub fn project(state: &ElevatorState) -> StatusRecord {
    let traveller = match (state.request.pickup_floor(), state.request.requested_destination()) {
        (Some(floor), Some(destination)) => Some(TravellerMarker { floor, destination }),
        _ => None,
    };

    StatusRecord {
        displayed_floor: state.cabin.floor(),
        direction: state.cabin.direction(),
        onboard_count: state.counters.with_traveller(),
        empty_count: state.counters.without_traveller(),
        traveller,
        cabin_position: state.cabin.position(),
        between_floors: state.cabin.is_between_floors(),
    }
}

/// Project only when something changed, clearing the dirty flag
pub fn project_if_dirty(state: &mut ElevatorState) -> Option<StatusRecord> {
    if state.take_dirty() {
        Some(project(state))
    } else {
        None
    }
}
