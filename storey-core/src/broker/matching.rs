//! Pickup and drop-off matching

use crate::floor::Floor;
use crate::state::{ElevatorState, TravellerRequest};

/// A traveller boarding or leaving the cabin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transfer {
    /// Traveller boarded at `floor`, cabin now heading to `destination`
    PickedUp { floor: Floor, destination: Floor },
    /// Traveller left at `floor`
    DroppedOff { floor: Floor },
}

impl Transfer {
    /// Floor the transfer happened at
    pub fn floor(&self) -> Floor {
        match self {
            Transfer::PickedUp { floor, .. } | Transfer::DroppedOff { floor } => *floor,
        }
    }
}

/// Evaluate pickup, then drop-off, against the cabin position
///
/// Pickup retargets the cabin at the requested destination. Either
/// transition marks the state dirty.
pub fn match_transfer(state: &mut ElevatorState) -> Option<Transfer> {
    let position = state.cabin.position();

    let transfer = match state.request {
        TravellerRequest::Waiting {
            pickup,
            destination,
        } if position == pickup.position() => {
            state.request = TravellerRequest::Onboard { destination };
            state.cabin.set_destination(destination);
            Transfer::PickedUp {
                floor: pickup,
                destination,
            }
        }
        TravellerRequest::Onboard { destination } if position == destination.position() => {
            state.request = TravellerRequest::Empty;
            Transfer::DroppedOff { floor: destination }
        }
        _ => return None,
    };

    state.mark_dirty();
    Some(transfer)
}
