//! New-request intake

use storey_protocol::{ButtonId, SerialCommand};

use crate::floor::Floor;
use crate::state::{ElevatorState, TravellerRequest};

/// Where a call came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CallSource {
    Button,
    Serial,
}

/// A pickup-floor selection read this cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CallRequest {
    pub floor: Floor,
    pub source: CallSource,
}

/// Outcome of one intake cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IntakeOutcome {
    /// No pickup selection this cycle
    NoCall,
    /// Cabin moving or a request is active; the call was discarded
    Busy(CallRequest),
    /// Pickup floor equals the destination switch; ignored
    SameFloor(CallRequest),
    /// Request accepted, cabin heading to `pickup`
    Accepted { pickup: Floor, destination: Floor },
}

/// Pick this cycle's call, button first
///
/// The serial command is only consulted when no button was pressed.
/// Non-call serial commands yield nothing.
pub fn select_call(button: Option<ButtonId>, serial: Option<SerialCommand>) -> Option<CallRequest> {
    if let Some(button) = button {
        return Floor::from_index(button.index()).map(|floor| CallRequest {
            floor,
            source: CallSource::Button,
        });
    }

    serial
        .and_then(|command| command.call_index())
        .and_then(Floor::from_index)
        .map(|floor| CallRequest {
            floor,
            source: CallSource::Serial,
        })
}

/// Idle at a floor with no active request
pub fn accepts_requests(state: &ElevatorState) -> bool {
    !state.request.is_active() && state.cabin.is_idle_at_floor()
}

/// Absorb this cycle's call
///
/// `drop_floor` is the destination switch value, sampled now; later
/// switch changes do not affect an accepted request.
pub fn intake(
    state: &mut ElevatorState,
    drop_floor: Floor,
    call: Option<CallRequest>,
) -> IntakeOutcome {
    let Some(call) = call else {
        return IntakeOutcome::NoCall;
    };

    if !accepts_requests(state) {
        return IntakeOutcome::Busy(call);
    }

    if call.floor == drop_floor {
        return IntakeOutcome::SameFloor(call);
    }

    state.request = TravellerRequest::Waiting {
        pickup: call.floor,
        destination: drop_floor,
    };
    state.cabin.set_destination(call.floor);
    state.mark_dirty();

    IntakeOutcome::Accepted {
        pickup: call.floor,
        destination: drop_floor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floor::Position;
    use crate::state::{CabinState, FloorCounters};

    fn idle_state() -> ElevatorState {
        let mut state = ElevatorState::new(200);
        state.take_dirty();
        state
    }

    fn button_call(floor: Floor) -> Option<CallRequest> {
        Some(CallRequest {
            floor,
            source: CallSource::Button,
        })
    }

    #[test]
    fn test_select_call_button_wins() {
        let call = select_call(Some(ButtonId::B1), Some(SerialCommand::Call(3)));
        assert_eq!(
            call,
            Some(CallRequest {
                floor: Floor::First,
                source: CallSource::Button
            })
        );
    }

    #[test]
    fn test_select_call_serial_fallback() {
        let call = select_call(None, Some(SerialCommand::Call(2)));
        assert_eq!(
            call,
            Some(CallRequest {
                floor: Floor::Second,
                source: CallSource::Serial
            })
        );
        assert_eq!(select_call(None, Some(SerialCommand::Start)), None);
        assert_eq!(select_call(None, None), None);
    }

    #[test]
    fn test_accept() {
        let mut state = idle_state();
        let outcome = intake(&mut state, Floor::Second, button_call(Floor::First));
        assert_eq!(
            outcome,
            IntakeOutcome::Accepted {
                pickup: Floor::First,
                destination: Floor::Second
            }
        );
        assert_eq!(state.cabin.destination(), Floor::First);
        assert_eq!(
            state.request,
            TravellerRequest::Waiting {
                pickup: Floor::First,
                destination: Floor::Second
            }
        );
        assert!(state.is_dirty());
    }

    #[test]
    fn test_same_floor_rejected() {
        let mut state = idle_state();
        let before = state.clone();
        let outcome = intake(&mut state, Floor::Second, button_call(Floor::Second));
        assert!(matches!(outcome, IntakeOutcome::SameFloor(_)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_busy_while_request_active() {
        let mut state = idle_state();
        intake(&mut state, Floor::Second, button_call(Floor::First));
        let before = state.clone();

        let outcome = intake(&mut state, Floor::Third, button_call(Floor::Ground));
        assert!(matches!(outcome, IntakeOutcome::Busy(_)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_busy_between_floors() {
        let cabin = CabinState::in_transit(
            Position::new(5).unwrap(),
            Floor::First,
            Floor::Second,
            200,
        );
        let mut state =
            ElevatorState::from_parts(cabin, TravellerRequest::Empty, FloorCounters::new());
        assert!(!accepts_requests(&state));
        let outcome = intake(&mut state, Floor::Third, button_call(Floor::Ground));
        assert!(matches!(outcome, IntakeOutcome::Busy(_)));
    }

    #[test]
    fn test_no_call() {
        let mut state = idle_state();
        assert_eq!(intake(&mut state, Floor::Third, None), IntakeOutcome::NoCall);
    }
}
