//! Motion engine
//!
//! Moves the cabin one LED row towards its destination each time the tick
//! interval elapses. A stalled loop does not catch up: at most one step is
//! taken per call regardless of how much time has passed.

use crate::broker::{match_transfer, Transfer};
use crate::floor::Floor;
use crate::state::{Direction, ElevatorState};

/// Result of one elapsed tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    /// The cabin changed rows
    pub moved: bool,
    /// The move landed on this floor
    pub arrived: Option<Floor>,
    /// Pickup or drop-off triggered by the new position
    pub transfer: Option<Transfer>,
}

/// Tick-paced cabin mover
#[derive(Debug, Clone)]
pub struct MotionEngine {
    last_move_ms: u32,
}

impl MotionEngine {
    /// Engine whose first tick falls one interval after `now_ms`
    pub fn new(now_ms: u32) -> Self {
        Self {
            last_move_ms: now_ms,
        }
    }

    /// Restart the tick interval from `now_ms`
    pub fn restart(&mut self, now_ms: u32) {
        self.last_move_ms = now_ms;
    }

    /// Timestamp of the last tick
    pub fn last_move_ms(&self) -> u32 {
        self.last_move_ms
    }

    /// Whether a tick is due at `now_ms` for the cabin's current speed
    ///
    /// Uses wrapping subtraction so the clock may roll over.
    pub fn is_due(&self, state: &ElevatorState, now_ms: u32) -> bool {
        now_ms.wrapping_sub(self.last_move_ms) >= state.cabin.speed_ms()
    }

    /// Run one tick if the interval has elapsed
    ///
    /// Returns `None` when no tick was due. Otherwise moves the cabin at
    /// most one row, counts a floor crossing when the move lands on a
    /// floor row, then evaluates pickup/drop-off against the new position.
    pub fn advance(&mut self, state: &mut ElevatorState, now_ms: u32) -> Option<Step> {
        if !self.is_due(state, now_ms) {
            return None;
        }

        let position = state.cabin.position();
        let target = state.cabin.destination().position();
        let direction = Direction::towards(position, target);

        let next = match direction {
            Direction::Up => position.step_up(),
            Direction::Down => position.step_down(),
            Direction::Stationary => None,
        };

        let mut step = Step::default();

        if direction != state.cabin.direction() {
            state.cabin.set_direction(direction);
            state.mark_dirty();
        }

        if let Some(next) = next {
            step.moved = true;
            step.arrived = state.cabin.move_to(next);
            if step.arrived.is_some() {
                let onboard = state.request.is_onboard();
                state.counters.record_crossing(onboard);
            }
            state.mark_dirty();
        }

        step.transfer = match_transfer(state);
        self.last_move_ms = now_ms;

        Some(step)
    }
}
