//! Cabin position, destination and direction

use crate::floor::{Floor, Position};

/// Direction of travel, derived each tick from destination vs position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Down,
    #[default]
    Stationary,
}

impl Direction {
    /// Direction that moves `from` towards `to`
    pub fn towards(from: Position, to: Position) -> Self {
        match to.cmp(&from) {
            core::cmp::Ordering::Greater => Direction::Up,
            core::cmp::Ordering::Less => Direction::Down,
            core::cmp::Ordering::Equal => Direction::Stationary,
        }
    }

    /// Word shown on the status panel
    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Stationary => "Stationary",
        }
    }
}

/// Cabin state
///
/// `floor` is the last floor the cabin was aligned with. It only changes
/// when the position lands on a floor row; between floors it keeps the
/// previous value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CabinState {
    position: Position,
    floor: Floor,
    destination: Floor,
    direction: Direction,
    /// Tick interval currently selected by the rate switch (ms)
    speed_ms: u32,
}

impl CabinState {
    /// Cabin parked at `floor` with nowhere to go
    pub fn parked(floor: Floor, speed_ms: u32) -> Self {
        Self {
            position: floor.position(),
            floor,
            destination: floor,
            direction: Direction::Stationary,
            speed_ms,
        }
    }

    /// Cabin part-way along the shaft
    ///
    /// `last_floor` is the floor it most recently passed. Intended for
    /// restoring a known state in tests and simulators.
    pub fn in_transit(
        position: Position,
        last_floor: Floor,
        destination: Floor,
        speed_ms: u32,
    ) -> Self {
        Self {
            position,
            floor: position.floor().unwrap_or(last_floor),
            destination,
            direction: Direction::towards(position, destination.position()),
            speed_ms,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Last floor the cabin was aligned with
    pub fn floor(&self) -> Floor {
        self.floor
    }

    pub fn destination(&self) -> Floor {
        self.destination
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    /// Whether the cabin is between two floor rows
    pub fn is_between_floors(&self) -> bool {
        !self.position.is_floor_aligned()
    }

    /// Idle at a floor: nothing left to travel
    pub fn is_idle_at_floor(&self) -> bool {
        self.floor == self.destination
    }

    pub fn set_speed_ms(&mut self, speed_ms: u32) {
        self.speed_ms = speed_ms;
    }

    pub(crate) fn set_destination(&mut self, destination: Floor) {
        self.destination = destination;
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Move to a new row, latching the floor when aligned
    ///
    /// Returns the floor if the new position is a floor row.
    pub(crate) fn move_to(&mut self, position: Position) -> Option<Floor> {
        self.position = position;
        let aligned = position.floor();
        if let Some(floor) = aligned {
            self.floor = floor;
        }
        aligned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8) -> Position {
        Position::new(row).unwrap()
    }

    #[test]
    fn test_direction_towards() {
        assert_eq!(Direction::towards(pos(0), pos(8)), Direction::Up);
        assert_eq!(Direction::towards(pos(8), pos(4)), Direction::Down);
        assert_eq!(Direction::towards(pos(4), pos(4)), Direction::Stationary);
    }

    #[test]
    fn test_direction_labels() {
        assert_eq!(Direction::Up.label(), "Up");
        assert_eq!(Direction::Down.label(), "Down");
        assert_eq!(Direction::Stationary.label(), "Stationary");
    }

    #[test]
    fn test_parked_cabin() {
        let cabin = CabinState::parked(Floor::Ground, 200);
        assert_eq!(cabin.position(), Position::GROUND);
        assert_eq!(cabin.floor(), Floor::Ground);
        assert_eq!(cabin.destination(), Floor::Ground);
        assert_eq!(cabin.direction(), Direction::Stationary);
        assert!(cabin.is_idle_at_floor());
        assert!(!cabin.is_between_floors());
    }

    #[test]
    fn test_move_to_keeps_last_floor_between_floors() {
        let mut cabin = CabinState::parked(Floor::First, 200);
        assert_eq!(cabin.move_to(pos(5)), None);
        assert_eq!(cabin.floor(), Floor::First);
        assert!(cabin.is_between_floors());

        assert_eq!(cabin.move_to(pos(8)), Some(Floor::Second));
        assert_eq!(cabin.floor(), Floor::Second);
    }

    #[test]
    fn test_in_transit() {
        let cabin = CabinState::in_transit(pos(6), Floor::First, Floor::Third, 100);
        assert_eq!(cabin.floor(), Floor::First);
        assert_eq!(cabin.direction(), Direction::Up);
        assert!(!cabin.is_idle_at_floor());

        // An aligned position overrides the supplied last floor
        let cabin = CabinState::in_transit(pos(8), Floor::First, Floor::Ground, 100);
        assert_eq!(cabin.floor(), Floor::Second);
    }
}
