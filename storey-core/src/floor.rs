//! Floors and cabin positions
//!
//! The shaft is drawn on the LED matrix four rows per floor. A
//! [`Position`] counts rows from the ground floor; a [`Floor`] is one of
//! the four floor-aligned positions. All row/floor arithmetic lives here.

/// LED rows between consecutive floors
pub const ROWS_PER_FLOOR: u8 = 4;

/// Number of floors served by the cabin
pub const FLOOR_COUNT: u8 = 4;

/// Highest reachable position (top floor row)
pub const MAX_POSITION: u8 = (FLOOR_COUNT - 1) * ROWS_PER_FLOOR;

/// A floor served by the cabin
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Floor {
    Ground,
    First,
    Second,
    Third,
}

impl Floor {
    /// All floors, bottom to top
    pub const ALL: [Floor; FLOOR_COUNT as usize] =
        [Floor::Ground, Floor::First, Floor::Second, Floor::Third];

    /// Floor number (0..=3)
    pub const fn index(self) -> u8 {
        match self {
            Floor::Ground => 0,
            Floor::First => 1,
            Floor::Second => 2,
            Floor::Third => 3,
        }
    }

    /// Floor from its number, if in range
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Floor selected by the two-bit destination switch bank
    ///
    /// Bits above the lowest two are ignored, so every switch value maps
    /// to a floor.
    pub fn from_switch_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0b11) as usize]
    }

    /// Row position of this floor
    pub const fn position(self) -> Position {
        Position(self.index() * ROWS_PER_FLOOR)
    }
}

/// Cabin position in LED rows above the ground floor
///
/// Invariant: `0 <= row <= MAX_POSITION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position(u8);

impl Position {
    /// Ground floor row
    pub const GROUND: Position = Position(0);

    /// Create a position, rejecting rows outside the shaft
    pub fn new(row: u8) -> Option<Self> {
        if row <= MAX_POSITION {
            Some(Self(row))
        } else {
            None
        }
    }

    /// Row number
    pub const fn row(self) -> u8 {
        self.0
    }

    /// Whether the cabin sits exactly on a floor
    pub const fn is_floor_aligned(self) -> bool {
        self.0 % ROWS_PER_FLOOR == 0
    }

    /// The floor at this position, only when floor-aligned
    pub fn floor(self) -> Option<Floor> {
        if self.is_floor_aligned() {
            Floor::from_index(self.0 / ROWS_PER_FLOOR)
        } else {
            None
        }
    }

    /// One row up, if still inside the shaft
    pub fn step_up(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// One row down, if still inside the shaft
    pub fn step_down(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl From<Floor> for Position {
    fn from(floor: Floor) -> Self {
        floor.position()
    }
}
