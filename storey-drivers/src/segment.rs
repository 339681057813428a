//! Two-digit seven-segment display
//!
//! The digits share segment lines and are multiplexed with one select
//! pin: low shows the left digit (direction), high the right digit
//! (floor). `refresh` must be called often enough that the two digits
//! blend, a few milliseconds per digit.

use storey_core::floor::Floor;
use storey_core::state::Direction;
use storey_core::status::StatusRecord;
use storey_core::traits::{DisplayError, StatusSink};
use storey_hal::OutputPin;

/// Segment bits, a = bit 0 .. g = bit 6, dp = bit 7
pub mod glyph {
    pub const BLANK: u8 = 0x00;
    /// Top bar (segment a)
    pub const UP: u8 = 0x01;
    /// Bottom bar (segment d)
    pub const DOWN: u8 = 0x08;
    /// Middle bar (segment g)
    pub const STATIONARY: u8 = 0x40;
    pub const DECIMAL_POINT: u8 = 0x80;
    pub const DIGITS: [u8; 4] = [0x3F, 0x06, 0x5B, 0x4F];
}

/// Direction glyph for the left digit
pub fn direction_glyph(direction: Direction) -> u8 {
    match direction {
        Direction::Up => glyph::UP,
        Direction::Down => glyph::DOWN,
        Direction::Stationary => glyph::STATIONARY,
    }
}

/// Floor glyph for the right digit, decimal point lit between floors
pub fn floor_glyph(floor: Floor, between_floors: bool) -> u8 {
    let digit = glyph::DIGITS[floor.index() as usize];
    if between_floors {
        digit | glyph::DECIMAL_POINT
    } else {
        digit
    }
}

/// Multiplexed seven-segment display driver
pub struct SegmentDisplay<P, S> {
    segments: [P; 8],
    select: S,
    /// Left then right digit
    glyphs: [u8; 2],
    showing_right: bool,
}

impl<P: OutputPin, S: OutputPin> SegmentDisplay<P, S> {
    /// Create the driver with both digits blank
    pub fn new(segments: [P; 8], mut select: S) -> Self {
        select.set_low();
        let mut display = Self {
            segments,
            select,
            glyphs: [glyph::BLANK; 2],
            showing_right: false,
        };
        display.drive(glyph::BLANK);
        display
    }

    /// Set both digits directly
    pub fn set_glyphs(&mut self, left: u8, right: u8) {
        self.glyphs = [left, right];
    }

    pub fn glyphs(&self) -> [u8; 2] {
        self.glyphs
    }

    /// Show the next digit
    ///
    /// Segments are blanked before the select line moves so the old
    /// pattern never ghosts onto the other digit.
    pub fn refresh(&mut self) {
        self.drive(glyph::BLANK);
        self.showing_right = !self.showing_right;
        self.select.set_state(self.showing_right);
        let pattern = self.glyphs[usize::from(self.showing_right)];
        self.drive(pattern);
    }

    fn drive(&mut self, pattern: u8) {
        for (bit, pin) in self.segments.iter_mut().enumerate() {
            pin.set_state(pattern & (1 << bit) != 0);
        }
    }
}

impl<P: OutputPin, S: OutputPin> StatusSink for SegmentDisplay<P, S> {
    fn show_status(&mut self, record: &StatusRecord) -> Result<(), DisplayError> {
        self.set_glyphs(
            direction_glyph(record.direction),
            floor_glyph(record.displayed_floor, record.between_floors),
        );
        Ok(())
    }

    fn begin_run(&mut self) -> Result<(), DisplayError> {
        self.set_glyphs(glyph::STATIONARY, floor_glyph(Floor::Ground, false));
        Ok(())
    }
}
