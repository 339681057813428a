//! Elevator view on the LED matrix

use storey_core::feedback::SplashFrame;
use storey_core::floor::{Floor, Position, ROWS_PER_FLOOR};
use storey_core::status::{StatusRecord, TravellerMarker};
use storey_core::traits::{DisplayError, StatusSink};

use super::{Colour, MatrixError, PixelSink, MATRIX_COLS};

/// Columns covered by the cabin sprite
const CABIN_COLS: [u8; 2] = [1, 2];
/// Column of the waiting-traveller marker
const TRAVELLER_COL: u8 = 4;
/// Splash door rows (inclusive), framed by a sill and a lintel
const DOOR_ROWS: core::ops::RangeInclusive<u8> = 4..=11;

fn is_floor_row(row: u8) -> bool {
    row % ROWS_PER_FLOOR == 0
}

fn marker_row(marker: &TravellerMarker) -> u8 {
    marker.floor.position().row() + 1
}

/// Draws the shaft, cabin and waiting traveller
///
/// Only what changed is redrawn. The renderer remembers the cabin
/// position and traveller marker it last drew so a move clears just the
/// vacated row. After a failed write it also remembers every row a
/// partly drawn sprite may have lit, and clears them on the next draw.
pub struct MatrixRenderer<P> {
    sink: P,
    last_position: Option<Position>,
    /// Rows that may show cabin pixels (inclusive)
    cabin_span: Option<(u8, u8)>,
    last_traveller: Option<TravellerMarker>,
}

impl<P: PixelSink> MatrixRenderer<P> {
    pub fn new(sink: P) -> Self {
        Self {
            sink,
            last_position: None,
            cabin_span: None,
            last_traveller: None,
        }
    }

    pub fn sink(&self) -> &P {
        &self.sink
    }

    /// Draw the four floor rows across the full width
    pub fn draw_floors(&mut self) -> Result<(), MatrixError> {
        for floor in Floor::ALL {
            let row = floor.position().row();
            for col in 0..MATRIX_COLS {
                self.sink.set_pixel(col, row, Colour::FLOOR)?;
            }
        }
        Ok(())
    }

    /// Clear and redraw the static run view
    pub fn reset(&mut self) -> Result<(), MatrixError> {
        self.last_position = None;
        self.cabin_span = None;
        self.last_traveller = None;
        self.sink.clear()?;
        self.draw_floors()
    }

    fn paint_cabin_row(&mut self, row: u8, colour: Colour) -> Result<(), MatrixError> {
        // Floor rows belong to the shaft
        if is_floor_row(row) {
            return Ok(());
        }
        for col in CABIN_COLS {
            self.sink.set_pixel(col, row, colour)?;
        }
        Ok(())
    }

    fn draw_cabin(&mut self, record: &StatusRecord) -> Result<(), MatrixError> {
        let rows = record.cabin_rows();
        let (top, bottom) = (*rows.start(), *rows.end());
        // Widen before painting so a failed draw is cleared next time
        let (low, high) = match self.cabin_span {
            Some((low, high)) => (low.min(top), high.max(bottom)),
            None => (top, bottom),
        };
        self.cabin_span = Some((low, high));

        for row in (low..=high).filter(|row| !rows.contains(row)) {
            self.paint_cabin_row(row, Colour::EMPTY)?;
        }
        for row in rows {
            self.paint_cabin_row(row, Colour::CABIN)?;
        }
        self.cabin_span = Some((top, bottom));
        self.last_position = Some(record.cabin_position);
        Ok(())
    }

    fn draw_traveller(&mut self, traveller: Option<TravellerMarker>) -> Result<(), MatrixError> {
        if let Some(old) = self.last_traveller {
            self.sink
                .set_pixel(TRAVELLER_COL, marker_row(&old), Colour::EMPTY)?;
        }
        if let Some(new) = traveller {
            self.sink.set_pixel(
                TRAVELLER_COL,
                marker_row(&new),
                Colour::traveller(new.destination),
            )?;
        }
        self.last_traveller = traveller;
        Ok(())
    }

    /// Draw one frame of the splash doors
    pub fn draw_doors(&mut self, frame: SplashFrame) -> Result<(), MatrixError> {
        let half = MATRIX_COLS / 2;
        let gap = frame.opening().min(half - 1);

        for col in 0..MATRIX_COLS {
            self.sink.set_pixel(col, *DOOR_ROWS.start() - 1, Colour::FLOOR)?;
            self.sink.set_pixel(col, *DOOR_ROWS.end() + 1, Colour::FLOOR)?;
        }
        for row in DOOR_ROWS {
            for col in 0..MATRIX_COLS {
                let open = col + gap >= half && col < half + gap;
                let colour = if open { Colour::EMPTY } else { Colour::DOOR };
                self.sink.set_pixel(col, row, colour)?;
            }
        }
        Ok(())
    }
}

impl<P: PixelSink> StatusSink for MatrixRenderer<P> {
    fn show_status(&mut self, record: &StatusRecord) -> Result<(), DisplayError> {
        if self.last_position != Some(record.cabin_position) {
            self.draw_cabin(record)?;
        }
        if self.last_traveller != record.traveller {
            self.draw_traveller(record.traveller)?;
        }
        Ok(())
    }

    fn show_splash(&mut self, frame: SplashFrame) -> Result<(), DisplayError> {
        Ok(self.draw_doors(frame)?)
    }

    fn begin_run(&mut self) -> Result<(), DisplayError> {
        Ok(self.reset()?)
    }
}
