//! In-memory pixel sink

use super::{check_bounds, Colour, MatrixError, PixelSink, MATRIX_COLS, MATRIX_ROWS};

/// Matrix contents held in RAM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [[Colour; MATRIX_COLS as usize]; MATRIX_ROWS as usize],
    writes: usize,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    pub const fn new() -> Self {
        Self {
            pixels: [[Colour::EMPTY; MATRIX_COLS as usize]; MATRIX_ROWS as usize],
            writes: 0,
        }
    }

    /// Colour at a pixel, `None` outside the matrix
    pub fn get(&self, col: u8, row: u8) -> Option<Colour> {
        check_bounds(col, row).ok()?;
        Some(self.pixels[row as usize][col as usize])
    }

    /// One row, column 0 first
    pub fn row(&self, row: u8) -> Option<&[Colour; MATRIX_COLS as usize]> {
        self.pixels.get(row as usize)
    }

    /// Pixel writes since creation (clears excluded)
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PixelSink for FrameBuffer {
    fn set_pixel(&mut self, col: u8, row: u8, colour: Colour) -> Result<(), MatrixError> {
        check_bounds(col, row)?;
        self.pixels[row as usize][col as usize] = colour;
        self.writes += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), MatrixError> {
        self.pixels = [[Colour::EMPTY; MATRIX_COLS as usize]; MATRIX_ROWS as usize];
        Ok(())
    }
}
