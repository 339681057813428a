//! LED matrix
//!
//! The elevator view is 8 columns by 16 rows, row 0 at the bottom. Pixels
//! go to a [`PixelSink`]: the SPI matrix board on hardware, a
//! [`FrameBuffer`] in tests.

pub mod colour;
pub mod framebuffer;
pub mod renderer;
pub mod spi;

pub use colour::Colour;
pub use framebuffer::FrameBuffer;
pub use renderer::MatrixRenderer;
pub use spi::SpiMatrix;

use storey_core::traits::DisplayError;

/// Matrix width in elevator orientation
pub const MATRIX_COLS: u8 = 8;
/// Matrix height in elevator orientation
pub const MATRIX_ROWS: u8 = 16;

/// LED matrix errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatrixError {
    /// SPI transfer failed
    Bus,
    /// Pixel outside the 8 x 16 area
    OutOfBounds,
}

impl From<MatrixError> for DisplayError {
    fn from(e: MatrixError) -> Self {
        match e {
            MatrixError::Bus => DisplayError::Io,
            MatrixError::OutOfBounds => DisplayError::OutOfBounds,
        }
    }
}

/// Something that can light individual matrix pixels
pub trait PixelSink {
    /// Set one pixel; `col` 0..8, `row` 0..16
    fn set_pixel(&mut self, col: u8, row: u8, colour: Colour) -> Result<(), MatrixError>;

    /// Turn every pixel off
    fn clear(&mut self) -> Result<(), MatrixError>;
}

pub(crate) fn check_bounds(col: u8, row: u8) -> Result<(), MatrixError> {
    if col < MATRIX_COLS && row < MATRIX_ROWS {
        Ok(())
    } else {
        Err(MatrixError::OutOfBounds)
    }
}
