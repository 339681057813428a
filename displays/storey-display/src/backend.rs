//! Display backend trait
//!
//! Defines the interface for character displays.

use storey_core::traits::DisplayError;

/// Display backend trait
///
/// Provides a hardware-agnostic interface for rendering text. Coordinates
/// are 0-based character cells.
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Replace the rest of `row` from `col` onwards with `text`
    ///
    /// Anything previously drawn past the end of `text` is erased.
    fn draw_line(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);
}
