//! Status display trait

use crate::feedback::SplashFrame;
use crate::status::StatusRecord;

/// Errors that can occur while drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus or serial write failed
    Io,
    /// Drawing outside the display area
    OutOfBounds,
    /// Text did not fit the line buffer
    BufferOverflow,
}

/// A display that shows the controller status
///
/// Implemented by the LED matrix renderer, the seven-segment display and
/// the terminal panel. Displays are told only what changed; each keeps
/// whatever memory of previous frames it needs.
pub trait StatusSink {
    /// Show a new status record
    fn show_status(&mut self, record: &StatusRecord) -> Result<(), DisplayError>;

    /// Draw a splash frame (ignored by displays without a splash)
    fn show_splash(&mut self, _frame: SplashFrame) -> Result<(), DisplayError> {
        Ok(())
    }

    /// Leave the splash screen and draw the static parts of the run view
    fn begin_run(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}
