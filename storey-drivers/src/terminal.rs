//! VT100 serial terminal as a character display

use heapless::Vec;
use storey_display::DisplayBackend;
use storey_core::traits::DisplayError;
use storey_hal::UartTx;
use storey_protocol::TerminalCommand;

/// Standard VT100 screen size
pub const TERMINAL_COLS: u8 = 80;
pub const TERMINAL_ROWS: u8 = 24;

/// Encoded bytes for one line update
const LINE_BUF: usize = 96;

/// Character display on the transmit side of a serial terminal
pub struct TerminalBackend<W> {
    tx: W,
}

impl<W: UartTx> TerminalBackend<W> {
    pub fn new(tx: W) -> Self {
        Self { tx }
    }

    /// Reset attributes, hide the cursor and clear the screen
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.send(&[
            TerminalCommand::NormalMode,
            TerminalCommand::HideCursor,
            TerminalCommand::Clear,
        ])
    }

    pub fn release(self) -> W {
        self.tx
    }

    fn send(&mut self, commands: &[TerminalCommand<'_>]) -> Result<(), DisplayError> {
        let mut out: Vec<u8, LINE_BUF> = Vec::new();
        for command in commands {
            command
                .encode_into(&mut out)
                .map_err(|_| DisplayError::BufferOverflow)?;
        }
        self.tx.write_all(&out).map_err(|_| DisplayError::Io)
    }
}

impl<W: UartTx> DisplayBackend for TerminalBackend<W> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.send(&[TerminalCommand::Clear])
    }

    fn draw_line(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if row >= TERMINAL_ROWS || col >= TERMINAL_COLS {
            return Err(DisplayError::OutOfBounds);
        }
        self.send(&[
            TerminalCommand::MoveCursor {
                col: col + 1,
                row: row + 1,
            },
            TerminalCommand::Text(text),
            TerminalCommand::ClearToEndOfLine,
        ])
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.tx.flush().map_err(|_| DisplayError::Io)
    }

    fn dimensions(&self) -> (u8, u8) {
        (TERMINAL_COLS, TERMINAL_ROWS)
    }
}
