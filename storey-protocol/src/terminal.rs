//! VT100 terminal commands
//!
//! The status panel is drawn on a plain serial terminal. Each command
//! encodes to a short escape sequence; text is passed through verbatim.
//!
//! Cursor coordinates are 1-based on the wire. `MoveCursor { col, row }`
//! encodes as `ESC [ row ; col H`.

use core::fmt::Write;
use heapless::{String, Vec};

/// Escape byte
pub const ESC: u8 = 0x1B;

/// Longest encoded control sequence (`ESC[255;255H` plus slack)
pub const MAX_COMMAND_LEN: usize = 16;

/// Errors while encoding a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Output buffer too small
    BufferTooSmall,
}

/// Terminal commands used by the status panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TerminalCommand<'a> {
    /// Erase the whole screen
    Clear,
    /// Erase from the cursor to the end of the line
    ClearToEndOfLine,
    /// Move the cursor (1-based column and row)
    MoveCursor { col: u8, row: u8 },
    /// Hide the cursor
    HideCursor,
    /// Show the cursor
    ShowCursor,
    /// Reset colours and attributes
    NormalMode,
    /// Plain text
    Text(&'a str),
}

impl<'a> TerminalCommand<'a> {
    /// Append the encoded command to `out`
    pub fn encode_into<const N: usize>(&self, out: &mut Vec<u8, N>) -> Result<(), EncodeError> {
        match self {
            TerminalCommand::Clear => push_csi(out, b"2J"),
            TerminalCommand::ClearToEndOfLine => push_csi(out, b"K"),
            TerminalCommand::HideCursor => push_csi(out, b"?25l"),
            TerminalCommand::ShowCursor => push_csi(out, b"?25h"),
            TerminalCommand::NormalMode => push_csi(out, b"0m"),
            TerminalCommand::MoveCursor { col, row } => {
                // Zero is not a valid terminal coordinate
                let mut seq: String<MAX_COMMAND_LEN> = String::new();
                write!(seq, "{};{}H", (*row).max(1), (*col).max(1))
                    .map_err(|_| EncodeError::BufferTooSmall)?;
                push_csi(out, seq.as_bytes())
            }
            TerminalCommand::Text(text) => out
                .extend_from_slice(text.as_bytes())
                .map_err(|_| EncodeError::BufferTooSmall),
        }
    }

    /// Encode a control command into a fresh buffer
    pub fn encode(&self) -> Result<Vec<u8, MAX_COMMAND_LEN>, EncodeError> {
        let mut out = Vec::new();
        self.encode_into(&mut out)?;
        Ok(out)
    }
}

fn push_csi<const N: usize>(out: &mut Vec<u8, N>, body: &[u8]) -> Result<(), EncodeError> {
    out.push(ESC).map_err(|_| EncodeError::BufferTooSmall)?;
    out.push(b'[').map_err(|_| EncodeError::BufferTooSmall)?;
    out.extend_from_slice(body)
        .map_err(|_| EncodeError::BufferTooSmall)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear() {
        let bytes = TerminalCommand::Clear.encode().unwrap();
        assert_eq!(&bytes[..], b"\x1b[2J");
    }

    #[test]
    fn test_move_cursor() {
        let bytes = TerminalCommand::MoveCursor { col: 10, row: 12 }.encode().unwrap();
        assert_eq!(&bytes[..], b"\x1b[12;10H");
    }

    #[test]
    fn test_move_cursor_origin_clamped() {
        let bytes = TerminalCommand::MoveCursor { col: 0, row: 0 }.encode().unwrap();
        assert_eq!(&bytes[..], b"\x1b[1;1H");
    }

    #[test]
    fn test_cursor_visibility() {
        assert_eq!(&TerminalCommand::HideCursor.encode().unwrap()[..], b"\x1b[?25l");
        assert_eq!(&TerminalCommand::ShowCursor.encode().unwrap()[..], b"\x1b[?25h");
    }

    #[test]
    fn test_text_passthrough() {
        let mut out: Vec<u8, 32> = Vec::new();
        TerminalCommand::Text("Direction: Up").encode_into(&mut out).unwrap();
        assert_eq!(&out[..], b"Direction: Up");
    }

    #[test]
    fn test_text_overflow() {
        let mut out: Vec<u8, 4> = Vec::new();
        let result = TerminalCommand::Text("Current Level: 3").encode_into(&mut out);
        assert_eq!(result, Err(EncodeError::BufferTooSmall));
    }

    #[test]
    fn test_sequence_appends() {
        let mut out: Vec<u8, 32> = Vec::new();
        TerminalCommand::MoveCursor { col: 1, row: 2 }
            .encode_into(&mut out)
            .unwrap();
        TerminalCommand::Text("x").encode_into(&mut out).unwrap();
        assert_eq!(&out[..], b"\x1b[2;1Hx");
    }

    proptest::proptest! {
        #[test]
        fn prop_move_cursor_fits(col in proptest::num::u8::ANY, row in proptest::num::u8::ANY) {
            let bytes = TerminalCommand::MoveCursor { col, row }.encode().unwrap();
            proptest::prop_assert_eq!(bytes[0], ESC);
            proptest::prop_assert_eq!(*bytes.last().unwrap(), b'H');
        }
    }
}
