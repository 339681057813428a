//! Storey I/O protocol
//!
//! Wire-level definitions shared by the core and the drivers:
//!
//! - [`events`]: decoding of push-button codes and serial terminal bytes
//!   into discrete input events
//! - [`terminal`]: VT100 escape sequences used to draw the status panel
//!   on the serial terminal
//!
//! The serial link runs at 19200 baud, 8N1, without local echo.
//!
//! ```text
//! ┌──────────┐  '0'..'3', 's'   ┌──────────────┐
//! │ Terminal │ ───────────────► │  Controller  │
//! │          │ ◄─────────────── │              │
//! └──────────┘  ESC[row;colH…   └──────────────┘
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod events;
pub mod terminal;

pub use events::{ButtonId, InputEvent, SerialCommand};
pub use terminal::{EncodeError, TerminalCommand, MAX_COMMAND_LEN};
