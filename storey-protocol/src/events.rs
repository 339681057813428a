//! Input events from the push buttons and the serial terminal

/// Number of call inputs (one per floor)
pub const CALL_COUNT: u8 = 4;

/// Push button identifier
///
/// B0..B3 call the cabin to floors 0..3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    B0,
    B1,
    B2,
    B3,
}

// Mailbox encoding. Zero is reserved for "empty".
const BUTTON_CODE_B0: u8 = 0x01;
const BUTTON_CODE_B1: u8 = 0x02;
const BUTTON_CODE_B2: u8 = 0x03;
const BUTTON_CODE_B3: u8 = 0x04;

impl ButtonId {
    /// All buttons in index order
    pub const ALL: [ButtonId; 4] = [ButtonId::B0, ButtonId::B1, ButtonId::B2, ButtonId::B3];

    /// Parse a button from its mailbox code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            BUTTON_CODE_B0 => Some(ButtonId::B0),
            BUTTON_CODE_B1 => Some(ButtonId::B1),
            BUTTON_CODE_B2 => Some(ButtonId::B2),
            BUTTON_CODE_B3 => Some(ButtonId::B3),
            _ => None,
        }
    }

    /// Convert to mailbox code (never zero)
    pub fn code(self) -> u8 {
        match self {
            ButtonId::B0 => BUTTON_CODE_B0,
            ButtonId::B1 => BUTTON_CODE_B1,
            ButtonId::B2 => BUTTON_CODE_B2,
            ButtonId::B3 => BUTTON_CODE_B3,
        }
    }

    /// Floor index this button calls (0..=3)
    pub fn index(self) -> u8 {
        match self {
            ButtonId::B0 => 0,
            ButtonId::B1 => 1,
            ButtonId::B2 => 2,
            ButtonId::B3 => 3,
        }
    }
}

/// Recognised command bytes from the serial terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialCommand {
    /// ASCII digit '0'..'3': call to floor index
    Call(u8),
    /// 's' or 'S': leave the splash screen
    Start,
}

impl SerialCommand {
    /// Decode a received byte
    ///
    /// Returns `None` for bytes outside the recognised set; callers are
    /// expected to ignore them (and may count them for diagnostics).
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'0'..=b'3' => Some(SerialCommand::Call(byte - b'0')),
            b's' | b'S' => Some(SerialCommand::Start),
            _ => None,
        }
    }

    /// Floor index for call commands
    pub fn call_index(self) -> Option<u8> {
        match self {
            SerialCommand::Call(index) => Some(index),
            SerialCommand::Start => None,
        }
    }
}

/// A discrete input event delivered to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Push button pressed
    Button(ButtonId),
    /// Recognised serial command
    Serial(SerialCommand),
    /// Serial byte outside the recognised set
    Unrecognized(u8),
}

impl InputEvent {
    /// Classify a raw serial byte
    pub fn from_serial_byte(byte: u8) -> Self {
        match SerialCommand::from_byte(byte) {
            Some(command) => InputEvent::Serial(command),
            None => InputEvent::Unrecognized(byte),
        }
    }

    /// Floor index requested by this event, if it is a call
    pub fn call_index(&self) -> Option<u8> {
        match self {
            InputEvent::Button(button) => Some(button.index()),
            InputEvent::Serial(command) => command.call_index(),
            InputEvent::Unrecognized(_) => None,
        }
    }

    /// Returns true if this event leaves the splash screen
    ///
    /// Any button does; on the terminal only 's'/'S' does.
    pub fn exits_splash(&self) -> bool {
        matches!(
            self,
            InputEvent::Button(_) | InputEvent::Serial(SerialCommand::Start)
        )
    }
}
