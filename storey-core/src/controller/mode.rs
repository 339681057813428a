//! Top-level operating mode

use storey_protocol::InputEvent;

/// Controller mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Door animation on the matrix, waiting for a start input
    #[default]
    Splash,
    /// Elevator running
    Running,
}

impl Mode {
    /// Next mode after `event`
    ///
    /// Any button or 's'/'S' leaves the splash. Nothing leaves `Running`.
    pub fn transition(self, event: InputEvent) -> Self {
        match (self, event) {
            (Mode::Splash, event) if event.exits_splash() => Mode::Running,
            (mode, _) => mode,
        }
    }

    pub fn is_running(self) -> bool {
        self == Mode::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storey_protocol::{ButtonId, SerialCommand};

    #[test]
    fn test_splash_exits() {
        assert_eq!(
            Mode::Splash.transition(InputEvent::Button(ButtonId::B2)),
            Mode::Running
        );
        assert_eq!(
            Mode::Splash.transition(InputEvent::from_serial_byte(b'S')),
            Mode::Running
        );
    }

    #[test]
    fn test_splash_ignores_digits() {
        assert_eq!(
            Mode::Splash.transition(InputEvent::Serial(SerialCommand::Call(1))),
            Mode::Splash
        );
        assert_eq!(
            Mode::Splash.transition(InputEvent::Unrecognized(b'x')),
            Mode::Splash
        );
    }

    #[test]
    fn test_running_is_terminal() {
        assert_eq!(
            Mode::Running.transition(InputEvent::Serial(SerialCommand::Start)),
            Mode::Running
        );
        assert!(Mode::Running.is_running());
        assert!(!Mode::default().is_running());
    }
}
