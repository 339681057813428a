//! Board pin map
//!
//! GPIO assignments for the emulator board's inputs and indicators.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Highest GPIO number on the target board
pub const MAX_GPIO: u8 = 29;

/// GPIOs wired to fixed-function peripherals (UART0, buzzer PWM, SPI0)
pub const RESERVED_GPIO: [u8; 5] = [0, 1, 15, 18, 19];

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Active-low pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: false,
        }
    }

    /// Input with the internal pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: true,
        }
    }

    /// Push button to ground, read through the pull-up
    pub const fn button(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }
}

/// GPIO assignments for every board function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardPins {
    /// Call buttons B0..B3
    pub buttons: [PinConfig; 4],
    /// Destination select S0, S1
    pub destination_switches: [PinConfig; 2],
    /// Rate select S2
    pub rate_switch: PinConfig,
    /// Door LEDs L0..L3
    pub door_leds: [PinConfig; 4],
    /// Seven-segment lines a..g, dp
    pub segments: [PinConfig; 8],
    /// Seven-segment digit select
    pub digit_select: PinConfig,
    /// LED matrix chip select
    pub matrix_cs: PinConfig,
}

impl Default for BoardPins {
    /// Pinout of the reference board
    ///
    /// GPIO 0/1 (UART0), 15 (buzzer PWM) and 18/19 (SPI0) are fixed
    /// function pins and do not appear here.
    fn default() -> Self {
        Self {
            buttons: [
                PinConfig::button(2),
                PinConfig::button(3),
                PinConfig::button(4),
                PinConfig::button(5),
            ],
            destination_switches: [PinConfig::new(6), PinConfig::new(7)],
            rate_switch: PinConfig::new(8),
            door_leds: [
                PinConfig::new(9),
                PinConfig::new(10),
                PinConfig::new(11),
                PinConfig::new(12),
            ],
            segments: [
                PinConfig::new(20),
                PinConfig::new(21),
                PinConfig::new(22),
                PinConfig::new(26),
                PinConfig::new(27),
                PinConfig::new(28),
                PinConfig::new(13),
                PinConfig::new(14),
            ],
            digit_select: PinConfig::new(16),
            matrix_cs: PinConfig::new(17),
        }
    }
}

impl BoardPins {
    fn all(&self) -> impl Iterator<Item = &PinConfig> {
        self.buttons
            .iter()
            .chain(self.destination_switches.iter())
            .chain(core::iter::once(&self.rate_switch))
            .chain(self.door_leds.iter())
            .chain(self.segments.iter())
            .chain(core::iter::once(&self.digit_select))
            .chain(core::iter::once(&self.matrix_cs))
    }

    /// Check every pin is in range and used once
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut used: u32 = 0;
        for config in self.all() {
            if config.pin > MAX_GPIO {
                return Err(ConfigError::PinOutOfRange(config.pin));
            }
            if RESERVED_GPIO.contains(&config.pin) {
                return Err(ConfigError::PinReserved(config.pin));
            }
            let mask = 1u32 << config.pin;
            if used & mask != 0 {
                return Err(ConfigError::PinConflict(config.pin));
            }
            used |= mask;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> BoardPins {
        BoardPins::default()
    }

    #[test]
    fn test_valid_board() {
        assert_eq!(board().validate(), Ok(()));
    }

    #[test]
    fn test_conflict() {
        let mut pins = board();
        pins.matrix_cs = PinConfig::new(9);
        assert_eq!(pins.validate(), Err(ConfigError::PinConflict(9)));
    }

    #[test]
    fn test_out_of_range() {
        let mut pins = board();
        pins.matrix_cs = PinConfig::new(30);
        assert_eq!(pins.validate(), Err(ConfigError::PinOutOfRange(30)));
    }

    #[test]
    fn test_reserved() {
        let mut pins = board();
        pins.buttons[0] = PinConfig::with_pullup(18);
        assert_eq!(pins.validate(), Err(ConfigError::PinReserved(18)));
    }

    #[test]
    fn test_pin_constructors() {
        assert!(PinConfig::inverted(3).inverted);
        assert!(PinConfig::with_pullup(3).pull_up);
        let button = PinConfig::button(3);
        assert!(button.pull_up && button.inverted);
        assert!(!PinConfig::new(3).inverted);
    }
}
