//! Configuration types
//!
//! Board-agnostic controller timings and the board pin map. The firmware
//! embeds `elevator.toml`, parses it at boot with [`parse_config`] and
//! validates the result before use.

pub mod hardware;
pub mod timing;
pub mod toml;

pub use hardware::*;
pub use timing::*;
pub use toml::{parse_config, ParseError};

/// Everything read from `elevator.toml`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ElevatorConfig {
    pub controller: ControllerConfig,
    pub pins: BoardPins,
}

impl ElevatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.controller.validate()?;
        self.pins.validate()
    }
}
