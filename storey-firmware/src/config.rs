//! Configuration loading
//!
//! The elevator.toml next to the crate is embedded at build time (and
//! checked by build.rs). It is parsed again at boot; anything that does
//! not parse or validate falls back to the built-in defaults.

use defmt::*;

use storey_core::config::{parse_config, ElevatorConfig};

/// Embedded configuration (compiled into firmware)
/// Edit elevator.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../elevator.toml");

/// Load the embedded configuration or the defaults
pub fn load() -> ElevatorConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            error!("elevator.toml parse error: {:?}, using defaults", e);
            return ElevatorConfig::default();
        }
    };

    match config.validate() {
        Ok(()) => {
            info!(
                "Configuration loaded: fast {}ms, slow {}ms",
                config.controller.fast_tick_ms, config.controller.slow_tick_ms
            );
            config
        }
        Err(e) => {
            error!("elevator.toml rejected: {:?}, using defaults", e);
            ElevatorConfig::default()
        }
    }
}
