//! Controller timing configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A tick interval is zero
    ZeroTickInterval,
    /// Fast tick interval is longer than the slow one
    FastSlowerThanSlow,
    /// Tone frequency or duration is zero
    InvalidTone,
    /// Door phase boundaries are not strictly increasing
    DoorPhaseOrder,
    /// Splash frame time is zero
    ZeroFrameTime,
    /// Two board functions share a GPIO
    PinConflict(u8),
    /// GPIO number outside the board's range
    PinOutOfRange(u8),
    /// GPIO belongs to a fixed-function peripheral
    PinReserved(u8),
}

/// A fixed-frequency beep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tone {
    pub freq_hz: u16,
    pub duration_ms: u16,
}

impl Tone {
    pub const fn new(freq_hz: u16, duration_ms: u16) -> Self {
        Self {
            freq_hz,
            duration_ms,
        }
    }

    fn is_valid(&self) -> bool {
        self.freq_hz > 0 && self.duration_ms > 0
    }
}

/// Door animation phase boundaries, in ms from the trigger
///
/// Closed before `open_at_ms`, open until `closing_at_ms`, closing until
/// `closed_at_ms`, then closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DoorTiming {
    pub open_at_ms: u32,
    pub closing_at_ms: u32,
    pub closed_at_ms: u32,
}

impl Default for DoorTiming {
    fn default() -> Self {
        Self {
            open_at_ms: 300,
            closing_at_ms: 1300,
            closed_at_ms: 1600,
        }
    }
}

impl DoorTiming {
    /// Boundaries in phase order
    pub fn boundaries(&self) -> [u32; 3] {
        [self.open_at_ms, self.closing_at_ms, self.closed_at_ms]
    }
}

/// Splash door animation timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplashTiming {
    /// Time between frames
    pub frame_ms: u32,
    /// Extra hold on the shut frame
    pub closed_hold_ms: u32,
    /// Extra hold on the fully open frame
    pub open_hold_ms: u32,
}

impl Default for SplashTiming {
    fn default() -> Self {
        Self {
            frame_ms: 150,
            closed_hold_ms: 2000,
            open_hold_ms: 500,
        }
    }
}

/// Controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControllerConfig {
    /// Tick interval with the rate switch high (ms)
    pub fast_tick_ms: u32,
    /// Tick interval with the rate switch low (ms)
    pub slow_tick_ms: u32,
    /// Beep when a request is accepted
    pub ack_tone: Tone,
    /// Chime on pickup and drop-off
    pub arrival_tone: Tone,
    pub door: DoorTiming,
    pub splash: SplashTiming,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            fast_tick_ms: 100,
            slow_tick_ms: 200,
            ack_tone: Tone::new(2000, 50),
            arrival_tone: Tone::new(1000, 200),
            door: DoorTiming::default(),
            splash: SplashTiming::default(),
        }
    }
}

impl ControllerConfig {
    /// Tick interval for the rate switch position
    pub fn tick_interval(&self, fast: bool) -> u32 {
        if fast {
            self.fast_tick_ms
        } else {
            self.slow_tick_ms
        }
    }

    /// Check the configuration for values the controller cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fast_tick_ms == 0 || self.slow_tick_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.fast_tick_ms > self.slow_tick_ms {
            return Err(ConfigError::FastSlowerThanSlow);
        }
        if !self.ack_tone.is_valid() || !self.arrival_tone.is_valid() {
            return Err(ConfigError::InvalidTone);
        }
        let [open, closing, closed] = self.door.boundaries();
        if !(0 < open && open < closing && closing < closed) {
            return Err(ConfigError::DoorPhaseOrder);
        }
        if self.splash.frame_ms == 0 {
            return Err(ConfigError::ZeroFrameTime);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ControllerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.tick_interval(true), 100);
        assert_eq!(config.tick_interval(false), 200);
    }

    #[test]
    fn test_zero_tick_rejected() {
        let config = ControllerConfig {
            fast_tick_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));
    }

    #[test]
    fn test_fast_slower_than_slow() {
        let config = ControllerConfig {
            fast_tick_ms: 300,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::FastSlowerThanSlow));
    }

    #[test]
    fn test_silent_tone_rejected() {
        let config = ControllerConfig {
            ack_tone: Tone::new(0, 50),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidTone));
    }

    #[test]
    fn test_door_order() {
        let config = ControllerConfig {
            door: DoorTiming {
                open_at_ms: 300,
                closing_at_ms: 300,
                closed_at_ms: 1600,
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::DoorPhaseOrder));
    }

    #[test]
    fn test_zero_frame_time() {
        let mut config = ControllerConfig::default();
        config.splash.frame_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroFrameTime));
    }
}
