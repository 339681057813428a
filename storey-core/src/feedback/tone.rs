//! Non-blocking tone timer

use super::PhaseTimer;
use crate::config::Tone;

/// Command for the buzzer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneCommand {
    /// Start sounding at the given frequency (Hz)
    Start(u16),
    Stop,
}

/// Plays one tone at a time for its configured duration
#[derive(Debug, Clone)]
pub struct ToneTimer {
    timer: PhaseTimer<1>,
}

impl Default for ToneTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneTimer {
    pub const fn new() -> Self {
        Self {
            timer: PhaseTimer::new([0]),
        }
    }

    /// Start `tone`, cutting short any tone already playing
    pub fn play(&mut self, now_ms: u32, tone: Tone) -> ToneCommand {
        self.timer = PhaseTimer::new([u32::from(tone.duration_ms)]);
        self.timer.start(now_ms);
        ToneCommand::Start(tone.freq_hz)
    }

    pub fn is_sounding(&self) -> bool {
        self.timer.is_running()
    }

    /// `Stop` once the tone's duration has elapsed
    pub fn poll(&mut self, now_ms: u32) -> Option<ToneCommand> {
        match self.timer.phase(now_ms) {
            Some(1) => Some(ToneCommand::Stop),
            _ => None,
        }
    }
}
