//! Door-cycle animation on the four door LEDs

use super::PhaseTimer;
use crate::config::DoorTiming;

/// Door animation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DoorPhase {
    Closed,
    Open,
    Closing,
}

impl DoorPhase {
    /// LED pattern for this phase
    pub fn pattern(self) -> DoorPattern {
        match self {
            DoorPhase::Closed | DoorPhase::Closing => DoorPattern::CLOSED,
            DoorPhase::Open => DoorPattern::OPEN,
        }
    }

    fn from_timer_phase(phase: usize) -> Self {
        match phase {
            1 => DoorPhase::Open,
            2 => DoorPhase::Closing,
            _ => DoorPhase::Closed,
        }
    }
}

/// Door LED states, bit `n` drives LED `Ln`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DoorPattern(pub u8);

impl DoorPattern {
    /// Inner pair lit
    pub const CLOSED: DoorPattern = DoorPattern(0b0110);
    /// Outer pair lit
    pub const OPEN: DoorPattern = DoorPattern(0b1001);

    /// Whether LED `index` (0..=3) is lit
    pub fn is_lit(self, index: u8) -> bool {
        index < 4 && self.0 & (1 << index) != 0
    }
}

/// One-shot door cycle: closed, open, closing, closed
#[derive(Debug, Clone)]
pub struct DoorAnimation {
    timer: PhaseTimer<3>,
    shown: Option<DoorPattern>,
}

impl DoorAnimation {
    pub fn new(timing: &DoorTiming) -> Self {
        Self {
            timer: PhaseTimer::new(timing.boundaries()),
            shown: None,
        }
    }

    /// Start the cycle, restarting it if already running
    pub fn trigger(&mut self, now_ms: u32) {
        self.timer.start(now_ms);
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Phase at `now_ms`; the resting state is `Closed`
    pub fn phase(&mut self, now_ms: u32) -> DoorPhase {
        self.timer
            .phase(now_ms)
            .map_or(DoorPhase::Closed, DoorPhase::from_timer_phase)
    }

    /// Pattern to drive, only when it differs from the last one returned
    pub fn poll(&mut self, now_ms: u32) -> Option<DoorPattern> {
        let pattern = self.phase(now_ms).pattern();
        if self.shown == Some(pattern) {
            None
        } else {
            self.shown = Some(pattern);
            Some(pattern)
        }
    }

    /// Forget the last pattern so the next poll drives the LEDs again
    pub fn invalidate(&mut self) {
        self.shown = None;
    }
}
