//! Ignored-input counters

use crate::broker::IntakeOutcome;

/// Tally of discarded and rejected input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputDiagnostics {
    unrecognized_bytes: u32,
    last_unrecognized: Option<u8>,
    same_floor_rejections: u32,
    busy_rejections: u32,
}

impl InputDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a serial byte that is not a known command
    pub fn record_unrecognized(&mut self, byte: u8) {
        self.unrecognized_bytes = self.unrecognized_bytes.saturating_add(1);
        self.last_unrecognized = Some(byte);
    }

    /// Count rejections from an intake cycle
    pub fn record_intake(&mut self, outcome: &IntakeOutcome) {
        match outcome {
            IntakeOutcome::SameFloor(_) => {
                self.same_floor_rejections = self.same_floor_rejections.saturating_add(1)
            }
            IntakeOutcome::Busy(_) => {
                self.busy_rejections = self.busy_rejections.saturating_add(1)
            }
            IntakeOutcome::NoCall | IntakeOutcome::Accepted { .. } => {}
        }
    }

    pub fn unrecognized_bytes(&self) -> u32 {
        self.unrecognized_bytes
    }

    /// Most recent unrecognized byte
    pub fn last_unrecognized(&self) -> Option<u8> {
        self.last_unrecognized
    }

    /// Calls for the floor already on the destination switch
    pub fn same_floor_rejections(&self) -> u32 {
        self.same_floor_rejections
    }

    /// Calls discarded while the cabin was busy
    pub fn busy_rejections(&self) -> u32 {
        self.busy_rejections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broker::{CallRequest, CallSource};
    use crate::floor::Floor;

    const CALL: CallRequest = CallRequest {
        floor: Floor::First,
        source: CallSource::Serial,
    };

    #[test]
    fn test_unrecognized() {
        let mut diag = InputDiagnostics::new();
        diag.record_unrecognized(b'x');
        diag.record_unrecognized(b'9');
        assert_eq!(diag.unrecognized_bytes(), 2);
        assert_eq!(diag.last_unrecognized(), Some(b'9'));
    }

    #[test]
    fn test_intake_outcomes() {
        let mut diag = InputDiagnostics::new();
        diag.record_intake(&IntakeOutcome::SameFloor(CALL));
        diag.record_intake(&IntakeOutcome::Busy(CALL));
        diag.record_intake(&IntakeOutcome::Busy(CALL));
        diag.record_intake(&IntakeOutcome::NoCall);
        diag.record_intake(&IntakeOutcome::Accepted {
            pickup: Floor::First,
            destination: Floor::Third,
        });
        assert_eq!(diag.same_floor_rejections(), 1);
        assert_eq!(diag.busy_rejections(), 2);
    }
}
