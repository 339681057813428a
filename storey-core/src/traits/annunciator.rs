//! Buzzer and door LED traits

use crate::feedback::DoorPattern;

/// Tone generator
pub trait ToneOutput {
    /// Start a square wave at `freq_hz`
    fn start(&mut self, freq_hz: u16);

    /// Stop sounding
    fn stop(&mut self);
}

/// The four door LEDs
pub trait DoorIndicator {
    fn show_doors(&mut self, pattern: DoorPattern);
}
