//! PWM tone output
//!
//! The buzzer is driven by a PWM slice at 50% duty. Frequency changes
//! take effect immediately; there is no blocking tone generation.

/// PWM channel able to produce an audible square wave
pub trait ToneChannel {
    /// Start (or retune) a square wave at `freq_hz`
    fn start_tone(&mut self, freq_hz: u16);

    /// Stop output and hold the pin low
    fn stop_tone(&mut self);

    /// Check whether a tone is currently playing
    fn is_sounding(&self) -> bool;
}
