//! Door LEDs and piezo buzzer

use storey_core::feedback::DoorPattern;
use storey_core::traits::{DoorIndicator, ToneOutput};
use storey_hal::{OutputPin, ToneChannel};

/// Number of door LEDs
pub const DOOR_LED_COUNT: usize = 4;

/// Four door LEDs on GPIO outputs
///
/// A high pin means a lit LED; active-low wiring is handled by the pin.
pub struct DoorLeds<P> {
    pins: [P; DOOR_LED_COUNT],
    pattern: DoorPattern,
}

impl<P: OutputPin> DoorLeds<P> {
    /// Create the driver with every LED off
    pub fn new(pins: [P; DOOR_LED_COUNT]) -> Self {
        let mut leds = Self {
            pins,
            pattern: DoorPattern(0),
        };
        leds.show_doors(DoorPattern(0));
        leds
    }

    /// Pattern currently shown
    pub fn pattern(&self) -> DoorPattern {
        self.pattern
    }
}

impl<P: OutputPin> DoorIndicator for DoorLeds<P> {
    fn show_doors(&mut self, pattern: DoorPattern) {
        self.pattern = pattern;
        for (index, pin) in self.pins.iter_mut().enumerate() {
            pin.set_state(pattern.is_lit(index as u8));
        }
    }
}

/// Piezo buzzer on a PWM tone channel
pub struct Buzzer<C> {
    channel: C,
}

impl<C: ToneChannel> Buzzer<C> {
    pub fn new(mut channel: C) -> Self {
        channel.stop_tone();
        Self { channel }
    }

    pub fn is_sounding(&self) -> bool {
        self.channel.is_sounding()
    }
}

impl<C: ToneChannel> ToneOutput for Buzzer<C> {
    fn start(&mut self, freq_hz: u16) {
        if freq_hz == 0 {
            self.channel.stop_tone();
        } else {
            self.channel.start_tone(freq_hz);
        }
    }

    fn stop(&mut self) {
        self.channel.stop_tone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[derive(Default)]
    struct MockChannel {
        freq: Option<u16>,
    }

    impl ToneChannel for MockChannel {
        fn start_tone(&mut self, freq_hz: u16) {
            self.freq = Some(freq_hz);
        }

        fn stop_tone(&mut self) {
            self.freq = None;
        }

        fn is_sounding(&self) -> bool {
            self.freq.is_some()
        }
    }

    fn levels(leds: &DoorLeds<MockPin>) -> [bool; 4] {
        let mut out = [false; 4];
        for (level, pin) in out.iter_mut().zip(leds.pins.iter()) {
            *level = pin.high;
        }
        out
    }

    #[test]
    fn test_door_patterns() {
        let mut leds = DoorLeds::new(Default::default());
        assert_eq!(levels(&leds), [false; 4]);

        leds.show_doors(DoorPattern::CLOSED);
        assert_eq!(levels(&leds), [false, true, true, false]);

        leds.show_doors(DoorPattern::OPEN);
        assert_eq!(levels(&leds), [true, false, false, true]);
        assert_eq!(leds.pattern(), DoorPattern::OPEN);
    }

    #[test]
    fn test_blank_pattern() {
        let mut leds = DoorLeds::new(Default::default());
        leds.show_doors(DoorPattern::OPEN);
        leds.show_doors(DoorPattern(0));
        assert_eq!(levels(&leds), [false; 4]);
    }

    #[test]
    fn test_buzzer() {
        let mut buzzer = Buzzer::new(MockChannel::default());
        assert!(!buzzer.is_sounding());

        buzzer.start(2000);
        assert_eq!(buzzer.channel.freq, Some(2000));

        buzzer.stop();
        assert!(!buzzer.is_sounding());
    }

    #[test]
    fn test_zero_frequency_is_silence() {
        let mut buzzer = Buzzer::new(MockChannel::default());
        buzzer.start(0);
        assert!(!buzzer.is_sounding());
    }
}
