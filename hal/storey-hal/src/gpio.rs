//! GPIO pin abstractions
//!
//! Digital outputs drive the door LEDs, the seven-segment lines and the
//! LED matrix chip select. Digital inputs read the slide switches.

/// Digital output pin
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Read a group of input pins as a little-endian bit field
///
/// `pins[0]` is bit 0. Used for the two-bit destination switch bank.
pub fn read_bits<P: InputPin>(pins: &[P]) -> u8 {
    pins.iter()
        .take(8)
        .enumerate()
        .fold(0u8, |acc, (bit, pin)| {
            if pin.is_high() {
                acc | (1 << bit)
            } else {
                acc
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPin(bool);

    impl InputPin for FixedPin {
        fn is_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_read_bits() {
        assert_eq!(read_bits(&[FixedPin(false), FixedPin(false)]), 0);
        assert_eq!(read_bits(&[FixedPin(true), FixedPin(false)]), 1);
        assert_eq!(read_bits(&[FixedPin(false), FixedPin(true)]), 2);
        assert_eq!(read_bits(&[FixedPin(true), FixedPin(true)]), 3);
    }

    #[test]
    fn test_read_bits_empty() {
        let pins: [FixedPin; 0] = [];
        assert_eq!(read_bits(&pins), 0);
    }
}
