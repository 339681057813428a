//! Operator input traits

use storey_protocol::ButtonId;

/// Discrete events from the buttons and the serial terminal
///
/// All reads are non-blocking and consume what they return.
pub trait InputSource {
    /// Most recent button press since the last call
    fn take_button(&mut self) -> Option<ButtonId>;

    /// Next received serial byte
    fn take_serial_byte(&mut self) -> Option<u8>;

    /// Drop any pending button press and serial input
    fn discard_pending(&mut self) {
        while self.take_serial_byte().is_some() {}
        let _ = self.take_button();
    }
}

/// The three slide switches
pub trait SwitchBank {
    /// S1:S0 as a two-bit value
    fn destination_bits(&mut self) -> u8;

    /// S2 high selects the fast tick interval
    fn fast_selected(&mut self) -> bool;
}
