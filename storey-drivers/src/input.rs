//! Operator inputs: call buttons, slide switches and serial bytes

use portable_atomic::{AtomicU8, Ordering};
use storey_core::traits::{InputSource, SwitchBank};
use storey_hal::gpio::read_bits;
use storey_hal::{InputPin, UartRx};
use storey_protocol::ButtonId;

const EMPTY: u8 = 0;

/// Single-slot mailbox for the latest button press
///
/// Written from the button task, read by the controller loop. A newer
/// press overwrites an unread one.
pub struct ButtonMailbox {
    slot: AtomicU8,
}

impl Default for ButtonMailbox {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonMailbox {
    pub const fn new() -> Self {
        Self {
            slot: AtomicU8::new(EMPTY),
        }
    }

    /// Record a press
    pub fn post(&self, button: ButtonId) {
        self.slot.store(button.code(), Ordering::Release);
    }

    /// Take the pending press, leaving the mailbox empty
    pub fn take(&self) -> Option<ButtonId> {
        ButtonId::from_code(self.slot.swap(EMPTY, Ordering::AcqRel))
    }

    pub fn is_empty(&self) -> bool {
        self.slot.load(Ordering::Acquire) == EMPTY
    }
}

/// Destination and rate slide switches
pub struct SlideSwitches<P> {
    destination: [P; 2],
    rate: P,
}

impl<P: InputPin> SlideSwitches<P> {
    /// `destination[0]` is S0 (bit 0), `rate` is S2
    pub fn new(destination: [P; 2], rate: P) -> Self {
        Self { destination, rate }
    }
}

impl<P: InputPin> SwitchBank for SlideSwitches<P> {
    fn destination_bits(&mut self) -> u8 {
        read_bits(&self.destination)
    }

    fn fast_selected(&mut self) -> bool {
        self.rate.is_high()
    }
}

/// Button mailbox plus the terminal's receive side
pub struct OperatorInputs<'a, R> {
    mailbox: &'a ButtonMailbox,
    rx: R,
    rx_errors: u32,
}

impl<'a, R: UartRx> OperatorInputs<'a, R> {
    pub fn new(mailbox: &'a ButtonMailbox, rx: R) -> Self {
        Self {
            mailbox,
            rx,
            rx_errors: 0,
        }
    }

    /// Receive errors seen so far (framing, overrun)
    pub fn rx_errors(&self) -> u32 {
        self.rx_errors
    }
}

impl<R: UartRx> InputSource for OperatorInputs<'_, R> {
    fn take_button(&mut self) -> Option<ButtonId> {
        self.mailbox.take()
    }

    fn take_serial_byte(&mut self) -> Option<u8> {
        match self.rx.try_read_byte() {
            Ok(byte) => byte,
            Err(_) => {
                self.rx_errors = self.rx_errors.saturating_add(1);
                None
            }
        }
    }

    fn discard_pending(&mut self) {
        if self.rx.drain().is_err() {
            self.rx_errors = self.rx_errors.saturating_add(1);
        }
        let _ = self.mailbox.take();
    }
}
