//! GPIO wrappers for the board functions
//!
//! Both wrappers work in logical levels: an inverted (active-low) pin
//! reads and writes the opposite electrical level, so drivers never see
//! the wiring.

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;
use storey_hal::{InputPin, OutputPin};

/// Digital output with optional active-low wiring
pub struct BoardOutput {
    pin: Output<'static>,
    /// If true, active = pin LOW
    inverted: bool,
}

impl BoardOutput {
    /// Configure the pin as an output in its inactive state
    pub fn new(pin: Peri<'static, AnyPin>, inverted: bool) -> Self {
        let idle = if inverted { Level::High } else { Level::Low };
        Self {
            pin: Output::new(pin, idle),
            inverted,
        }
    }
}

impl OutputPin for BoardOutput {
    fn set_high(&mut self) {
        if self.inverted {
            self.pin.set_low();
        } else {
            self.pin.set_high();
        }
    }

    fn set_low(&mut self) {
        if self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high() != self.inverted
    }
}

/// Digital input with optional pull-up and active-low wiring
pub struct BoardInput {
    pin: Input<'static>,
    inverted: bool,
}

impl BoardInput {
    pub fn new(pin: Peri<'static, AnyPin>, pull_up: bool, inverted: bool) -> Self {
        let pull = if pull_up { Pull::Up } else { Pull::None };
        Self {
            pin: Input::new(pin, pull),
            inverted,
        }
    }

    /// Wait for the input to become active
    pub async fn wait_for_active(&mut self) {
        if self.inverted {
            self.pin.wait_for_falling_edge().await;
        } else {
            self.pin.wait_for_rising_edge().await;
        }
    }

    /// Wait for the input to return to inactive
    pub async fn wait_for_inactive(&mut self) {
        if self.inverted {
            self.pin.wait_for_high().await;
        } else {
            self.pin.wait_for_low().await;
        }
    }
}

impl InputPin for BoardInput {
    fn is_high(&self) -> bool {
        self.pin.is_high() != self.inverted
    }
}
