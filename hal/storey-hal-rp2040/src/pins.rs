//! Pin bank for config-driven GPIO assignment
//!
//! General-purpose pins are handed out by number from the TOML pin map.
//! The UART, SPI and buzzer pins are routed to fixed peripherals and are
//! split off up front, so asking the bank for one of them fails.

use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals::{PIN_0, PIN_1, PIN_15, PIN_18, PIN_19, PWM_SLICE7, SPI0, UART0};
use embassy_rp::{Peri, Peripherals};
use storey_core::config::{PinConfig, MAX_GPIO, RESERVED_GPIO};

use crate::gpio::{BoardInput, BoardOutput};

/// Number of GPIOs on the RP2040
const GPIO_COUNT: usize = MAX_GPIO as usize + 1;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin already taken
    AlreadyTaken(u8),
    /// Pin routed to a fixed-function peripheral
    Reserved(u8),
}

/// Peripherals with fixed pin routing on the board
pub struct FixedFunctionPeripherals {
    /// Serial terminal
    pub uart0: Peri<'static, UART0>,
    pub uart_tx: Peri<'static, PIN_0>,
    pub uart_rx: Peri<'static, PIN_1>,
    /// LED matrix link
    pub spi0: Peri<'static, SPI0>,
    pub spi_sck: Peri<'static, PIN_18>,
    pub spi_mosi: Peri<'static, PIN_19>,
    /// Buzzer on PWM channel 7B
    pub pwm_slice: Peri<'static, PWM_SLICE7>,
    pub buzzer: Peri<'static, PIN_15>,
}

/// Holds the general-purpose GPIOs and gives them out by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT],
}

impl PinBank {
    /// Split the peripherals into the pin bank and the fixed-function set
    pub fn from_peripherals(p: Peripherals) -> (Self, FixedFunctionPeripherals) {
        let bank = Self {
            pins: [
                None, // UART0 TX
                None, // UART0 RX
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                None, // buzzer
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                None, // SPI0 SCK
                None, // SPI0 TX
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        };
        let fixed = FixedFunctionPeripherals {
            uart0: p.UART0,
            uart_tx: p.PIN_0,
            uart_rx: p.PIN_1,
            spi0: p.SPI0,
            spi_sck: p.PIN_18,
            spi_mosi: p.PIN_19,
            pwm_slice: p.PWM_SLICE7,
            buzzer: p.PIN_15,
        };
        (bank, fixed)
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        if pin_num > MAX_GPIO {
            return Err(PinError::InvalidPin(pin_num));
        }
        if RESERVED_GPIO.contains(&pin_num) {
            return Err(PinError::Reserved(pin_num));
        }
        self.pins[pin_num as usize]
            .take()
            .ok_or(PinError::AlreadyTaken(pin_num))
    }

    /// Check if a pin is available
    pub fn is_available(&self, pin_num: u8) -> bool {
        self.pins
            .get(pin_num as usize)
            .is_some_and(|slot| slot.is_some())
    }

    /// Take a pin and configure it as an output, initially inactive
    pub fn output(&mut self, config: &PinConfig) -> Result<BoardOutput, PinError> {
        Ok(BoardOutput::new(self.take(config.pin)?, config.inverted))
    }

    /// Take a pin and configure it as an input
    pub fn input(&mut self, config: &PinConfig) -> Result<BoardInput, PinError> {
        Ok(BoardInput::new(
            self.take(config.pin)?,
            config.pull_up,
            config.inverted,
        ))
    }

    /// Configure a fixed-size group of outputs
    pub fn outputs<const N: usize>(
        &mut self,
        configs: &[PinConfig; N],
    ) -> Result<[BoardOutput; N], PinError> {
        let mut taken: heapless::Vec<BoardOutput, N> = heapless::Vec::new();
        for config in configs {
            // Capacity is N, pushes cannot fail
            let _ = taken.push(self.output(config)?);
        }
        taken
            .into_array()
            .map_err(|_| PinError::InvalidPin(u8::MAX))
    }

    /// Configure a fixed-size group of inputs
    pub fn inputs<const N: usize>(
        &mut self,
        configs: &[PinConfig; N],
    ) -> Result<[BoardInput; N], PinError> {
        let mut taken: heapless::Vec<BoardInput, N> = heapless::Vec::new();
        for config in configs {
            let _ = taken.push(self.input(config)?);
        }
        taken
            .into_array()
            .map_err(|_| PinError::InvalidPin(u8::MAX))
    }
}
