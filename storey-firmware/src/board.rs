//! Board wiring
//!
//! Concrete driver types for the RP2040 emulator board and the
//! construction of the config-assigned GPIOs.

use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};

use storey_core::config::BoardPins;
use storey_display::StatusPanel;
use storey_drivers::{
    Buzzer, DoorLeds, MatrixRenderer, OperatorInputs, SegmentDisplay, SlideSwitches, SpiMatrix,
    TerminalBackend,
};
use storey_hal_rp2040::{BoardInput, BoardOutput, PinBank, PinError, PwmTone, SerialRx, SerialTx};

pub type Matrix = MatrixRenderer<SpiMatrix<SpiLink0, BoardOutput>>;
pub type SpiLink0 = storey_hal_rp2040::SpiLink<Spi<'static, SPI0, Blocking>>;
pub type Panel = StatusPanel<TerminalBackend<SerialTx<BufferedUartTx>>>;
pub type Segments = SegmentDisplay<BoardOutput, BoardOutput>;
pub type Doors = DoorLeds<BoardOutput>;
pub type Switches = SlideSwitches<BoardInput>;
pub type Inputs = OperatorInputs<'static, SerialRx<BufferedUartRx>>;
pub type Beeper = Buzzer<PwmTone>;

/// GPIO-driven parts of the board
pub struct Board {
    /// Call buttons B0..B3
    pub buttons: [BoardInput; 4],
    pub switches: Switches,
    pub doors: Doors,
    pub segments: Segments,
    pub matrix_cs: BoardOutput,
}

impl Board {
    /// Claim and configure every pin in the pin map
    pub fn take(bank: &mut PinBank, pins: &BoardPins) -> Result<Self, PinError> {
        let buttons = bank.inputs(&pins.buttons)?;
        let switches = SlideSwitches::new(
            bank.inputs(&pins.destination_switches)?,
            bank.input(&pins.rate_switch)?,
        );
        let doors = DoorLeds::new(bank.outputs(&pins.door_leds)?);
        let segments = SegmentDisplay::new(
            bank.outputs(&pins.segments)?,
            bank.output(&pins.digit_select)?,
        );
        let matrix_cs = bank.output(&pins.matrix_cs)?;

        Ok(Self {
            buttons,
            switches,
            doors,
            segments,
            matrix_cs,
        })
    }
}
