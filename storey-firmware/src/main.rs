//! Storey - Elevator Emulator Firmware
//!
//! Main firmware binary for the RP2040 elevator emulator board: one
//! cabin, four floors, drawn on an LED matrix with a seven-segment
//! floor indicator, door LEDs, a buzzer and a serial status terminal.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::spi::Spi;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use storey_display::{PanelLayout, StatusPanel};
use storey_drivers::{Buzzer, MatrixRenderer, OperatorInputs, SpiMatrix, TerminalBackend};
use storey_hal::spi::SpiConfig;
use storey_hal::uart::UartConfig;
use storey_hal_rp2040::{
    spi_config, uart_config, PinBank, PwmTone, SerialRx, SerialTx, SpiLink,
};
use storey_protocol::ButtonId;

use crate::board::Board;
use crate::channels::BUTTONS;
use crate::tasks::ControllerPeripherals;

mod board;
mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Storey firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    let (mut bank, fixed) = PinBank::from_peripherals(p);
    let board = match Board::take(&mut bank, &config.pins) {
        Ok(board) => board,
        Err(e) => defmt::panic!("Pin setup failed: {:?}", e),
    };
    info!("Board pins configured");

    // Serial terminal on UART0 (GPIO0 TX, GPIO1 RX)
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 64]);
    let uart = Uart::new_blocking(
        fixed.uart0,
        fixed.uart_tx,
        fixed.uart_rx,
        uart_config(&UartConfig::default()),
    );
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    let mut terminal = TerminalBackend::new(SerialTx::new(tx));
    if let Err(e) = terminal.init() {
        warn!("Terminal init failed: {:?}", e);
    }
    info!("UART initialized for status terminal");

    // LED matrix on SPI0 (GPIO18 SCK, GPIO19 TX)
    let spi = Spi::new_blocking_txonly(
        fixed.spi0,
        fixed.spi_sck,
        fixed.spi_mosi,
        spi_config(&SpiConfig::default()),
    );
    let matrix = MatrixRenderer::new(SpiMatrix::new(SpiLink::new(spi), board.matrix_cs));
    info!("SPI initialized for LED matrix");

    // Buzzer on PWM slice 7 channel B (GPIO15)
    let pwm = Pwm::new_output_b(fixed.pwm_slice, fixed.buzzer, PwmConfig::default());
    let buzzer = Buzzer::new(PwmTone::new(pwm));

    let io = ControllerPeripherals {
        inputs: OperatorInputs::new(&BUTTONS, SerialRx::new(rx)),
        switches: board.switches,
        matrix,
        panel: StatusPanel::new(terminal, PanelLayout::default()),
        doors: board.doors,
        buzzer,
    };

    // Spawn tasks
    for (input, button) in board.buttons.into_iter().zip(ButtonId::ALL) {
        unwrap!(spawner.spawn(tasks::button_task(input, button)));
    }
    unwrap!(spawner.spawn(tasks::segment_task(board.segments)));
    unwrap!(spawner.spawn(tasks::controller_task(config.controller, io)));

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
