//! Main controller task
//!
//! Runs the elevator polling cycle: sample inputs, advance the core,
//! hand the results to the drivers. Nothing in the loop blocks; the
//! short sleep at the end only yields to the other tasks.

use defmt::*;
use embassy_time::{Instant, Timer};

use storey_core::broker::{IntakeOutcome, Transfer};
use storey_core::config::ControllerConfig;
use storey_core::controller::{Controller, Outputs, PollInputs};
use storey_core::traits::{Clock, InputSource};

use crate::board::{Beeper, Doors, Inputs, Matrix, Panel, Switches};
use crate::channels::SEGMENT_STATUS;

/// Pause between polling cycles
const LOOP_PERIOD_MS: u64 = 1;

/// Cycles longer than this can miss a motion step at the fast rate
const SLOW_CYCLE_MS: u32 = 50;

/// Everything the controller loop drives or reads
pub struct ControllerPeripherals {
    pub inputs: Inputs,
    pub switches: Switches,
    pub matrix: Matrix,
    pub panel: Panel,
    pub doors: Doors,
    pub buzzer: Beeper,
}

/// Milliseconds since boot, wrapping after ~49 days
struct UptimeClock;

impl Clock for UptimeClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

#[embassy_executor::task]
pub async fn controller_task(config: ControllerConfig, mut io: ControllerPeripherals) {
    info!("Controller task started");

    let clock = UptimeClock;
    let mut controller = Controller::new(config, clock.now_ms());

    loop {
        let started = clock.now_ms();
        let inputs = PollInputs::sample(&mut io.inputs, &mut io.switches);
        let outputs = controller.poll(started, &inputs);

        if outputs.entered_run {
            info!("Splash dismissed, elevator running");
            io.inputs.discard_pending();
        }

        if let Err(e) = outputs.render(&mut io.matrix) {
            warn!("Matrix update failed: {:?}", e);
        }
        if let Err(e) = outputs.render(&mut io.panel) {
            warn!("Terminal update failed: {:?}", e);
        }
        if let Some(record) = outputs.status {
            SEGMENT_STATUS.signal(record);
        }
        outputs.annunciate(&mut io.doors, &mut io.buzzer);

        log_cycle(&outputs);

        let busy_ms = clock.elapsed_since(started);
        if busy_ms > SLOW_CYCLE_MS {
            warn!("Slow polling cycle: {}ms", busy_ms);
        }

        Timer::after_millis(LOOP_PERIOD_MS).await;
    }
}

fn log_cycle(outputs: &Outputs) {
    match outputs.intake {
        IntakeOutcome::Accepted {
            pickup,
            destination,
        } => debug!("Request accepted: {:?} -> {:?}", pickup, destination),
        IntakeOutcome::SameFloor(call) => debug!("Ignored call to own floor {:?}", call.floor),
        IntakeOutcome::Busy(call) => trace!("Busy, discarded call {:?}", call),
        IntakeOutcome::NoCall => {}
    }

    match outputs.transfer {
        Some(Transfer::PickedUp { floor, destination }) => {
            debug!("Traveller boarded at {:?} for {:?}", floor, destination)
        }
        Some(Transfer::DroppedOff { floor }) => debug!("Traveller left at {:?}", floor),
        None => {}
    }

    if let Some(byte) = outputs.unrecognized {
        warn!("Unrecognized serial byte 0x{:02x}", byte);
    }
    if let Some(record) = &outputs.status {
        trace!("Status {:?}", record);
    }
}
