//! Call button edge capture
//!
//! One task instance per button. A press is posted to the mailbox on the
//! active edge; the line must then stay released for the debounce time
//! before the next press counts.

use defmt::*;
use embassy_time::Timer;

use storey_hal_rp2040::BoardInput;
use storey_protocol::ButtonId;

use crate::channels::BUTTONS;

/// Contact bounce settle time
const DEBOUNCE_MS: u64 = 20;

#[embassy_executor::task(pool_size = 4)]
pub async fn button_task(mut input: BoardInput, button: ButtonId) {
    info!("Button task started for {:?}", button);

    loop {
        input.wait_for_active().await;
        trace!("Button {:?} pressed", button);
        BUTTONS.post(button);

        Timer::after_millis(DEBOUNCE_MS).await;
        input.wait_for_inactive().await;
        Timer::after_millis(DEBOUNCE_MS).await;
    }
}
