//! Seven-segment multiplexing task
//!
//! Alternates the two digits every few milliseconds and picks up the
//! latest status from the controller between refreshes.

use defmt::*;
use embassy_time::{Duration, Ticker};

use storey_core::traits::StatusSink;

use crate::board::Segments;
use crate::channels::SEGMENT_STATUS;

/// Time each digit stays lit
const DIGIT_PERIOD_MS: u64 = 4;

#[embassy_executor::task]
pub async fn segment_task(mut display: Segments) {
    info!("Segment task started");

    let mut ticker = Ticker::every(Duration::from_millis(DIGIT_PERIOD_MS));

    loop {
        ticker.next().await;

        if let Some(record) = SEGMENT_STATUS.try_take() {
            // Infallible for the segment display
            let _ = display.show_status(&record);
        }
        display.refresh();
    }
}
