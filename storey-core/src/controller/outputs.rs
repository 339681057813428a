//! What one polling cycle asks the drivers to do

use crate::broker::{IntakeOutcome, Transfer};
use crate::feedback::{DoorPattern, SplashFrame, ToneCommand};
use crate::status::StatusRecord;
use crate::traits::{DisplayError, DoorIndicator, StatusSink, ToneOutput};

/// Results of one [`Controller::poll`](super::Controller::poll)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Outputs {
    /// Left the splash this cycle; displays must draw the run view
    pub entered_run: bool,
    /// Splash frame due this cycle
    pub splash_frame: Option<SplashFrame>,
    /// New status to show (state changed)
    pub status: Option<StatusRecord>,
    /// New door LED pattern
    pub door: Option<DoorPattern>,
    /// Buzzer change
    pub tone: Option<ToneCommand>,
    /// Pickup or drop-off this cycle
    pub transfer: Option<Transfer>,
    /// Request intake result
    pub intake: IntakeOutcome,
    /// Serial byte that was not a command
    pub unrecognized: Option<u8>,
}

impl Default for Outputs {
    fn default() -> Self {
        Self {
            entered_run: false,
            splash_frame: None,
            status: None,
            door: None,
            tone: None,
            transfer: None,
            intake: IntakeOutcome::NoCall,
            unrecognized: None,
        }
    }
}

impl Outputs {
    /// Draw this cycle's changes on a display
    pub fn render<S: StatusSink + ?Sized>(&self, sink: &mut S) -> Result<(), DisplayError> {
        if let Some(frame) = self.splash_frame {
            sink.show_splash(frame)?;
        }
        if self.entered_run {
            sink.begin_run()?;
        }
        if let Some(record) = &self.status {
            sink.show_status(record)?;
        }
        Ok(())
    }

    /// Drive the door LEDs and the buzzer
    pub fn annunciate<D: DoorIndicator, T: ToneOutput>(&self, door: &mut D, tone: &mut T) {
        if let Some(pattern) = self.door {
            door.show_doors(pattern);
        }
        match self.tone {
            Some(ToneCommand::Start(freq_hz)) => tone.start(freq_hz),
            Some(ToneCommand::Stop) => tone.stop(),
            None => {}
        }
    }
}
