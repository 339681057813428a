//! Buzzer tone generation on a PWM slice
//!
//! The slice counts at SYS_CLK / TONE_DIVIDER and wraps at `top`, giving
//! a square wave of SYS_CLK / (TONE_DIVIDER * (top + 1)) Hz at 50% duty.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use fixed::types::U12F4;
use storey_hal::ToneChannel;

/// Fixed clock divider for the tone slice
pub const TONE_DIVIDER: u32 = 64;

/// Calculate the counter wrap value for a tone
///
/// Frequencies too low for a 16-bit counter are clamped to the lowest
/// reachable tone. Returns `None` for 0 Hz.
pub fn calc_tone_top(sys_clk_hz: u32, freq_hz: u16) -> Option<u16> {
    if freq_hz == 0 {
        return None;
    }
    let counts = sys_clk_hz / TONE_DIVIDER / u32::from(freq_hz);
    let top = counts.saturating_sub(1).clamp(1, u32::from(u16::MAX));
    Some(top as u16)
}

/// Piezo buzzer on PWM channel B
pub struct PwmTone {
    pwm: Pwm<'static>,
    config: PwmConfig,
    sounding: bool,
}

impl PwmTone {
    /// Take over a PWM output, starting silent
    pub fn new(mut pwm: Pwm<'static>) -> Self {
        let mut config = PwmConfig::default();
        config.divider = U12F4::from_num(TONE_DIVIDER);
        config.compare_b = 0;
        pwm.set_config(&config);
        Self {
            pwm,
            config,
            sounding: false,
        }
    }
}

impl ToneChannel for PwmTone {
    fn start_tone(&mut self, freq_hz: u16) {
        let Some(top) = calc_tone_top(embassy_rp::clocks::clk_sys_freq(), freq_hz) else {
            self.stop_tone();
            return;
        };
        self.config.top = top;
        self.config.compare_b = top / 2;
        self.pwm.set_config(&self.config);
        self.sounding = true;
    }

    fn stop_tone(&mut self) {
        self.config.compare_b = 0;
        self.pwm.set_config(&self.config);
        self.sounding = false;
    }

    fn is_sounding(&self) -> bool {
        self.sounding
    }
}
