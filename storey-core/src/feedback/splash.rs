//! Splash-screen door animation
//!
//! Doors open frame by frame (0 shut .. 3 fully open) and close again,
//! pausing on the shut and fully open frames.

use crate::config::SplashTiming;

/// Highest splash frame (doors fully open)
pub const LAST_FRAME: u8 = 3;

/// Door frame to draw, 0 (shut) ..= 3 (fully open)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SplashFrame(pub u8);

impl SplashFrame {
    /// How far the doors are drawn apart, in columns per side
    pub fn opening(self) -> u8 {
        self.0
    }
}

/// Ping-pong door animation
#[derive(Debug, Clone)]
pub struct SplashAnimation {
    timing: SplashTiming,
    frame: u8,
    opening: bool,
    last_draw_ms: u32,
    wait_ms: Option<u32>,
}

impl SplashAnimation {
    pub fn new(timing: SplashTiming) -> Self {
        Self {
            timing,
            frame: 0,
            opening: true,
            last_draw_ms: 0,
            wait_ms: None,
        }
    }

    /// Frame to draw at `now_ms`, if one is due
    ///
    /// The first poll draws immediately.
    pub fn poll(&mut self, now_ms: u32) -> Option<SplashFrame> {
        if let Some(wait) = self.wait_ms {
            if now_ms.wrapping_sub(self.last_draw_ms) < wait {
                return None;
            }
        }

        let frame = SplashFrame(self.frame);
        self.last_draw_ms = now_ms;
        self.wait_ms = Some(self.hold_after(self.frame));
        self.advance();
        Some(frame)
    }

    fn hold_after(&self, frame: u8) -> u32 {
        let hold = match frame {
            0 => self.timing.closed_hold_ms,
            LAST_FRAME => self.timing.open_hold_ms,
            _ => 0,
        };
        self.timing.frame_ms.saturating_add(hold)
    }

    fn advance(&mut self) {
        if self.opening {
            self.frame += 1;
            if self.frame == LAST_FRAME {
                self.opening = false;
            }
        } else {
            self.frame -= 1;
            if self.frame == 0 {
                self.opening = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_poll_draws() {
        let mut splash = SplashAnimation::new(SplashTiming::default());
        assert_eq!(splash.poll(1234), Some(SplashFrame(0)));
        assert_eq!(splash.poll(1235), None);
    }

    #[test]
    fn test_sequence_and_holds() {
        let timing = SplashTiming::default();
        let mut splash = SplashAnimation::new(timing);
        let mut now = 0;
        let mut frames = [0u8; 8];

        for slot in frames.iter_mut() {
            let frame = loop {
                if let Some(frame) = splash.poll(now) {
                    break frame;
                }
                now += 10;
            };
            *slot = frame.0;
        }
        assert_eq!(frames, [0, 1, 2, 3, 2, 1, 0, 1]);
    }

    #[test]
    fn test_shut_frame_held() {
        let timing = SplashTiming::default();
        let mut splash = SplashAnimation::new(timing);
        splash.poll(0);
        let shut_hold = timing.frame_ms + timing.closed_hold_ms;
        assert_eq!(splash.poll(shut_hold - 1), None);
        assert_eq!(splash.poll(shut_hold), Some(SplashFrame(1)));
    }

    #[test]
    fn test_open_frame_held() {
        let timing = SplashTiming::default();
        let mut splash = SplashAnimation::new(timing);
        let mut now = 0;
        splash.poll(now);
        now += timing.frame_ms + timing.closed_hold_ms;
        splash.poll(now); // 1
        now += timing.frame_ms;
        splash.poll(now); // 2
        now += timing.frame_ms;
        assert_eq!(splash.poll(now), Some(SplashFrame(3)));

        let open_hold = timing.frame_ms + timing.open_hold_ms;
        assert_eq!(splash.poll(now + open_hold - 1), None);
        assert_eq!(splash.poll(now + open_hold), Some(SplashFrame(2)));
    }
}
