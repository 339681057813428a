//! One-shot phase timer

/// Timer with `N` boundaries splitting time since `start` into `N + 1`
/// phases
///
/// Phase `i` covers `[boundaries[i - 1], boundaries[i])`, with phase 0
/// starting at the trigger. Once the last boundary is passed the timer
/// stops itself and reports the terminal phase `N` from then on.
#[derive(Debug, Clone)]
pub struct PhaseTimer<const N: usize> {
    boundaries: [u32; N],
    started_ms: u32,
    running: bool,
}

impl<const N: usize> PhaseTimer<N> {
    /// Idle timer; boundaries must be increasing
    pub const fn new(boundaries: [u32; N]) -> Self {
        Self {
            boundaries,
            started_ms: 0,
            running: false,
        }
    }

    /// (Re)start from phase 0
    pub fn start(&mut self, now_ms: u32) {
        self.started_ms = now_ms;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current phase, `None` if never started
    ///
    /// Elapsed time uses wrapping subtraction. The timer stops on reaching
    /// the terminal phase so a long idle period cannot wrap back into
    /// phase 0.
    pub fn phase(&mut self, now_ms: u32) -> Option<usize> {
        if !self.running {
            return None;
        }
        let elapsed = now_ms.wrapping_sub(self.started_ms);
        let phase = self.boundaries.iter().take_while(|&&b| elapsed >= b).count();
        if phase == N {
            self.running = false;
        }
        Some(phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_timer() {
        let mut timer = PhaseTimer::new([10, 20]);
        assert!(!timer.is_running());
        assert_eq!(timer.phase(5), None);
    }

    #[test]
    fn test_phases() {
        let mut timer = PhaseTimer::new([10, 20]);
        timer.start(100);
        assert_eq!(timer.phase(100), Some(0));
        assert_eq!(timer.phase(109), Some(0));
        assert_eq!(timer.phase(110), Some(1));
        assert_eq!(timer.phase(119), Some(1));
        assert_eq!(timer.phase(120), Some(2));
        assert!(!timer.is_running());
        assert_eq!(timer.phase(200), None);
    }

    #[test]
    fn test_restart() {
        let mut timer = PhaseTimer::new([10]);
        timer.start(0);
        assert_eq!(timer.phase(5), Some(0));
        timer.start(5);
        assert_eq!(timer.phase(14), Some(0));
        assert_eq!(timer.phase(15), Some(1));
    }

    #[test]
    fn test_wraparound() {
        let mut timer = PhaseTimer::new([10]);
        timer.start(u32::MAX - 4);
        assert_eq!(timer.phase(2), Some(0));
        assert_eq!(timer.phase(5), Some(1));
    }

    #[test]
    fn test_late_poll_lands_in_terminal() {
        let mut timer = PhaseTimer::new([10, 20, 30]);
        timer.start(0);
        assert_eq!(timer.phase(1000), Some(3));
    }
}
