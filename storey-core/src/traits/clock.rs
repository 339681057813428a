//! Monotonic millisecond clock

/// Millisecond counter that wraps at `u32::MAX`
///
/// Consumers only compare timestamps with wrapping subtraction.
pub trait Clock {
    fn now_ms(&self) -> u32;

    /// Milliseconds since `earlier`
    fn elapsed_since(&self, earlier: u32) -> u32 {
        self.now_ms().wrapping_sub(earlier)
    }
}
