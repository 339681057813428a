//! Floor-crossing counters

/// Floors crossed with and without a traveller aboard
///
/// Both totals only ever grow. Their sum is the number of floor rows the
/// cabin has arrived at by moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FloorCounters {
    with_traveller: u32,
    without_traveller: u32,
}

impl FloorCounters {
    pub const fn new() -> Self {
        Self {
            with_traveller: 0,
            without_traveller: 0,
        }
    }

    /// Count one floor crossing
    pub fn record_crossing(&mut self, onboard: bool) {
        if onboard {
            self.with_traveller = self.with_traveller.saturating_add(1);
        } else {
            self.without_traveller = self.without_traveller.saturating_add(1);
        }
    }

    /// Floors crossed with a traveller onboard
    pub fn with_traveller(&self) -> u32 {
        self.with_traveller
    }

    /// Floors crossed while empty
    pub fn without_traveller(&self) -> u32 {
        self.without_traveller
    }

    pub fn total(&self) -> u32 {
        self.with_traveller.saturating_add(self.without_traveller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_crossing() {
        let mut counters = FloorCounters::new();
        counters.record_crossing(false);
        counters.record_crossing(true);
        counters.record_crossing(true);
        assert_eq!(counters.without_traveller(), 1);
        assert_eq!(counters.with_traveller(), 2);
        assert_eq!(counters.total(), 3);
    }

    #[test]
    fn test_saturates() {
        let mut counters = FloorCounters {
            with_traveller: u32::MAX,
            without_traveller: 0,
        };
        counters.record_crossing(true);
        assert_eq!(counters.with_traveller(), u32::MAX);
    }
}
