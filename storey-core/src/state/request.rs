//! The single in-flight traveller request
//!
//! Capacity is exactly one traveller. Waiting and onboard are separate
//! variants, so a traveller can never be both.

use crate::floor::Floor;

/// Traveller request state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TravellerRequest {
    /// No traveller
    #[default]
    Empty,
    /// Traveller waiting at `pickup`, wanting to go to `destination`
    Waiting { pickup: Floor, destination: Floor },
    /// Traveller riding the cabin towards `destination`
    Onboard { destination: Floor },
}

impl TravellerRequest {
    /// A traveller is waiting for pickup
    pub fn is_present(&self) -> bool {
        matches!(self, TravellerRequest::Waiting { .. })
    }

    /// A traveller is riding the cabin
    pub fn is_onboard(&self) -> bool {
        matches!(self, TravellerRequest::Onboard { .. })
    }

    /// Waiting or onboard
    pub fn is_active(&self) -> bool {
        !matches!(self, TravellerRequest::Empty)
    }

    /// Floor the waiting traveller is on
    pub fn pickup_floor(&self) -> Option<Floor> {
        match self {
            TravellerRequest::Waiting { pickup, .. } => Some(*pickup),
            _ => None,
        }
    }

    /// Floor the traveller asked for
    pub fn requested_destination(&self) -> Option<Floor> {
        match self {
            TravellerRequest::Waiting { destination, .. }
            | TravellerRequest::Onboard { destination } => Some(*destination),
            TravellerRequest::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let request = TravellerRequest::default();
        assert!(!request.is_present());
        assert!(!request.is_onboard());
        assert!(!request.is_active());
        assert_eq!(request.pickup_floor(), None);
        assert_eq!(request.requested_destination(), None);
    }

    #[test]
    fn test_waiting() {
        let request = TravellerRequest::Waiting {
            pickup: Floor::First,
            destination: Floor::Third,
        };
        assert!(request.is_present());
        assert!(!request.is_onboard());
        assert!(request.is_active());
        assert_eq!(request.pickup_floor(), Some(Floor::First));
        assert_eq!(request.requested_destination(), Some(Floor::Third));
    }

    #[test]
    fn test_onboard() {
        let request = TravellerRequest::Onboard {
            destination: Floor::Ground,
        };
        assert!(!request.is_present());
        assert!(request.is_onboard());
        assert!(request.is_active());
        assert_eq!(request.pickup_floor(), None);
        assert_eq!(request.requested_destination(), Some(Floor::Ground));
    }
}
