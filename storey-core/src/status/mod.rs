//! Status projection for the display collaborators

pub mod projector;

pub use projector::{project, project_if_dirty, StatusRecord, TravellerMarker};
