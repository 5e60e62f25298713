//! Core domain traits for the delivery sequencer.
//!
//! These are intentionally minimal. Host applications implement them for
//! their own stop records and travel-time backends.

use serde::{Deserialize, Serialize};

use crate::error::SequencerResult;
use crate::matrix::TravelTimeMatrix;

/// Soft time-of-day preference of a delivery stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimePreference {
    #[serde(alias = "Mañana")]
    Morning,
    #[serde(alias = "Tarde")]
    Afternoon,
    #[default]
    #[serde(alias = "NC")]
    NoPreference,
}

/// A delivery is a single stop to be sequenced.
///
/// The sequencer never persists deliveries; it clones them and writes the
/// assigned rank into the copies.
pub trait Delivery: Clone {
    /// Location coordinates (lat, lng).
    fn location(&self) -> (f64, f64);

    fn preference(&self) -> TimePreference;

    /// Assigned 1-based visiting rank, if any.
    fn order(&self) -> Option<usize>;

    fn set_order(&mut self, order: Option<usize>);
}

/// Provides a travel-time matrix for a set of locations.
///
/// The matrix is indexed by the provided location order. Unreachable pairs
/// must be reported as [`crate::matrix::UNREACHABLE`], not as an error.
pub trait TravelTimeOracle {
    fn durations_for(&self, locations: &[(f64, f64)]) -> SequencerResult<TravelTimeMatrix>;
}
