//! Errors surfaced by the sequencer.

use std::fmt;

#[derive(Debug)]
pub enum SequencerError {
    /// Malformed stop list or endpoint. Raised before any network call.
    InvalidInput(String),
    /// The travel-time oracle failed or returned no usable matrix.
    TravelTimeUnavailable(String),
}

impl fmt::Display for SequencerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequencerError::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
            SequencerError::TravelTimeUnavailable(reason) => {
                write!(f, "travel times unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for SequencerError {}

impl From<reqwest::Error> for SequencerError {
    fn from(err: reqwest::Error) -> Self {
        SequencerError::TravelTimeUnavailable(err.to_string())
    }
}

pub type SequencerResult<T> = std::result::Result<T, SequencerError>;

/// Checks that a (lat, lng) pair is a finite, in-range coordinate.
pub(crate) fn validate_location(label: &str, location: (f64, f64)) -> SequencerResult<()> {
    let (lat, lng) = location;
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(SequencerError::InvalidInput(format!(
            "{} has invalid latitude {}",
            label, lat
        )));
    }
    if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
        return Err(SequencerError::InvalidInput(format!(
            "{} has invalid longitude {}",
            label, lng
        )));
    }
    Ok(())
}
