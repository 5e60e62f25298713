//! Position penalty for soft time-of-day preferences.

use crate::traits::TimePreference;

/// Default penalty weight, in travel-time seconds.
pub const DEFAULT_PENALTY_K: f64 = 1200.0;

/// Maps (preference, position, stop count) to a non-negative cost.
///
/// Morning stops get more expensive the later they are placed, afternoon
/// stops the earlier. The weight trades preference compliance against drive
/// time: a larger `k` honors preferences at the expense of longer routes.
/// `k` must be finite and non-negative; [`crate::solver::plan`] rejects
/// anything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyModel {
    pub k: f64,
}

impl Default for PenaltyModel {
    fn default() -> Self {
        Self { k: DEFAULT_PENALTY_K }
    }
}

impl PenaltyModel {
    pub fn new(k: f64) -> Self {
        Self { k }
    }

    /// `position` is 0-based among stops (0 = right after the start).
    pub fn penalty(&self, preference: TimePreference, position: usize, total_stops: usize) -> f64 {
        let t = position as f64 / total_stops.saturating_sub(1).max(1) as f64;
        match preference {
            TimePreference::NoPreference => 0.0,
            TimePreference::Morning => self.k * t,
            TimePreference::Afternoon => self.k * (1.0 - t),
        }
    }
}
