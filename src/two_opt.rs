//! Intra-route 2-opt refinement with preference penalties.
//!
//! Candidate moves reverse an interior segment `[i..=j]` of the route; the
//! start and end anchors are never cut. The cost of a route is its travel
//! time plus the penalty of every stop at its actual position, so a reversal
//! can pay off by fixing preference violations as well as by shortening the
//! drive.
//!
//! Improvement is first-accept: within a pass, any candidate that beats the
//! current best by more than [`IMPROVEMENT_EPSILON`] replaces it immediately
//! and scanning continues from the new best. Passes repeat until one accepts
//! nothing or the pass budget runs out.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::construct::IndexedStop;
use crate::matrix::TravelTimeMatrix;
use crate::penalty::PenaltyModel;
use crate::route::Route;
use crate::traits::TimePreference;

/// Default pass budget for [`improve`].
pub const DEFAULT_MAX_ITERATIONS: usize = 300;

/// Minimum cost decrease for a move to count as an improvement.
pub const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// Travel time along consecutive points plus each stop's placement penalty.
pub fn route_cost(
    route: &Route,
    preferences: &HashMap<usize, TimePreference>,
    matrix: &TravelTimeMatrix,
    penalty: &PenaltyModel,
) -> f64 {
    let travel: f64 = route
        .indices()
        .windows(2)
        .map(|leg| matrix.get(leg[0], leg[1]))
        .sum();

    let total_stops = route.stop_count();
    let placement: f64 = route
        .interior()
        .iter()
        .enumerate()
        .filter_map(|(position, index)| {
            preferences
                .get(index)
                .map(|preference| penalty.penalty(*preference, position, total_stops))
        })
        .sum();

    travel + placement
}

/// Preference lookup keyed by matrix point index.
pub fn preference_index(stops: &[IndexedStop]) -> HashMap<usize, TimePreference> {
    stops.iter().map(|stop| (stop.index, stop.preference)).collect()
}

/// Runs 2-opt passes over `route` until no move improves it or
/// `max_iterations` passes have run. Never returns a costlier route.
pub fn improve(
    route: Route,
    stops: &[IndexedStop],
    matrix: &TravelTimeMatrix,
    penalty: &PenaltyModel,
    max_iterations: usize,
    trace: bool,
) -> Route {
    let preferences = preference_index(stops);
    let mut best = route;
    let mut best_cost = route_cost(&best, &preferences, matrix, penalty);
    let n = best.len();

    for pass in 0..max_iterations {
        let mut improved = false;

        for i in 1..n.saturating_sub(2) {
            for j in i + 1..n - 1 {
                let candidate = best.with_reversed_segment(i, j);
                let cost = route_cost(&candidate, &preferences, matrix, penalty);
                if cost + IMPROVEMENT_EPSILON < best_cost {
                    best = candidate;
                    best_cost = cost;
                    improved = true;
                    if trace {
                        debug!(pass, i, j, cost = best_cost, "2-opt improvement");
                    }
                }
            }
        }

        if !improved {
            return best;
        }
    }

    if max_iterations > 0 {
        warn!(max_iterations, cost = best_cost, "2-opt pass budget exhausted while still improving");
    }
    best
}
