//! Greedy construction: nearest neighbor with preference penalties.

use crate::matrix::TravelTimeMatrix;
use crate::penalty::PenaltyModel;
use crate::route::Route;
use crate::traits::TimePreference;

/// A stop as seen by the heuristics: its matrix point index and preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedStop {
    pub index: usize,
    pub preference: TimePreference,
}

/// Builds an initial route from `start` by repeatedly appending the unvisited
/// stop with the lowest travel time plus placement penalty.
///
/// Ties go to the stop listed first in `stops`, so identical inputs always
/// produce the same route. `O(n²)`.
pub fn build_initial_route(
    start: usize,
    end: usize,
    stops: &[IndexedStop],
    matrix: &TravelTimeMatrix,
    total_stops: usize,
    penalty: &PenaltyModel,
) -> Route {
    let mut remaining: Vec<IndexedStop> = stops.to_vec();
    let mut sequence: Vec<usize> = Vec::with_capacity(stops.len());
    let mut current = start;

    while !remaining.is_empty() {
        let position = sequence.len();
        let mut best: Option<(usize, f64)> = None;

        for (slot, candidate) in remaining.iter().enumerate() {
            let score = matrix.get(current, candidate.index)
                + penalty.penalty(candidate.preference, position, total_stops);
            match best {
                Some((_, best_score)) if score >= best_score => {}
                _ => best = Some((slot, score)),
            }
        }

        let Some((slot, _)) = best else { break };
        let chosen = remaining.remove(slot);
        sequence.push(chosen.index);
        current = chosen.index;
    }

    Route::new(start, sequence, end)
}
