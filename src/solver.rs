//! Route sequencing: fetch travel times, build greedily, refine with 2-opt.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::construct::{build_initial_route, IndexedStop};
use crate::error::{validate_location, SequencerError, SequencerResult};
use crate::penalty::{PenaltyModel, DEFAULT_PENALTY_K};
use crate::route::Route;
use crate::traits::{Delivery, TravelTimeOracle};
use crate::two_opt::{improve, preference_index, route_cost, DEFAULT_MAX_ITERATIONS};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SequenceOptions {
    /// Preference penalty weight, in travel-time seconds.
    #[serde(alias = "penaltyK")]
    pub penalty_k: f64,
    /// Maximum 2-opt passes.
    #[serde(alias = "twoOptMaxIter")]
    pub two_opt_max_iter: usize,
    /// Emit intermediate routes and costs at debug level.
    pub debug: bool,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            penalty_k: DEFAULT_PENALTY_K,
            two_opt_max_iter: DEFAULT_MAX_ITERATIONS,
            debug: false,
        }
    }
}

/// Outcome of one sequencing run.
#[derive(Debug, Clone)]
pub struct SequencePlan<D> {
    /// Copies of the input stops with `order` assigned, sorted by it.
    pub stops: Vec<D>,
    /// Final point-index route: 0 = start, 1..=N = stops, N+1 = end.
    pub route: Route,
    /// Cost of the greedy route before refinement.
    pub initial_cost: f64,
    /// Cost of the final route.
    pub total_cost: f64,
}

/// Orders `stops` between `start` and `end` (both (lat, lng)).
///
/// Returns copies of the stops with `order` set to 1..=N, sorted ascending.
pub fn optimize<D, M>(
    stops: &[D],
    start: (f64, f64),
    end: (f64, f64),
    oracle: &M,
    options: &SequenceOptions,
) -> SequencerResult<Vec<D>>
where
    D: Delivery,
    M: TravelTimeOracle,
{
    plan(stops, start, end, oracle, options).map(|plan| plan.stops)
}

/// Like [`optimize`], but also returns the route and its costs.
pub fn plan<D, M>(
    stops: &[D],
    start: (f64, f64),
    end: (f64, f64),
    oracle: &M,
    options: &SequenceOptions,
) -> SequencerResult<SequencePlan<D>>
where
    D: Delivery,
    M: TravelTimeOracle,
{
    validate_location("start location", start)?;
    validate_location("end location", end)?;
    for (i, stop) in stops.iter().enumerate() {
        validate_location(&format!("stop {}", i), stop.location())?;
    }
    if !options.penalty_k.is_finite() || options.penalty_k < 0.0 {
        return Err(SequencerError::InvalidInput(format!(
            "penalty weight must be a non-negative number, got {}",
            options.penalty_k
        )));
    }

    let locations = collect_locations(stops, start, end);
    let start_idx = 0;
    let end_idx = locations.len() - 1;
    let total_stops = stops.len();

    let matrix = oracle.durations_for(&locations)?;
    if !matrix.is_square_of(locations.len()) {
        return Err(SequencerError::TravelTimeUnavailable(format!(
            "expected a {0}x{0} travel-time matrix, got {1} rows",
            locations.len(),
            matrix.len()
        )));
    }

    let unreachable = matrix.unreachable_pairs();
    if unreachable > 0 {
        warn!(unreachable, "travel-time matrix has unreachable pairs; routing through them anyway");
    }

    let indexed = index_stops(stops);
    let penalty = PenaltyModel::new(options.penalty_k);
    let preferences = preference_index(&indexed);

    let initial = build_initial_route(start_idx, end_idx, &indexed, &matrix, total_stops, &penalty);
    let initial_cost = route_cost(&initial, &preferences, &matrix, &penalty);
    if options.debug {
        debug!(route = ?initial.indices(), cost = initial_cost, "initial route");
    }

    let route = improve(
        initial,
        &indexed,
        &matrix,
        &penalty,
        options.two_opt_max_iter,
        options.debug,
    );
    let total_cost = route_cost(&route, &preferences, &matrix, &penalty);
    if options.debug {
        debug!(route = ?route.indices(), cost = total_cost, "improved route");
    }

    Ok(SequencePlan {
        stops: assign_order(stops, &route),
        route,
        initial_cost,
        total_cost,
    })
}

/// `[start, stops..., end]` as (lat, lng).
fn collect_locations<D: Delivery>(stops: &[D], start: (f64, f64), end: (f64, f64)) -> Vec<(f64, f64)> {
    let mut locations = Vec::with_capacity(stops.len() + 2);
    locations.push(start);
    locations.extend(stops.iter().map(|stop| stop.location()));
    locations.push(end);
    locations
}

/// Stop `i` lives at matrix point `i + 1`; point 0 is the start.
fn index_stops<D: Delivery>(stops: &[D]) -> Vec<IndexedStop> {
    stops
        .iter()
        .enumerate()
        .map(|(i, stop)| IndexedStop {
            index: i + 1,
            preference: stop.preference(),
        })
        .collect()
}

/// Copies `stops`, ranks them 1..=N by their interior position in `route`,
/// and sorts by rank. Stops missing from the route sort last.
fn assign_order<D: Delivery>(stops: &[D], route: &Route) -> Vec<D> {
    let mut result: Vec<D> = stops
        .iter()
        .map(|stop| {
            let mut copy = stop.clone();
            copy.set_order(None);
            copy
        })
        .collect();

    let mut rank = 1;
    for index in route.interior() {
        if let Some(stop) = index.checked_sub(1).and_then(|slot| result.get_mut(slot)) {
            stop.set_order(Some(rank));
            rank += 1;
        }
    }

    result.sort_by_key(|stop| stop.order().unwrap_or(usize::MAX));
    result
}
