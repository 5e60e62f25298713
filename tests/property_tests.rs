//! Property tests over random travel-time matrices.

use std::collections::HashSet;

use proptest::prelude::*;

use delivery_sequencer::construct::{build_initial_route, IndexedStop};
use delivery_sequencer::error::SequencerResult;
use delivery_sequencer::matrix::{TravelTimeMatrix, UNREACHABLE};
use delivery_sequencer::penalty::PenaltyModel;
use delivery_sequencer::solver::{plan, SequenceOptions};
use delivery_sequencer::stop::Stop;
use delivery_sequencer::traits::{TimePreference, TravelTimeOracle};
use delivery_sequencer::two_opt::{improve, preference_index, route_cost};

struct GivenMatrix(TravelTimeMatrix);

impl TravelTimeOracle for GivenMatrix {
    fn durations_for(&self, _locations: &[(f64, f64)]) -> SequencerResult<TravelTimeMatrix> {
        Ok(self.0.clone())
    }
}

fn preference() -> impl Strategy<Value = TimePreference> {
    prop_oneof![
        Just(TimePreference::Morning),
        Just(TimePreference::Afternoon),
        Just(TimePreference::NoPreference),
    ]
}

/// A travel time in seconds, occasionally unreachable.
fn duration() -> impl Strategy<Value = f64> {
    prop_oneof![
        19 => (0u32..3600).prop_map(f64::from),
        1 => Just(UNREACHABLE),
    ]
}

prop_compose! {
    fn instance(max_stops: usize)
    (stops in 0..=max_stops)
    (
        preferences in prop::collection::vec(preference(), stops),
        rows in prop::collection::vec(prop::collection::vec(duration(), stops + 2), stops + 2),
        penalty_k in 0.0f64..5000.0,
    ) -> (Vec<TimePreference>, TravelTimeMatrix, f64) {
        (preferences, TravelTimeMatrix::new(rows), penalty_k)
    }
}

fn indexed(preferences: &[TimePreference]) -> Vec<IndexedStop> {
    preferences
        .iter()
        .enumerate()
        .map(|(i, preference)| IndexedStop {
            index: i + 1,
            preference: *preference,
        })
        .collect()
}

proptest! {
    #[test]
    fn test_greedy_route_is_a_permutation((preferences, matrix, k) in instance(8)) {
        let n = preferences.len();
        let stops = indexed(&preferences);
        let route = build_initial_route(0, n + 1, &stops, &matrix, n, &PenaltyModel::new(k));

        prop_assert_eq!(route.len(), n + 2);
        prop_assert_eq!(route.start(), 0);
        prop_assert_eq!(route.end(), n + 1);
        let mut interior = route.interior().to_vec();
        interior.sort();
        prop_assert_eq!(interior, (1..=n).collect::<Vec<_>>());
    }

    #[test]
    fn test_greedy_route_is_deterministic((preferences, matrix, k) in instance(8)) {
        let n = preferences.len();
        let stops = indexed(&preferences);
        let penalty = PenaltyModel::new(k);
        let first = build_initial_route(0, n + 1, &stops, &matrix, n, &penalty);
        let second = build_initial_route(0, n + 1, &stops, &matrix, n, &penalty);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_refinement_never_worsens_and_keeps_anchors((preferences, matrix, k) in instance(8)) {
        let n = preferences.len();
        let stops = indexed(&preferences);
        let penalty = PenaltyModel::new(k);
        let prefs = preference_index(&stops);

        let initial = build_initial_route(0, n + 1, &stops, &matrix, n, &penalty);
        let before = route_cost(&initial, &prefs, &matrix, &penalty);
        let refined = improve(initial, &stops, &matrix, &penalty, 300, false);
        let after = route_cost(&refined, &prefs, &matrix, &penalty);

        prop_assert!(after <= before);
        prop_assert_eq!(refined.start(), 0);
        prop_assert_eq!(refined.end(), n + 1);
        let mut interior = refined.interior().to_vec();
        interior.sort();
        prop_assert_eq!(interior, (1..=n).collect::<Vec<_>>());
    }

    #[test]
    fn test_optimize_returns_every_stop_once((preferences, matrix, k) in instance(8)) {
        let stops: Vec<Stop> = preferences
            .iter()
            .enumerate()
            .map(|(i, preference)| {
                Stop::new(format!("stop-{}", i), 39.4 + i as f64 * 0.01, -0.4)
                    .with_id(i as i64)
                    .with_preference(*preference)
            })
            .collect();
        let options = SequenceOptions { penalty_k: k, ..SequenceOptions::default() };

        let result = plan(&stops, (39.46, -0.42), (39.46, -0.38), &GivenMatrix(matrix), &options).unwrap();

        prop_assert_eq!(result.stops.len(), stops.len());
        let ids: HashSet<_> = result.stops.iter().map(|stop| stop.id).collect();
        prop_assert_eq!(ids.len(), stops.len());
        for (rank, stop) in result.stops.iter().enumerate() {
            prop_assert_eq!(stop.order, Some(rank + 1));
        }
        prop_assert!(result.total_cost <= result.initial_cost);
    }
}
