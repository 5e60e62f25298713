//! Turn-by-turn map link for a sequenced route.

use reqwest::Url;

use crate::error::{validate_location, SequencerError, SequencerResult};
use crate::traits::Delivery;

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/";

/// Google Maps driving directions through `points` (lat, lng) in order.
///
/// The first point is the origin, the last the destination, anything in
/// between becomes a waypoint.
pub fn directions_url(points: &[(f64, f64)]) -> SequencerResult<String> {
    if points.len() < 2 {
        return Err(SequencerError::InvalidInput(
            "directions need at least two points".to_string(),
        ));
    }
    for (i, point) in points.iter().enumerate() {
        validate_location(&format!("point {}", i), *point)?;
    }

    let origin = format_point(points[0]);
    let destination = format_point(points[points.len() - 1]);
    let waypoints = points[1..points.len() - 1]
        .iter()
        .map(|point| format_point(*point))
        .collect::<Vec<_>>()
        .join("|");

    let mut params = vec![
        ("api", "1".to_string()),
        ("origin", origin),
        ("destination", destination),
        ("travelmode", "driving".to_string()),
    ];
    if !waypoints.is_empty() {
        params.push(("waypoints", waypoints));
    }

    let url = Url::parse_with_params(DIRECTIONS_BASE, &params)
        .map_err(|err| SequencerError::InvalidInput(err.to_string()))?;
    Ok(url.into())
}

/// Directions from `start` through already-ordered `stops` to `end`.
pub fn directions_url_for<D: Delivery>(
    start: (f64, f64),
    stops: &[D],
    end: (f64, f64),
) -> SequencerResult<String> {
    let mut points = Vec::with_capacity(stops.len() + 2);
    points.push(start);
    points.extend(stops.iter().map(|stop| stop.location()));
    points.push(end);
    directions_url(&points)
}

fn format_point((lat, lng): (f64, f64)) -> String {
    format!("{:.6},{:.6}", lat, lng)
}
