//! Haversine travel-time oracle (fallback when OSRM is unavailable).
//!
//! Uses great-circle distance at an assumed speed to estimate travel time.
//! Ignores the road network, and never fails for a positive speed.

use rayon::prelude::*;

use crate::error::{SequencerError, SequencerResult};
use crate::matrix::TravelTimeMatrix;
use crate::traits::TravelTimeOracle;

/// Average driving speed assumption for time estimation.
const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone)]
pub struct HaversineOracle {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
}

impl Default for HaversineOracle {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl HaversineOracle {
    /// `speed_kmh` must be positive; otherwise every lookup fails with
    /// [`SequencerError::InvalidInput`].
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Great-circle distance between two (lat, lng) points in kilometers.
    pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lng / 2.0).sin().powi(2);

        EARTH_RADIUS_KM * 2.0 * a.sqrt().asin()
    }

    fn km_to_seconds(&self, km: f64) -> f64 {
        km / self.speed_kmh * 3600.0
    }
}

impl TravelTimeOracle for HaversineOracle {
    fn durations_for(&self, locations: &[(f64, f64)]) -> SequencerResult<TravelTimeMatrix> {
        if !self.speed_kmh.is_finite() || self.speed_kmh <= 0.0 {
            return Err(SequencerError::InvalidInput(format!(
                "haversine speed must be positive, got {} km/h",
                self.speed_kmh
            )));
        }

        let rows = locations
            .par_iter()
            .enumerate()
            .map(|(i, from)| {
                locations
                    .iter()
                    .enumerate()
                    .map(|(j, to)| {
                        if i == j {
                            0.0
                        } else {
                            self.km_to_seconds(Self::haversine_km(*from, *to))
                        }
                    })
                    .collect()
            })
            .collect();

        Ok(TravelTimeMatrix::new(rows))
    }
}
