//! Valencia (Spain) locations for realistic test fixtures.
//!
//! Coordinates are routable points in and around the city, suitable for a
//! public OSRM instance or the haversine oracle.

#![allow(dead_code)]

use delivery_sequencer::stop::Stop;
use delivery_sequencer::traits::TimePreference;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn stop(&self, preference: TimePreference) -> Stop {
        Stop::new(self.name, self.lat, self.lng).with_preference(preference)
    }
}

// ============================================================================
// Depot (start) and final drop (end)
// ============================================================================

pub const START: Location = Location::new("Avinguda del Camí Nou", 39.467128271693085, -0.42699651572677905);

pub const END: Location = Location::new(
    "Carrer de Sant Josep de Calassanç",
    39.46643518465111,
    -0.38719235731378177,
);

// ============================================================================
// Delivery addresses
// ============================================================================

pub const DELIVERIES: &[Location] = &[
    Location::new("Mercat Central", 39.4736, -0.3790),
    Location::new("Estació del Nord", 39.4667, -0.3773),
    Location::new("Plaça de l'Ajuntament", 39.4699, -0.3763),
    Location::new("Torres de Serrans", 39.4791, -0.3760),
    Location::new("Mercat de Colón", 39.4689, -0.3694),
    Location::new("Ciutat de les Arts", 39.4548, -0.3507),
    Location::new("Bioparc", 39.4786, -0.4075),
    Location::new("Hospital La Fe", 39.4438, -0.3759),
    Location::new("Mislata Centre", 39.4752, -0.4172),
    Location::new("Xirivella", 39.4635, -0.4283),
    Location::new("Campanar", 39.4816, -0.3946),
    Location::new("Benimaclet", 39.4851, -0.3594),
];

/// Stops for the first `count` deliveries, cycling Morning / Afternoon / no preference.
pub fn mixed_stops(count: usize) -> Vec<Stop> {
    DELIVERIES
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, location)| {
            let preference = match i % 3 {
                0 => TimePreference::Morning,
                1 => TimePreference::Afternoon,
                _ => TimePreference::NoPreference,
            };
            location.stop(preference).with_id(i as i64 + 1)
        })
        .collect()
}
