//! OSRM HTTP adapter for travel-time matrices.

use serde::Deserialize;
use tracing::warn;

use crate::error::{SequencerError, SequencerResult};
use crate::matrix::TravelTimeMatrix;
use crate::traits::TravelTimeOracle;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.project-osrm.org".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Fetches the full duration matrix for all points in one Table API request.
///
/// No retries: a failed request surfaces as
/// [`SequencerError::TravelTimeUnavailable`] and retry policy is left to the caller.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> SequencerResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &OsrmConfig {
        &self.config
    }

    /// Table API URL for (lat, lng) locations, in request order.
    pub fn table_url(&self, locations: &[(f64, f64)]) -> String {
        let coords = locations
            .iter()
            .map(|(lat, lng)| format!("{:.6},{:.6}", lng, lat))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/table/v1/{}/{}?annotations=duration",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            coords
        )
    }
}

impl TravelTimeOracle for OsrmClient {
    fn durations_for(&self, locations: &[(f64, f64)]) -> SequencerResult<TravelTimeMatrix> {
        if locations.is_empty() {
            return Ok(TravelTimeMatrix::new(Vec::new()));
        }

        let url = self.table_url(locations);
        let response = self.client.get(&url).send().map_err(|err| {
            warn!(error = %err, "OSRM table request failed");
            SequencerError::from(err)
        })?;

        let status = response.status();
        let body = response.json::<OsrmTableResponse>().map_err(|err| {
            warn!(%status, error = %err, "OSRM table response unreadable");
            SequencerError::TravelTimeUnavailable(format!(
                "unreadable OSRM response (HTTP {}): {}",
                status, err
            ))
        })?;

        if !status.is_success() {
            warn!(%status, code = %body.code, "OSRM table request rejected");
            return Err(SequencerError::TravelTimeUnavailable(format!(
                "OSRM returned HTTP {} ({})",
                status, body.code
            )));
        }

        matrix_from_response(body, locations.len())
    }
}

#[derive(Debug, Deserialize)]
struct OsrmTableResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    durations: Option<Vec<Vec<Option<f64>>>>,
}

fn matrix_from_response(body: OsrmTableResponse, expected: usize) -> SequencerResult<TravelTimeMatrix> {
    if body.code != "Ok" {
        return Err(SequencerError::TravelTimeUnavailable(format!(
            "OSRM status {}: {}",
            body.code,
            body.message.unwrap_or_default()
        )));
    }

    let rows = body.durations.ok_or_else(|| {
        SequencerError::TravelTimeUnavailable("OSRM response has no durations".to_string())
    })?;

    let matrix = TravelTimeMatrix::from_sparse(rows);
    if !matrix.is_square_of(expected) {
        return Err(SequencerError::TravelTimeUnavailable(format!(
            "OSRM durations are not {0}x{0}",
            expected
        )));
    }

    Ok(matrix)
}
