//! disease.sh API integration for the 30-day historical timeline.
//!
//! One endpoint, one GET per call, no retries and no caching: a fetch either
//! yields a parsed [`RawTimeline`] or one of the failure classes in
//! [`AppError`]. The country and window are fixed constants of this
//! deployment; neither is configurable from the outside.

use std::collections::BTreeMap;

use reqwest::blocking::Client;
use serde::{Deserialize, Deserializer};

use crate::error::AppError;

const BASE_URL: &str = "https://disease.sh";
const COUNTRY: &str = "indonesia";

/// Size of the historical window requested. Fixed for this deployment.
pub const LAST_DAYS: u32 = 30;

/// The historical-timeline document as received from the network, before
/// shaping. Untrusted input: nothing here is validated beyond JSON structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawTimeline {
    /// Upstream sends a plain string for country queries, but a list of
    /// strings has been observed for grouped responses; accept both.
    #[serde(deserialize_with = "country_label")]
    pub country: String,
    pub timeline: RawSeries,
}

/// The three nested date → cumulative-count mappings.
///
/// Keys are `M/D/YY` strings. Upstream convention (not a contract) is that
/// all three mappings carry the same keys in the same order; the shaper does
/// not rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawSeries {
    pub cases: BTreeMap<String, u64>,
    pub deaths: BTreeMap<String, u64>,
    pub recovered: BTreeMap<String, u64>,
}

fn country_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        One(String),
        Many(Vec<String>),
    }

    match Field::deserialize(deserializer)? {
        Field::One(name) => Ok(name),
        Field::Many(names) => names
            .into_iter()
            .next()
            .ok_or_else(|| serde::de::Error::custom("empty country list")),
    }
}

/// Blocking client for the disease.sh historical endpoint.
pub struct DiseaseShClient {
    client: Client,
    base_url: String,
}

impl DiseaseShClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Point the client at a different host. Exists for tests against a local
    /// mock server; production callers use [`DiseaseShClient::new`].
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Endpoint this client fetches from (diagnostics/exports).
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v3/covid-19/historical/{COUNTRY}?lastdays={LAST_DAYS}",
            self.base_url
        )
    }

    /// Perform exactly one GET against the historical endpoint and classify
    /// the outcome.
    ///
    /// - transport-level failure → `AppError::Transport`
    /// - non-success HTTP status → `AppError::Http` (body not read)
    /// - body that is not JSON → `AppError::Transport`
    /// - JSON that is not a timeline document → `AppError::Shape`
    pub fn fetch_historical(&self) -> Result<RawTimeline, AppError> {
        let url = format!("{}/v3/covid-19/historical/{COUNTRY}", self.base_url);
        log::debug!("GET {url}?lastdays={LAST_DAYS}");

        let resp = self
            .client
            .get(&url)
            .query(&[("lastdays", LAST_DAYS)])
            .send()
            .map_err(|e| AppError::Transport(format!("disease.sh request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Http {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = resp
            .json()
            .map_err(|e| AppError::Transport(format!("Failed to parse disease.sh response: {e}")))?;

        serde_json::from_value(body)
            .map_err(|e| AppError::Shape(format!("Unexpected disease.sh document: {e}")))
    }
}

impl Default for DiseaseShClient {
    fn default() -> Self {
        Self::new()
    }
}
