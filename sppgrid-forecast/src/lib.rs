//! Day-ahead prediction-service client.
//!
//! Predictions are best-effort enrichment: this client reports transport and
//! payload failures as typed [`GridError`] variants and leaves the decision
//! to degrade to "no prediction available" to its call sites, which is where
//! the orchestrator logs and swallows them. It never panics on upstream
//! garbage.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Duration as ChronoDuration;
use serde::Deserialize;
use url::Url;

use sppgrid_core::{ForecastProvider, GridError, PredictionRecord, SettlementPoint, TradingDay};

const FEED: &str = "dam_forecast";

/// Transport-level cap; the orchestrator applies its own per-call deadline
/// on top.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the external prediction service.
#[derive(Debug)]
pub struct ForecastClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ForecastClient {
    /// Build a client against the service base URL, e.g.
    /// `http://localhost:8001`.
    ///
    /// # Errors
    /// Returns `GridError::InvalidArg` when the URL does not parse or the
    /// HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, GridError> {
        let base = Url::parse(base_url)
            .map_err(|e| GridError::invalid(format!("forecast url {base_url:?}: {e}")))?;
        let endpoint = base
            .join("predictions/dam/next-day")
            .map_err(|e| GridError::invalid(format!("forecast url {base_url:?}: {e}")))?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GridError::invalid(format!("http client: {e}")))?;
        Ok(Self { http, endpoint })
    }

    /// Build a client from `SPPGRID_FORECAST_URL`.
    ///
    /// # Errors
    /// Returns `GridError::Config` when the variable is unset or empty.
    pub fn from_env() -> Result<Self, GridError> {
        let base = std::env::var("SPPGRID_FORECAST_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(GridError::Config {
                what: "SPPGRID_FORECAST_URL",
            })?;
        Self::new(&base)
    }
}

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    predictions: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    hour_ending: String,
    predicted_price: f64,
}

/// Parse an `"HH:00"` hour-ending label into its 1..=24 value.
fn parse_hour_ending(label: &str) -> Result<u32, GridError> {
    let bad = || GridError::malformed(format!("{FEED}: hour_ending {label:?}"));
    let (h, m) = label.split_once(':').ok_or_else(bad)?;
    if m != "00" {
        return Err(bad());
    }
    let h: u32 = h.parse().map_err(|_| bad())?;
    if (1..=24).contains(&h) { Ok(h) } else { Err(bad()) }
}

#[async_trait]
impl ForecastProvider for ForecastClient {
    async fn day_ahead(
        &self,
        point: &SettlementPoint,
        day: TradingDay,
    ) -> Result<Vec<PredictionRecord>, GridError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("settlement_point", point.as_str())
            .append_pair("target_date", &day.to_string());

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| GridError::unavailable(FEED, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GridError::unavailable(FEED, format!("status {status}")));
        }

        let payload: ForecastPayload = resp
            .json()
            .await
            .map_err(|e| GridError::malformed(format!("{FEED}: {e}")))?;

        let day_start = day.utc_range().start;
        payload
            .predictions
            .into_iter()
            .map(|entry| {
                let hour_ending = parse_hour_ending(&entry.hour_ending)?;
                Ok(PredictionRecord {
                    // Stamp at the end of the delivery hour.
                    ts: day_start + ChronoDuration::hours(i64::from(hour_ending)),
                    point: point.clone(),
                    hour_ending,
                    predicted_price: entry.predicted_price,
                })
            })
            .collect()
    }
}
