//! InfluxDB 3 backing-store adapter.
//!
//! Speaks the SQL-over-HTTP endpoint (`POST /api/v3/query_sql`) with bearer
//! authentication and JSON row output. The handle is constructed once at
//! process startup, so configuration problems surface there as
//! [`GridError::Config`] rather than at arbitrary call sites, and is then
//! shared by reference across concurrent requests; every operation is a
//! read-only query.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use sppgrid_core::{
    GridError, PredictionRecord, PriceRecord, PriceSeries, SeriesStore, SettlementPoint, UtcRange,
};

mod sql;

/// Overall per-query HTTP timeout. Backing-store queries are primary data:
/// a store this slow is treated as unavailable.
const QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection parameters for the backing store.
#[derive(Debug, Clone)]
pub struct InfluxConfig {
    /// Base URL of the InfluxDB host, e.g. `http://localhost:8181`.
    pub url: String,
    /// API token presented as a bearer credential.
    pub token: String,
    /// Database (bucket) holding the price tables.
    pub database: String,
}

impl InfluxConfig {
    /// Read the configuration from `SPPGRID_INFLUX_URL`,
    /// `SPPGRID_INFLUX_TOKEN`, and `SPPGRID_INFLUX_DATABASE`.
    ///
    /// # Errors
    /// Returns `GridError::Config` naming the first variable that is unset
    /// or empty.
    pub fn from_env() -> Result<Self, GridError> {
        Ok(Self {
            url: require_env("SPPGRID_INFLUX_URL")?,
            token: require_env("SPPGRID_INFLUX_TOKEN")?,
            database: require_env("SPPGRID_INFLUX_DATABASE")?,
        })
    }
}

fn require_env(key: &'static str) -> Result<String, GridError> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(GridError::Config { what: key })
}

/// Shared read-only handle to the backing InfluxDB store.
#[derive(Debug)]
pub struct InfluxStore {
    http: reqwest::Client,
    query_url: Url,
    token: String,
    database: String,
}

impl InfluxStore {
    /// Build a store handle from explicit configuration.
    ///
    /// # Errors
    /// Returns `GridError::InvalidArg` when the URL does not parse or the
    /// HTTP client cannot be constructed.
    pub fn new(cfg: InfluxConfig) -> Result<Self, GridError> {
        let base = Url::parse(&cfg.url)
            .map_err(|e| GridError::invalid(format!("influx url {:?}: {e}", cfg.url)))?;
        let query_url = base
            .join("api/v3/query_sql")
            .map_err(|e| GridError::invalid(format!("influx url {:?}: {e}", cfg.url)))?;
        let http = reqwest::Client::builder()
            .timeout(QUERY_TIMEOUT)
            .build()
            .map_err(|e| GridError::invalid(format!("http client: {e}")))?;
        Ok(Self {
            http,
            query_url,
            token: cfg.token,
            database: cfg.database,
        })
    }

    /// Build a store handle from the environment (see
    /// [`InfluxConfig::from_env`]).
    ///
    /// # Errors
    /// Returns `GridError::Config` for missing parameters, or
    /// `GridError::InvalidArg` for unusable ones.
    pub fn from_env() -> Result<Self, GridError> {
        Self::new(InfluxConfig::from_env()?)
    }

    async fn query_rows<T: DeserializeOwned>(
        &self,
        series: &str,
        statement: String,
    ) -> Result<Vec<T>, GridError> {
        tracing::debug!(series, statement = statement.as_str(), "influx query");
        let resp = self
            .http
            .post(self.query_url.clone())
            .bearer_auth(&self.token)
            .json(&serde_json::json!({
                "db": self.database,
                "q": statement,
                "format": "json",
            }))
            .send()
            .await
            .map_err(|e| GridError::unavailable(series, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GridError::unavailable(series, format!("status {status}")));
        }

        resp.json::<Vec<T>>()
            .await
            .map_err(|e| GridError::malformed(format!("{series}: {e}")))
    }
}

#[derive(Debug, Deserialize)]
struct PriceRow {
    time: DateTime<Utc>,
    settlement_point: String,
    lmp: f64,
}

#[derive(Debug, Deserialize)]
struct PredictionRow {
    time: DateTime<Utc>,
    settlement_point: String,
    predicted_price: f64,
    hour_ending: u32,
}

#[async_trait]
impl SeriesStore for InfluxStore {
    async fn price_rows(
        &self,
        series: PriceSeries,
        range: UtcRange,
        points: &[SettlementPoint],
    ) -> Result<Vec<PriceRecord>, GridError> {
        if points.is_empty() {
            return Ok(Vec::new());
        }
        let statement = sql::select_prices(series.table(), range, points);
        let rows: Vec<PriceRow> = self.query_rows(series.table(), statement).await?;
        Ok(rows
            .into_iter()
            .map(|r| PriceRecord {
                ts: r.time,
                point: SettlementPoint::new(r.settlement_point),
                price: r.lmp,
            })
            .collect())
    }

    async fn prediction_rows(
        &self,
        range: UtcRange,
        points: &[SettlementPoint],
    ) -> Result<Vec<PredictionRecord>, GridError> {
        if points.is_empty() {
            return Ok(Vec::new());
        }
        let statement = sql::select_predictions(range, points);
        let rows: Vec<PredictionRow> = self.query_rows(sql::PREDICTION_TABLE, statement).await?;
        Ok(rows
            .into_iter()
            .map(|r| PredictionRecord {
                ts: r.time,
                point: SettlementPoint::new(r.settlement_point),
                hour_ending: r.hour_ending,
                predicted_price: r.predicted_price,
            })
            .collect())
    }
}
