//! In-memory mock implementations of the sppgrid provider traits.
//!
//! `MockStore` and `MockForecast` serve deterministic fixture data for
//! CI-safe tests and examples, with hooks to force failures and latency the
//! way a flaky upstream would.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;

use sppgrid_core::{
    ForecastProvider, GridError, PredictionRecord, PriceRecord, PriceSeries, SeriesStore,
    SettlementPoint, TradingDay, UtcRange,
};

pub mod fixtures;

/// Mock backing store serving records from memory.
#[derive(Default)]
pub struct MockStore {
    prices: HashMap<PriceSeries, Vec<PriceRecord>>,
    predictions: Vec<PredictionRecord>,
    fail_series: HashSet<PriceSeries>,
    fail_predictions: bool,
}

impl MockStore {
    /// An empty store: every query succeeds with no rows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with a full fixture day for the given points.
    #[must_use]
    pub fn with_fixture_day(day: TradingDay, points: &[SettlementPoint]) -> Self {
        let mut store = Self::new();
        for point in points {
            store
                .prices
                .entry(PriceSeries::RtmApi)
                .or_default()
                .extend(fixtures::rtm_api_day(day, point));
            store
                .prices
                .entry(PriceSeries::RtmRealtime)
                .or_default()
                .extend(fixtures::rtm_realtime_day(day, point));
            store
                .prices
                .entry(PriceSeries::DamHourly)
                .or_default()
                .extend(fixtures::dam_day(day, point));
            store.predictions.extend(fixtures::prediction_day(day, point));
        }
        store
    }

    /// Add price records to one backing series.
    #[must_use]
    pub fn with_prices(mut self, series: PriceSeries, records: Vec<PriceRecord>) -> Self {
        self.prices.entry(series).or_default().extend(records);
        self
    }

    /// Add stored prediction records.
    #[must_use]
    pub fn with_predictions(mut self, records: Vec<PredictionRecord>) -> Self {
        self.predictions.extend(records);
        self
    }

    /// Force queries against one series to fail.
    #[must_use]
    pub fn with_failure(mut self, series: PriceSeries) -> Self {
        self.fail_series.insert(series);
        self
    }

    /// Force stored-prediction queries to fail.
    #[must_use]
    pub fn with_prediction_failure(mut self) -> Self {
        self.fail_predictions = true;
        self
    }
}

#[async_trait]
impl SeriesStore for MockStore {
    async fn price_rows(
        &self,
        series: PriceSeries,
        range: UtcRange,
        points: &[SettlementPoint],
    ) -> Result<Vec<PriceRecord>, GridError> {
        if self.fail_series.contains(&series) {
            return Err(GridError::unavailable(series.table(), "forced failure"));
        }
        let mut rows: Vec<PriceRecord> = self
            .prices
            .get(&series)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter(|r| range.contains(r.ts) && points.contains(&r.point))
            .cloned()
            .collect();
        rows.sort_by(|a, b| (a.ts, &a.point).cmp(&(b.ts, &b.point)));
        Ok(rows)
    }

    async fn prediction_rows(
        &self,
        range: UtcRange,
        points: &[SettlementPoint],
    ) -> Result<Vec<PredictionRecord>, GridError> {
        if self.fail_predictions {
            return Err(GridError::unavailable("dam_prediction", "forced failure"));
        }
        let mut rows: Vec<PredictionRecord> = self
            .predictions
            .iter()
            .filter(|r| range.contains(r.ts) && points.contains(&r.point))
            .cloned()
            .collect();
        rows.sort_by(|a, b| (a.ts, &a.point).cmp(&(b.ts, &b.point)));
        Ok(rows)
    }
}

/// Mock forecast provider with per-point fixtures, forced failures, and
/// forced latency.
#[derive(Default)]
pub struct MockForecast {
    by_point: HashMap<SettlementPoint, Vec<PredictionRecord>>,
    fail_points: HashSet<SettlementPoint>,
    latency: Option<Duration>,
}

impl MockForecast {
    /// An empty provider: every fetch succeeds with no predictions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider pre-populated with fixture forecasts for the given points.
    #[must_use]
    pub fn with_fixture_day(day: TradingDay, points: &[SettlementPoint]) -> Self {
        let mut forecast = Self::new();
        for point in points {
            forecast
                .by_point
                .insert(point.clone(), fixtures::prediction_day(day, point));
        }
        forecast
    }

    /// Set the forecast returned for one settlement point.
    #[must_use]
    pub fn with_forecast(mut self, point: SettlementPoint, preds: Vec<PredictionRecord>) -> Self {
        self.by_point.insert(point, preds);
        self
    }

    /// Force fetches for one settlement point to fail.
    #[must_use]
    pub fn with_failure(mut self, point: SettlementPoint) -> Self {
        self.fail_points.insert(point);
        self
    }

    /// Delay every fetch, e.g. to exercise caller-side timeouts.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

#[async_trait]
impl ForecastProvider for MockForecast {
    async fn day_ahead(
        &self,
        point: &SettlementPoint,
        _day: TradingDay,
    ) -> Result<Vec<PredictionRecord>, GridError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.fail_points.contains(point) {
            return Err(GridError::unavailable(
                "dam_forecast",
                format!("forced failure for {point}"),
            ));
        }
        Ok(self.by_point.get(point).cloned().unwrap_or_default())
    }
}
