use async_trait::async_trait;

use crate::GridError;
use crate::types::{PredictionRecord, PriceRecord, PriceSeries, SettlementPoint, TradingDay, UtcRange};

/// Read-only query contract to the backing time-series store.
///
/// Implementations are constructed once at process startup and shared by
/// reference across concurrent requests; every operation is a read-only
/// query over a half-open UTC range with a settlement-point tag filter,
/// returning rows in ascending timestamp order.
#[async_trait]
pub trait SeriesStore: Send + Sync {
    /// Fetch raw price rows for one backing series.
    ///
    /// # Errors
    /// Returns `GridError::SourceUnavailable` when the store query fails.
    async fn price_rows(
        &self,
        series: PriceSeries,
        range: UtcRange,
        points: &[SettlementPoint],
    ) -> Result<Vec<PriceRecord>, GridError>;

    /// Fetch stored day-ahead prediction rows.
    ///
    /// Predictions are best-effort enrichment: callers recover from a
    /// failure here rather than failing the request.
    ///
    /// # Errors
    /// Returns `GridError::SourceUnavailable` when the store query fails.
    async fn prediction_rows(
        &self,
        range: UtcRange,
        points: &[SettlementPoint],
    ) -> Result<Vec<PredictionRecord>, GridError>;
}

/// Query contract to the external day-ahead prediction service.
///
/// The provider reports failure as a typed error; deciding to degrade to an
/// empty result belongs to the call site, never to the transport.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch the hourly day-ahead forecast for one settlement point.
    ///
    /// # Errors
    /// Returns `GridError::SourceUnavailable` on transport or status
    /// failures and `GridError::MalformedPayload` on unparseable bodies.
    async fn day_ahead(
        &self,
        point: &SettlementPoint,
        day: TradingDay,
    ) -> Result<Vec<PredictionRecord>, GridError>;
}
