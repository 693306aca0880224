use chrono::Utc;

use sppgrid_core::{
    Granularity, GridError, GridResponse, PriceSeries, TradingDay, merge_price_series, pivot,
};

use crate::Sppgrid;

impl Sppgrid {
    /// Build the dense 5-minute real-time grid for a trading day (today by
    /// default).
    ///
    /// Both real-time backing tables are queried concurrently and fully
    /// materialized before merging: the authoritative table is listed first
    /// and the provisional table second, so the freshest available estimate
    /// wins wherever both cover an instant. Either table failing fails the
    /// request; the primary grid has no degraded state.
    ///
    /// # Errors
    /// Returns `GridError::SourceUnavailable` when a backing query fails.
    pub async fn realtime_grid(&self, day: Option<TradingDay>) -> Result<GridResponse, GridError> {
        let day = day.unwrap_or_else(TradingDay::today);
        let range = day.utc_range();
        let points = &self.cfg.settlement_points;

        let (api, realtime) = tokio::join!(
            self.store.price_rows(PriceSeries::RtmApi, range, points),
            self.store.price_rows(PriceSeries::RtmRealtime, range, points),
        );
        let merged = merge_price_series([api?, realtime?]);
        let data = pivot(&merged, Granularity::FiveMinute, points);

        Ok(GridResponse {
            date: day,
            settlement_points: points.clone(),
            data,
            last_updated: Utc::now(),
        })
    }
}
