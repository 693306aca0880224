use chrono::Utc;

use sppgrid_core::{
    ChartResponse, GridError, PriceSeries, SettlementPoint, TradingDay, compose_chart,
    merge_price_series,
};

use crate::Sppgrid;

impl Sppgrid {
    /// Build the 24-bucket actual-vs-predicted chart for one settlement
    /// point on a trading day (today and the configured chart point by
    /// default).
    ///
    /// All four source queries run concurrently. The real-time pair and the
    /// day-ahead actuals are primary; the stored prediction series is
    /// best-effort and degrades to an all-absent predicted line.
    ///
    /// # Errors
    /// Returns `GridError::SourceUnavailable` when a primary query fails.
    pub async fn chart_day(
        &self,
        day: Option<TradingDay>,
        point: Option<SettlementPoint>,
    ) -> Result<ChartResponse, GridError> {
        let day = day.unwrap_or_else(TradingDay::today);
        let point = point.unwrap_or_else(|| self.cfg.chart_point.clone());
        let range = day.utc_range();
        let points = [point.clone()];

        let (api, realtime, dam, predictions) = tokio::join!(
            self.store.price_rows(PriceSeries::RtmApi, range, &points),
            self.store.price_rows(PriceSeries::RtmRealtime, range, &points),
            self.store.price_rows(PriceSeries::DamHourly, range, &points),
            self.store.prediction_rows(range, &points),
        );

        let rtm = merge_price_series([api?, realtime?]);
        let dam = dam?;
        let predictions = match predictions {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!(point = %point, error = %err, "stored predictions unavailable");
                Vec::new()
            }
        };

        Ok(ChartResponse {
            date: day,
            settlement_point: point,
            data: compose_chart(&rtm, &dam, &predictions),
            last_updated: Utc::now(),
        })
    }
}
