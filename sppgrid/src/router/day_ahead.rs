use chrono::Utc;

use sppgrid_core::{
    DayAheadResponse, Granularity, GridError, PredictionRecord, PriceSeries, SettlementPoint,
    TradingDay, attach_predictions, pivot,
};

use crate::Sppgrid;

impl Sppgrid {
    /// Build the dense hourly day-ahead grid for a trading day (tomorrow by
    /// default), with per-point predicted prices attached.
    ///
    /// Actuals and the per-point forecast fan-out run concurrently. The
    /// actuals query is primary and fails the request; every forecast fetch
    /// is best-effort with its own deadline, and a failure or timeout on one
    /// settlement point degrades only that point's predictions to absent.
    ///
    /// # Errors
    /// Returns `GridError::SourceUnavailable` when the actuals query fails.
    pub async fn day_ahead_grid(
        &self,
        day: Option<TradingDay>,
    ) -> Result<DayAheadResponse, GridError> {
        let day = day.unwrap_or_else(TradingDay::tomorrow);
        let points = &self.cfg.settlement_points;

        let (actuals, forecasts) = tokio::join!(
            self.store
                .price_rows(PriceSeries::DamHourly, day.utc_range(), points),
            self.fetch_forecasts(points, day),
        );
        let rows = pivot(&actuals?, Granularity::Hourly, points);
        let data = attach_predictions(rows, &forecasts, points);

        Ok(DayAheadResponse {
            date: day,
            settlement_points: points.clone(),
            data,
            last_updated: Utc::now(),
        })
    }

    /// Fan out one forecast fetch per settlement point, each isolated behind
    /// its own deadline. Failures are logged and yield an empty forecast for
    /// that point only.
    async fn fetch_forecasts(
        &self,
        points: &[SettlementPoint],
        day: TradingDay,
    ) -> Vec<(SettlementPoint, Vec<PredictionRecord>)> {
        let Some(forecast) = &self.forecast else {
            return points.iter().map(|p| (p.clone(), Vec::new())).collect();
        };

        let fetches = points.iter().map(|point| {
            let point = point.clone();
            let forecast = forecast.clone();
            let deadline = self.cfg.forecast_timeout;
            async move {
                let preds = match tokio::time::timeout(deadline, forecast.day_ahead(&point, day))
                    .await
                {
                    Ok(Ok(preds)) => preds,
                    Ok(Err(err)) => {
                        tracing::warn!(point = %point, error = %err, "day-ahead forecast unavailable");
                        Vec::new()
                    }
                    Err(_) => {
                        tracing::warn!(point = %point, "day-ahead forecast timed out");
                        Vec::new()
                    }
                };
                (point, preds)
            }
        });
        futures::future::join_all(fetches).await
    }
}
