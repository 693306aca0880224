//! Deterministic fixture data. Closed-form shapes, no randomness, so runs
//! and assertions are reproducible.

use chrono::Duration;

use sppgrid_core::{PredictionRecord, PriceRecord, SettlementPoint, TradingDay};

/// Stable per-point price offset so columns differ without randomness.
fn point_base(point: &SettlementPoint) -> f64 {
    let sum: u32 = point.as_str().bytes().map(u32::from).sum();
    18.0 + f64::from(sum % 7)
}

fn wave(i: i64) -> f64 {
    (((i % 12) - 6) as f64) * 0.5
}

/// Authoritative real-time series: end-stamped 5-minute records covering the
/// first three quarters of the day (the live tail has not been backfilled
/// yet).
pub fn rtm_api_day(day: TradingDay, point: &SettlementPoint) -> Vec<PriceRecord> {
    let start = day.utc_range().start;
    let base = point_base(point);
    (1..=216)
        .map(|i| PriceRecord {
            ts: start + Duration::minutes(5 * i),
            point: point.clone(),
            price: base + wave(i),
        })
        .collect()
}

/// Provisional real-time series: the most recent third of the day, shifted a
/// quarter so overlap with the authoritative series is observable.
pub fn rtm_realtime_day(day: TradingDay, point: &SettlementPoint) -> Vec<PriceRecord> {
    let start = day.utc_range().start;
    let base = point_base(point);
    (193..=288)
        .map(|i| PriceRecord {
            ts: start + Duration::minutes(5 * i),
            point: point.clone(),
            price: base + wave(i) + 0.25,
        })
        .collect()
}

/// Hourly day-ahead actuals, start-of-hour stamped.
pub fn dam_day(day: TradingDay, point: &SettlementPoint) -> Vec<PriceRecord> {
    let start = day.utc_range().start;
    let base = point_base(point);
    (0..24)
        .map(|h| PriceRecord {
            ts: start + Duration::hours(h),
            point: point.clone(),
            price: base + wave(h * 3),
        })
        .collect()
}

/// Stored hourly predictions, start-of-hour stamped with 1..=24 labels.
pub fn prediction_day(day: TradingDay, point: &SettlementPoint) -> Vec<PredictionRecord> {
    let start = day.utc_range().start;
    let base = point_base(point);
    (1..=24)
        .map(|he| PredictionRecord {
            ts: start + Duration::hours(he - 1),
            point: point.clone(),
            hour_ending: he as u32,
            predicted_price: base + wave((he - 1) * 3) + 0.5,
        })
        .collect()
}
