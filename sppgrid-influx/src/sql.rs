//! SQL statement building for the InfluxDB 3 query endpoint.

use chrono::SecondsFormat;

use sppgrid_core::{SettlementPoint, UtcRange};

pub(crate) const PREDICTION_TABLE: &str = "dam_prediction";

/// `SELECT time, settlement_point, lmp` over a half-open UTC range with a
/// settlement-point tag filter, ascending time order requested explicitly.
pub(crate) fn select_prices(table: &str, range: UtcRange, points: &[SettlementPoint]) -> String {
    format!(
        "SELECT time, settlement_point, lmp \
         FROM \"{table}\" \
         WHERE time >= '{start}' AND time < '{end}' \
         AND settlement_point IN ({points}) \
         ORDER BY time ASC",
        start = range.start.to_rfc3339_opts(SecondsFormat::Secs, true),
        end = range.end.to_rfc3339_opts(SecondsFormat::Secs, true),
        points = quoted_list(points),
    )
}

/// The stored day-ahead prediction query; same range and tag filter shape.
pub(crate) fn select_predictions(range: UtcRange, points: &[SettlementPoint]) -> String {
    format!(
        "SELECT time, settlement_point, predicted_price, hour_ending \
         FROM \"{PREDICTION_TABLE}\" \
         WHERE time >= '{start}' AND time < '{end}' \
         AND settlement_point IN ({points}) \
         ORDER BY time ASC",
        start = range.start.to_rfc3339_opts(SecondsFormat::Secs, true),
        end = range.end.to_rfc3339_opts(SecondsFormat::Secs, true),
        points = quoted_list(points),
    )
}

fn quoted_list(points: &[SettlementPoint]) -> String {
    points
        .iter()
        .map(|p| format!("'{}'", p.as_str().replace('\'', "''")))
        .collect::<Vec<_>>()
        .join(", ")
}
