use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timeseries::compose::ChartPoint;
use crate::types::{DayAheadRow, PivotedRow, SettlementPoint, TradingDay};

/// Dense real-time grid for one trading day: 288 interval-ending rows, one
/// column per settlement point, absent values serialized as explicit nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridResponse {
    /// The trading day the grid covers.
    pub date: TradingDay,
    /// Column order of the grid.
    pub settlement_points: Vec<SettlementPoint>,
    /// One row per canonical slot, chronological.
    pub data: Vec<PivotedRow>,
    /// When this response was assembled.
    pub last_updated: DateTime<Utc>,
}

/// Dense day-ahead grid: 24 hour-ending rows of actuals with per-point
/// predicted prices attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAheadResponse {
    /// The trading day the grid covers.
    pub date: TradingDay,
    /// Column order of the grid.
    pub settlement_points: Vec<SettlementPoint>,
    /// One row per canonical hour-ending slot, chronological.
    pub data: Vec<DayAheadRow>,
    /// When this response was assembled.
    pub last_updated: DateTime<Utc>,
}

/// Actual-vs-predicted comparison for one settlement point on one 24-bucket
/// hourly frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    /// The trading day the chart covers.
    pub date: TradingDay,
    /// The settlement point charted.
    pub settlement_point: SettlementPoint,
    /// One bucket per local hour, 0..=23.
    pub data: Vec<ChartPoint>,
    /// When this response was assembled.
    pub last_updated: DateTime<Utc>,
}
