//! Common data structures shared across the sppgrid workspace.

use core::fmt;
use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::GridError;
use crate::timegrid;

/// A named location identifier in the priced network, used as the
/// grouping/column key of every grid.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettlementPoint(String);

impl SettlementPoint {
    /// Construct a settlement point from any string-like identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SettlementPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SettlementPoint {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SettlementPoint {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One actual price observation produced by a backing series.
///
/// Immutable; constructed fresh per request from query results and discarded
/// once the response is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Absolute instant of the observation (UTC).
    pub ts: DateTime<Utc>,
    /// Settlement point the price applies to.
    pub point: SettlementPoint,
    /// Price in currency per energy unit.
    pub price: f64,
}

/// One predicted hourly price. Best-effort enrichment: its absence must
/// never fail a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// Absolute instant the prediction targets (UTC).
    pub ts: DateTime<Utc>,
    /// Settlement point the prediction applies to.
    pub point: SettlementPoint,
    /// Market hour-ending label, 1..=24.
    pub hour_ending: u32,
    /// Predicted price in currency per energy unit.
    pub predicted_price: f64,
}

/// The backing price series a query addresses.
///
/// The real-time feed is backed by two tables with different latency and
/// authority: `RtmApi` is the authoritative, high-latency series and
/// `RtmRealtime` the provisional, low-latency one. They are queried
/// independently and reconciled by the merger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceSeries {
    /// Authoritative real-time prices (API ingest, hours of delay).
    RtmApi,
    /// Provisional real-time prices (live ingest, minutes of delay).
    RtmRealtime,
    /// Hourly day-ahead actuals.
    DamHourly,
}

impl PriceSeries {
    /// Backing table name in the time-series store.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::RtmApi => "rtm_lmp_api",
            Self::RtmRealtime => "rtm_lmp_realtime",
            Self::DamHourly => "dam_lmp",
        }
    }
}

impl fmt::Display for PriceSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

/// A half-open absolute time range `[start, end)` handed to backing stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcRange {
    /// Inclusive start.
    pub start: DateTime<Utc>,
    /// Exclusive end.
    pub end: DateTime<Utc>,
}

impl UtcRange {
    /// Whether an instant falls inside the range.
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts >= self.start && ts < self.end
    }
}

/// A 24-hour operating period in market-local time, the unit of query
/// scoping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradingDay(NaiveDate);

impl TradingDay {
    /// Wrap a market-local calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a `YYYY-MM-DD` date string.
    ///
    /// # Errors
    /// Returns `GridError::InvalidArg` when the string is not a calendar date.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| GridError::invalid(format!("trading day {s:?}: {e}")))
    }

    /// The trading day containing the given instant, in market-local time.
    #[must_use]
    pub fn containing(ts: DateTime<Utc>) -> Self {
        Self(timegrid::localize(ts).date_naive())
    }

    /// Today in market-local time.
    #[must_use]
    pub fn today() -> Self {
        Self::containing(Utc::now())
    }

    /// Tomorrow in market-local time.
    #[must_use]
    pub fn tomorrow() -> Self {
        Self(Self::today().0 + Duration::days(1))
    }

    /// The underlying calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Translate the day into the absolute UTC half-open range
    /// `[local_midnight, next_local_midnight)`.
    #[must_use]
    pub fn utc_range(self) -> UtcRange {
        let local_midnight = self.0.and_time(NaiveTime::MIN);
        // local = utc + offset, so utc = local - offset
        let start = (local_midnight - timegrid::market_offset()).and_utc();
        UtcRange {
            start,
            end: start + Duration::days(1),
        }
    }
}

impl fmt::Display for TradingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Slot granularity of a pivoted grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// 5-minute interval-ending slots, 288 per trading day.
    FiveMinute,
    /// Hour-ending slots, 24 per trading day.
    Hourly,
}

/// A market-time display key: the ending label of a 5-minute interval or an
/// hour within the trading day.
///
/// Stored as minutes-ending from local midnight (5..=1440, multiple of 5),
/// so ordering is chronological rather than lexical. `24:00` (1440) is the
/// trading day's final slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(u32);

impl Slot {
    /// The final slot of the trading day, `24:00`.
    pub const DAY_END: Self = Self(24 * 60);

    /// Construct from a minutes-ending value (5..=1440, multiple of 5).
    #[must_use]
    pub const fn from_minutes_ending(minutes: u32) -> Option<Self> {
        if minutes >= 5 && minutes <= 24 * 60 && minutes % 5 == 0 {
            Some(Self(minutes))
        } else {
            None
        }
    }

    /// Construct an hour-ending slot from a 1..=24 label.
    #[must_use]
    pub const fn hour_ending(hour: u32) -> Option<Self> {
        if hour >= 1 && hour <= 24 {
            Some(Self(hour * 60))
        } else {
            None
        }
    }

    /// Minutes-ending from local midnight.
    #[must_use]
    pub const fn minutes_ending(self) -> u32 {
        self.0
    }

    // For bucketing code whose arithmetic already guarantees a valid label.
    pub(crate) const fn from_minutes_unchecked(minutes: u32) -> Self {
        debug_assert!(minutes >= 5 && minutes <= 24 * 60 && minutes % 5 == 0);
        Self(minutes)
    }

    /// Whether this slot is in hour-ending form (`HH:00`).
    #[must_use]
    pub const fn is_hour_boundary(self) -> bool {
        self.0 % 60 == 0
    }

    /// Zero-based index of the local hour this slot's interval falls in
    /// (0..=23). An end-label at the top of an hour belongs to the hour it
    /// closes, so `01:00` maps to 0 and `24:00` to 23.
    #[must_use]
    pub const fn hour_index(self) -> usize {
        ((self.0 - 1) / 60) as usize
    }

    /// The full ordered canonical slot set for a granularity:
    /// `00:05, 00:10, .., 24:00` (288) or `01:00, .., 24:00` (24).
    #[must_use]
    pub fn all(granularity: Granularity) -> Vec<Self> {
        let step = match granularity {
            Granularity::FiveMinute => 5,
            Granularity::Hourly => 60,
        };
        (step..=24 * 60).step_by(step as usize).map(Self).collect()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for Slot {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || GridError::invalid(format!("slot label {s:?}"));
        let (h, m) = s.split_once(':').ok_or_else(bad)?;
        let h: u32 = h.parse().map_err(|_| bad())?;
        let m: u32 = m.parse().map_err(|_| bad())?;
        if m >= 60 {
            return Err(bad());
        }
        Self::from_minutes_ending(h * 60 + m).ok_or_else(bad)
    }
}

impl Serialize for Slot {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One dense grid row: every requested settlement point appears exactly once,
/// with an explicit `None` (serialized `null`) when no record maps there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotedRow {
    /// The display slot this row covers.
    pub slot: Slot,
    /// Price per settlement point; absent values are explicit.
    pub prices: BTreeMap<SettlementPoint, Option<f64>>,
}

/// A day-ahead grid row: hourly actuals plus the per-point predicted prices
/// for the same slot, with identical density guarantees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAheadRow {
    /// The hour-ending slot this row covers.
    pub slot: Slot,
    /// Actual day-ahead price per settlement point.
    pub prices: BTreeMap<SettlementPoint, Option<f64>>,
    /// Predicted day-ahead price per settlement point.
    pub predictions: BTreeMap<SettlementPoint, Option<f64>>,
}
