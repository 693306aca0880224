//! Market-convention time bucketing.
//!
//! All record timestamps are absolute UTC and are converted to the market's
//! fixed local offset (UTC-6, no DST rule) before bucketing. Display labels
//! follow the market's ending conventions: a value for the interval
//! `[t, t+5min)` is labeled by its end, and local midnight is the *final*
//! label (`24:00`) of the trading day rather than its first.
//!
//! These are pure functions with no I/O and no failure modes; every other
//! component tests against them.

use chrono::{DateTime, FixedOffset, Timelike, Utc};

use crate::types::Slot;

/// The market's fixed UTC offset in seconds (UTC-6, standard central time).
pub const MARKET_UTC_OFFSET_SECONDS: i32 = -6 * 3600;

const INTERVAL_SECONDS: u32 = 5 * 60;

/// The market's fixed local offset.
#[must_use]
pub fn market_offset() -> FixedOffset {
    // -21600 is always within FixedOffset's ±24h bound.
    FixedOffset::east_opt(MARKET_UTC_OFFSET_SECONDS).unwrap()
}

/// Convert an absolute instant to market-local time.
#[must_use]
pub fn localize(ts: DateTime<Utc>) -> DateTime<FixedOffset> {
    ts.with_timezone(&market_offset())
}

/// Bucket an instant into its 5-minute interval-ending slot.
///
/// Elapsed seconds within the local day are rounded **up** to the next
/// multiple of five minutes, so a timestamp precisely on an hour boundary
/// lands on the `HH:00` hour-ending form and never rounds into the next
/// bucket, while a round-up reaching 60 minutes rolls into the next hour's
/// `HH:00`. Local midnight is the day's final bucket, `24:00`.
#[must_use]
pub fn interval_ending(ts: DateTime<Utc>) -> Slot {
    let seconds = localize(ts).num_seconds_from_midnight();
    if seconds == 0 {
        return Slot::DAY_END;
    }
    Slot::from_minutes_unchecked(seconds.div_ceil(INTERVAL_SECONDS) * 5)
}

/// Bucket an instant from a start-of-hour-stamped hourly series into its
/// hour-ending slot: local hour `h` labels `h + 1`, so local hour 0 maps to
/// `01:00` and local hour 23 to `24:00`.
#[must_use]
pub fn hour_ending(ts: DateTime<Utc>) -> Slot {
    Slot::from_minutes_unchecked((localize(ts).hour() + 1) * 60)
}
