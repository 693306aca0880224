use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::types::{PriceRecord, SettlementPoint};

/// Merge multiple record sequences for the same logical feed in precedence
/// order (last is freshest).
///
/// - Records are keyed by `(ts, point)`; a later-listed sequence overwrites
///   an earlier one at the same key.
/// - A key is never dropped: precedence only replaces values.
/// - Output is sorted ascending by `(ts, point)` and is independent of the
///   order records arrive within each input sequence.
///
/// Callers querying a high-latency authoritative table alongside a
/// low-latency provisional one list the authoritative table first, so the
/// provisional value wins wherever both cover the same instant while older
/// instants keep the authoritative value alone.
#[must_use]
pub fn merge_price_series<I>(series: I) -> Vec<PriceRecord>
where
    I: IntoIterator<Item = Vec<PriceRecord>>,
{
    let mut map: BTreeMap<(DateTime<Utc>, SettlementPoint), f64> = BTreeMap::new();
    for s in series {
        for r in s {
            map.insert((r.ts, r.point), r.price);
        }
    }
    map.into_iter()
        .map(|((ts, point), price)| PriceRecord { ts, point, price })
        .collect()
}
