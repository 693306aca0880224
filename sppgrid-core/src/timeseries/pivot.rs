use std::collections::BTreeMap;

use crate::timegrid;
use crate::types::{
    DayAheadRow, Granularity, PivotedRow, PredictionRecord, PriceRecord, SettlementPoint, Slot,
};

/// Pivot bucketed records into a dense, gap-filled grid.
///
/// Every canonical slot for the granularity appears exactly once, in
/// chronological order, and every requested settlement point appears exactly
/// once per row, `None` where no record maps there. A slot with zero
/// matching records still appears, fully absent, so a renderer can assume
/// fixed row and column counts.
///
/// Collisions (two records in the same slot and point) resolve by
/// last-write-wins in input order; callers pre-merge multi-table feeds to
/// make this deterministic.
#[must_use]
pub fn pivot(
    records: &[PriceRecord],
    granularity: Granularity,
    points: &[SettlementPoint],
) -> Vec<PivotedRow> {
    let mut index: BTreeMap<Slot, BTreeMap<&SettlementPoint, f64>> = BTreeMap::new();
    for r in records {
        let slot = match granularity {
            Granularity::FiveMinute => timegrid::interval_ending(r.ts),
            Granularity::Hourly => timegrid::hour_ending(r.ts),
        };
        index.entry(slot).or_default().insert(&r.point, r.price);
    }

    Slot::all(granularity)
        .into_iter()
        .map(|slot| {
            let found = index.get(&slot);
            let prices = points
                .iter()
                .map(|p| (p.clone(), found.and_then(|m| m.get(p).copied())))
                .collect();
            PivotedRow { slot, prices }
        })
        .collect()
}

/// Join per-point hourly forecasts onto pivoted hourly rows.
///
/// Forecast values are keyed by their hour-ending slot; each output row
/// carries a `predictions` mapping with the same density guarantee as
/// `prices`. Entries with an out-of-range hour-ending label are ignored.
#[must_use]
pub fn attach_predictions(
    rows: Vec<PivotedRow>,
    forecasts: &[(SettlementPoint, Vec<PredictionRecord>)],
    points: &[SettlementPoint],
) -> Vec<DayAheadRow> {
    let mut index: BTreeMap<Slot, BTreeMap<&SettlementPoint, f64>> = BTreeMap::new();
    for (point, preds) in forecasts {
        for p in preds {
            if let Some(slot) = Slot::hour_ending(p.hour_ending) {
                index.entry(slot).or_default().insert(point, p.predicted_price);
            }
        }
    }

    rows.into_iter()
        .map(|row| {
            let found = index.get(&row.slot);
            let predictions = points
                .iter()
                .map(|p| (p.clone(), found.and_then(|m| m.get(p).copied())))
                .collect();
            DayAheadRow {
                slot: row.slot,
                prices: row.prices,
                predictions,
            }
        })
        .collect()
}
