use serde::{Deserialize, Serialize};

use crate::timegrid;
use crate::types::{PredictionRecord, PriceRecord};

/// Hours in the chart frame.
pub const CHART_HOURS: usize = 24;

/// One hourly chart bucket, indexed by local hour 0..=23.
///
/// This frame is zero-based and distinct from the pivoter's hour-ending
/// convention; the composer owns its own indexing. Each series is absent
/// independently of the other two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Local hour index, 0..=23.
    pub hour: u32,
    /// Mean of the hour's 5-minute real-time prices, 2 decimals.
    pub actual_realtime: Option<f64>,
    /// The hour's day-ahead actual price, 2 decimals.
    pub actual_day_ahead: Option<f64>,
    /// The hour's predicted day-ahead price, 2 decimals.
    pub predicted_day_ahead: Option<f64>,
}

/// Align 5-minute real-time actuals, hourly day-ahead actuals, and hourly
/// predictions onto one 24-bucket hourly frame.
///
/// - Real-time: arithmetic mean of every 5-minute price whose *interval*
///   falls in the hour. Attribution is by interval-ending slot, so an
///   end-stamp at the top of an hour credits the hour it closes.
/// - Day-ahead actuals: the single hourly price verbatim, bucketed at
///   `hour_ending - 1`.
/// - Predictions: the single predicted price, bucketed at `hour_ending - 1`;
///   out-of-range labels are ignored.
///
/// All values are rounded half-up to 2 decimal places.
#[must_use]
pub fn compose_chart(
    rtm: &[PriceRecord],
    dam: &[PriceRecord],
    predictions: &[PredictionRecord],
) -> Vec<ChartPoint> {
    let mut out: Vec<ChartPoint> = (0..CHART_HOURS)
        .map(|h| ChartPoint {
            hour: h as u32,
            actual_realtime: None,
            actual_day_ahead: None,
            predicted_day_ahead: None,
        })
        .collect();

    let mut rtm_by_hour: [Vec<f64>; CHART_HOURS] = std::array::from_fn(|_| Vec::new());
    for r in rtm {
        rtm_by_hour[timegrid::interval_ending(r.ts).hour_index()].push(r.price);
    }
    for (h, prices) in rtm_by_hour.iter().enumerate() {
        if !prices.is_empty() {
            let mean = prices.iter().sum::<f64>() / prices.len() as f64;
            out[h].actual_realtime = Some(round2(mean));
        }
    }

    for r in dam {
        out[timegrid::hour_ending(r.ts).hour_index()].actual_day_ahead = Some(round2(r.price));
    }

    for p in predictions {
        if (1..=24).contains(&p.hour_ending) {
            out[(p.hour_ending - 1) as usize].predicted_day_ahead =
                Some(round2(p.predicted_price));
        }
    }

    out
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
