use chrono::{DateTime, Duration, NaiveDate, Utc};
use sppgrid_core::timegrid::{hour_ending, interval_ending, localize};
use sppgrid_core::{Granularity, Slot, TradingDay};

/// An instant whose market-local (UTC−6) wall clock reads `h:m:s` on
/// 2025-01-15.
fn at_local(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    (day.and_hms_opt(h, m, s).unwrap() + Duration::hours(6)).and_utc()
}

#[test]
fn localize_applies_fixed_offset() {
    let ts = at_local(14, 30, 0);
    let local = localize(ts);
    assert_eq!(local.format("%H:%M:%S").to_string(), "14:30:00");
}

#[test]
fn local_midnight_is_the_final_interval_bucket() {
    assert_eq!(interval_ending(at_local(0, 0, 0)).to_string(), "24:00");
}

#[test]
fn seconds_after_midnight_round_up_to_first_interval() {
    assert_eq!(interval_ending(at_local(0, 0, 20)).to_string(), "00:05");
    assert_eq!(interval_ending(at_local(0, 3, 0)).to_string(), "00:05");
}

#[test]
fn late_evening_rolls_into_day_end() {
    assert_eq!(interval_ending(at_local(23, 58, 0)).to_string(), "24:00");
}

#[test]
fn exact_hour_boundary_lands_on_hour_ending_form() {
    assert_eq!(interval_ending(at_local(14, 0, 0)).to_string(), "14:00");
    assert_eq!(interval_ending(at_local(8, 0, 0)).to_string(), "08:00");
    // One second past the boundary belongs to the next 5-minute bucket.
    assert_eq!(interval_ending(at_local(14, 0, 1)).to_string(), "14:05");
}

#[test]
fn round_up_reaching_sixty_minutes_rolls_into_next_hour() {
    assert_eq!(interval_ending(at_local(13, 57, 30)).to_string(), "14:00");
}

#[test]
fn hourly_series_uses_start_of_hour_convention() {
    assert_eq!(hour_ending(at_local(0, 0, 0)).to_string(), "01:00");
    assert_eq!(hour_ending(at_local(23, 0, 0)).to_string(), "24:00");
    assert_eq!(hour_ending(at_local(14, 0, 0)).to_string(), "15:00");
    // Minutes within the hour do not change the label.
    assert_eq!(hour_ending(at_local(14, 30, 0)).to_string(), "15:00");
}

#[test]
fn canonical_interval_enumeration_is_complete_and_ordered() {
    let slots = Slot::all(Granularity::FiveMinute);
    assert_eq!(slots.len(), 288);
    assert_eq!(slots.first().unwrap().to_string(), "00:05");
    assert_eq!(slots.last().unwrap().to_string(), "24:00");
    assert!(slots.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn canonical_hour_enumeration_is_complete_and_ordered() {
    let slots = Slot::all(Granularity::Hourly);
    assert_eq!(slots.len(), 24);
    assert_eq!(slots.first().unwrap().to_string(), "01:00");
    assert_eq!(slots.last().unwrap().to_string(), "24:00");
    assert!(slots.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn slot_ordering_is_chronological() {
    let early: Slot = "09:55".parse().unwrap();
    let late: Slot = "10:00".parse().unwrap();
    let end: Slot = "24:00".parse().unwrap();
    assert!(early < late);
    assert!(late < end);
    assert_eq!(end, Slot::DAY_END);
}

#[test]
fn slot_labels_round_trip() {
    for slot in Slot::all(Granularity::FiveMinute) {
        let parsed: Slot = slot.to_string().parse().unwrap();
        assert_eq!(parsed, slot);
    }
    assert!("00:03".parse::<Slot>().is_err());
    assert!("25:00".parse::<Slot>().is_err());
    assert!("00:00".parse::<Slot>().is_err());
    assert!("0800".parse::<Slot>().is_err());
}

#[test]
fn hour_index_credits_the_hour_an_interval_closes() {
    let top_of_hour: Slot = "15:00".parse().unwrap();
    let mid_hour: Slot = "14:05".parse().unwrap();
    assert_eq!(top_of_hour.hour_index(), 14);
    assert_eq!(mid_hour.hour_index(), 14);
    assert_eq!(Slot::DAY_END.hour_index(), 23);
    assert_eq!("00:05".parse::<Slot>().unwrap().hour_index(), 0);
}

#[test]
fn trading_day_translates_to_half_open_utc_range() {
    let day = TradingDay::parse("2025-01-15").unwrap();
    let range = day.utc_range();
    assert_eq!(range.start.to_rfc3339(), "2025-01-15T06:00:00+00:00");
    assert_eq!(range.end.to_rfc3339(), "2025-01-16T06:00:00+00:00");
    assert!(range.contains(range.start));
    assert!(!range.contains(range.end));
}

#[test]
fn trading_day_rejects_garbage() {
    assert!(TradingDay::parse("2025-13-40").is_err());
    assert!(TradingDay::parse("yesterday").is_err());
}

#[test]
fn instant_maps_to_its_market_local_day() {
    // 02:00 UTC is still the previous market-local day.
    let ts = "2025-01-16T02:00:00Z".parse::<DateTime<Utc>>().unwrap();
    assert_eq!(TradingDay::containing(ts), TradingDay::parse("2025-01-15").unwrap());
}
