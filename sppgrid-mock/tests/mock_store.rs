use sppgrid_core::{GridError, PriceSeries, SeriesStore, SettlementPoint, TradingDay};
use sppgrid_mock::MockStore;

fn west() -> SettlementPoint {
    SettlementPoint::new("LZ_WEST")
}

fn day() -> TradingDay {
    TradingDay::parse("2025-01-15").unwrap()
}

#[tokio::test]
async fn fixture_day_is_deterministic_and_scoped_to_the_day() {
    let store = MockStore::with_fixture_day(day(), &[west()]);
    let range = day().utc_range();

    let api = store
        .price_rows(PriceSeries::RtmApi, range, &[west()])
        .await
        .unwrap();
    let api_again = store
        .price_rows(PriceSeries::RtmApi, range, &[west()])
        .await
        .unwrap();
    assert_eq!(api, api_again);
    assert!(!api.is_empty());
    assert!(api.iter().all(|r| range.contains(r.ts)));
    assert!(api.windows(2).all(|w| w[0].ts <= w[1].ts));

    // A different trading day sees none of it.
    let other = TradingDay::parse("2025-03-01").unwrap().utc_range();
    let none = store
        .price_rows(PriceSeries::RtmApi, other, &[west()])
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn unknown_points_are_filtered_out() {
    let store = MockStore::with_fixture_day(day(), &[west()]);
    let rows = store
        .price_rows(
            PriceSeries::DamHourly,
            day().utc_range(),
            &[SettlementPoint::new("HB_HOUSTON")],
        )
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn forced_failure_only_hits_the_selected_series() {
    let store =
        MockStore::with_fixture_day(day(), &[west()]).with_failure(PriceSeries::RtmRealtime);
    let range = day().utc_range();

    assert!(matches!(
        store
            .price_rows(PriceSeries::RtmRealtime, range, &[west()])
            .await,
        Err(GridError::SourceUnavailable { .. })
    ));
    assert!(
        store
            .price_rows(PriceSeries::RtmApi, range, &[west()])
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn provisional_fixture_overlaps_the_authoritative_tail() {
    let store = MockStore::with_fixture_day(day(), &[west()]);
    let range = day().utc_range();

    let api = store
        .price_rows(PriceSeries::RtmApi, range, &[west()])
        .await
        .unwrap();
    let realtime = store
        .price_rows(PriceSeries::RtmRealtime, range, &[west()])
        .await
        .unwrap();

    let overlap = realtime
        .iter()
        .filter(|r| api.iter().any(|a| a.ts == r.ts))
        .count();
    assert!(overlap > 0, "fixtures must exercise merge precedence");
}
