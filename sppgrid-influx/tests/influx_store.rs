use httpmock::prelude::*;
use serde_json::json;

use sppgrid_core::{GridError, PriceSeries, SeriesStore, SettlementPoint, TradingDay};
use sppgrid_influx::{InfluxConfig, InfluxStore};

fn store_for(server: &MockServer) -> InfluxStore {
    InfluxStore::new(InfluxConfig {
        url: server.base_url(),
        token: "t0ken".into(),
        database: "prices".into(),
    })
    .unwrap()
}

fn points(names: &[&str]) -> Vec<SettlementPoint> {
    names.iter().copied().map(SettlementPoint::new).collect()
}

#[tokio::test]
async fn price_rows_parse_in_ascending_order() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v3/query_sql");
            then.status(200).json_body(json!([
                {"time": "2025-01-15T06:00:00Z", "settlement_point": "LZ_WEST", "lmp": 21.5},
                {"time": "2025-01-15T06:05:00Z", "settlement_point": "LZ_WEST", "lmp": 22.0},
                {"time": "2025-01-15T06:05:00Z", "settlement_point": "HB_HOUSTON", "lmp": -3.25}
            ]));
        })
        .await;

    let store = store_for(&server);
    let range = TradingDay::parse("2025-01-15").unwrap().utc_range();
    let rows = store
        .price_rows(PriceSeries::RtmApi, range, &points(&["LZ_WEST", "HB_HOUSTON"]))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].point.as_str(), "LZ_WEST");
    assert_eq!(rows[0].price, 21.5);
    assert!(rows.windows(2).all(|w| w[0].ts <= w[1].ts));
}

#[tokio::test]
async fn prediction_rows_carry_hour_ending_labels() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v3/query_sql");
            then.status(200).json_body(json!([
                {"time": "2025-01-15T07:00:00Z", "settlement_point": "LZ_WEST",
                 "predicted_price": 24.75, "hour_ending": 2}
            ]));
        })
        .await;

    let store = store_for(&server);
    let range = TradingDay::parse("2025-01-15").unwrap().utc_range();
    let rows = store
        .prediction_rows(range, &points(&["LZ_WEST"]))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].hour_ending, 2);
    assert_eq!(rows[0].predicted_price, 24.75);
}

#[tokio::test]
async fn non_success_status_maps_to_source_unavailable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v3/query_sql");
            then.status(503).body("unavailable");
        })
        .await;

    let store = store_for(&server);
    let range = TradingDay::parse("2025-01-15").unwrap().utc_range();
    let err = store
        .price_rows(PriceSeries::DamHourly, range, &points(&["LZ_WEST"]))
        .await
        .unwrap_err();

    match err {
        GridError::SourceUnavailable { series, .. } => assert_eq!(series, "dam_lmp"),
        other => panic!("expected SourceUnavailable, got {other}"),
    }
}

#[tokio::test]
async fn unparseable_body_maps_to_malformed_payload() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v3/query_sql");
            then.status(200).body("not json at all");
        })
        .await;

    let store = store_for(&server);
    let range = TradingDay::parse("2025-01-15").unwrap().utc_range();
    let err = store
        .price_rows(PriceSeries::RtmRealtime, range, &points(&["LZ_WEST"]))
        .await
        .unwrap_err();

    assert!(matches!(err, GridError::MalformedPayload(_)));
}

#[tokio::test]
async fn empty_point_set_short_circuits_without_a_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v3/query_sql");
            then.status(200).json_body(json!([]));
        })
        .await;

    let store = store_for(&server);
    let range = TradingDay::parse("2025-01-15").unwrap().utc_range();
    let rows = store
        .price_rows(PriceSeries::RtmApi, range, &[])
        .await
        .unwrap();

    assert!(rows.is_empty());
    mock.assert_hits_async(0).await;
}

#[test]
fn missing_environment_fails_fast_naming_the_variable() {
    // Single test owns all three variables to avoid races between cases.
    unsafe {
        std::env::remove_var("SPPGRID_INFLUX_URL");
        std::env::remove_var("SPPGRID_INFLUX_TOKEN");
        std::env::remove_var("SPPGRID_INFLUX_DATABASE");
    }
    match InfluxConfig::from_env() {
        Err(GridError::Config { what }) => assert_eq!(what, "SPPGRID_INFLUX_URL"),
        other => panic!("expected Config error, got {other:?}"),
    }

    unsafe { std::env::set_var("SPPGRID_INFLUX_URL", "http://localhost:8181") };
    match InfluxConfig::from_env() {
        Err(GridError::Config { what }) => assert_eq!(what, "SPPGRID_INFLUX_TOKEN"),
        other => panic!("expected Config error, got {other:?}"),
    }

    unsafe {
        std::env::set_var("SPPGRID_INFLUX_TOKEN", "t0ken");
        std::env::set_var("SPPGRID_INFLUX_DATABASE", "prices");
    }
    let cfg = InfluxConfig::from_env().unwrap();
    assert_eq!(cfg.database, "prices");
}

#[test]
fn unusable_url_is_rejected_at_construction() {
    let err = InfluxStore::new(InfluxConfig {
        url: "not a url".into(),
        token: "t".into(),
        database: "d".into(),
    })
    .unwrap_err();
    assert!(matches!(err, GridError::InvalidArg(_)));
}
