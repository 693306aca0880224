use httpmock::prelude::*;
use serde_json::json;

use sppgrid_core::{ForecastProvider, GridError, SettlementPoint, TradingDay};
use sppgrid_forecast::ForecastClient;

fn west() -> SettlementPoint {
    SettlementPoint::new("LZ_WEST")
}

fn day() -> TradingDay {
    TradingDay::parse("2025-01-16").unwrap()
}

#[tokio::test]
async fn successful_response_parses_hour_ending_labels() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/predictions/dam/next-day")
                .query_param("settlement_point", "LZ_WEST")
                .query_param("target_date", "2025-01-16");
            then.status(200).json_body(json!({
                "status": "ok",
                "settlement_point": "LZ_WEST",
                "delivery_date": "2025-01-16",
                "predictions": [
                    {"hour_ending": "01:00", "predicted_price": 22.5,
                     "timestamp": "2025-01-16T07:00:00Z"},
                    {"hour_ending": "24:00", "predicted_price": 31.0,
                     "timestamp": "2025-01-17T06:00:00Z"}
                ]
            }));
        })
        .await;

    let client = ForecastClient::new(&server.base_url()).unwrap();
    let preds = client.day_ahead(&west(), day()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(preds.len(), 2);
    assert_eq!(preds[0].hour_ending, 1);
    assert_eq!(preds[0].predicted_price, 22.5);
    assert_eq!(preds[0].ts.to_rfc3339(), "2025-01-16T07:00:00+00:00");
    assert_eq!(preds[1].hour_ending, 24);
    assert_eq!(preds[1].ts.to_rfc3339(), "2025-01-17T06:00:00+00:00");
}

#[tokio::test]
async fn non_success_status_is_source_unavailable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/predictions/dam/next-day");
            then.status(500).body("boom");
        })
        .await;

    let client = ForecastClient::new(&server.base_url()).unwrap();
    let err = client.day_ahead(&west(), day()).await.unwrap_err();
    assert!(matches!(err, GridError::SourceUnavailable { .. }));
}

#[tokio::test]
async fn unparseable_body_is_malformed_payload() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/predictions/dam/next-day");
            then.status(200).body("<html>definitely not json</html>");
        })
        .await;

    let client = ForecastClient::new(&server.base_url()).unwrap();
    let err = client.day_ahead(&west(), day()).await.unwrap_err();
    assert!(matches!(err, GridError::MalformedPayload(_)));
}

#[tokio::test]
async fn out_of_range_hour_ending_is_malformed_payload() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/predictions/dam/next-day");
            then.status(200).json_body(json!({
                "predictions": [
                    {"hour_ending": "25:00", "predicted_price": 22.5}
                ]
            }));
        })
        .await;

    let client = ForecastClient::new(&server.base_url()).unwrap();
    let err = client.day_ahead(&west(), day()).await.unwrap_err();
    assert!(matches!(err, GridError::MalformedPayload(_)));
}

#[tokio::test]
async fn empty_prediction_list_is_a_valid_empty_result() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/predictions/dam/next-day");
            then.status(200).json_body(json!({"predictions": []}));
        })
        .await;

    let client = ForecastClient::new(&server.base_url()).unwrap();
    let preds = client.day_ahead(&west(), day()).await.unwrap();
    assert!(preds.is_empty());
}

#[test]
fn unusable_base_url_is_rejected_at_construction() {
    assert!(matches!(
        ForecastClient::new("::nope::").unwrap_err(),
        GridError::InvalidArg(_)
    ));
}
