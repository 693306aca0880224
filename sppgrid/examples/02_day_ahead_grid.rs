use std::sync::Arc;

use sppgrid::{Sppgrid, SettlementPoint, TradingDay};
use sppgrid_mock::{MockForecast, MockStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let day = TradingDay::parse("2025-01-16")?;
    let points: Vec<SettlementPoint> =
        ["LZ_WEST", "HB_HOUSTON"].iter().copied().map(SettlementPoint::new).collect();

    let store = Arc::new(MockStore::with_fixture_day(day, &points));
    // Force one point's forecast to fail: the grid still comes back whole,
    // with that point's predictions absent.
    let forecast = Arc::new(
        MockForecast::with_fixture_day(day, &points)
            .with_failure(SettlementPoint::new("HB_HOUSTON")),
    );

    let grid = Sppgrid::builder()
        .with_store(store)
        .with_forecast(forecast)
        .settlement_points(points)
        .build()?;
    let resp = grid.day_ahead_grid(Some(day)).await?;

    println!("Day-ahead grid for {}:", resp.date);
    for row in resp.data.iter().take(4) {
        println!(
            " - HE {}: actuals {:?} | predictions {:?}",
            row.slot,
            row.prices.values().collect::<Vec<_>>(),
            row.predictions.values().collect::<Vec<_>>(),
        );
    }

    Ok(())
}
