use std::sync::Arc;

use sppgrid::{DEFAULT_SETTLEMENT_POINTS, Sppgrid, SettlementPoint, TradingDay};
use sppgrid_mock::MockStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. A deterministic fixture day, so the example runs offline.
    let day = TradingDay::parse("2025-01-15")?;
    let points: Vec<SettlementPoint> = DEFAULT_SETTLEMENT_POINTS
        .iter()
        .copied()
        .map(SettlementPoint::new)
        .collect();
    let store = Arc::new(MockStore::with_fixture_day(day, &points));

    // 2. Build the orchestrator and fetch the dense 5-minute grid.
    let grid = Sppgrid::builder().with_store(store).build()?;
    let resp = grid.realtime_grid(Some(day)).await?;

    println!(
        "Real-time grid for {}: {} rows x {} points",
        resp.date,
        resp.data.len(),
        resp.settlement_points.len()
    );

    // 3. Show the first populated rows; gaps stay in the grid as nulls.
    let west = SettlementPoint::new("LZ_WEST");
    for row in resp.data.iter().filter(|r| r.prices[&west].is_some()).take(5) {
        println!(" - interval ending {}: LZ_WEST = {:?}", row.slot, row.prices[&west]);
    }

    Ok(())
}
