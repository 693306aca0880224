use std::sync::Arc;

use sppgrid::{Sppgrid, SettlementPoint, TradingDay};
use sppgrid_core::SeriesStore;
use sppgrid_influx::InfluxStore;
use sppgrid_mock::MockStore;

/// Use the real backing store when configured, the fixture store otherwise,
/// so the example also runs in CI.
fn get_store(day: TradingDay) -> Result<Arc<dyn SeriesStore>, Box<dyn std::error::Error>> {
    if std::env::var("SPPGRID_INFLUX_URL").is_ok() {
        Ok(Arc::new(InfluxStore::from_env()?))
    } else {
        println!("--- (Using mock store; set SPPGRID_INFLUX_* to query InfluxDB) ---");
        let points = [SettlementPoint::new("LZ_WEST")];
        Ok(Arc::new(MockStore::with_fixture_day(day, &points)))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let day = TradingDay::parse("2025-01-15")?;
    let grid = Sppgrid::builder().with_store(get_store(day)?).build()?;
    let resp = grid.chart_day(Some(day), None).await?;

    println!("Hourly chart for {} at {}:", resp.date, resp.settlement_point);
    for bucket in &resp.data {
        println!(
            " - hour {:>2}: rtm {:>8} | dam {:>8} | predicted {:>8}",
            bucket.hour,
            fmt(bucket.actual_realtime),
            fmt(bucket.actual_day_ahead),
            fmt(bucket.predicted_day_ahead),
        );
    }

    Ok(())
}

fn fmt(v: Option<f64>) -> String {
    v.map_or_else(|| "n/a".to_string(), |p| format!("{p:.2}"))
}
