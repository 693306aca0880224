//! sppgrid
//!
//! High-level orchestrator for the settlement-point price grid engine.
//!
//! `Sppgrid` holds a read-only handle to the backing time-series store (and
//! optionally a forecast provider), constructed once at startup and shared
//! across concurrent requests. Each view operation (real-time grid,
//! day-ahead grid, hourly chart) issues its source queries concurrently,
//! reconciles multi-table feeds under the provisional-wins precedence rule,
//! and assembles a dense, gap-filled response envelope.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sppgrid::Sppgrid;
//! use sppgrid_core::TradingDay;
//!
//! # async fn run(store: Arc<dyn sppgrid_core::SeriesStore>) -> Result<(), sppgrid_core::GridError> {
//! let grid = Sppgrid::builder().with_store(store).build()?;
//! let response = grid.realtime_grid(Some(TradingDay::parse("2025-01-15")?)).await?;
//! assert_eq!(response.data.len(), 288);
//! # Ok(())
//! # }
//! ```

mod core;
mod router;

pub use crate::core::{DEFAULT_SETTLEMENT_POINTS, Sppgrid, SppgridBuilder};
pub use sppgrid_core::{
    ChartResponse, DayAheadResponse, GridError, GridResponse, SettlementPoint, TradingDay,
};
