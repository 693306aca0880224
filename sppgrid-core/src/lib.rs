//! sppgrid-core
//!
//! Core types, traits, and utilities shared across the sppgrid ecosystem.
//!
//! - `types`: common data structures (price records, slots, trading days).
//! - `store`: the `SeriesStore` and `ForecastProvider` traits implemented by
//!   backing-store and prediction-service adapters.
//! - `timegrid`: the market-convention time bucketer (fixed UTC-6 offset,
//!   interval-ending and hour-ending labels, canonical slot enumerations).
//! - `timeseries`: merging, pivoting, and chart composition over record
//!   streams.
//! - `response`: the serialized envelopes handed to the serving layer.
//!
//! Everything here is pure and request-scoped: records come in from a store
//! adapter, flow through merge and pivot/compose, and are discarded once the
//! response envelope is built. Nothing in this crate performs I/O.
#![warn(missing_docs)]

/// Unified error taxonomy for the workspace.
pub mod error;
/// Wire-facing response envelopes.
pub mod response;
/// Provider traits for backing stores and prediction services.
pub mod store;
/// Market-convention time bucketing and slot enumeration.
pub mod timegrid;
/// Time-series utilities for merging, pivoting, and composing.
pub mod timeseries;
pub mod types;

pub use error::GridError;
pub use response::{ChartResponse, DayAheadResponse, GridResponse};
pub use store::{ForecastProvider, SeriesStore};
pub use timeseries::compose::{ChartPoint, compose_chart};
pub use timeseries::merge::merge_price_series;
pub use timeseries::pivot::{attach_predictions, pivot};
pub use types::*;
