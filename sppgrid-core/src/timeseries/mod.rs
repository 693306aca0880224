//! Time-series utilities shared by adapters and the orchestrator.
//!
//! Modules include:
//! - `merge`: reconcile multiple backing series for one logical feed under a
//!   precedence rule
//! - `pivot`: bucket records onto the canonical slot grid, dense and
//!   gap-filled
//! - `compose`: align structurally different series onto one 24-hour chart
//!   frame
/// Precedence merging for multi-table feeds.
pub mod merge;
/// Dense grid pivoting and prediction attachment.
pub mod pivot;
/// Hourly chart composition across series.
pub mod compose;
