//! Per-view request assembly: each module implements one query operation on
//! [`crate::Sppgrid`], fetching its sources concurrently and building the
//! response envelope only after every branch has settled.

mod chart;
mod day_ahead;
mod realtime;
