use thiserror::Error;

/// Unified error type for the sppgrid workspace.
///
/// This wraps configuration failures, backing-series query failures,
/// unparseable upstream payloads, and argument validation errors.
#[derive(Debug, Error)]
pub enum GridError {
    /// A required connection parameter is absent. Raised at construction
    /// time, before any query is issued; fatal.
    #[error("missing configuration: {what}")]
    Config {
        /// The parameter (environment variable) that was not set.
        what: &'static str,
    },

    /// A backing-series query failed. Fatal for primary actual-price series;
    /// recovered locally for prediction series.
    #[error("source unavailable: {series}: {msg}")]
    SourceUnavailable {
        /// The series (backing table or upstream feed) that failed.
        series: String,
        /// Human-readable failure message.
        msg: String,
    },

    /// An upstream service returned a body we could not parse.
    #[error("malformed upstream payload: {0}")]
    MalformedPayload(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl GridError {
    /// Helper: build a `Config` error for a missing parameter.
    #[must_use]
    pub const fn config(what: &'static str) -> Self {
        Self::Config { what }
    }

    /// Helper: build a `SourceUnavailable` error with the series name and message.
    pub fn unavailable(series: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            series: series.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `MalformedPayload` error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedPayload(msg.into())
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }
}
