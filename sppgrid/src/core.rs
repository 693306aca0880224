use std::sync::Arc;
use std::time::Duration;

use sppgrid_core::{ForecastProvider, GridError, SeriesStore, SettlementPoint};

/// Settlement points served when the builder is not given an explicit set:
/// the market's hubs and load zones.
pub const DEFAULT_SETTLEMENT_POINTS: [&str; 8] = [
    "HB_HOUSTON",
    "HB_NORTH",
    "HB_SOUTH",
    "HB_WEST",
    "LZ_HOUSTON",
    "LZ_NORTH",
    "LZ_SOUTH",
    "LZ_WEST",
];

const DEFAULT_CHART_POINT: &str = "LZ_WEST";

pub(crate) struct SppgridConfig {
    pub(crate) settlement_points: Vec<SettlementPoint>,
    pub(crate) chart_point: SettlementPoint,
    pub(crate) forecast_timeout: Duration,
}

impl Default for SppgridConfig {
    fn default() -> Self {
        Self {
            settlement_points: DEFAULT_SETTLEMENT_POINTS
                .iter()
                .copied()
                .map(SettlementPoint::new)
                .collect(),
            chart_point: SettlementPoint::new(DEFAULT_CHART_POINT),
            forecast_timeout: Duration::from_secs(5),
        }
    }
}

/// Orchestrator that assembles grid and chart views from the backing store
/// and the optional forecast provider.
///
/// Stateless per request: all entities are constructed fresh from query
/// results and discarded after the response envelope is built. The only
/// shared state is the read-only store handle.
pub struct Sppgrid {
    pub(crate) store: Arc<dyn SeriesStore>,
    pub(crate) forecast: Option<Arc<dyn ForecastProvider>>,
    pub(crate) cfg: SppgridConfig,
}

impl Sppgrid {
    /// Start building a new `Sppgrid` instance.
    #[must_use]
    pub fn builder() -> SppgridBuilder {
        SppgridBuilder::new()
    }

    /// The settlement points this instance serves, in column order.
    #[must_use]
    pub fn settlement_points(&self) -> &[SettlementPoint] {
        &self.cfg.settlement_points
    }
}

impl std::fmt::Debug for Sppgrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sppgrid")
            .field("settlement_points", &self.cfg.settlement_points)
            .field("chart_point", &self.cfg.chart_point)
            .field("forecast_timeout", &self.cfg.forecast_timeout)
            .field("has_forecast", &self.forecast.is_some())
            .finish()
    }
}

/// Builder for constructing a [`Sppgrid`] orchestrator.
pub struct SppgridBuilder {
    store: Option<Arc<dyn SeriesStore>>,
    forecast: Option<Arc<dyn ForecastProvider>>,
    cfg: SppgridConfig,
}

impl Default for SppgridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SppgridBuilder {
    /// Create a new builder with the default settlement-point set and a 5 s
    /// forecast timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: None,
            forecast: None,
            cfg: SppgridConfig::default(),
        }
    }

    /// Set the backing time-series store. Required.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn SeriesStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the external forecast provider. Optional: without one, day-ahead
    /// grids carry all-absent predictions.
    #[must_use]
    pub fn with_forecast(mut self, forecast: Arc<dyn ForecastProvider>) -> Self {
        self.forecast = Some(forecast);
        self
    }

    /// Override the settlement points served, in column order.
    #[must_use]
    pub fn settlement_points<I, P>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<SettlementPoint>,
    {
        self.cfg.settlement_points = points.into_iter().map(Into::into).collect();
        self
    }

    /// Override the settlement point charted by default.
    #[must_use]
    pub fn chart_point(mut self, point: impl Into<SettlementPoint>) -> Self {
        self.cfg.chart_point = point.into();
        self
    }

    /// Set the per-call deadline applied to each forecast fetch. One point's
    /// timeout never cancels another's.
    #[must_use]
    pub const fn forecast_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.forecast_timeout = timeout;
        self
    }

    /// Build the orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` when no store is configured or the
    /// settlement-point set is empty.
    pub fn build(self) -> Result<Sppgrid, GridError> {
        let store = self.store.ok_or_else(|| {
            GridError::invalid("no backing store configured; add one via with_store(...)")
        })?;
        if self.cfg.settlement_points.is_empty() {
            return Err(GridError::invalid("settlement point set must not be empty"));
        }
        Ok(Sppgrid {
            store,
            forecast: self.forecast,
            cfg: self.cfg,
        })
    }
}
