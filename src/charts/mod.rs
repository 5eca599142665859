//! Dashboard Charts
//!
//! Reshapes simulation frames into the three line charts of the dashboard.
//! Rendering is left to the front end; this module only produces the data.

pub mod series;

pub use series::{
    build_all, build_chart, ChartData, ChartKind, DashboardCharts, Dataset, SimulationFrame,
};

use thiserror::Error;

/// Chart errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Unknown chart: {0} (expected consumption, temperature-error or temperatures)")]
    UnknownChart(String),
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
