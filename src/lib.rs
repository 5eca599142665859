//! # HVAC Dashboard
//!
//! Display logic for a house/HVAC simulation dashboard: the heat-map colors of
//! the house grid, grid paging, and the data behind the live line charts.
//!
//! ## Modules
//!
//! - [`color`]: maps a house's deviation reading to an RGBA fill color
//! - [`settings`]: display state (precision, squares per page, page)
//! - [`grid`]: grid layout, pagination and cell rendering
//! - [`charts`]: reshaping simulation frames into chart datasets
//! - [`import`]: reading houses and frames from CSV/JSON
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use hvac_dashboard::{render_page, DisplaySettings, HouseData, HvacStatus};
//!
//! let mut settings = DisplaySettings::new();
//! settings.set_precision(1.0).unwrap();
//!
//! let houses = vec![
//!     HouseData::new(1, HvacStatus::On, -0.75),
//!     HouseData::new(2, HvacStatus::Off, 0.25),
//! ];
//! let layout = settings.layout();
//! let page = layout.page(&houses, settings.page()).unwrap();
//! let cells = render_page(&page, &settings.mapper()).unwrap();
//!
//! assert_eq!(cells[0].fill, "rgba(0, 127.5, 255, 100)");
//! assert_eq!(cells[1].fill, "rgba(127.5, 255, 0, 100)");
//! ```

pub mod charts;
pub mod color;
pub mod config;
pub mod grid;
pub mod import;
pub mod logging;
pub mod settings;

// Re-export top-level types for convenience
pub use color::{
    boundary_report, house_color, Bound, BoundaryJump, ColorError, ColorMapper, ColorResult,
    RampMode, Rgba, Segment,
};

pub use settings::{DisplaySettings, ScaleLegend, SettingsError};

pub use grid::{render_page, GridCell, GridError, GridLayout, HouseData, HvacStatus, Page};

pub use charts::{build_all, build_chart, ChartData, ChartKind, Dataset, SimulationFrame};

pub use import::{read_frames, read_houses, HouseImportResult, ImportError};

pub use config::{generate_default_config, Config, ConfigError, LoggingConfig};

pub use logging::init_logging;
