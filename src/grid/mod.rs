//! House Grid
//!
//! The heat-map grid of houses:
//!
//! - **types**: `HouseData`, `HvacStatus`, `Page`, `GridCell`
//! - **layout**: `GridLayout` (square pages, CSS templates, pagination) and
//!   `render_page`
//! - **error**: error types
//!
//! # Example
//!
//! ```rust
//! use hvac_dashboard::color::ColorMapper;
//! use hvac_dashboard::grid::{render_page, GridLayout, HouseData, HvacStatus};
//!
//! let houses = vec![HouseData::new(1, HvacStatus::On, 0.0)];
//! let layout = GridLayout::new(25).unwrap();
//! let page = layout.page(&houses, 1).unwrap();
//! let cells = render_page(&page, &ColorMapper::default()).unwrap();
//! assert_eq!(cells[0].fill, "rgba(0, 255, 0, 100)");
//! ```

pub mod error;
pub mod layout;
pub mod types;

pub use error::{GridError, GridResult};
pub use layout::{render_page, GridLayout, SQUARE_COUNT_OPTIONS};
pub use types::{GridCell, HouseData, HvacStatus, Page};
