//! Heat-map color mapping
//!
//! Turns a house's deviation reading into the fill color of its grid cell:
//!
//! - **types**: `Bound`, `ScaleBounds`, `Segment`, `Rgba`, `RampMode`
//! - **mapper**: `ColorMapper` and the `house_color` convenience function
//! - **report**: boundary continuity report across scale junctions
//! - **error**: error types
//!
//! # Scale
//!
//! ```text
//!   -bound      -bound/2       0        bound/2      bound
//!  ----|-----------|-----------|-----------|-----------|----
//! blue | blue→cyan | cyan→green|green→yellow|yellow→red| red
//! ```
//!
//! # Example
//!
//! ```rust
//! use hvac_dashboard::color::{Bound, ColorMapper};
//!
//! let mapper = ColorMapper::new(Bound::new(1.0).unwrap());
//! assert_eq!(mapper.css(0.25).unwrap(), "rgba(127.5, 255, 0, 100)");
//! ```

pub mod error;
pub mod mapper;
pub mod report;
pub mod types;

pub use error::{ColorError, ColorResult};
pub use mapper::{house_color, ColorMapper};
pub use report::{boundary_report, BoundaryJump};
pub use types::{Bound, RampMode, Rgba, ScaleBounds, Segment, ALPHA, CHANNEL_MAX};
