//! Display Settings
//!
//! The dashboard's display state: color-scale precision, number of squares per
//! grid page, and the page being shown. Held as a plain value and passed to
//! whatever needs it, rather than observed from shared state.

use crate::color::{Bound, ColorMapper, RampMode};
use crate::grid::{GridLayout, SQUARE_COUNT_OPTIONS};
use serde::Serialize;
use thiserror::Error;

/// Default color-scale precision
pub const DEFAULT_PRECISION: f64 = 0.5;

/// Default number of squares per page
pub const DEFAULT_SQUARE_COUNT: usize = 100;

/// Errors raised when a display setting is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// Precision must be a finite, non-negative number
    #[error("Invalid precision: {0} (must be a finite number >= 0)")]
    InvalidPrecision(f64),

    /// Square count not in the offered options
    #[error("Unsupported square count: {0}")]
    UnsupportedSquareCount(usize),

    /// Pages are numbered from 1
    #[error("Invalid page: {0} (pages start at 1)")]
    InvalidPage(usize),
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Tick values shown under the color legend
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleLegend {
    pub neg_min: f64,
    pub neg_mid_min: f64,
    pub mid: f64,
    pub pos_mid_max: f64,
    pub pos_max: f64,
}

impl ScaleLegend {
    /// Legend ticks for a bound
    pub fn for_bound(bound: Bound) -> Self {
        let scale = bound.scale();
        Self {
            neg_min: scale.lower,
            neg_mid_min: scale.lower / 2.0,
            mid: scale.center,
            pos_mid_max: scale.upper / 2.0,
            pos_max: scale.upper,
        }
    }

    /// Ticks in left-to-right order
    pub fn ticks(&self) -> [f64; 5] {
        [
            self.neg_min,
            self.neg_mid_min,
            self.mid,
            self.pos_mid_max,
            self.pos_max,
        ]
    }
}

/// Current display state of the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    precision: Bound,
    square_count: usize,
    page: usize,
    ramp_mode: RampMode,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            precision: Bound::default(),
            square_count: DEFAULT_SQUARE_COUNT,
            page: 1,
            ramp_mode: RampMode::default(),
        }
    }
}

impl DisplaySettings {
    /// Create settings with the default precision, square count and page
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: select the cyan-to-green ramp formula
    pub fn with_ramp_mode(mut self, mode: RampMode) -> Self {
        self.ramp_mode = mode;
        self
    }

    pub fn precision(&self) -> f64 {
        self.precision.value()
    }

    pub fn square_count(&self) -> usize {
        self.square_count
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn ramp_mode(&self) -> RampMode {
        self.ramp_mode
    }

    /// Change the color-scale precision
    ///
    /// Negative or non-finite values are rejected and leave the current
    /// precision untouched.
    pub fn set_precision(&mut self, precision: f64) -> SettingsResult<()> {
        let bound =
            Bound::new(precision).map_err(|_| SettingsError::InvalidPrecision(precision))?;
        tracing::debug!(precision, "Precision changed");
        self.precision = bound;
        Ok(())
    }

    /// Change the number of squares per page; resets to the first page
    pub fn set_square_count(&mut self, square_count: usize) -> SettingsResult<()> {
        if !SQUARE_COUNT_OPTIONS.contains(&square_count) {
            return Err(SettingsError::UnsupportedSquareCount(square_count));
        }
        tracing::debug!(square_count, "Square count changed");
        self.square_count = square_count;
        self.page = 1;
        Ok(())
    }

    /// Switch to a 1-based page
    pub fn set_page(&mut self, page: usize) -> SettingsResult<()> {
        if page == 0 {
            return Err(SettingsError::InvalidPage(page));
        }
        self.page = page;
        Ok(())
    }

    /// Legend ticks for the current precision
    pub fn legend(&self) -> ScaleLegend {
        ScaleLegend::for_bound(self.precision)
    }

    /// Color mapper over the current precision
    pub fn mapper(&self) -> ColorMapper {
        ColorMapper::new(self.precision).with_mode(self.ramp_mode)
    }

    /// Grid layout for the current square count
    pub fn layout(&self) -> GridLayout {
        // Square counts are only ever set from the option list, all perfect squares
        GridLayout::from_option(self.square_count)
    }
}
