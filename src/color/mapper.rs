//! Heat-map color mapper
//!
//! Maps a signed deviation sample onto a five-segment piecewise linear scale
//! spanning `[-bound, +bound]`: blue, cyan, green, yellow, red. Samples outside
//! the scale saturate at blue or red.
//!
//! The bound is always passed in; the mapper reads no shared state and may be
//! called from any number of threads.

use super::error::{ColorError, ColorResult};
use super::types::{Bound, RampMode, Rgba, ScaleBounds, Segment, CHANNEL_MAX};

/// Color mapper over a fixed bound
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorMapper {
    bound: Bound,
    mode: RampMode,
}

impl ColorMapper {
    /// Create a mapper using the default ramp formula
    pub fn new(bound: Bound) -> Self {
        Self {
            bound,
            mode: RampMode::default(),
        }
    }

    /// Builder method: select the cyan-to-green ramp formula
    pub fn with_mode(mut self, mode: RampMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn bound(&self) -> Bound {
        self.bound
    }

    pub fn mode(&self) -> RampMode {
        self.mode
    }

    /// Map a sample to its color
    ///
    /// Fails only for a NaN sample. Infinite samples saturate.
    pub fn map(&self, sample: f64) -> ColorResult<Rgba> {
        if sample.is_nan() {
            return Err(ColorError::NonFinite {
                what: "sample",
                value: sample,
            });
        }
        let scale = self.bound.scale();
        let segment = Segment::classify(sample, &scale);
        Ok(color_in_segment(segment, sample, &scale, self.mode))
    }

    /// Map a sample and report the segment it fell in
    pub fn classify(&self, sample: f64) -> ColorResult<(Segment, Rgba)> {
        let color = self.map(sample)?;
        Ok((Segment::classify(sample, &self.bound.scale()), color))
    }

    /// Map a sample straight to its CSS text
    pub fn css(&self, sample: f64) -> ColorResult<String> {
        self.map(sample).map(|c| c.to_css())
    }
}

/// Map a sample against a raw bound value and return the CSS color text
///
/// Convenience wrapper for callers holding the bound as a plain float.
pub fn house_color(sample: f64, bound: f64) -> ColorResult<String> {
    ColorMapper::new(Bound::new(bound)?).css(sample)
}

/// Compute the color for a sample already classified into `segment`
pub(crate) fn color_in_segment(
    segment: Segment,
    sample: f64,
    scale: &ScaleBounds,
    mode: RampMode,
) -> Rgba {
    match segment {
        Segment::BelowScale => Rgba::BLUE,
        Segment::BlueToCyan => {
            let green = scale.fraction(-(scale.lower - sample)) * CHANNEL_MAX;
            Rgba::new(0.0, green, CHANNEL_MAX)
        }
        Segment::CyanToGreen => {
            let numerator = match mode {
                RampMode::Literal => scale.range + (scale.middle_lower - sample),
                RampMode::Symmetric => scale.center - sample,
            };
            let blue = scale.fraction(numerator) * CHANNEL_MAX;
            Rgba::new(0.0, CHANNEL_MAX, blue)
        }
        Segment::GreenToYellow => {
            let red = scale.fraction(scale.range - (scale.middle_upper - sample)) * CHANNEL_MAX;
            Rgba::new(red, CHANNEL_MAX, 0.0)
        }
        Segment::YellowToRed => {
            let green = scale.fraction(scale.upper - sample) * CHANNEL_MAX;
            Rgba::new(CHANNEL_MAX, green, 0.0)
        }
        Segment::AboveScale => Rgba::RED,
    }
}
