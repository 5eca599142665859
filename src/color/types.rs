//! Core types for heat-map color mapping
//!
//! - `Bound`: validated symmetric magnitude of the color scale
//! - `ScaleBounds`: the sub-bounds derived from a `Bound`
//! - `Segment`: which piece of the piecewise scale a sample falls in
//! - `Rgba`: the produced color and its CSS text form
//! - `RampMode`: formula used for the cyan-to-green segment

use super::error::{ColorError, ColorResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fourth channel emitted with every color.
///
/// Kept as the raw number `100` rather than a normalized alpha, since existing
/// consumers match on the `rgba(R, G, B, 100)` text.
pub const ALPHA: u8 = 100;

/// Full intensity of a color channel
pub const CHANNEL_MAX: f64 = 255.0;

/// Symmetric magnitude of the color scale.
///
/// The scale spans `[-bound, +bound]`. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Bound(f64);

impl Bound {
    /// Validate and wrap a bound value
    pub fn new(value: f64) -> ColorResult<Self> {
        if !value.is_finite() {
            return Err(ColorError::NonFinite {
                what: "bound",
                value,
            });
        }
        if value < 0.0 {
            return Err(ColorError::NegativeBound(value));
        }
        Ok(Self(value))
    }

    /// Raw bound value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Derive the five scale edges
    pub fn scale(&self) -> ScaleBounds {
        let upper = self.0;
        let middle_upper = upper / 2.0;
        ScaleBounds {
            lower: -upper,
            middle_lower: -middle_upper,
            center: 0.0,
            middle_upper,
            upper,
            range: upper - middle_upper,
        }
    }
}

impl Default for Bound {
    fn default() -> Self {
        Self(0.5)
    }
}

impl TryFrom<f64> for Bound {
    type Error = ColorError;

    fn try_from(value: f64) -> ColorResult<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Edges of the scale derived from a single bound
///
/// `range` is the width of one quarter segment (`bound / 2`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleBounds {
    pub lower: f64,
    pub middle_lower: f64,
    pub center: f64,
    pub middle_upper: f64,
    pub upper: f64,
    pub range: f64,
}

impl ScaleBounds {
    /// Interpolation fraction for a segment; zero when the scale has no width
    pub(crate) fn fraction(&self, numerator: f64) -> f64 {
        if self.range == 0.0 {
            0.0
        } else {
            numerator / self.range
        }
    }
}

/// Piece of the color scale a sample falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// Below `-bound`: saturated blue
    BelowScale,
    /// `[-bound, -bound/2)`: blue to cyan, green channel ramps up
    BlueToCyan,
    /// `[-bound/2, 0)`: cyan to green, blue channel ramps down
    CyanToGreen,
    /// `[0, bound/2)`: green to yellow, red channel ramps up
    GreenToYellow,
    /// `[bound/2, bound]`: yellow to red, green channel ramps down
    YellowToRed,
    /// Above `bound`: saturated red
    AboveScale,
}

impl Segment {
    /// Classify a sample. First match wins, so a value sitting exactly on a
    /// junction belongs to the segment whose lower edge it is, except `bound`
    /// itself which closes `YellowToRed`.
    ///
    /// The sample must not be NaN; NaN fails every comparison and would land
    /// in `AboveScale`.
    pub fn classify(sample: f64, scale: &ScaleBounds) -> Self {
        if sample < scale.lower {
            Segment::BelowScale
        } else if scale.lower <= sample && sample < scale.middle_lower {
            Segment::BlueToCyan
        } else if scale.middle_lower <= sample && sample < scale.center {
            Segment::CyanToGreen
        } else if scale.center <= sample && sample < scale.middle_upper {
            Segment::GreenToYellow
        } else if scale.middle_upper <= sample && sample <= scale.upper {
            Segment::YellowToRed
        } else {
            Segment::AboveScale
        }
    }

    /// Whether this segment interpolates (as opposed to a fixed saturated color)
    pub fn is_interpolated(&self) -> bool {
        !matches!(self, Segment::BelowScale | Segment::AboveScale)
    }

    /// Get all segments in scale order
    pub fn all() -> &'static [Segment] {
        &[
            Segment::BelowScale,
            Segment::BlueToCyan,
            Segment::CyanToGreen,
            Segment::GreenToYellow,
            Segment::YellowToRed,
            Segment::AboveScale,
        ]
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::BelowScale => write!(f, "below_scale"),
            Segment::BlueToCyan => write!(f, "blue_to_cyan"),
            Segment::CyanToGreen => write!(f, "cyan_to_green"),
            Segment::GreenToYellow => write!(f, "green_to_yellow"),
            Segment::YellowToRed => write!(f, "yellow_to_red"),
            Segment::AboveScale => write!(f, "above_scale"),
        }
    }
}

/// Formula used for the cyan-to-green ramp
///
/// `Literal` is `(range + (middle_lower - sample)) / range`, the historical
/// formula. `Symmetric` is `(0 - sample) / range`, the mirror image of the
/// green-to-yellow ramp. The two agree algebraically and can differ only by
/// floating-point rounding. The `symmetric-ramp` cargo feature makes
/// `Symmetric` the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RampMode {
    #[cfg_attr(not(feature = "symmetric-ramp"), default)]
    Literal,
    #[cfg_attr(feature = "symmetric-ramp", default)]
    Symmetric,
}

impl FromStr for RampMode {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "literal" => Ok(RampMode::Literal),
            "symmetric" => Ok(RampMode::Symmetric),
            other => Err(ColorError::UnknownRampMode(other.to_string())),
        }
    }
}

impl fmt::Display for RampMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RampMode::Literal => write!(f, "literal"),
            RampMode::Symmetric => write!(f, "symmetric"),
        }
    }
}

/// An RGBA color as produced by the mapper
///
/// R, G and B are not clamped or rounded: interpolated channels are
/// `fraction * 255` exactly as computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: u8,
}

impl Rgba {
    /// Build a color with the fixed fourth channel
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: ALPHA }
    }

    /// Saturated blue used below the scale
    pub const BLUE: Rgba = Rgba::new(0.0, 0.0, CHANNEL_MAX);

    /// Saturated red used above the scale
    pub const RED: Rgba = Rgba::new(CHANNEL_MAX, 0.0, 0.0);

    /// Largest absolute per-channel difference between two colors
    pub fn max_channel_delta(&self, other: &Rgba) -> f64 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
    }

    /// CSS text form, e.g. `rgba(0, 127.5, 255, 100)`
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

/// Print a channel in shortest form, folding `-0` into `0`
fn channel(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            self.a
        )
    }
}
