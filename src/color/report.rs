//! Boundary continuity report
//!
//! Samples the mapper on both sides of every scale junction and records how far
//! the color moves across it. Nothing here asserts continuity; the report is a
//! record of what the piecewise formulas actually do at each edge.

use super::mapper::ColorMapper;
use super::types::{Rgba, Segment};
use super::{ColorError, ColorResult};
use serde::Serialize;

/// Color on both sides of one junction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryJump {
    /// Name of the junction (e.g. "middle_lower")
    pub junction: &'static str,
    /// Junction value
    pub at: f64,
    /// Sample taken on the lower side
    pub before_sample: f64,
    pub before_segment: Segment,
    pub before: Rgba,
    /// Sample taken on the upper side
    pub after_sample: f64,
    pub after_segment: Segment,
    pub after: Rgba,
    /// Largest per-channel difference between `before` and `after`
    pub max_jump: f64,
}

impl BoundaryJump {
    /// Whether the jump exceeds `tolerance` channel units
    pub fn is_discontinuous(&self, tolerance: f64) -> bool {
        self.max_jump > tolerance
    }
}

/// Walk every junction of the mapper's scale
///
/// Junctions that are half-open from below (`-bound`, `-bound/2`, `0`,
/// `bound/2`) are compared between `at - epsilon` and `at`. The closed upper
/// edge `bound` is compared between `at` and `at + epsilon`.
///
/// When `epsilon` is too small to move a junction at its magnitude, the
/// adjacent representable float is sampled instead, so the two samples always
/// straddle the junction. `epsilon` must be finite and positive.
pub fn boundary_report(mapper: &ColorMapper, epsilon: f64) -> ColorResult<Vec<BoundaryJump>> {
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(ColorError::InvalidEpsilon(epsilon));
    }
    let scale = mapper.bound().scale();
    let junctions = [
        ("lower", scale.lower, false),
        ("middle_lower", scale.middle_lower, false),
        ("center", scale.center, false),
        ("middle_upper", scale.middle_upper, false),
        ("upper", scale.upper, true),
    ];

    let mut report = Vec::with_capacity(junctions.len());
    for (junction, at, closed) in junctions {
        let (before_sample, after_sample) = if closed {
            (at, step_above(at, epsilon))
        } else {
            (step_below(at, epsilon), at)
        };
        let (before_segment, before) = mapper.classify(before_sample)?;
        let (after_segment, after) = mapper.classify(after_sample)?;
        let max_jump = before.max_channel_delta(&after);

        if max_jump > 1.0 {
            tracing::debug!(junction, at, max_jump, "Color jump across junction");
        }

        report.push(BoundaryJump {
            junction,
            at,
            before_sample,
            before_segment,
            before,
            after_sample,
            after_segment,
            after,
            max_jump,
        });
    }
    Ok(report)
}

/// `at - epsilon`, or the next float below `at` if the subtraction rounds away
fn step_below(at: f64, epsilon: f64) -> f64 {
    let below = at - epsilon;
    if below < at {
        below
    } else {
        -next_up(-at)
    }
}

/// `at + epsilon`, or the next float above `at` if the addition rounds away
fn step_above(at: f64, epsilon: f64) -> f64 {
    let above = at + epsilon;
    if above > at {
        above
    } else {
        next_up(at)
    }
}

/// Smallest float greater than a finite `x`
fn next_up(x: f64) -> f64 {
    if x == 0.0 {
        f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() + 1)
    } else {
        f64::from_bits(x.to_bits() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Bound, RampMode};

    #[test]
    fn test_report_covers_all_junctions() {
        let mapper = ColorMapper::new(Bound::new(1.0).unwrap());
        let report = boundary_report(&mapper, 1e-6).unwrap();
        let names: Vec<_> = report.iter().map(|j| j.junction).collect();
        assert_eq!(
            names,
            vec!["lower", "middle_lower", "center", "middle_upper", "upper"]
        );
    }

    #[test]
    fn test_report_segments_straddle_junctions() {
        let mapper = ColorMapper::new(Bound::new(1.0).unwrap());
        let report = boundary_report(&mapper, 1e-6).unwrap();

        assert_eq!(report[0].before_segment, Segment::BelowScale);
        assert_eq!(report[0].after_segment, Segment::BlueToCyan);
        assert_eq!(report[2].before_segment, Segment::CyanToGreen);
        assert_eq!(report[2].after_segment, Segment::GreenToYellow);
        assert_eq!(report[4].before_segment, Segment::YellowToRed);
        assert_eq!(report[4].after_segment, Segment::AboveScale);
    }

    #[test]
    fn test_scale_is_continuous_at_junctions() {
        for mode in [RampMode::Literal, RampMode::Symmetric] {
            let mapper = ColorMapper::new(Bound::new(2.0).unwrap()).with_mode(mode);
            for jump in boundary_report(&mapper, 1e-7).unwrap() {
                assert!(
                    !jump.is_discontinuous(1e-3),
                    "{} jumped {} in {} mode",
                    jump.junction,
                    jump.max_jump,
                    mode
                );
            }
        }
    }

    #[test]
    fn test_large_bound_still_straddles_junctions() {
        let mapper = ColorMapper::new(Bound::new(1e12).unwrap());
        let report = boundary_report(&mapper, 1e-6).unwrap();

        for jump in &report {
            assert!(jump.before_sample < jump.after_sample, "{}", jump.junction);
        }
        assert_eq!(report[0].before_segment, Segment::BelowScale);
        assert_eq!(report[0].after_segment, Segment::BlueToCyan);
        assert_eq!(report[1].before_segment, Segment::BlueToCyan);
        assert_eq!(report[1].after_segment, Segment::CyanToGreen);
        assert_eq!(report[3].before_segment, Segment::GreenToYellow);
        assert_eq!(report[3].after_segment, Segment::YellowToRed);
        assert_eq!(report[4].before_segment, Segment::YellowToRed);
        assert_eq!(report[4].after_segment, Segment::AboveScale);
    }

    #[test]
    fn test_invalid_epsilon_rejected() {
        let mapper = ColorMapper::default();
        for epsilon in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                boundary_report(&mapper, epsilon),
                Err(ColorError::InvalidEpsilon(_))
            ));
        }
    }

    #[test]
    fn test_next_up() {
        assert!(next_up(0.0) > 0.0);
        assert!(next_up(1e12) > 1e12);
        assert!(next_up(-1e12) > -1e12);
        assert!(-next_up(1e12) < -1e12);
    }
}
