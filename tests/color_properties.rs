//! # Color Mapper Properties
//!
//! Property-based checks of the heat-map scale using proptest.

use hvac_dashboard::color::{Bound, ColorMapper, RampMode, Rgba, Segment, ALPHA};
use proptest::prelude::*;

fn mapper(bound: f64) -> ColorMapper {
    ColorMapper::new(Bound::new(bound).expect("bound"))
}

/// Index of a segment in scale order
fn position(segment: Segment) -> usize {
    Segment::all()
        .iter()
        .position(|s| *s == segment)
        .expect("segment listed")
}

/// The channel a segment ramps, and whether it rises with the sample
fn ramped(segment: Segment, color: &Rgba) -> Option<(f64, bool)> {
    match segment {
        Segment::BlueToCyan => Some((color.g, true)),
        Segment::CyanToGreen => Some((color.b, false)),
        Segment::GreenToYellow => Some((color.r, true)),
        Segment::YellowToRed => Some((color.g, false)),
        Segment::BelowScale | Segment::AboveScale => None,
    }
}

proptest! {
    /// Same inputs always give the same color.
    #[test]
    fn mapping_is_idempotent(bound in 0.0f64..1000.0, sample in -2000.0f64..2000.0) {
        let m = mapper(bound);
        prop_assert_eq!(m.map(sample).expect("map"), m.map(sample).expect("map"));
        prop_assert_eq!(m.css(sample).expect("css"), m.css(sample).expect("css"));
    }

    /// Every finite sample yields a well-formed color with the fixed fourth channel.
    #[test]
    fn output_is_well_formed(bound in 0.0f64..1000.0, sample in -2000.0f64..2000.0) {
        let color = mapper(bound).map(sample).expect("map");
        prop_assert_eq!(color.a, ALPHA);
        prop_assert!(color.r.is_finite() && color.g.is_finite() && color.b.is_finite());

        let css = color.to_css();
        prop_assert!(css.starts_with("rgba("));
        prop_assert!(css.ends_with(", 100)"));
        prop_assert!(!css.contains("NaN"));
        prop_assert!(!css.contains("-0,"));
    }

    /// Outside the scale the color saturates.
    #[test]
    fn saturates_outside_scale(bound in 0.0f64..100.0, excess in 1e-6f64..1e6) {
        let m = mapper(bound);
        prop_assert_eq!(m.map(-bound - excess).expect("map"), Rgba::BLUE);
        prop_assert_eq!(m.map(bound + excess).expect("map"), Rgba::RED);
    }

    /// Inside the scale every channel stays within [0, 255].
    #[test]
    fn channels_stay_in_range_inside_scale(bound in 1e-3f64..1000.0, t in -1.0f64..=1.0) {
        let color = mapper(bound).map(t * bound).expect("map");
        for channel in [color.r, color.g, color.b] {
            prop_assert!((-1e-9..=255.0 + 1e-9).contains(&channel), "channel {}", channel);
        }
    }

    /// Segments follow scale order as the sample grows.
    #[test]
    fn segments_follow_sample_order(bound in 0.0f64..100.0, a in -200.0f64..200.0, b in -200.0f64..200.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let m = mapper(bound);
        let (seg_lo, _) = m.classify(lo).expect("classify");
        let (seg_hi, _) = m.classify(hi).expect("classify");
        prop_assert!(position(seg_lo) <= position(seg_hi));
    }

    /// Within one segment the ramped channel moves in a single direction.
    #[test]
    fn ramp_is_monotonic_within_segment(
        bound in 1e-3f64..100.0,
        quarter in 0usize..4,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
        symmetric in any::<bool>(),
    ) {
        let mode = if symmetric { RampMode::Symmetric } else { RampMode::Literal };
        let m = mapper(bound).with_mode(mode);
        let scale = m.bound().scale();
        let start = [scale.lower, scale.middle_lower, scale.center, scale.middle_upper][quarter];
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        let (lo, hi) = (start + a * scale.range, start + b * scale.range);

        let (seg_lo, color_lo) = m.classify(lo).expect("classify");
        let (seg_hi, color_hi) = m.classify(hi).expect("classify");
        prop_assume!(seg_lo == seg_hi);

        if let (Some((v_lo, rising)), Some((v_hi, _))) =
            (ramped(seg_lo, &color_lo), ramped(seg_hi, &color_hi))
        {
            if rising {
                prop_assert!(v_lo <= v_hi, "{} > {} in {}", v_lo, v_hi, seg_lo);
            } else {
                prop_assert!(v_lo >= v_hi, "{} < {} in {}", v_lo, v_hi, seg_lo);
            }
        }
    }

    /// Both ramp formulas agree up to rounding.
    #[test]
    fn ramp_modes_agree(bound in 1e-3f64..100.0, t in -1.0f64..=1.0) {
        let sample = t * bound;
        let literal = mapper(bound).map(sample).expect("map");
        let symmetric = mapper(bound).with_mode(RampMode::Symmetric).map(sample).expect("map");
        prop_assert!(literal.max_channel_delta(&symmetric) < 1e-6);
    }
}

#[test]
fn documented_examples() {
    assert_eq!(mapper(1.0).css(0.0).unwrap(), "rgba(0, 255, 0, 100)");
    assert_eq!(mapper(1.0).css(1.0).unwrap(), "rgba(255, 0, 0, 100)");
    assert_eq!(mapper(1.0).css(-2.0).unwrap(), "rgba(0, 0, 255, 100)");
    assert_eq!(mapper(1.0).css(2.0).unwrap(), "rgba(255, 0, 0, 100)");
}
