//! Percentile interpolation and z-score approximation over reference anchors
//!
//! These are the generic numeric routines behind the pediatric growth
//! assessment: linear interpolation between the percentile/value pairs of a
//! single [`Anchor`], in both directions, plus the inverse-normal z-score
//! and the biologically-implausible-value check.

use crate::reference::{Anchor, PercentileRank};

// Abramowitz & Stegun 26.2.23 rational approximation constants
const C0: f64 = 2.515517;
const C1: f64 = 0.802853;
const C2: f64 = 0.010328;
const D1: f64 = 1.432788;
const D2: f64 = 0.189269;
const D3: f64 = 0.001308;

/// Multiple of the p3–p97 span beyond which a value is flagged implausible
const BIV_SPAN_FACTOR: f64 = 0.6;

/// Interpolate the percentile of a measured value within an anchor
///
/// Values below the lowest defined anchor value clamp to the lowest defined
/// percentile; values above the highest clamp to the highest. Between two
/// bracketing points the percentile is linearly interpolated. Returns
/// `None` only when the anchor defines no points.
pub fn percentile_from_value(anchor: &Anchor, value: f64) -> Option<f64> {
    let points = anchor.points();
    let first = points.first()?;
    let last = points.last()?;

    if value <= first.1 {
        return Some(first.0.percentile());
    }
    if value >= last.1 {
        return Some(last.0.percentile());
    }

    for pair in points.windows(2) {
        let (lo_rank, lo_value) = pair[0];
        let (hi_rank, hi_value) = pair[1];
        if value >= lo_value && value <= hi_value {
            let width = hi_value - lo_value;
            // Zero-width segment (flat anchor): take the lower rank
            if width.abs() < f64::EPSILON {
                return Some(lo_rank.percentile());
            }
            let fraction = (value - lo_value) / width;
            return Some(
                lo_rank.percentile() + fraction * (hi_rank.percentile() - lo_rank.percentile()),
            );
        }
    }

    None
}

/// Interpolate the value at a given percentile within an anchor (inverse of
/// [`percentile_from_value`], same clamping rules)
pub fn value_at_percentile(anchor: &Anchor, percentile: f64) -> Option<f64> {
    let points = anchor.points();
    let first = points.first()?;
    let last = points.last()?;

    if percentile <= first.0.percentile() {
        return Some(first.1);
    }
    if percentile >= last.0.percentile() {
        return Some(last.1);
    }

    for pair in points.windows(2) {
        let (lo_rank, lo_value) = pair[0];
        let (hi_rank, hi_value) = pair[1];
        if percentile >= lo_rank.percentile() && percentile <= hi_rank.percentile() {
            let width = hi_rank.percentile() - lo_rank.percentile();
            let fraction = (percentile - lo_rank.percentile()) / width;
            return Some(lo_value + fraction * (hi_value - lo_value));
        }
    }

    None
}

/// Z-score for a percentile via the Abramowitz–Stegun rational
/// approximation of the inverse normal CDF
///
/// Undefined at or beyond the distribution bounds (`p <= 0` or `p >= 100`).
/// The median maps to exactly 0.0.
pub fn z_from_percentile(percentile: f64) -> Option<f64> {
    if percentile <= 0.0 || percentile >= 100.0 {
        return None;
    }
    if (percentile - 50.0).abs() < f64::EPSILON {
        return Some(0.0);
    }

    let p = percentile / 100.0;
    let q = p.min(1.0 - p);
    let t = (-2.0 * q.ln()).sqrt();
    let z = t - ((C2 * t + C1) * t + C0) / (((D3 * t + D2) * t + D1) * t + 1.0);

    if p < 0.5 {
        Some(-z)
    } else {
        Some(z)
    }
}

/// Whether a value is biologically implausible for an anchor
///
/// Flagged when the value lies more than 0.6 × (p97 − p3) beyond either the
/// p3 or the p97 anchor value. Requires both bounds; anchors without them
/// never flag.
pub fn is_implausible(anchor: &Anchor, value: f64) -> bool {
    let (p3, p97) = match (
        anchor.value_at(PercentileRank::P3),
        anchor.value_at(PercentileRank::P97),
    ) {
        (Some(p3), Some(p97)) => (p3, p97),
        _ => return false,
    };

    let margin = BIV_SPAN_FACTOR * (p97 - p3);
    value < p3 - margin || value > p97 + margin
}
