//! Corrected ("dry") weight, amputation percentage and basic anthropometry

use crate::data::{LimbSegment, PatientSnapshot};
use crate::engine::types::WeightSummary;

/// Corrected weight after fluid-retention adjustment, floored at zero
///
/// A fractional correction > 0 supersedes the ascites/edema subtraction
/// path. Missing inputs default to 0; there are no error conditions.
pub fn corrected_weight(current: f64, ascites: f64, edema: f64, fraction: f64) -> f64 {
    let corrected = if fraction > 0.0 {
        current * (1.0 - fraction)
    } else {
        current - ascites - edema
    };
    corrected.max(0.0)
}

/// Total amputated percentage of body weight over the selected segments
///
/// Metadata only: the percentage is reported but never applied to the
/// corrected weight.
pub fn amputation_pct(segments: &[LimbSegment]) -> f64 {
    segments.iter().map(|s| s.body_weight_pct()).sum()
}

/// Waist-to-hip ratio, defined only when both circumferences are provided
pub fn waist_hip_ratio(waist_cm: f64, hip_cm: f64) -> Option<f64> {
    if waist_cm > 0.0 && hip_cm > 0.0 {
        Some(waist_cm / hip_cm)
    } else {
        None
    }
}

/// Build the weight summary for a snapshot
pub(crate) fn summarize(snapshot: &PatientSnapshot) -> WeightSummary {
    let corrected = corrected_weight(
        snapshot.current_weight_kg,
        snapshot.ascites_kg,
        snapshot.edema_kg,
        snapshot.edema_fraction,
    );

    // User override wins when provided
    let selected = if snapshot.selected_weight_kg > 0.0 {
        snapshot.selected_weight_kg
    } else {
        corrected
    };

    WeightSummary {
        current: snapshot.current_weight_kg,
        corrected,
        selected,
        amputation_pct: amputation_pct(&snapshot.amputations),
        waist_hip_ratio: waist_hip_ratio(snapshot.waist_cm, snapshot.hip_cm),
    }
}
