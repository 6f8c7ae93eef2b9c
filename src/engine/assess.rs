//! Assessment orchestrator
//!
//! Pulls the weight, body-size, protocol, energy and growth steps together
//! into one pass over a snapshot. The pipeline is infallible: missing or
//! out-of-range inputs drop the dependent outputs instead of erroring.

use rayon::prelude::*;

use crate::data::PatientSnapshot;
use crate::engine::options::EngineOptions;
use crate::engine::types::{AssessmentResult, BodySize};
use crate::engine::{body, energy, growth, weight};
use crate::reference::ReferenceProvider;

/// Assess one patient snapshot
///
/// Adults get the BMI classification and the 30%-over-IBW protocol;
/// pediatric patients (age under the configured cutoff) get the growth
/// assessment instead. Energy estimators run for both, branching on the
/// same pediatric gate.
pub fn compute<P: ReferenceProvider + ?Sized>(
    snapshot: &PatientSnapshot,
    provider: &P,
    options: &EngineOptions,
) -> AssessmentResult {
    let weight = weight::summarize(snapshot);
    let pediatric = snapshot.is_pediatric(options.pediatric_age_cutoff);

    let bmi = body::bmi(weight.selected, snapshot.height_cm);
    let body_size = bmi.map(|bmi| BodySize {
        bmi,
        class: if pediatric {
            None
        } else {
            Some(body::BmiClass::from_bmi(bmi))
        },
    });

    // The protocol consumes the corrected weight, not the selected one
    let protocol = if pediatric {
        None
    } else {
        body::protocol(snapshot.gender, weight.corrected, snapshot.height_cm)
    };

    let growth = if pediatric {
        Some(growth::assess(snapshot, provider, &weight, options))
    } else {
        None
    };

    let pediatric_overweight = growth
        .as_ref()
        .and_then(|g| g.bmi_percentile())
        .map(|p| p >= 85.0)
        .unwrap_or(false);

    let energy = energy::collect(
        snapshot,
        &weight,
        bmi,
        pediatric,
        pediatric_overweight,
        options,
    );

    AssessmentResult {
        weight,
        body_size,
        protocol,
        energy,
        growth,
    }
}

/// Assess a batch of snapshots in parallel
///
/// Results are returned in input order.
pub fn compute_many<P: ReferenceProvider + Sync + ?Sized>(
    snapshots: &[PatientSnapshot],
    provider: &P,
    options: &EngineOptions,
) -> Vec<AssessmentResult> {
    snapshots
        .par_iter()
        .map(|snapshot| compute(snapshot, provider, options))
        .collect()
}
