//! Pediatric growth assessment against reference curves
//!
//! Orchestrates the interpolator over every curve applicable to the
//! patient's age, classifies each percentile into clinical bands, and
//! attaches the weight-management directive for elevated BMI percentiles.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::data::{Gender, PatientSnapshot};
use crate::engine::options::EngineOptions;
use crate::engine::types::{GrowthAssessment, GrowthFinding, WeightSummary};
use crate::engine::{body, interp};
use crate::reference::{GrowthMetric, GrowthStandard, ReferenceProvider};

/// Severity color tag attached to a growth classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Green,
    Yellow,
    Orange,
    Red,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Green => write!(f, "green"),
            Severity::Yellow => write!(f, "yellow"),
            Severity::Orange => write!(f, "orange"),
            Severity::Red => write!(f, "red"),
        }
    }
}

/// Clinical classification of a growth percentile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthClass {
    SeverelyLow,
    Low,
    Normal,
    Elevated,
    High,
    VeryHigh,
}

impl GrowthClass {
    pub fn severity(&self) -> Severity {
        match self {
            GrowthClass::SeverelyLow => Severity::Red,
            GrowthClass::Low => Severity::Orange,
            GrowthClass::Normal => Severity::Green,
            GrowthClass::Elevated => Severity::Yellow,
            GrowthClass::High => Severity::Orange,
            GrowthClass::VeryHigh => Severity::Red,
        }
    }

    /// Human-readable label, worded per metric family
    pub fn label(&self, metric: GrowthMetric) -> &'static str {
        use GrowthMetric::*;
        match metric {
            Weight | Bmi | WeightForLength => match self {
                GrowthClass::SeverelyLow => "severely underweight",
                GrowthClass::Low => "moderately underweight",
                GrowthClass::Normal => "normal weight",
                GrowthClass::Elevated => "risk of overweight",
                GrowthClass::High => "overweight",
                GrowthClass::VeryHigh => "obese",
            },
            Height => match self {
                GrowthClass::SeverelyLow => "severe growth deficit",
                GrowthClass::Low => "moderate growth deficit",
                GrowthClass::Normal => "normal stature",
                GrowthClass::Elevated => "above-average stature",
                GrowthClass::High => "tall stature",
                GrowthClass::VeryHigh => "abnormally tall stature",
            },
            HeadCircumference => match self {
                GrowthClass::SeverelyLow => "well below reference",
                GrowthClass::Low => "below reference",
                GrowthClass::Normal => "within reference",
                GrowthClass::Elevated => "upper reference range",
                GrowthClass::High => "above reference",
                GrowthClass::VeryHigh => "well above reference",
            },
        }
    }
}

/// Classify a percentile into clinical bands
///
/// Generic bands: < 1 severe, < 3 moderate, ≤ 85 normal, ≤ 97 elevated,
/// ≤ 99 high, > 99 very high. BMI under the CDC standard supersedes the
/// upper bands: ≥ 95 obese, ≥ 85 overweight.
pub fn classify(metric: GrowthMetric, standard: GrowthStandard, percentile: f64) -> GrowthClass {
    if metric == GrowthMetric::Bmi && standard == GrowthStandard::Cdc {
        if percentile < 1.0 {
            GrowthClass::SeverelyLow
        } else if percentile < 3.0 {
            GrowthClass::Low
        } else if percentile < 85.0 {
            GrowthClass::Normal
        } else if percentile < 95.0 {
            GrowthClass::High
        } else {
            GrowthClass::VeryHigh
        }
    } else if percentile < 1.0 {
        GrowthClass::SeverelyLow
    } else if percentile < 3.0 {
        GrowthClass::Low
    } else if percentile <= 85.0 {
        GrowthClass::Normal
    } else if percentile <= 97.0 {
        GrowthClass::Elevated
    } else if percentile <= 99.0 {
        GrowthClass::High
    } else {
        GrowthClass::VeryHigh
    }
}

/// Which energy-estimator family is appropriate for the classification
pub fn equation_recommendation(class: GrowthClass) -> &'static str {
    match class {
        GrowthClass::SeverelyLow | GrowthClass::Low => {
            "Use the DRI/EER equations with catch-up growth factors"
        }
        GrowthClass::Normal => "Use the standard DRI/EER equations for age",
        GrowthClass::Elevated => "Use the DRI/EER equations and monitor the weight trend",
        GrowthClass::High => "Use the weight-maintenance TEE equations for overweight children",
        GrowthClass::VeryHigh => "Use the obese BEE equations with an activity factor",
    }
}

// ============================================================================
// Weight-management directives
// ============================================================================

/// Age bands of the weight-management directive table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    Age2To5,
    Age6To11,
    Age12To18,
}

impl AgeBand {
    /// Band for an age in months; `None` outside 2–18 years
    pub fn from_age_months(months: f64) -> Option<Self> {
        if months < 24.0 {
            None
        } else if months < 72.0 {
            Some(AgeBand::Age2To5)
        } else if months < 144.0 {
            Some(AgeBand::Age6To11)
        } else if months < 228.0 {
            Some(AgeBand::Age12To18)
        } else {
            None
        }
    }
}

/// BMI percentile bands of the weight-management directive table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PercentileBand {
    P85To95,
    P95To99,
    P99Plus,
}

impl PercentileBand {
    /// Band for a BMI percentile; `None` below 85
    pub fn from_percentile(percentile: f64) -> Option<Self> {
        if percentile < 85.0 {
            None
        } else if percentile < 95.0 {
            Some(PercentileBand::P85To95)
        } else if percentile < 99.0 {
            Some(PercentileBand::P95To99)
        } else {
            Some(PercentileBand::P99Plus)
        }
    }
}

lazy_static! {
    /// Verbatim weight-management directives keyed by
    /// (age band × BMI percentile band)
    static ref DIRECTIVES: HashMap<(AgeBand, PercentileBand), &'static str> = {
        use AgeBand::*;
        use PercentileBand::*;
        let mut m = HashMap::new();
        m.insert(
            (Age2To5, P85To95),
            "Maintain weight velocity; reassess the BMI percentile in 6 months.",
        );
        m.insert(
            (Age2To5, P95To99),
            "Maintain weight; as linear growth continues the BMI percentile will decline.",
        );
        m.insert(
            (Age2To5, P99Plus),
            "Gradual weight loss of up to 0.5 kg per month under clinical supervision.",
        );
        m.insert(
            (Age6To11, P85To95),
            "Maintain weight; growth in stature will lower the BMI percentile over time.",
        );
        m.insert(
            (Age6To11, P95To99),
            "Weight maintenance until the BMI falls below the 85th percentile.",
        );
        m.insert(
            (Age6To11, P99Plus),
            "Gradual weight loss of up to 1 kg per month under clinical supervision.",
        );
        m.insert(
            (Age12To18, P85To95),
            "Weight maintenance until the BMI is below the 85th percentile.",
        );
        m.insert(
            (Age12To18, P95To99),
            "Gradual weight loss of up to 1 kg per month until the BMI is below the 85th percentile.",
        );
        m.insert(
            (Age12To18, P99Plus),
            "Weight loss of up to 1 kg per week under clinical supervision.",
        );
        m
    };
}

/// Weight-management directive for a BMI percentile at a pediatric age
///
/// Defined only for ages 2–18 with a BMI percentile ≥ 85.
pub fn directive_for(age_months: f64, bmi_percentile: f64) -> Option<&'static str> {
    let age_band = AgeBand::from_age_months(age_months)?;
    let pct_band = PercentileBand::from_percentile(bmi_percentile)?;
    DIRECTIVES.get(&(age_band, pct_band)).copied()
}

// ============================================================================
// Assessment
// ============================================================================

/// Assess a pediatric patient against every applicable reference curve
pub(crate) fn assess<P: ReferenceProvider + ?Sized>(
    snapshot: &PatientSnapshot,
    provider: &P,
    weight: &WeightSummary,
    options: &EngineOptions,
) -> GrowthAssessment {
    let age_months = snapshot.age_months();
    let standard = options.standard_for_age(age_months);
    let w = weight.selected;
    let h = snapshot.height_cm;
    let bmi = body::bmi(w, h);

    // (metric, position on the curve's axis, measured value)
    let mut targets: Vec<(GrowthMetric, f64, f64)> = Vec::new();
    if w > 0.0 {
        targets.push((GrowthMetric::Weight, age_months, w));
    }
    if h > 0.0 {
        targets.push((GrowthMetric::Height, age_months, h));
    }
    if age_months < 24.0 {
        if w > 0.0 && h > 0.0 {
            targets.push((GrowthMetric::WeightForLength, h, w));
        }
    } else {
        if let Some(bmi) = bmi {
            targets.push((GrowthMetric::Bmi, age_months, bmi));
        }
        // Weight-for-stature variant from 5 years where a curve exists
        if age_months >= 60.0 && w > 0.0 && h > 0.0 {
            targets.push((GrowthMetric::WeightForLength, h, w));
        }
    }
    if age_months < 36.0 && snapshot.head_circumference_cm > 0.0 {
        targets.push((
            GrowthMetric::HeadCircumference,
            age_months,
            snapshot.head_circumference_cm,
        ));
    }

    let mut findings = Vec::new();
    for (metric, position, value) in targets {
        let Some(curve) = provider.curve(metric, standard, snapshot.gender) else {
            continue;
        };
        let Some((anchor, distance)) = curve.nearest_anchor(position) else {
            continue;
        };
        // Out of the curve's domain: skipped, never extrapolated
        if distance > options.max_anchor_distance {
            continue;
        }
        let Some(percentile) = interp::percentile_from_value(anchor, value) else {
            continue;
        };

        let class = classify(metric, standard, percentile);
        let directive = if metric == GrowthMetric::Bmi {
            directive_for(age_months, percentile).map(String::from)
        } else {
            None
        };

        findings.push(GrowthFinding {
            metric,
            standard,
            value,
            anchor_key: anchor.key(),
            percentile: Some(percentile),
            z_score: interp::z_from_percentile(percentile),
            severity: class.severity(),
            class,
            implausible: interp::is_implausible(anchor, value),
            recommendation: equation_recommendation(class).to_string(),
            directive,
        });
    }

    let ideal_weight =
        ideal_weight_for_height(provider, snapshot.gender, standard, age_months, h, options);

    GrowthAssessment {
        age_months,
        standard,
        findings,
        ideal_weight,
    }
}

/// Pediatric ideal weight: the weight-for-age value at the patient's
/// height-for-age percentile
fn ideal_weight_for_height<P: ReferenceProvider + ?Sized>(
    provider: &P,
    gender: Gender,
    standard: GrowthStandard,
    age_months: f64,
    height_cm: f64,
    options: &EngineOptions,
) -> Option<f64> {
    if height_cm <= 0.0 {
        return None;
    }

    let height_curve = provider.curve(GrowthMetric::Height, standard, gender)?;
    let (height_anchor, distance) = height_curve.nearest_anchor(age_months)?;
    if distance > options.max_anchor_distance {
        return None;
    }
    let height_percentile = interp::percentile_from_value(height_anchor, height_cm)?;

    let weight_curve = provider.curve(GrowthMetric::Weight, standard, gender)?;
    let (weight_anchor, distance) = weight_curve.nearest_anchor(age_months)?;
    if distance > options.max_anchor_distance {
        return None;
    }
    interp::value_at_percentile(weight_anchor, height_percentile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_bands() {
        let m = GrowthMetric::Weight;
        let s = GrowthStandard::Who;
        assert_eq!(classify(m, s, 0.5), GrowthClass::SeverelyLow);
        assert_eq!(classify(m, s, 2.0), GrowthClass::Low);
        assert_eq!(classify(m, s, 50.0), GrowthClass::Normal);
        assert_eq!(classify(m, s, 85.0), GrowthClass::Normal);
        assert_eq!(classify(m, s, 90.0), GrowthClass::Elevated);
        assert_eq!(classify(m, s, 97.0), GrowthClass::Elevated);
        assert_eq!(classify(m, s, 98.0), GrowthClass::High);
        assert_eq!(classify(m, s, 99.5), GrowthClass::VeryHigh);
    }

    #[test]
    fn test_cdc_bmi_override() {
        let m = GrowthMetric::Bmi;
        // CDC: ≥ 95 obese, ≥ 85 overweight
        assert_eq!(classify(m, GrowthStandard::Cdc, 85.0), GrowthClass::High);
        assert_eq!(classify(m, GrowthStandard::Cdc, 95.0), GrowthClass::VeryHigh);
        assert_eq!(classify(m, GrowthStandard::Cdc, 84.9), GrowthClass::Normal);
        // WHO keeps the generic bands
        assert_eq!(classify(m, GrowthStandard::Who, 95.0), GrowthClass::Elevated);
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(GrowthClass::SeverelyLow.severity(), Severity::Red);
        assert_eq!(GrowthClass::Normal.severity(), Severity::Green);
        assert_eq!(GrowthClass::Elevated.severity(), Severity::Yellow);
        assert_eq!(GrowthClass::VeryHigh.severity(), Severity::Red);
    }

    #[test]
    fn test_labels_per_metric() {
        assert_eq!(
            GrowthClass::VeryHigh.label(GrowthMetric::Bmi),
            "obese"
        );
        assert_eq!(
            GrowthClass::SeverelyLow.label(GrowthMetric::Height),
            "severe growth deficit"
        );
        assert_eq!(
            GrowthClass::Normal.label(GrowthMetric::HeadCircumference),
            "within reference"
        );
    }

    #[test]
    fn test_age_bands() {
        assert_eq!(AgeBand::from_age_months(20.0), None);
        assert_eq!(AgeBand::from_age_months(30.0), Some(AgeBand::Age2To5));
        assert_eq!(AgeBand::from_age_months(96.0), Some(AgeBand::Age6To11));
        assert_eq!(AgeBand::from_age_months(200.0), Some(AgeBand::Age12To18));
        assert_eq!(AgeBand::from_age_months(240.0), None);
    }

    #[test]
    fn test_percentile_bands() {
        assert_eq!(PercentileBand::from_percentile(80.0), None);
        assert_eq!(PercentileBand::from_percentile(90.0), Some(PercentileBand::P85To95));
        assert_eq!(PercentileBand::from_percentile(97.0), Some(PercentileBand::P95To99));
        assert_eq!(PercentileBand::from_percentile(99.5), Some(PercentileBand::P99Plus));
    }

    #[test]
    fn test_directive_table_is_complete() {
        for age in [30.0, 96.0, 200.0] {
            for pct in [90.0, 97.0, 99.5] {
                assert!(
                    directive_for(age, pct).is_some(),
                    "missing directive for age {} pct {}",
                    age,
                    pct
                );
            }
        }
        assert!(directive_for(96.0, 50.0).is_none());
        assert!(directive_for(12.0, 97.0).is_none());
    }
}
