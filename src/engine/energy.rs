//! Energy-requirement estimators
//!
//! One pure function per estimator. Every function returns `None` when a
//! required input is missing (≤ 0): an absent estimate, never an error.
//! Every emitted estimate carries the literal instantiated formula string
//! as evidence for the numeric result.

use serde::{Deserialize, Serialize};

use crate::data::{EnergyAdjustment, Gender, PatientSnapshot};
use crate::engine::options::EngineOptions;
use crate::engine::types::{EnergyEstimate, WeightSummary};

/// Closed set of energy estimators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimatorKind {
    /// kcal/kg factor selected by BMI band (adult)
    FactorByBmi,
    /// kcal/kg factor chosen by the user (adult)
    CustomFactor,
    /// Informational fixed kcal/kg table entry (adult)
    FixedFactor(u32),
    /// Harris-Benedict basal metabolic rate (adult)
    HarrisBenedict,
    /// Harris-Benedict BMR × activity factor (adult)
    HarrisBenedictTee,
    /// Mifflin-St Jeor basal metabolic rate (adult)
    MifflinStJeor,
    /// Mifflin-St Jeor BMR × activity factor (adult)
    MifflinStJeorTee,
    /// IOM/DRI adult estimated energy requirement
    AdultEer,
    /// IOM/DRI pediatric EER, piecewise by age in months
    PediatricEer,
    /// IOM basal equation for obese children (3–18 years)
    PediatricObeseBee,
    /// IOM weight-maintenance TEE for children (3–18 years)
    PediatricMaintenanceTee,
    /// kcal/kg ratio method banded by age and gender (pediatric)
    PediatricRatio,
}

impl EstimatorKind {
    /// Stable name used as the key in flattened exports
    pub fn name(&self) -> &'static str {
        match self {
            EstimatorKind::FactorByBmi => "factor_by_bmi",
            EstimatorKind::CustomFactor => "custom_factor",
            EstimatorKind::FixedFactor(25) => "fixed_factor_25",
            EstimatorKind::FixedFactor(30) => "fixed_factor_30",
            EstimatorKind::FixedFactor(35) => "fixed_factor_35",
            EstimatorKind::FixedFactor(40) => "fixed_factor_40",
            EstimatorKind::FixedFactor(_) => "fixed_factor",
            EstimatorKind::HarrisBenedict => "harris_benedict",
            EstimatorKind::HarrisBenedictTee => "harris_benedict_tee",
            EstimatorKind::MifflinStJeor => "mifflin_st_jeor",
            EstimatorKind::MifflinStJeorTee => "mifflin_st_jeor_tee",
            EstimatorKind::AdultEer => "adult_eer",
            EstimatorKind::PediatricEer => "pediatric_eer",
            EstimatorKind::PediatricObeseBee => "pediatric_obese_bee",
            EstimatorKind::PediatricMaintenanceTee => "pediatric_maintenance_tee",
            EstimatorKind::PediatricRatio => "pediatric_ratio",
        }
    }
}

/// Physical-activity category derived from the activity multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaCategory {
    Sedentary,
    LowActive,
    Active,
    VeryActive,
}

impl PaCategory {
    /// Band an activity multiplier into an IOM PA category
    pub fn from_activity_factor(factor: f64) -> Self {
        if factor < 1.4 {
            PaCategory::Sedentary
        } else if factor < 1.6 {
            PaCategory::LowActive
        } else if factor < 1.9 {
            PaCategory::Active
        } else {
            PaCategory::VeryActive
        }
    }

    fn index(&self) -> usize {
        match self {
            PaCategory::Sedentary => 0,
            PaCategory::LowActive => 1,
            PaCategory::Active => 2,
            PaCategory::VeryActive => 3,
        }
    }

    /// IOM adult EER PA coefficient
    pub fn adult_coefficient(&self) -> f64 {
        [1.0, 1.11, 1.25, 1.48][self.index()]
    }

    /// IOM pediatric EER PA coefficient
    pub fn pediatric_eer_coefficient(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => [1.0, 1.13, 1.26, 1.42][self.index()],
            Gender::Female => [1.0, 1.16, 1.31, 1.56][self.index()],
        }
    }

    /// IOM overweight weight-maintenance TEE PA coefficient
    pub fn maintenance_coefficient(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => [1.0, 1.12, 1.24, 1.45][self.index()],
            Gender::Female => [1.0, 1.18, 1.35, 1.60][self.index()],
        }
    }
}

fn goal_adjusted(base: f64, adjustment: Option<&EnergyAdjustment>) -> Option<f64> {
    adjustment
        .filter(|a| a.kcal > 0.0)
        .map(|a| base + a.signed())
}

// ============================================================================
// Factor methods
// ============================================================================

/// kcal/kg factor selected by the adult BMI band
pub fn factor_by_bmi(
    weight: f64,
    bmi: f64,
    adjustment: Option<&EnergyAdjustment>,
) -> Option<EnergyEstimate> {
    if weight <= 0.0 {
        return None;
    }
    let factor = if bmi < 18.5 {
        35.0
    } else if bmi < 25.0 {
        30.0
    } else if bmi < 30.0 {
        25.0
    } else if bmi < 40.0 {
        20.0
    } else {
        15.0
    };
    let base = weight * factor;
    Some(EnergyEstimate {
        kind: EstimatorKind::FactorByBmi,
        base,
        adjusted: goal_adjusted(base, adjustment),
        formula: format!("{:.1} kg × {:.0} kcal/kg = {:.1} kcal", weight, factor, base),
    })
}

/// User-chosen kcal/kg factor
pub fn custom_factor(
    weight: f64,
    factor: f64,
    adjustment: Option<&EnergyAdjustment>,
) -> Option<EnergyEstimate> {
    if weight <= 0.0 || factor <= 0.0 {
        return None;
    }
    let base = weight * factor;
    Some(EnergyEstimate {
        kind: EstimatorKind::CustomFactor,
        base,
        adjusted: goal_adjusted(base, adjustment),
        formula: format!("{:.1} kg × {:.1} kcal/kg = {:.1} kcal", weight, factor, base),
    })
}

/// Informational fixed kcal/kg table entry (no goal adjustment)
pub fn fixed_factor(weight: f64, factor: u32) -> Option<EnergyEstimate> {
    if weight <= 0.0 {
        return None;
    }
    let base = weight * factor as f64;
    Some(EnergyEstimate {
        kind: EstimatorKind::FixedFactor(factor),
        base,
        adjusted: None,
        formula: format!("{:.1} kg × {} kcal/kg = {:.1} kcal", weight, factor, base),
    })
}

// ============================================================================
// Adult BMR / TEE equations
// ============================================================================

/// Harris-Benedict basal metabolic rate
pub fn harris_benedict(
    gender: Gender,
    weight: f64,
    height_cm: f64,
    age_years: f64,
) -> Option<EnergyEstimate> {
    if weight <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let (base, formula) = match gender {
        Gender::Male => {
            let v = 66.5 + 13.75 * weight + 5.003 * height_cm - 6.75 * age_years;
            (
                v,
                format!(
                    "66.5 + 13.75 × {:.1} + 5.003 × {:.1} - 6.75 × {:.0} = {:.1} kcal",
                    weight, height_cm, age_years, v
                ),
            )
        }
        Gender::Female => {
            let v = 655.1 + 9.563 * weight + 1.85 * height_cm - 4.676 * age_years;
            (
                v,
                format!(
                    "655.1 + 9.563 × {:.1} + 1.85 × {:.1} - 4.676 × {:.0} = {:.1} kcal",
                    weight, height_cm, age_years, v
                ),
            )
        }
    };
    Some(EnergyEstimate {
        kind: EstimatorKind::HarrisBenedict,
        base,
        adjusted: None,
        formula,
    })
}

/// Mifflin-St Jeor basal metabolic rate
pub fn mifflin_st_jeor(
    gender: Gender,
    weight: f64,
    height_cm: f64,
    age_years: f64,
) -> Option<EnergyEstimate> {
    if weight <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let offset = match gender {
        Gender::Male => 5.0,
        Gender::Female => -161.0,
    };
    let base = 10.0 * weight + 6.25 * height_cm - 5.0 * age_years + offset;
    Some(EnergyEstimate {
        kind: EstimatorKind::MifflinStJeor,
        base,
        adjusted: None,
        formula: format!(
            "10 × {:.1} + 6.25 × {:.1} - 5 × {:.0} {} {:.0} = {:.2} kcal",
            weight,
            height_cm,
            age_years,
            if offset >= 0.0 { "+" } else { "-" },
            offset.abs(),
            base
        ),
    })
}

/// Total energy expenditure from a BMR estimate and an activity multiplier
pub fn tee_from_bmr(
    kind: EstimatorKind,
    bmr: f64,
    activity_factor: f64,
    adjustment: Option<&EnergyAdjustment>,
) -> Option<EnergyEstimate> {
    if bmr <= 0.0 || activity_factor <= 0.0 {
        return None;
    }
    let base = bmr * activity_factor;
    Some(EnergyEstimate {
        kind,
        base,
        adjusted: goal_adjusted(base, adjustment),
        formula: format!("{:.1} kcal × {:.2} = {:.1} kcal", bmr, activity_factor, base),
    })
}

/// IOM/DRI adult estimated energy requirement
pub fn adult_eer(
    gender: Gender,
    weight: f64,
    height_cm: f64,
    age_years: f64,
    activity_factor: f64,
    adjustment: Option<&EnergyAdjustment>,
) -> Option<EnergyEstimate> {
    if weight <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    let pa = PaCategory::from_activity_factor(activity_factor).adult_coefficient();
    let (base, formula) = match gender {
        Gender::Male => {
            let v = 662.0 - 9.53 * age_years + pa * (15.91 * weight + 539.6 * height_m);
            (
                v,
                format!(
                    "662 - 9.53 × {:.0} + {:.2} × (15.91 × {:.1} + 539.6 × {:.2}) = {:.1} kcal",
                    age_years, pa, weight, height_m, v
                ),
            )
        }
        Gender::Female => {
            let v = 354.0 - 6.91 * age_years + pa * (9.36 * weight + 726.0 * height_m);
            (
                v,
                format!(
                    "354 - 6.91 × {:.0} + {:.2} × (9.36 × {:.1} + 726 × {:.2}) = {:.1} kcal",
                    age_years, pa, weight, height_m, v
                ),
            )
        }
    };
    Some(EnergyEstimate {
        kind: EstimatorKind::AdultEer,
        base,
        adjusted: goal_adjusted(base, adjustment),
        formula,
    })
}

// ============================================================================
// Pediatric equations
// ============================================================================

/// IOM/DRI pediatric EER, piecewise by age in months
///
/// Infant branches (≤ 35 months) need only the weight; the child and
/// adolescent branches also require the height.
pub fn pediatric_eer(
    gender: Gender,
    weight: f64,
    height_cm: f64,
    age_months: f64,
    activity_factor: f64,
    adjustment: Option<&EnergyAdjustment>,
) -> Option<EnergyEstimate> {
    if weight <= 0.0 {
        return None;
    }

    if age_months <= 35.0 {
        let offset = if age_months <= 3.0 {
            175.0
        } else if age_months <= 6.0 {
            56.0
        } else if age_months <= 12.0 {
            22.0
        } else {
            20.0
        };
        let base = 89.0 * weight - 100.0 + offset;
        return Some(EnergyEstimate {
            kind: EstimatorKind::PediatricEer,
            base,
            adjusted: goal_adjusted(base, adjustment),
            formula: format!(
                "89 × {:.1} - 100 + {:.0} = {:.1} kcal",
                weight, offset, base
            ),
        });
    }

    if height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    let age_years = age_months / 12.0;
    let pa = PaCategory::from_activity_factor(activity_factor).pediatric_eer_coefficient(gender);
    let (base, formula) = match gender {
        Gender::Male => {
            let tail = if age_years <= 8.0 { 20.0 } else { 25.0 };
            let v = 88.5 - 61.9 * age_years + pa * (26.7 * weight + 903.0 * height_m) + tail;
            (
                v,
                format!(
                    "88.5 - 61.9 × {:.1} + {:.2} × (26.7 × {:.1} + 903 × {:.2}) + {:.0} = {:.1} kcal",
                    age_years, pa, weight, height_m, tail, v
                ),
            )
        }
        Gender::Female => {
            let tail = if age_years <= 8.0 { 20.0 } else { 25.0 };
            let v = 135.3 - 30.8 * age_years + pa * (10.0 * weight + 934.0 * height_m) + tail;
            (
                v,
                format!(
                    "135.3 - 30.8 × {:.1} + {:.2} × (10.0 × {:.1} + 934 × {:.2}) + {:.0} = {:.1} kcal",
                    age_years, pa, weight, height_m, tail, v
                ),
            )
        }
    };
    Some(EnergyEstimate {
        kind: EstimatorKind::PediatricEer,
        base,
        adjusted: goal_adjusted(base, adjustment),
        formula,
    })
}

/// IOM basal equation for obese children, ages 3–18
pub fn pediatric_obese_bee(
    gender: Gender,
    weight: f64,
    height_cm: f64,
    age_years: f64,
) -> Option<EnergyEstimate> {
    if weight <= 0.0 || height_cm <= 0.0 || !(3.0..19.0).contains(&age_years) {
        return None;
    }
    let height_m = height_cm / 100.0;
    let (base, formula) = match gender {
        Gender::Male => {
            let v = 420.0 - 33.5 * age_years + 418.9 * height_m + 16.7 * weight;
            (
                v,
                format!(
                    "420 - 33.5 × {:.1} + 418.9 × {:.2} + 16.7 × {:.1} = {:.1} kcal",
                    age_years, height_m, weight, v
                ),
            )
        }
        Gender::Female => {
            let v = 516.0 - 26.8 * age_years + 347.0 * height_m + 12.4 * weight;
            (
                v,
                format!(
                    "516 - 26.8 × {:.1} + 347 × {:.2} + 12.4 × {:.1} = {:.1} kcal",
                    age_years, height_m, weight, v
                ),
            )
        }
    };
    Some(EnergyEstimate {
        kind: EstimatorKind::PediatricObeseBee,
        base,
        adjusted: None,
        formula,
    })
}

/// IOM weight-maintenance TEE for children, ages 3–18
pub fn pediatric_maintenance_tee(
    gender: Gender,
    weight: f64,
    height_cm: f64,
    age_years: f64,
    activity_factor: f64,
    adjustment: Option<&EnergyAdjustment>,
) -> Option<EnergyEstimate> {
    if weight <= 0.0 || height_cm <= 0.0 || !(3.0..19.0).contains(&age_years) {
        return None;
    }
    let height_m = height_cm / 100.0;
    let pa = PaCategory::from_activity_factor(activity_factor).maintenance_coefficient(gender);
    let (base, formula) = match gender {
        Gender::Male => {
            let v = 114.0 - 50.9 * age_years + pa * (19.5 * weight + 1161.4 * height_m);
            (
                v,
                format!(
                    "114 - 50.9 × {:.1} + {:.2} × (19.5 × {:.1} + 1161.4 × {:.2}) = {:.1} kcal",
                    age_years, pa, weight, height_m, v
                ),
            )
        }
        Gender::Female => {
            let v = 389.0 - 41.2 * age_years + pa * (15.0 * weight + 701.6 * height_m);
            (
                v,
                format!(
                    "389 - 41.2 × {:.1} + {:.2} × (15.0 × {:.1} + 701.6 × {:.2}) = {:.1} kcal",
                    age_years, pa, weight, height_m, v
                ),
            )
        }
    };
    Some(EnergyEstimate {
        kind: EstimatorKind::PediatricMaintenanceTee,
        base,
        adjusted: goal_adjusted(base, adjustment),
        formula,
    })
}

/// Pediatric kcal/kg ratio method banded by age and gender
pub fn pediatric_ratio(
    gender: Gender,
    weight: f64,
    age_years: f64,
    adjustment: Option<&EnergyAdjustment>,
) -> Option<EnergyEstimate> {
    if weight <= 0.0 {
        return None;
    }
    let factor = if age_years < 1.0 {
        100.0
    } else if age_years < 12.0 {
        80.0
    } else if age_years < 16.0 {
        match gender {
            Gender::Male => 60.0,
            Gender::Female => 50.0,
        }
    } else {
        match gender {
            Gender::Male => 45.0,
            Gender::Female => 40.0,
        }
    };
    let base = weight * factor;
    Some(EnergyEstimate {
        kind: EstimatorKind::PediatricRatio,
        base,
        adjusted: goal_adjusted(base, adjustment),
        formula: format!("{:.1} kg × {:.0} kcal/kg = {:.1} kcal", weight, factor, base),
    })
}

// ============================================================================
// Collection
// ============================================================================

/// Run every estimator applicable to the snapshot
///
/// `pediatric_overweight` gates the obese basal equation; it comes from the
/// growth assessment (BMI-for-age percentile ≥ 85).
pub(crate) fn collect(
    snapshot: &PatientSnapshot,
    weight: &WeightSummary,
    bmi: Option<f64>,
    pediatric: bool,
    pediatric_overweight: bool,
    options: &EngineOptions,
) -> Vec<EnergyEstimate> {
    let w = weight.selected;
    let h = snapshot.height_cm;
    let adjustment = snapshot.energy_adjustment.as_ref();
    let activity = if snapshot.activity_factor > 0.0 {
        snapshot.activity_factor
    } else {
        options.activity_factor
    };
    let custom = if snapshot.custom_energy_factor > 0.0 {
        snapshot.custom_energy_factor
    } else {
        options.custom_energy_factor
    };

    let mut estimates: Vec<EnergyEstimate> = Vec::new();
    let mut push = |estimate: Option<EnergyEstimate>| {
        if let Some(e) = estimate {
            estimates.push(e);
        }
    };

    if pediatric {
        let months = snapshot.age_months();
        let age_years = months / 12.0;
        push(pediatric_eer(
            snapshot.gender,
            w,
            h,
            months,
            activity,
            adjustment,
        ));
        push(pediatric_ratio(snapshot.gender, w, age_years, adjustment));
        push(pediatric_maintenance_tee(
            snapshot.gender,
            w,
            h,
            age_years,
            activity,
            adjustment,
        ));
        if pediatric_overweight {
            push(pediatric_obese_bee(snapshot.gender, w, h, age_years));
        }
    } else {
        let age = snapshot.age_years as f64;
        if let Some(bmi) = bmi {
            push(factor_by_bmi(w, bmi, adjustment));
        }
        push(custom_factor(w, custom, adjustment));
        for factor in [25, 30, 35, 40] {
            push(fixed_factor(w, factor));
        }

        if let Some(bmr) = harris_benedict(snapshot.gender, w, h, age) {
            let basal = bmr.base;
            push(Some(bmr));
            push(tee_from_bmr(
                EstimatorKind::HarrisBenedictTee,
                basal,
                activity,
                adjustment,
            ));
        }

        if let Some(bmr) = mifflin_st_jeor(snapshot.gender, w, h, age) {
            let basal = bmr.base;
            push(Some(bmr));
            push(tee_from_bmr(
                EstimatorKind::MifflinStJeorTee,
                basal,
                activity,
                adjustment,
            ));
        }

        push(adult_eer(snapshot.gender, w, h, age, activity, adjustment));
    }

    estimates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GoalDirection;
    use approx::assert_relative_eq;

    #[test]
    fn test_mifflin_reference_scenario() {
        // Male, 40y, 175 cm, 90 kg → 10×90 + 6.25×175 − 5×40 + 5
        let e = mifflin_st_jeor(Gender::Male, 90.0, 175.0, 40.0).unwrap();
        assert_relative_eq!(e.base, 1773.75);
        assert!(e.formula.contains("1773.75"));
    }

    #[test]
    fn test_harris_benedict_male() {
        let e = harris_benedict(Gender::Male, 90.0, 175.0, 40.0).unwrap();
        assert_relative_eq!(e.base, 66.5 + 13.75 * 90.0 + 5.003 * 175.0 - 6.75 * 40.0);
    }

    #[test]
    fn test_harris_benedict_female() {
        let e = harris_benedict(Gender::Female, 60.0, 165.0, 30.0).unwrap();
        assert_relative_eq!(e.base, 655.1 + 9.563 * 60.0 + 1.85 * 165.0 - 4.676 * 30.0);
    }

    #[test]
    fn test_missing_weight_excludes() {
        assert!(mifflin_st_jeor(Gender::Male, 0.0, 175.0, 40.0).is_none());
        assert!(harris_benedict(Gender::Male, -1.0, 175.0, 40.0).is_none());
        assert!(pediatric_ratio(Gender::Male, 0.0, 8.0, None).is_none());
    }

    #[test]
    fn test_factor_by_bmi_bands() {
        assert_relative_eq!(factor_by_bmi(50.0, 17.0, None).unwrap().base, 1750.0);
        assert_relative_eq!(factor_by_bmi(70.0, 22.0, None).unwrap().base, 2100.0);
        assert_relative_eq!(factor_by_bmi(80.0, 27.0, None).unwrap().base, 2000.0);
        assert_relative_eq!(factor_by_bmi(100.0, 35.0, None).unwrap().base, 2000.0);
        assert_relative_eq!(factor_by_bmi(120.0, 42.0, None).unwrap().base, 1800.0);
    }

    #[test]
    fn test_goal_adjustment_sign() {
        let loss = EnergyAdjustment::new(GoalDirection::Loss, 500.0);
        let e = custom_factor(90.0, 30.0, Some(&loss)).unwrap();
        assert_relative_eq!(e.base, 2700.0);
        assert_relative_eq!(e.adjusted.unwrap(), 2200.0);

        let gain = EnergyAdjustment::new(GoalDirection::Gain, 300.0);
        let e = custom_factor(90.0, 30.0, Some(&gain)).unwrap();
        assert_relative_eq!(e.adjusted.unwrap(), 3000.0);
    }

    #[test]
    fn test_fixed_factor_has_no_adjustment() {
        let e = fixed_factor(90.0, 25).unwrap();
        assert_relative_eq!(e.base, 2250.0);
        assert!(e.adjusted.is_none());
        assert_eq!(e.kind.name(), "fixed_factor_25");
    }

    #[test]
    fn test_tee_applies_activity() {
        let e = tee_from_bmr(EstimatorKind::MifflinStJeorTee, 1773.75, 1.2, None).unwrap();
        assert_relative_eq!(e.base, 2128.5);
    }

    #[test]
    fn test_adult_eer_male_sedentary() {
        let e = adult_eer(Gender::Male, 90.0, 175.0, 40.0, 1.2, None).unwrap();
        // PA = 1.0 below activity 1.4
        assert_relative_eq!(e.base, 662.0 - 9.53 * 40.0 + (15.91 * 90.0 + 539.6 * 1.75));
    }

    #[test]
    fn test_adult_eer_pa_bands() {
        let sedentary = adult_eer(Gender::Female, 60.0, 165.0, 30.0, 1.2, None).unwrap();
        let active = adult_eer(Gender::Female, 60.0, 165.0, 30.0, 1.7, None).unwrap();
        assert!(active.base > sedentary.base);
        assert_relative_eq!(
            active.base,
            354.0 - 6.91 * 30.0 + 1.25 * (9.36 * 60.0 + 726.0 * 1.65)
        );
    }

    #[test]
    fn test_pediatric_eer_infant_offsets() {
        // 2 months, 5 kg: 89×5 − 100 + 175
        let e = pediatric_eer(Gender::Male, 5.0, 0.0, 2.0, 1.2, None).unwrap();
        assert_relative_eq!(e.base, 520.0);

        let e = pediatric_eer(Gender::Male, 7.0, 0.0, 5.0, 1.2, None).unwrap();
        assert_relative_eq!(e.base, 89.0 * 7.0 - 100.0 + 56.0);

        let e = pediatric_eer(Gender::Male, 9.0, 0.0, 10.0, 1.2, None).unwrap();
        assert_relative_eq!(e.base, 89.0 * 9.0 - 100.0 + 22.0);

        let e = pediatric_eer(Gender::Male, 12.0, 0.0, 30.0, 1.2, None).unwrap();
        assert_relative_eq!(e.base, 89.0 * 12.0 - 100.0 + 20.0);
    }

    #[test]
    fn test_pediatric_eer_child_branch() {
        // Female, 96 months (8y): >35-month branch, age ≤ 8 tail of +20
        let e = pediatric_eer(Gender::Female, 25.0, 120.0, 96.0, 1.2, None).unwrap();
        assert_relative_eq!(
            e.base,
            135.3 - 30.8 * 8.0 + 1.0 * (10.0 * 25.0 + 934.0 * 1.2) + 20.0
        );

        // 10-year-old: +25 tail
        let e = pediatric_eer(Gender::Female, 32.0, 138.0, 120.0, 1.2, None).unwrap();
        assert_relative_eq!(
            e.base,
            135.3 - 30.8 * 10.0 + 1.0 * (10.0 * 32.0 + 934.0 * 1.38) + 25.0
        );
    }

    #[test]
    fn test_pediatric_eer_child_needs_height() {
        assert!(pediatric_eer(Gender::Female, 25.0, 0.0, 96.0, 1.2, None).is_none());
    }

    #[test]
    fn test_pediatric_obese_bee_age_gate() {
        assert!(pediatric_obese_bee(Gender::Male, 40.0, 140.0, 2.5).is_none());
        assert!(pediatric_obese_bee(Gender::Male, 40.0, 140.0, 19.0).is_none());

        let e = pediatric_obese_bee(Gender::Female, 45.0, 140.0, 10.0).unwrap();
        assert_relative_eq!(e.base, 516.0 - 26.8 * 10.0 + 347.0 * 1.4 + 12.4 * 45.0);
        assert!(e.adjusted.is_none());
    }

    #[test]
    fn test_pediatric_maintenance_tee() {
        let e = pediatric_maintenance_tee(Gender::Male, 45.0, 140.0, 10.0, 1.5, None).unwrap();
        assert_relative_eq!(
            e.base,
            114.0 - 50.9 * 10.0 + 1.12 * (19.5 * 45.0 + 1161.4 * 1.4)
        );
    }

    #[test]
    fn test_pediatric_ratio_bands() {
        assert_relative_eq!(pediatric_ratio(Gender::Male, 8.0, 0.5, None).unwrap().base, 800.0);
        assert_relative_eq!(pediatric_ratio(Gender::Male, 30.0, 9.0, None).unwrap().base, 2400.0);
        assert_relative_eq!(pediatric_ratio(Gender::Male, 50.0, 13.0, None).unwrap().base, 3000.0);
        assert_relative_eq!(pediatric_ratio(Gender::Female, 50.0, 13.0, None).unwrap().base, 2500.0);
        assert_relative_eq!(pediatric_ratio(Gender::Male, 60.0, 17.0, None).unwrap().base, 2700.0);
        assert_relative_eq!(pediatric_ratio(Gender::Female, 55.0, 17.0, None).unwrap().base, 2200.0);
    }

    #[test]
    fn test_pa_categories() {
        assert_eq!(PaCategory::from_activity_factor(1.2), PaCategory::Sedentary);
        assert_eq!(PaCategory::from_activity_factor(1.5), PaCategory::LowActive);
        assert_eq!(PaCategory::from_activity_factor(1.7), PaCategory::Active);
        assert_eq!(PaCategory::from_activity_factor(2.0), PaCategory::VeryActive);
        assert_relative_eq!(PaCategory::VeryActive.adult_coefficient(), 1.48);
        assert_relative_eq!(
            PaCategory::VeryActive.pediatric_eer_coefficient(Gender::Female),
            1.56
        );
    }
}
