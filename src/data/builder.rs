use crate::data::*;

/// Fluent builder for [`PatientSnapshot`]
///
/// All fields default to zero / unset; only set what was measured.
///
/// ```
/// use nutrisol::prelude::*;
///
/// let snapshot = PatientSnapshot::builder()
///     .gender(Gender::Male)
///     .age(40)
///     .height(175.0)
///     .weight(90.0)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    snapshot: PatientSnapshot,
}

impl SnapshotBuilder {
    pub(crate) fn new() -> Self {
        Self {
            snapshot: PatientSnapshot::default(),
        }
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.snapshot.gender = gender;
        self
    }

    /// Age in whole years
    pub fn age(mut self, years: u32) -> Self {
        self.snapshot.age_years = years;
        self
    }

    /// Pediatric age breakdown; also sets the whole-year age
    pub fn pediatric_age(mut self, years: u32, months: u32, days: u32) -> Self {
        self.snapshot.age_years = years;
        self.snapshot.pediatric_age = Some(PediatricAge::new(years, months, days));
        self
    }

    /// Height in cm
    pub fn height(mut self, cm: f64) -> Self {
        self.snapshot.height_cm = cm;
        self
    }

    /// Current weight in kg
    pub fn weight(mut self, kg: f64) -> Self {
        self.snapshot.current_weight_kg = kg;
        self
    }

    /// User-selected working weight in kg (overrides the corrected weight)
    pub fn selected_weight(mut self, kg: f64) -> Self {
        self.snapshot.selected_weight_kg = kg;
        self
    }

    /// Usual (habitual) weight in kg
    pub fn usual_weight(mut self, kg: f64) -> Self {
        self.snapshot.usual_weight_kg = kg;
        self
    }

    /// Waist circumference in cm
    pub fn waist(mut self, cm: f64) -> Self {
        self.snapshot.waist_cm = cm;
        self
    }

    /// Hip circumference in cm
    pub fn hip(mut self, cm: f64) -> Self {
        self.snapshot.hip_cm = cm;
        self
    }

    /// Mid-arm circumference in cm
    pub fn mac(mut self, cm: f64) -> Self {
        self.snapshot.mac_cm = cm;
        self
    }

    /// Triceps skinfold in mm
    pub fn triceps_skinfold(mut self, mm: f64) -> Self {
        self.snapshot.triceps_skinfold_mm = mm;
        self
    }

    /// Head circumference in cm
    pub fn head_circumference(mut self, cm: f64) -> Self {
        self.snapshot.head_circumference_cm = cm;
        self
    }

    /// Activity multiplier (e.g. 1.2 sedentary, 1.55 moderate)
    pub fn activity_factor(mut self, factor: f64) -> Self {
        self.snapshot.activity_factor = factor;
        self
    }

    /// Ascites fluid mass in kg
    pub fn ascites(mut self, kg: f64) -> Self {
        self.snapshot.ascites_kg = kg;
        self
    }

    /// Edema fluid mass in kg
    pub fn edema(mut self, kg: f64) -> Self {
        self.snapshot.edema_kg = kg;
        self
    }

    /// Single fractional fluid-retention correction (0.0–1.0)
    pub fn edema_fraction(mut self, fraction: f64) -> Self {
        self.snapshot.edema_fraction = fraction;
        self
    }

    /// Record an amputated limb segment; call twice for bilateral loss
    pub fn amputation(mut self, segment: LimbSegment) -> Self {
        self.snapshot.amputations.push(segment);
        self
    }

    /// Measured body fat percentage
    pub fn body_fat(mut self, pct: f64) -> Self {
        self.snapshot.body_fat_pct = pct;
        self
    }

    /// Desired body fat percentage
    pub fn desired_body_fat(mut self, pct: f64) -> Self {
        self.snapshot.desired_body_fat_pct = pct;
        self
    }

    /// Caloric goal adjustment applied to total-expenditure estimates
    pub fn energy_goal(mut self, direction: GoalDirection, kcal: f64) -> Self {
        self.snapshot.energy_adjustment = Some(EnergyAdjustment::new(direction, kcal));
        self
    }

    /// Custom kcal/kg energy factor
    pub fn custom_factor(mut self, kcal_per_kg: f64) -> Self {
        self.snapshot.custom_energy_factor = kcal_per_kg;
        self
    }

    pub fn build(self) -> PatientSnapshot {
        self.snapshot
    }
}
