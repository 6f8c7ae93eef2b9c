//! Anthropometric and energy assessment engine
//!
//! This module turns a [`PatientSnapshot`](crate::data::PatientSnapshot)
//! into an [`AssessmentResult`]: corrected weight, BMI classification, the
//! Hamwi ideal/adjusted weight protocol, a bank of energy estimators with
//! literal formula evidence, and pediatric growth findings against WHO/CDC
//! reference curves.
//!
//! # Design Philosophy
//!
//! - **Pure**: assessment is a deterministic function of the snapshot,
//!   the reference curves and the options; no I/O, no clock, no state
//! - **Infallible**: missing or out-of-range inputs drop the dependent
//!   outputs instead of erroring
//! - **Evidenced**: every energy estimate carries the arithmetic it
//!   performed as a formula string with the numbers substituted in
//! - **Configurable**: defaults and policy via [`EngineOptions`]
//!
//! # Energy Estimators
//!
//! | Estimator | Population |
//! |-----------|------------|
//! | BMI-banded kcal/kg factor | Adults |
//! | Custom kcal/kg factor | Adults |
//! | Fixed 25/30/35/40 kcal/kg | Adults (informational) |
//! | Harris-Benedict BMR and TEE | Adults |
//! | Mifflin-St Jeor BMR and TEE | Adults |
//! | IOM adult EER | Adults ≥ 19 years |
//! | IOM pediatric EER | 0–18 years, piecewise by age |
//! | Obese BEE | 3–18 years at BMI percentile ≥ 85 |
//! | Weight-maintenance TEE | 3–18 years |
//! | kcal/kg ratio method | Pediatric, banded by age |
//!
//! # Usage
//!
//! ```rust,ignore
//! use nutrisol::prelude::*;
//!
//! let snapshot = PatientSnapshot::builder()
//!     .gender(Gender::Male)
//!     .age(40.0)
//!     .height(175.0)
//!     .weight(90.0)
//!     .build();
//!
//! let provider = InMemoryProvider::new();
//! let result = compute(&snapshot, &provider, &EngineOptions::default());
//!
//! println!("BMI: {:.2}", result.body_size.as_ref().unwrap().bmi);
//! println!("{}", result);
//! ```
//!
//! # Pediatric Assessment
//!
//! ```rust,ignore
//! use nutrisol::prelude::*;
//!
//! let provider = read_curves("growth_curves.csv")?;
//! let options = EngineOptions::default().with_growth_standard(GrowthStandard::Cdc);
//! let result = compute(&snapshot, &provider, &options);
//!
//! if let Some(ref growth) = result.growth {
//!     for finding in &growth.findings {
//!         println!("{}: P{:.1} ({})", finding.metric, finding.percentile.unwrap(), finding.label());
//!     }
//! }
//! ```

// Internal modules
mod assess;
mod body;
mod energy;
mod growth;
mod interp;
mod options;
mod types;
mod weight;


// Public API
pub use assess::{compute, compute_many};
pub use body::{adjusted_body_weight, bmi, ideal_body_weight, BmiClass};
pub use energy::{EstimatorKind, PaCategory};
pub use growth::{
    classify, directive_for, equation_recommendation, AgeBand, GrowthClass, PercentileBand,
    Severity,
};
pub use interp::{is_implausible, percentile_from_value, value_at_percentile, z_from_percentile};
pub use options::EngineOptions;
pub use types::{
    AssessmentResult, BodySize, EnergyEstimate, GrowthAssessment, GrowthFinding, ProtocolParams,
    WeightProtocol, WeightSummary,
};
pub use weight::{amputation_pct, corrected_weight, waist_hip_ratio};
