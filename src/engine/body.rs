//! BMI classification and the ideal/adjusted-weight protocol selector

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::data::Gender;
use crate::engine::types::{ProtocolParams, WeightProtocol};

/// Hamwi IBW intercept per gender (kg at 154 cm)
fn hamwi_base(gender: Gender) -> f64 {
    match gender {
        Gender::Male => 50.0,
        Gender::Female => 45.5,
    }
}

/// Adjusted-body-weight factor per gender
fn abw_factor(gender: Gender) -> f64 {
    match gender {
        Gender::Male => 0.38,
        Gender::Female => 0.32,
    }
}

/// Threshold multiple of IBW above which the adjusted weight is recommended
const HIGH_OBESITY_FACTOR: f64 = 1.30;

/// Body mass index, defined only when both inputs are positive
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if weight_kg > 0.0 && height_cm > 0.0 {
        let height_m = height_cm / 100.0;
        Some(weight_kg / (height_m * height_m))
    } else {
        None
    }
}

/// Adult BMI classification bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiClass {
    Underweight,
    Normal,
    Overweight,
    Obese,
    MorbidlyObese,
}

impl BmiClass {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiClass::Underweight
        } else if bmi < 25.0 {
            BmiClass::Normal
        } else if bmi < 30.0 {
            BmiClass::Overweight
        } else if bmi < 40.0 {
            BmiClass::Obese
        } else {
            BmiClass::MorbidlyObese
        }
    }
}

impl fmt::Display for BmiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BmiClass::Underweight => write!(f, "underweight"),
            BmiClass::Normal => write!(f, "normal"),
            BmiClass::Overweight => write!(f, "overweight"),
            BmiClass::Obese => write!(f, "obese"),
            BmiClass::MorbidlyObese => write!(f, "morbidly obese"),
        }
    }
}

/// Hamwi-derived ideal body weight (metric form)
///
/// `None` when the height is unset or the formula degenerates to a
/// non-positive weight (very short heights).
pub fn ideal_body_weight(gender: Gender, height_cm: f64) -> Option<f64> {
    if height_cm <= 0.0 {
        return None;
    }
    let ibw = (height_cm - 154.0) * 0.9 + hamwi_base(gender);
    if ibw > 0.0 {
        Some(ibw)
    } else {
        None
    }
}

/// Adjusted body weight from the corrected weight and IBW
pub fn adjusted_body_weight(gender: Gender, corrected_kg: f64, ibw: f64) -> f64 {
    (corrected_kg - ibw) * abw_factor(gender) + ibw
}

/// Run the 30%-over-IBW protocol rule
///
/// The threshold is strict: a corrected weight exactly at IBW × 1.30 is not
/// high obesity and keeps the ideal-weight recommendation.
pub(crate) fn protocol(
    gender: Gender,
    corrected_kg: f64,
    height_cm: f64,
) -> Option<ProtocolParams> {
    let ibw = ideal_body_weight(gender, height_cm)?;
    if corrected_kg <= 0.0 {
        return None;
    }

    let abw = adjusted_body_weight(gender, corrected_kg, ibw);
    let threshold = ibw * HIGH_OBESITY_FACTOR;
    let high_obesity = corrected_kg > threshold;

    let (recommended, label) = if high_obesity {
        (abw, WeightProtocol::Adjusted)
    } else {
        (ibw, WeightProtocol::Ideal)
    };

    Some(ProtocolParams {
        ibw,
        abw,
        threshold,
        high_obesity,
        recommended,
        label,
    })
}
