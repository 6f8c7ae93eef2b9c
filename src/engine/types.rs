//! Result types for the assessment engine

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

use crate::engine::body::BmiClass;
use crate::engine::energy::EstimatorKind;
use crate::engine::growth::{GrowthClass, Severity};
use crate::reference::{GrowthMetric, GrowthStandard};

/// Weight figures derived from the snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSummary {
    /// Measured weight as entered (kg)
    pub current: f64,
    /// Weight after fluid-retention correction (kg)
    pub corrected: f64,
    /// Weight the estimators consume: the user override when one is
    /// provided, otherwise the corrected weight (kg)
    pub selected: f64,
    /// Total amputated percentage of body weight (informational)
    pub amputation_pct: f64,
    /// Waist-to-hip ratio when both circumferences were provided
    pub waist_hip_ratio: Option<f64>,
}

/// BMI and its adult classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySize {
    pub bmi: f64,
    /// Adult classification; `None` for pediatric patients
    pub class: Option<BmiClass>,
}

/// Which weight the 30%-rule protocol recommends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightProtocol {
    Ideal,
    Adjusted,
}

impl fmt::Display for WeightProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightProtocol::Ideal => write!(f, "ideal"),
            WeightProtocol::Adjusted => write!(f, "adjusted"),
        }
    }
}

/// Hamwi ideal/adjusted body weight and the 30%-rule outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolParams {
    /// Hamwi ideal body weight (kg)
    pub ibw: f64,
    /// Adjusted body weight (kg)
    pub abw: f64,
    /// IBW × 1.30, the high-obesity cutoff (kg)
    pub threshold: f64,
    /// True when the corrected weight is strictly above the cutoff
    pub high_obesity: bool,
    /// The weight the protocol recommends for dosing/estimation (kg)
    pub recommended: f64,
    pub label: WeightProtocol,
}

/// One energy estimate with its literal formula evidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    pub kind: EstimatorKind,
    /// Unadjusted result (kcal/day)
    pub base: f64,
    /// Result after the goal adjustment, when one applies (kcal/day)
    pub adjusted: Option<f64>,
    /// The arithmetic as performed, with the numbers substituted in
    pub formula: String,
}

impl EnergyEstimate {
    /// The estimate the caller should act on
    pub fn effective(&self) -> f64 {
        self.adjusted.unwrap_or(self.base)
    }
}

/// One growth metric evaluated against a reference curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthFinding {
    pub metric: GrowthMetric,
    pub standard: GrowthStandard,
    /// The measured value that was placed on the curve
    pub value: f64,
    /// Curve axis position of the anchor used (age in months, or
    /// length/stature in cm for weight-for-length)
    pub anchor_key: f64,
    pub percentile: Option<f64>,
    pub z_score: Option<f64>,
    pub class: GrowthClass,
    pub severity: Severity,
    /// Biologically implausible value flag
    pub implausible: bool,
    /// Which estimator family fits the classification
    pub recommendation: String,
    /// Weight-management directive; BMI findings at the 85th
    /// percentile or above for ages 2–18 only
    pub directive: Option<String>,
}

impl GrowthFinding {
    pub fn label(&self) -> &'static str {
        self.class.label(self.metric)
    }
}

/// Pediatric growth assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthAssessment {
    pub age_months: f64,
    pub standard: GrowthStandard,
    pub findings: Vec<GrowthFinding>,
    /// Weight-for-age value at the patient's height-for-age percentile (kg)
    pub ideal_weight: Option<f64>,
}

impl GrowthAssessment {
    pub fn finding(&self, metric: GrowthMetric) -> Option<&GrowthFinding> {
        self.findings.iter().find(|f| f.metric == metric)
    }

    /// BMI percentile, when a BMI finding was produced
    pub fn bmi_percentile(&self) -> Option<f64> {
        self.finding(GrowthMetric::Bmi).and_then(|f| f.percentile)
    }
}

/// Complete assessment of one patient snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub weight: WeightSummary,
    /// Absent when weight or height was not provided
    pub body_size: Option<BodySize>,
    /// 30%-rule protocol; adults with a usable height only
    pub protocol: Option<ProtocolParams>,
    pub energy: Vec<EnergyEstimate>,
    /// Pediatric patients only
    pub growth: Option<GrowthAssessment>,
}

impl AssessmentResult {
    /// Look up one estimate by kind
    pub fn estimate(&self, kind: EstimatorKind) -> Option<&EnergyEstimate> {
        self.energy.iter().find(|e| e.kind == kind)
    }

    /// Flatten every numeric output into a parameter map
    pub fn to_params(&self) -> HashMap<&'static str, f64> {
        let mut p = HashMap::new();

        p.insert("weight_current", self.weight.current);
        p.insert("weight_corrected", self.weight.corrected);
        p.insert("weight_selected", self.weight.selected);
        if self.weight.amputation_pct > 0.0 {
            p.insert("amputation_pct", self.weight.amputation_pct);
        }
        if let Some(v) = self.weight.waist_hip_ratio {
            p.insert("waist_hip_ratio", v);
        }

        if let Some(ref b) = self.body_size {
            p.insert("bmi", b.bmi);
        }

        if let Some(ref proto) = self.protocol {
            p.insert("ibw", proto.ibw);
            p.insert("abw", proto.abw);
            p.insert("obesity_threshold", proto.threshold);
            p.insert("recommended_weight", proto.recommended);
        }

        for e in &self.energy {
            p.insert(e.kind.name(), e.effective());
        }

        if let Some(ref g) = self.growth {
            if let Some(v) = g.ideal_weight {
                p.insert("pediatric_ideal_weight", v);
            }
            for finding in &g.findings {
                let (pct_key, z_key) = match finding.metric {
                    GrowthMetric::Weight => ("weight_pct", "weight_z"),
                    GrowthMetric::Height => ("height_pct", "height_z"),
                    GrowthMetric::Bmi => ("bmi_pct", "bmi_z"),
                    GrowthMetric::HeadCircumference => ("head_pct", "head_z"),
                    GrowthMetric::WeightForLength => {
                        ("weight_for_length_pct", "weight_for_length_z")
                    }
                };
                if let Some(v) = finding.percentile {
                    p.insert(pct_key, v);
                }
                if let Some(v) = finding.z_score {
                    p.insert(z_key, v);
                }
            }
        }

        p
    }
}

impl fmt::Display for AssessmentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "╔══════════════════════════════════════╗")?;
        writeln!(f, "║        Assessment Results            ║")?;
        writeln!(f, "╠══════════════════════════════════════╣")?;
        writeln!(f, "║ WEIGHT                               ║")?;
        writeln!(f, "║   Current:   {:>10.2} kg          ║", self.weight.current)?;
        writeln!(f, "║   Corrected: {:>10.2} kg          ║", self.weight.corrected)?;
        writeln!(f, "║   Selected:  {:>10.2} kg          ║", self.weight.selected)?;
        if self.weight.amputation_pct > 0.0 {
            writeln!(
                f,
                "║   Amputated: {:>10.2} %           ║",
                self.weight.amputation_pct
            )?;
        }

        if let Some(ref b) = self.body_size {
            writeln!(f, "╠══════════════════════════════════════╣")?;
            writeln!(f, "║ BODY SIZE                            ║")?;
            writeln!(f, "║   BMI:       {:>10.2} kg/m²       ║", b.bmi)?;
            if let Some(class) = b.class {
                writeln!(f, "║   Class: {:<27} ║", class.to_string())?;
            }
        }

        if let Some(ref proto) = self.protocol {
            writeln!(f, "╠══════════════════════════════════════╣")?;
            writeln!(f, "║ WEIGHT PROTOCOL                      ║")?;
            writeln!(f, "║   IBW:       {:>10.2} kg          ║", proto.ibw)?;
            writeln!(f, "║   ABW:       {:>10.2} kg          ║", proto.abw)?;
            writeln!(
                f,
                "║   Recommend: {:>10.2} kg ({:<5})  ║",
                proto.recommended,
                proto.label.to_string()
            )?;
        }

        if !self.energy.is_empty() {
            writeln!(f, "╠══════════════════════════════════════╣")?;
            writeln!(f, "║ ENERGY (kcal/day)                    ║")?;
            for e in &self.energy {
                writeln!(
                    f,
                    "║   {:<22} {:>10.1} ║",
                    e.kind.name(),
                    e.effective()
                )?;
            }
        }

        if let Some(ref g) = self.growth {
            writeln!(f, "╠══════════════════════════════════════╣")?;
            writeln!(f, "║ GROWTH ({:<3})                         ║", g.standard.to_string())?;
            for finding in &g.findings {
                let pct = finding
                    .percentile
                    .map(|p| format!("{:.1}", p))
                    .unwrap_or_else(|| "-".to_string());
                writeln!(
                    f,
                    "║   {:<18} P{:<6} {:<8} ║",
                    finding.metric.name(),
                    pct,
                    finding.label()
                )?;
            }
            if let Some(v) = g.ideal_weight {
                writeln!(f, "║   Ideal weight: {:>8.2} kg        ║", v)?;
            }
        }

        writeln!(f, "╚══════════════════════════════════════╝")
    }
}
