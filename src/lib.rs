pub mod data;
pub mod engine;
pub mod error;
pub mod reference;

pub use crate::data::builder::SnapshotBuilder;
pub use crate::data::*;
pub use crate::engine::{compute, compute_many, AssessmentResult, EngineOptions};
pub use crate::reference::{
    read_curves, read_curves_from_reader, GrowthMetric, GrowthStandard, InMemoryProvider,
    ReferenceProvider,
};
pub use error::NutrisolError;
pub use std::collections::HashMap;

pub mod prelude {
    pub mod data {
        pub use crate::data::{
            EnergyAdjustment, Gender, GoalDirection, LimbSegment, PatientSnapshot, PediatricAge,
            SnapshotBuilder,
        };
    }
    pub mod reference {
        pub use crate::reference::{
            read_curves, read_curves_from_reader, Anchor, CurveError, GrowthMetric, GrowthStandard,
            InMemoryProvider, PercentileRank, ReferenceCurve, ReferenceProvider,
        };
    }
    pub mod engine {
        pub use crate::engine::{
            compute, compute_many, AssessmentResult, BmiClass, EnergyEstimate, EngineOptions,
            EstimatorKind, GrowthAssessment, GrowthClass, GrowthFinding, Severity, WeightProtocol,
            WeightSummary,
        };
    }

    pub use crate::data::*;
    pub use crate::engine::{compute, compute_many, AssessmentResult, EngineOptions};
    pub use crate::reference::{
        read_curves, GrowthMetric, GrowthStandard, InMemoryProvider, ReferenceProvider,
    };
}
