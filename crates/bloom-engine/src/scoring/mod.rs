//! Bloom scoring: raw property metrics in, bounded petal scores and their
//! derived classifications out. Everything here is pure and synchronous.

pub mod catalog;
pub mod category;
pub mod dimensions;
pub mod domain;
pub mod history;
pub mod insights;
pub mod profiles;
pub mod radar;
pub mod scale;
pub mod scorecard;
pub mod status;

pub use catalog::{Catalog, CatalogError};
pub use category::{
    assess_category, score_category, CategoryAssessment, CategoryScore, CategoryValue,
    SubCriterionScore,
};
pub use dimensions::{dimension_scores, DimensionScores};
pub use domain::{
    Benchmark, Category, Dimension, MeasurementType, RawValue, SubCriterionDefinition, Trend,
};
pub use history::{compare, ScoreComparison, ScoreHistoryEntry};
pub use insights::{generate_insights, Insight, InsightKind};
pub use profiles::{
    total_score, weighted_overall, ProfileError, ProfileId, WeightingProfile, WeightingRegistry,
};
pub use scale::{normalize_score, score_from_raw, score_sub_criterion};
pub use scorecard::{PropertyMetrics, PropertyScorer, Scorecard};
pub use status::{letter_grade, BloomRating, BloomStatus, StatusInfo};

use thiserror::Error;

/// Contract violations raised by strict lookups and validated inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("unknown weighting profile '{0}'")]
    UnknownProfile(String),
    #[error("unknown sub-criterion '{0}'")]
    UnknownSubCriterion(String),
    #[error("invalid custom weighting: {0}")]
    InvalidProfile(#[from] ProfileError),
}

/// Runs every load-time invariant check over the catalog, the registry and
/// the classifier tables.
pub fn validate_configuration(
    catalog: &Catalog,
    registry: &WeightingRegistry,
) -> Result<(), CatalogError> {
    catalog.validate()?;
    registry.validate()?;
    status::validate_tables()
}
