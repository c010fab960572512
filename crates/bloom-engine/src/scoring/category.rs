use super::catalog::Catalog;
use super::domain::{Benchmark, Category, MeasurementType, RawValue, Trend};
use super::scale::{normalize_score, score_sub_criterion};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Confidence assumed for a category with supplied data but no explicit estimate.
pub const DEFAULT_CONFIDENCE: f64 = 0.85;
/// Confidence assigned to a category scored entirely from midpoint defaults.
pub const NO_DATA_CONFIDENCE: f64 = 0.5;

/// Anything carrying a category and its 1-8 score.
pub trait CategoryValue {
    fn category(&self) -> Category;
    fn value(&self) -> f64;
}

impl CategoryValue for (Category, f64) {
    fn category(&self) -> Category {
        self.0
    }

    fn value(&self) -> f64 {
        self.1
    }
}

impl CategoryValue for CategoryScore {
    fn category(&self) -> Category {
        self.category
    }

    fn value(&self) -> f64 {
        self.score
    }
}

impl CategoryValue for CategoryAssessment {
    fn category(&self) -> Category {
        self.score.category
    }

    fn value(&self) -> f64 {
        self.score.score
    }
}

/// Audit line for one sub-criterion, kept so users can verify estimated data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCriterionScore {
    pub id: String,
    pub label: String,
    pub score: f64,
    pub weight: f64,
    pub measurement_type: MeasurementType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_value: Option<RawValue>,
    pub benchmark: Benchmark,
    pub invert_scale: bool,
}

impl SubCriterionScore {
    pub fn is_defaulted(&self) -> bool {
        self.raw_value.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: f64,
    pub sub_scores: Vec<SubCriterionScore>,
}

impl CategoryScore {
    /// Share of sub-criteria backed by a supplied value rather than a default.
    pub fn completeness(&self) -> f64 {
        if self.sub_scores.is_empty() {
            return 0.0;
        }
        let supplied = self
            .sub_scores
            .iter()
            .filter(|sub| !sub.is_defaulted())
            .count();
        supplied as f64 / self.sub_scores.len() as f64
    }
}

/// A category score together with the qualitative signals that travel with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAssessment {
    #[serde(flatten)]
    pub score: CategoryScore,
    pub label: String,
    pub trend: Trend,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

/// Scores one category from whatever raw values are on hand.
///
/// Definitions are walked in catalog order; ids without a value fall back to
/// the midpoint score.
pub fn score_category(
    catalog: &Catalog,
    category: Category,
    values: &HashMap<String, RawValue>,
) -> CategoryScore {
    let mut weighted_sum = 0.0;
    let mut sub_scores = Vec::new();

    for definition in catalog.definitions(category) {
        let raw_value = values.get(definition.id).copied();
        let score = score_sub_criterion(definition, raw_value);

        sub_scores.push(SubCriterionScore {
            id: definition.id.to_string(),
            label: definition.label.to_string(),
            score,
            weight: definition.weight,
            measurement_type: definition.measurement_type,
            raw_value,
            benchmark: definition.benchmark,
            invert_scale: definition.invert_scale,
        });

        weighted_sum += score * definition.weight;
    }

    CategoryScore {
        category,
        score: normalize_score(weighted_sum),
        sub_scores,
    }
}

/// Scores a category and attaches trend and confidence.
///
/// Without an explicit confidence, a category with no supplied values is
/// reported at [`NO_DATA_CONFIDENCE`] so downstream insights flag it.
pub fn assess_category(
    catalog: &Catalog,
    category: Category,
    values: &HashMap<String, RawValue>,
    trend: Option<Trend>,
    confidence: Option<f64>,
) -> CategoryAssessment {
    let score = score_category(catalog, category, values);
    let confidence = match confidence {
        Some(value) if value.is_finite() => value.clamp(0.0, 1.0),
        _ if score.completeness() == 0.0 => NO_DATA_CONFIDENCE,
        _ => DEFAULT_CONFIDENCE,
    };

    CategoryAssessment {
        score,
        label: category.label().to_string(),
        trend: trend.unwrap_or_default(),
        confidence,
        notes: String::new(),
    }
}
