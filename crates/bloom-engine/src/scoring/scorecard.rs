use super::catalog::Catalog;
use super::category::{assess_category, CategoryAssessment, CategoryValue};
use super::dimensions::{dimension_scores, DimensionScores};
use super::domain::{Category, RawValue, Trend};
use super::insights::{generate_insights, Insight};
use super::profiles::{total_score, weighted_overall, ProfileId, WeightingProfile, WeightingRegistry};
use super::scale::total_64_to_100;
use super::status::{letter_grade, BloomRating, BloomStatus, StatusInfo};
use super::ScoringError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Raw inputs for one property, as handed over by extraction or manual entry.
///
/// Every field may be sparse; anything absent degrades to the midpoint score
/// and the default confidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyMetrics {
    #[serde(default)]
    pub values: HashMap<String, RawValue>,
    #[serde(default)]
    pub trends: BTreeMap<Category, Trend>,
    #[serde(default)]
    pub confidence: BTreeMap<Category, f64>,
    #[serde(default)]
    pub notes: BTreeMap<Category, String>,
}

impl PropertyMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, id: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.values.insert(id.into(), value.into());
        self
    }

    pub fn with_trend(mut self, category: Category, trend: Trend) -> Self {
        self.trends.insert(category, trend);
        self
    }

    pub fn with_confidence(mut self, category: Category, confidence: f64) -> Self {
        self.confidence.insert(category, confidence);
        self
    }

    /// Supplied ids the catalog does not define, sorted.
    pub fn unknown_ids<'a>(&'a self, catalog: &Catalog) -> Vec<&'a str> {
        let mut unknown: Vec<&str> = self
            .values
            .keys()
            .map(String::as_str)
            .filter(|id| catalog.find(id).is_none())
            .collect();
        unknown.sort_unstable();
        unknown
    }

    /// Strict counterpart to the lenient scoring path.
    pub fn ensure_known_ids(&self, catalog: &Catalog) -> Result<(), ScoringError> {
        match self.unknown_ids(catalog).first() {
            Some(id) => Err(ScoringError::UnknownSubCriterion((*id).to_string())),
            None => Ok(()),
        }
    }
}

/// Stateless scorer that runs the full petal pipeline for one property.
#[derive(Debug, Clone)]
pub struct PropertyScorer {
    catalog: Arc<Catalog>,
    registry: Arc<WeightingRegistry>,
}

impl PropertyScorer {
    pub fn new(catalog: Arc<Catalog>, registry: Arc<WeightingRegistry>) -> Self {
        Self { catalog, registry }
    }

    pub fn standard() -> Self {
        Self::new(
            Arc::new(Catalog::standard()),
            Arc::new(WeightingRegistry::standard()),
        )
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn registry(&self) -> &WeightingRegistry {
        &self.registry
    }

    /// Assessments for all eight categories in presentation order.
    pub fn assess(&self, metrics: &PropertyMetrics) -> Vec<CategoryAssessment> {
        Category::ordered()
            .into_iter()
            .map(|category| {
                let mut assessment = assess_category(
                    &self.catalog,
                    category,
                    &metrics.values,
                    metrics.trends.get(&category).copied(),
                    metrics.confidence.get(&category).copied(),
                );
                if let Some(notes) = metrics.notes.get(&category) {
                    assessment.notes = notes.clone();
                }
                assessment
            })
            .collect()
    }

    pub fn score(&self, metrics: &PropertyMetrics, profile: &WeightingProfile) -> Scorecard {
        let categories = self.assess(metrics);
        let total = total_score(&categories);
        let weighted_score = weighted_overall(&categories, profile);
        let status = BloomStatus::classify(total);
        let completeness = mean(categories.iter().map(|entry| entry.score.completeness()));
        let confidence = mean(categories.iter().map(|entry| entry.confidence));

        Scorecard {
            profile: profile.id,
            total_score: total,
            normalized_score: total_64_to_100(total),
            weighted_score,
            status: status.info(),
            rating: BloomRating::classify(weighted_score),
            grade: letter_grade(total),
            legacy_grade: status.legacy_grade(),
            dimensions: dimension_scores(&categories),
            insights: generate_insights(&categories),
            completeness,
            confidence,
            categories,
        }
    }

    /// Scores against a registered profile; unknown ids fall back to `equal`.
    pub fn score_with_profile(&self, metrics: &PropertyMetrics, profile_id: ProfileId) -> Scorecard {
        let profile = self.registry.get(profile_id);
        self.score(metrics, profile)
    }
}

impl Default for PropertyScorer {
    fn default() -> Self {
        Self::standard()
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Everything the engine emits for one scored property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub profile: ProfileId,
    pub categories: Vec<CategoryAssessment>,
    /// Unweighted 0-64 sum.
    pub total_score: f64,
    /// Total as a whole-number percentage.
    pub normalized_score: f64,
    /// Profile-weighted 0-100 score.
    pub weighted_score: f64,
    pub status: StatusInfo,
    pub rating: BloomRating,
    pub grade: &'static str,
    pub legacy_grade: &'static str,
    pub dimensions: DimensionScores,
    pub insights: Vec<Insight>,
    pub completeness: f64,
    pub confidence: f64,
}

impl Scorecard {
    pub fn category(&self, category: Category) -> Option<&CategoryAssessment> {
        self.categories
            .iter()
            .find(|assessment| assessment.category() == category)
    }

    /// Mean petal score weighted by each category's confidence; 0 when no
    /// category carries any confidence.
    pub fn confidence_weighted_average(&self) -> f64 {
        let total_confidence: f64 = self.categories.iter().map(|entry| entry.confidence).sum();
        if total_confidence <= 0.0 {
            return 0.0;
        }
        let weighted: f64 = self
            .categories
            .iter()
            .map(|entry| entry.value() * entry.confidence)
            .sum();
        weighted / total_confidence
    }

    /// Highest scoring categories first; ties keep presentation order.
    pub fn strongest(&self, count: usize) -> Vec<&CategoryAssessment> {
        let mut ranked = self.ranked_descending();
        ranked.truncate(count);
        ranked
    }

    /// Lowest scoring categories first. This is the tail of the descending
    /// ranking read backwards, so ties come out in reverse presentation order.
    pub fn weakest(&self, count: usize) -> Vec<&CategoryAssessment> {
        let ranked = self.ranked_descending();
        let start = ranked.len().saturating_sub(count);
        ranked[start..].iter().rev().copied().collect()
    }

    fn ranked_descending(&self) -> Vec<&CategoryAssessment> {
        let mut ranked: Vec<&CategoryAssessment> = self.categories.iter().collect();
        ranked.sort_by(|a, b| b.value().total_cmp(&a.value()));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::domain::MeasurementType;
    use crate::scoring::insights::InsightKind;

    fn best_case(catalog: &Catalog) -> PropertyMetrics {
        let mut metrics = PropertyMetrics::new();
        for category in Category::ordered() {
            for definition in catalog.definitions(category) {
                metrics = match definition.measurement_type {
                    MeasurementType::Boolean => metrics.with_value(definition.id, true),
                    _ => metrics.with_value(definition.id, definition.benchmark.high),
                };
            }
        }
        metrics
    }

    #[test]
    fn empty_metrics_score_a_midpoint_property() {
        let scorer = PropertyScorer::standard();
        let card = scorer.score_with_profile(&PropertyMetrics::new(), ProfileId::Equal);

        assert_eq!(card.categories.len(), Category::COUNT);
        assert!(card.categories.iter().all(|entry| entry.value() == 5.0));
        assert_eq!(card.total_score, 40.0);
        assert_eq!(card.normalized_score, 63.0);
        assert_eq!(card.weighted_score, 62.5);
        assert_eq!(card.status.status, BloomStatus::LateBloom);
        assert_eq!(card.rating, BloomRating::Budding);
        assert_eq!(card.grade, "D-");
        assert_eq!(card.legacy_grade, "B");
        assert_eq!(card.completeness, 0.0);
        assert_eq!(card.confidence, 0.5);

        assert_eq!(card.insights.len(), Category::COUNT);
        assert!(card
            .insights
            .iter()
            .all(|insight| insight.kind == InsightKind::Warning && insight.priority == 2));
    }

    #[test]
    fn best_case_metrics_reach_full_bloom() {
        let scorer = PropertyScorer::standard();
        let metrics = best_case(scorer.catalog());
        let card = scorer.score_with_profile(&metrics, ProfileId::IncomeFocus);

        assert_eq!(card.total_score, 64.0);
        assert_eq!(card.weighted_score, 100.0);
        assert_eq!(card.status.status, BloomStatus::FullyBloomed);
        assert_eq!(card.status.emoji, "🌸");
        assert_eq!(card.rating, BloomRating::FullyBloomed);
        assert_eq!(card.grade, "A+");
        assert_eq!(card.completeness, 1.0);
        assert!((card.confidence - 0.85).abs() < 1e-12);
        assert_eq!(card.dimensions.returns, 8.0);
        assert_eq!(card.profile, ProfileId::IncomeFocus);
    }

    #[test]
    fn trends_confidence_and_notes_flow_into_assessments() {
        let scorer = PropertyScorer::standard();
        let mut metrics = PropertyMetrics::new()
            .with_value("noi-yield", 2.0)
            .with_trend(Category::Cashflow, Trend::Down)
            .with_confidence(Category::Cashflow, 0.95);
        metrics
            .notes
            .insert(Category::Cashflow, "Estimated from T12".to_string());

        let card = scorer.score_with_profile(&metrics, ProfileId::Equal);
        let cashflow = card.category(Category::Cashflow).expect("cashflow scored");

        assert_eq!(cashflow.trend, Trend::Down);
        assert_eq!(cashflow.confidence, 0.95);
        assert_eq!(cashflow.notes, "Estimated from T12");
        assert!(card
            .insights
            .iter()
            .any(|insight| insight.category == Category::Cashflow
                && insight.kind == InsightKind::Warning
                && insight.priority == 4));
    }

    #[test]
    fn unknown_ids_are_reported_without_blocking_scoring() {
        let scorer = PropertyScorer::standard();
        let metrics = PropertyMetrics::new()
            .with_value("zeta-metric", 1.0)
            .with_value("cap-rate-typo", 6.5)
            .with_value("ltv", 60.0);

        assert_eq!(
            metrics.unknown_ids(scorer.catalog()),
            vec!["cap-rate-typo", "zeta-metric"]
        );
        assert_eq!(
            metrics.ensure_known_ids(scorer.catalog()),
            Err(ScoringError::UnknownSubCriterion("cap-rate-typo".to_string()))
        );

        let card = scorer.score_with_profile(&metrics, ProfileId::Equal);
        assert!(card.total_score > 0.0);
    }

    #[test]
    fn snapshot_helpers_rank_and_weight_categories() {
        let scorer = PropertyScorer::standard();
        let metrics = best_case(scorer.catalog())
            .with_confidence(Category::Location, 0.0)
            .with_value("noi-yield", 0.0);
        let mut card = scorer.score_with_profile(&metrics, ProfileId::Equal);

        let strongest: Vec<_> = card.strongest(2).iter().map(|entry| entry.category()).collect();
        assert_eq!(strongest, vec![Category::Location, Category::Tenancy]);

        let weakest = card.weakest(1);
        assert_eq!(weakest[0].category(), Category::Cashflow);
        assert!(weakest[0].value() < 8.0);

        for entry in card.categories.iter_mut() {
            entry.confidence = 0.0;
        }
        assert_eq!(card.confidence_weighted_average(), 0.0);
    }

    #[test]
    fn weakest_lists_tied_categories_in_reverse_layout_order() {
        let scorer = PropertyScorer::standard();
        let card = scorer.score_with_profile(&PropertyMetrics::new(), ProfileId::Equal);

        let weakest: Vec<_> = card.weakest(3).iter().map(|entry| entry.category()).collect();
        assert_eq!(
            weakest,
            vec![Category::Condition, Category::Liquidity, Category::Appreciation]
        );

        let strongest: Vec<_> = card.strongest(2).iter().map(|entry| entry.category()).collect();
        assert_eq!(strongest, vec![Category::Location, Category::Tenancy]);
        assert_eq!(card.weakest(20).len(), Category::COUNT);
    }

    #[test]
    fn confidence_weighting_discounts_uncertain_categories() {
        let scorer = PropertyScorer::standard();
        let mut card = scorer.score_with_profile(&PropertyMetrics::new(), ProfileId::Equal);
        for entry in card.categories.iter_mut() {
            entry.score.score = 4.0;
            entry.confidence = 0.5;
        }
        card.categories[0].score.score = 8.0;
        card.categories[0].confidence = 1.0;

        // (8 * 1.0 + 7 * 4 * 0.5) / (1.0 + 7 * 0.5)
        let expected = 22.0 / 4.5;
        assert!((card.confidence_weighted_average() - expected).abs() < 1e-12);
    }
}
