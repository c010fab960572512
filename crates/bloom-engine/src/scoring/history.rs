use super::category::CategoryValue;
use super::domain::Category;
use super::profiles::total_score;
use super::scale::round_to_tenth;
use super::scorecard::Scorecard;
use super::status::BloomStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Persisted snapshot of a property's scores at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreHistoryEntry {
    pub date: DateTime<Utc>,
    pub total_score: f64,
    pub category_scores: BTreeMap<Category, f64>,
}

impl ScoreHistoryEntry {
    pub fn from_scorecard(date: DateTime<Utc>, scorecard: &Scorecard) -> Self {
        let category_scores = scorecard
            .categories
            .iter()
            .map(|assessment| (assessment.category(), assessment.value()))
            .collect();

        Self {
            date,
            total_score: scorecard.total_score,
            category_scores,
        }
    }

    /// Total recomputed from the stored category scores.
    pub fn recomputed_total(&self) -> f64 {
        let scores: Vec<(Category, f64)> = self
            .category_scores
            .iter()
            .map(|(category, score)| (*category, *score))
            .collect();
        total_score(&scores)
    }

    pub fn status(&self) -> BloomStatus {
        BloomStatus::classify(self.total_score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComparison {
    pub previous_date: DateTime<Utc>,
    pub current_date: DateTime<Utc>,
    pub previous_total: f64,
    pub current_total: f64,
    pub total_delta: f64,
    /// Only categories present in both snapshots.
    pub category_deltas: BTreeMap<Category, f64>,
    pub previous_status: BloomStatus,
    pub current_status: BloomStatus,
    pub status_changed: bool,
}

pub fn compare(previous: &ScoreHistoryEntry, current: &ScoreHistoryEntry) -> ScoreComparison {
    let category_deltas = current
        .category_scores
        .iter()
        .filter_map(|(category, score)| {
            previous
                .category_scores
                .get(category)
                .map(|before| (*category, round_to_tenth(score - before)))
        })
        .collect();

    let previous_status = previous.status();
    let current_status = current.status();

    ScoreComparison {
        previous_date: previous.date,
        current_date: current.date,
        previous_total: previous.total_score,
        current_total: current.total_score,
        total_delta: round_to_tenth(current.total_score - previous.total_score),
        category_deltas,
        previous_status,
        current_status,
        status_changed: previous_status != current_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(day: u32, scores: &[(Category, f64)]) -> ScoreHistoryEntry {
        let category_scores: BTreeMap<_, _> = scores.iter().copied().collect();
        let mut entry = ScoreHistoryEntry {
            date: Utc
                .with_ymd_and_hms(2025, 10, day, 12, 0, 0)
                .single()
                .expect("valid timestamp"),
            total_score: 0.0,
            category_scores,
        };
        entry.total_score = entry.recomputed_total();
        entry
    }

    #[test]
    fn comparison_reports_deltas_and_status_change() {
        let mut before: Vec<_> = Category::ordered()
            .into_iter()
            .map(|category| (category, 6.1))
            .collect();
        let previous = entry(1, &before);
        before[4].1 = 8.0;
        before[0].1 = 7.5;
        let current = entry(15, &before);

        let comparison = compare(&previous, &current);

        assert_eq!(comparison.previous_total, 48.8);
        assert_eq!(comparison.current_total, 52.1);
        assert_eq!(comparison.total_delta, 3.3);
        assert_eq!(comparison.category_deltas[&Category::Cashflow], 1.9);
        assert_eq!(comparison.category_deltas[&Category::Tenancy], 0.0);
        assert_eq!(comparison.previous_status, BloomStatus::LateBloom);
        assert_eq!(comparison.current_status, BloomStatus::Blooming);
        assert!(comparison.status_changed);
    }

    #[test]
    fn categories_missing_from_either_snapshot_are_skipped() {
        let previous = entry(1, &[(Category::Location, 5.0)]);
        let current = entry(2, &[(Category::Location, 5.5), (Category::Liquidity, 6.0)]);

        let comparison = compare(&previous, &current);
        assert_eq!(comparison.category_deltas.len(), 1);
        assert_eq!(comparison.category_deltas[&Category::Location], 0.5);
        assert!(!comparison.status_changed);
    }
}
