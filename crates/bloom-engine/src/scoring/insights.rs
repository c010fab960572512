use super::category::{CategoryAssessment, CategoryValue};
use super::domain::{Category, Trend};
use serde::{Deserialize, Serialize};

const STRENGTH_FLOOR: f64 = 7.0;
const WEAKNESS_CEILING: f64 = 4.0;
const LOW_CONFIDENCE: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Strength,
    Weakness,
    Opportunity,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub category: Category,
    pub title: String,
    pub message: String,
    /// 1-5, higher is more important.
    pub priority: u8,
}

/// Derives observations from scored categories, most important first.
///
/// Each category contributes independently; ties keep category order.
pub fn generate_insights(assessments: &[CategoryAssessment]) -> Vec<Insight> {
    let mut insights = Vec::new();

    for assessment in assessments {
        let category = assessment.category();
        let label = assessment.label.as_str();
        let score = assessment.value();

        if score >= STRENGTH_FLOOR {
            insights.push(Insight {
                kind: InsightKind::Strength,
                category,
                title: format!("Strong {label}"),
                message: format!("{label} scores {score:.1}/8 - a key strength of this property."),
                priority: 4,
            });
        }

        if score < WEAKNESS_CEILING {
            insights.push(Insight {
                kind: InsightKind::Weakness,
                category,
                title: format!("Weak {label}"),
                message: format!(
                    "{label} scores only {score:.1}/8 - consider carefully before investing."
                ),
                priority: 5,
            });
        }

        if assessment.trend == Trend::Up && (WEAKNESS_CEILING..STRENGTH_FLOOR).contains(&score) {
            insights.push(Insight {
                kind: InsightKind::Opportunity,
                category,
                title: format!("{label} Improving"),
                message: format!(
                    "{label} shows upward trend at {score:.1}/8 - potential for growth."
                ),
                priority: 3,
            });
        }

        if assessment.trend == Trend::Down {
            insights.push(Insight {
                kind: InsightKind::Warning,
                category,
                title: format!("{label} Declining"),
                message: format!("{label} shows downward trend - monitor closely."),
                priority: 4,
            });
        }

        if assessment.confidence < LOW_CONFIDENCE {
            insights.push(Insight {
                kind: InsightKind::Warning,
                category,
                title: format!("Low Confidence: {label}"),
                message: format!(
                    "Only {:.0}% confidence in {label} data - verify before deciding.",
                    (assessment.confidence * 100.0).round()
                ),
                priority: 2,
            });
        }
    }

    insights.sort_by(|a, b| b.priority.cmp(&a.priority));
    insights
}
