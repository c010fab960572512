use crate::scoring::profiles::WeightingProfile;
use crate::scoring::scorecard::{PropertyMetrics, PropertyScorer, Scorecard};
use crate::scoring::status::BloomStatus;
use serde::{Deserialize, Serialize};

/// Default floor for the deal hunt: the bottom of the `blooming` tier.
pub const DEFAULT_MIN_TOTAL: f64 = 50.0;

/// A listing surfaced by a market search, with whatever metrics it came with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealCandidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub units: Option<u32>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub metrics: PropertyMetrics,
}

/// Filters applied before and after scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HuntCriteria {
    #[serde(default = "default_min_total")]
    pub min_total: f64,
    #[serde(default)]
    pub min_units: Option<u32>,
    #[serde(default)]
    pub max_price: Option<f64>,
}

fn default_min_total() -> f64 {
    DEFAULT_MIN_TOTAL
}

impl Default for HuntCriteria {
    fn default() -> Self {
        Self {
            min_total: DEFAULT_MIN_TOTAL,
            min_units: None,
            max_price: None,
        }
    }
}

impl HuntCriteria {
    pub fn with_min_total(min_total: f64) -> Self {
        Self {
            min_total,
            ..Self::default()
        }
    }

    /// Listings with unknown units or price are not excluded by those filters.
    fn admits(&self, candidate: &DealCandidate) -> bool {
        let units_ok = match (self.min_units, candidate.units) {
            (Some(min), Some(units)) => units >= min,
            _ => true,
        };
        let price_ok = match (self.max_price, candidate.price) {
            (Some(max), Some(price)) => price <= max,
            _ => true,
        };
        units_ok && price_ok
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDeal {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub units: Option<u32>,
    pub price: Option<f64>,
    pub scorecard: Scorecard,
}

impl ScoredDeal {
    pub fn total_score(&self) -> f64 {
        self.scorecard.total_score
    }

    pub fn status(&self) -> BloomStatus {
        self.scorecard.status.status
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HuntReport {
    pub scanned: usize,
    pub min_total: f64,
    pub deals: Vec<ScoredDeal>,
}

/// Scores every admitted candidate and keeps those at or above the floor,
/// best total first. Equal totals keep their input order.
pub fn rank_deals(
    scorer: &PropertyScorer,
    candidates: &[DealCandidate],
    profile: &WeightingProfile,
    criteria: &HuntCriteria,
) -> HuntReport {
    let mut deals: Vec<ScoredDeal> = candidates
        .iter()
        .filter(|candidate| criteria.admits(candidate))
        .map(|candidate| ScoredDeal {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            address: candidate.address.clone(),
            units: candidate.units,
            price: candidate.price,
            scorecard: scorer.score(&candidate.metrics, profile),
        })
        .filter(|deal| deal.total_score() >= criteria.min_total)
        .collect();

    deals.sort_by(|a, b| b.total_score().total_cmp(&a.total_score()));

    HuntReport {
        scanned: candidates.len(),
        min_total: criteria.min_total,
        deals,
    }
}
