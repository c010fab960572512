use super::category::CategoryValue;
use super::domain::Dimension;
use serde::{Deserialize, Serialize};

/// Mean category score per dimension; a dimension with no categories is 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DimensionScores {
    pub returns: f64,
    pub asset: f64,
    pub risk: f64,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Returns => self.returns,
            Dimension::Asset => self.asset,
            Dimension::Risk => self.risk,
        }
    }
}

pub fn dimension_scores<T: CategoryValue>(scores: &[T]) -> DimensionScores {
    let mean = |dimension: Dimension| {
        let (sum, count) = scores
            .iter()
            .filter(|entry| entry.category().dimension() == dimension)
            .fold((0.0, 0usize), |(sum, count), entry| {
                (sum + entry.value(), count + 1)
            });
        if count == 0 {
            0.0
        } else {
            sum / count as f64
        }
    };

    DimensionScores {
        returns: mean(Dimension::Returns),
        asset: mean(Dimension::Asset),
        risk: mean(Dimension::Risk),
    }
}
