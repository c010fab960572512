//! Conversion from the legacy ten-axis radar (0-10 per axis) to petal scores.

use super::domain::Category;
use super::scale::{score_10_to_8, MID_SCORE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadarAxis {
    Market,
    RentGrowth,
    CashOnCash,
    Irr,
    ValueAdd,
    Scale,
    Dscr,
    Location,
    ExitCap,
    Resilience,
}

impl RadarAxis {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::Market,
            Self::RentGrowth,
            Self::CashOnCash,
            Self::Irr,
            Self::ValueAdd,
            Self::Scale,
            Self::Dscr,
            Self::Location,
            Self::ExitCap,
            Self::Resilience,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Market => "Market",
            Self::RentGrowth => "Rent Growth",
            Self::CashOnCash => "CoC",
            Self::Irr => "IRR",
            Self::ValueAdd => "Value-Add",
            Self::Scale => "Scale",
            Self::Dscr => "DSCR",
            Self::Location => "Location",
            Self::ExitCap => "Exit Cap",
            Self::Resilience => "Resilience",
        }
    }

    pub const fn category(self) -> Category {
        match self {
            Self::Market | Self::Location => Category::Location,
            Self::RentGrowth | Self::ExitCap => Category::Appreciation,
            Self::CashOnCash | Self::Irr => Category::Cashflow,
            Self::ValueAdd => Category::Condition,
            Self::Scale => Category::Tenancy,
            Self::Dscr => Category::Financing,
            Self::Resilience => Category::Compliance,
        }
    }
}

/// Averages each category's axes and rescales to 0-8. Axes beyond the slice
/// count as 0; liquidity has no axis and defaults to the midpoint.
pub fn radar_to_category_scores(axis_scores: &[f64]) -> BTreeMap<Category, f64> {
    let mut sums: BTreeMap<Category, (f64, usize)> = BTreeMap::new();
    for (index, axis) in RadarAxis::ordered().into_iter().enumerate() {
        let score = axis_scores.get(index).copied().unwrap_or(0.0);
        let entry = sums.entry(axis.category()).or_insert((0.0, 0));
        entry.0 += score;
        entry.1 += 1;
    }

    let mut result: BTreeMap<Category, f64> = Category::ordered()
        .into_iter()
        .map(|category| {
            let average = match sums.get(&category) {
                Some((sum, count)) if *count > 0 => sum / *count as f64,
                _ => 0.0,
            };
            (category, score_10_to_8(average))
        })
        .collect();

    if result.get(&Category::Liquidity) == Some(&0.0) {
        result.insert(Category::Liquidity, MID_SCORE);
    }

    result
}
