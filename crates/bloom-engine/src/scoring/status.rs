//! Threshold classification of totals and percentages.
//!
//! The 0-64 bloom status and the 0-100 bloom rating are kept as two separate
//! tables. They do not agree on rescaled boundaries (a total of 50 is
//! `blooming`, while 78% rates `BLOOMING` under a different cutoff) and must
//! not be derived from one another.

use super::catalog::CatalogError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BloomStatus {
    FullyBloomed,
    NearBloom,
    Blooming,
    LateBloom,
    Budding,
}

/// Minimum total per tier, highest first.
const STATUS_THRESHOLDS: [(f64, BloomStatus); 5] = [
    (64.0, BloomStatus::FullyBloomed),
    (60.0, BloomStatus::NearBloom),
    (50.0, BloomStatus::Blooming),
    (40.0, BloomStatus::LateBloom),
    (0.0, BloomStatus::Budding),
];

impl BloomStatus {
    /// Classifies a 0-64 total. The first threshold met wins; anything below
    /// every threshold, NaN included, is `budding`.
    pub fn classify(total: f64) -> Self {
        STATUS_THRESHOLDS
            .iter()
            .find(|(threshold, _)| total >= *threshold)
            .map(|(_, status)| *status)
            .unwrap_or(BloomStatus::Budding)
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::FullyBloomed => "fully-bloomed",
            Self::NearBloom => "near-bloom",
            Self::Blooming => "blooming",
            Self::LateBloom => "late-bloom",
            Self::Budding => "budding",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullyBloomed => "Fully Bloomed",
            Self::NearBloom => "Near Bloom",
            Self::Blooming => "Blooming",
            Self::LateBloom => "Late Bloom",
            Self::Budding => "Budding",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::FullyBloomed => "🌸",
            Self::NearBloom => "🌷",
            Self::Blooming => "🌻",
            Self::LateBloom => "🌱",
            Self::Budding => "🌿",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::FullyBloomed => "#15803d",
            Self::NearBloom => "#22c55e",
            Self::Blooming => "#CFA874",
            Self::LateBloom => "#f59e0b",
            Self::Budding => "#f97316",
        }
    }

    pub const fn min_total(self) -> f64 {
        match self {
            Self::FullyBloomed => 64.0,
            Self::NearBloom => 60.0,
            Self::Blooming => 50.0,
            Self::LateBloom => 40.0,
            Self::Budding => 0.0,
        }
    }

    /// Grade persisted alongside uploaded properties.
    pub const fn legacy_grade(self) -> &'static str {
        match self {
            Self::FullyBloomed => "A+",
            Self::NearBloom => "A",
            Self::Blooming => "B+",
            Self::LateBloom => "B",
            Self::Budding => "C",
        }
    }

    pub fn info(self) -> StatusInfo {
        StatusInfo {
            status: self,
            label: self.label(),
            emoji: self.emoji(),
            color: self.color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusInfo {
    pub status: BloomStatus,
    pub label: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
}

/// Tier for scores already normalized to 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloomRating {
    FullyBloomed,
    Blooming,
    Budding,
    Sprouting,
    Wilting,
}

const RATING_THRESHOLDS: [(f64, BloomRating); 5] = [
    (90.0, BloomRating::FullyBloomed),
    (75.0, BloomRating::Blooming),
    (60.0, BloomRating::Budding),
    (40.0, BloomRating::Sprouting),
    (0.0, BloomRating::Wilting),
];

impl BloomRating {
    pub fn classify(percentage: f64) -> Self {
        RATING_THRESHOLDS
            .iter()
            .find(|(threshold, _)| percentage >= *threshold)
            .map(|(_, rating)| *rating)
            .unwrap_or(BloomRating::Wilting)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullyBloomed => "FULLY BLOOMED",
            Self::Blooming => "BLOOMING",
            Self::Budding => "BUDDING",
            Self::Sprouting => "SPROUTING",
            Self::Wilting => "WILTING",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::FullyBloomed => "🌸",
            Self::Blooming => "🌷",
            Self::Budding => "🌱",
            Self::Sprouting => "🌿",
            Self::Wilting => "🥀",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::FullyBloomed => "#B8860B",
            Self::Blooming => "#CFA874",
            Self::Budding => "#E8DCC4",
            Self::Sprouting => "#86efac",
            Self::Wilting => "#22c55e",
        }
    }

    pub const fn min_score(self) -> f64 {
        match self {
            Self::FullyBloomed => 90.0,
            Self::Blooming => 75.0,
            Self::Budding => 60.0,
            Self::Sprouting => 40.0,
            Self::Wilting => 0.0,
        }
    }
}

const GRADE_THRESHOLDS: [(f64, &str); 12] = [
    (97.0, "A+"),
    (93.0, "A"),
    (90.0, "A-"),
    (87.0, "B+"),
    (83.0, "B"),
    (80.0, "B-"),
    (77.0, "C+"),
    (73.0, "C"),
    (70.0, "C-"),
    (67.0, "D+"),
    (63.0, "D"),
    (60.0, "D-"),
];

/// Letter grade for a 0-64 total, read off its percentage.
pub fn letter_grade(total: f64) -> &'static str {
    let percentage = total / 64.0 * 100.0;
    GRADE_THRESHOLDS
        .iter()
        .find(|(threshold, _)| percentage >= *threshold)
        .map(|(_, grade)| *grade)
        .unwrap_or("F")
}

fn descends_to_zero<T>(table: &[(f64, T)]) -> bool {
    table.windows(2).all(|pair| pair[0].0 > pair[1].0)
        && table.last().map(|(threshold, _)| *threshold == 0.0) == Some(true)
}

/// Confirms both classifier tables are exhaustive.
pub fn validate_tables() -> Result<(), CatalogError> {
    if !descends_to_zero(&STATUS_THRESHOLDS) {
        return Err(CatalogError::ClassifierTable("bloom status"));
    }
    if !descends_to_zero(&RATING_THRESHOLDS) {
        return Err(CatalogError::ClassifierTable("bloom rating"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_exhaustive() {
        validate_tables().expect("classifier tables descend to zero");
        for (threshold, status) in STATUS_THRESHOLDS {
            assert_eq!(status.min_total(), threshold);
        }
        for (threshold, rating) in RATING_THRESHOLDS {
            assert_eq!(rating.min_score(), threshold);
        }
    }

    #[test]
    fn classifies_totals_from_the_top_down() {
        assert_eq!(BloomStatus::classify(64.0), BloomStatus::FullyBloomed);
        assert_eq!(BloomStatus::classify(60.0), BloomStatus::NearBloom);
        assert_eq!(BloomStatus::classify(59.9), BloomStatus::Blooming);
        assert_eq!(BloomStatus::classify(40.0), BloomStatus::LateBloom);
        assert_eq!(BloomStatus::classify(0.0), BloomStatus::Budding);
        assert_eq!(BloomStatus::classify(-4.0), BloomStatus::Budding);
        assert_eq!(BloomStatus::classify(f64::NAN), BloomStatus::Budding);
    }

    #[test]
    fn every_total_and_percentage_has_a_tier() {
        for step in 0..=640 {
            let total = step as f64 / 10.0;
            let status = BloomStatus::classify(total);
            assert!(total >= status.min_total());
        }
        for step in 0..=1000 {
            let percentage = step as f64 / 10.0;
            let rating = BloomRating::classify(percentage);
            assert!(percentage >= rating.min_score());
        }
        assert_eq!(BloomRating::classify(0.0), BloomRating::Wilting);
    }

    #[test]
    fn percentage_table_is_independent_of_total_table() {
        // 50/64 is ~78%: blooming on both tables, but 48/64 (75%) is only
        // late-bloom as a total while it already rates BLOOMING as a percentage.
        assert_eq!(BloomStatus::classify(48.0), BloomStatus::LateBloom);
        assert_eq!(BloomRating::classify(75.0), BloomRating::Blooming);
        assert_eq!(BloomRating::classify(89.9).label(), "BLOOMING");
    }

    #[test]
    fn grades_follow_percentage_cutoffs() {
        assert_eq!(letter_grade(64.0), "A+");
        assert_eq!(letter_grade(59.6), "A");
        assert_eq!(letter_grade(50.0), "C+");
        assert_eq!(letter_grade(20.0), "F");
        assert_eq!(BloomStatus::Blooming.legacy_grade(), "B+");
    }
}
