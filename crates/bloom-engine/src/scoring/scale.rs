//! Conversions from raw measurements onto the bounded 1-8 petal scale.
//!
//! Scores are piecewise linear through the benchmark: `low` lands on 1,
//! `mid` on 5 and `high` on 8. Everything leaving this module passes through
//! [`normalize_score`], so callers never see a value outside `[1, 8]`.

use super::domain::{Benchmark, MeasurementType, RawValue, SubCriterionDefinition};
use serde::Serialize;

pub const MIN_SCORE: f64 = 1.0;
pub const MID_SCORE: f64 = 5.0;
pub const MAX_SCORE: f64 = 8.0;

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Maps a raw value onto the 1-8 scale using a three-point benchmark.
///
/// The result is not rounded; pass it through [`normalize_score`] before
/// presenting it.
pub fn score_from_raw(raw_value: f64, benchmark: &Benchmark, invert_scale: bool) -> f64 {
    let Benchmark { low, mid, high } = *benchmark;

    if invert_scale {
        if raw_value >= low {
            return MIN_SCORE;
        }
        if raw_value <= high {
            return MAX_SCORE;
        }
        if raw_value <= mid {
            MID_SCORE + ((mid - raw_value) / (mid - high)) * 3.0
        } else {
            MIN_SCORE + ((low - raw_value) / (low - mid)) * 4.0
        }
    } else {
        if raw_value <= low {
            return MIN_SCORE;
        }
        if raw_value >= high {
            return MAX_SCORE;
        }
        if raw_value >= mid {
            MID_SCORE + ((raw_value - mid) / (high - mid)) * 3.0
        } else {
            MIN_SCORE + ((raw_value - low) / (mid - low)) * 4.0
        }
    }
}

/// Clamps to `[1, 8]` and rounds to one decimal. Non-finite input collapses
/// to the midpoint.
pub fn normalize_score(score: f64) -> f64 {
    if !score.is_finite() {
        return MID_SCORE;
    }
    round_to_tenth(score.clamp(MIN_SCORE, MAX_SCORE))
}

/// Scores one sub-criterion, defaulting to the midpoint when the value is
/// absent or cannot be interpreted for the definition's measurement type.
pub fn score_sub_criterion(definition: &SubCriterionDefinition, raw: Option<RawValue>) -> f64 {
    let score = match (definition.measurement_type, raw) {
        (_, None) => MID_SCORE,
        (MeasurementType::Boolean, Some(RawValue::Boolean(flag))) => boolean_score(flag),
        (MeasurementType::Boolean, Some(RawValue::Numeric(value))) => {
            if value.is_nan() {
                MID_SCORE
            } else {
                boolean_score(value != 0.0)
            }
        }
        (_, Some(RawValue::Numeric(value))) if value.is_nan() => MID_SCORE,
        (_, Some(RawValue::Numeric(value))) => {
            score_from_raw(value, &definition.benchmark, definition.invert_scale)
        }
        (_, Some(RawValue::Boolean(_))) => MID_SCORE,
    };

    normalize_score(score)
}

const fn boolean_score(flag: bool) -> f64 {
    if flag {
        MAX_SCORE
    } else {
        MIN_SCORE
    }
}

/// Human reading of a score bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreInterpretation {
    pub bucket: u8,
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

const INTERPRETATIONS: [ScoreInterpretation; 8] = [
    ScoreInterpretation {
        bucket: 1,
        label: "Critical",
        color: "#dc2626",
        description: "Severe issues requiring immediate attention",
    },
    ScoreInterpretation {
        bucket: 2,
        label: "Poor",
        color: "#ea580c",
        description: "Significant concerns that need addressing",
    },
    ScoreInterpretation {
        bucket: 3,
        label: "Below Average",
        color: "#f59e0b",
        description: "Notable weaknesses present",
    },
    ScoreInterpretation {
        bucket: 4,
        label: "Fair",
        color: "#eab308",
        description: "Acceptable but room for improvement",
    },
    ScoreInterpretation {
        bucket: 5,
        label: "Average",
        color: "#84cc16",
        description: "Meets basic expectations",
    },
    ScoreInterpretation {
        bucket: 6,
        label: "Good",
        color: "#22c55e",
        description: "Above average performance",
    },
    ScoreInterpretation {
        bucket: 7,
        label: "Very Good",
        color: "#10b981",
        description: "Strong performance in this area",
    },
    ScoreInterpretation {
        bucket: 8,
        label: "Excellent",
        color: "#059669",
        description: "Exceptional - top tier",
    },
];

pub fn interpret(score: f64) -> ScoreInterpretation {
    let rounded = if score.is_finite() {
        score.round().clamp(MIN_SCORE, MAX_SCORE)
    } else {
        MID_SCORE
    };
    INTERPRETATIONS[rounded as usize - 1]
}

pub fn score_10_to_8(score: f64) -> f64 {
    round_to_tenth(score / 10.0 * 8.0)
}

pub fn score_8_to_10(score: f64) -> f64 {
    round_to_tenth(score / 8.0 * 10.0)
}

pub fn total_64_to_100(total: f64) -> f64 {
    (total / 64.0 * 100.0).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAP_RATE: Benchmark = Benchmark::new(4.0, 6.0, 9.0);
    const EXPENSE_RATIO: Benchmark = Benchmark::new(55.0, 45.0, 35.0);

    #[test]
    fn benchmark_points_land_exactly() {
        assert_eq!(score_from_raw(4.0, &CAP_RATE, false), 1.0);
        assert_eq!(score_from_raw(6.0, &CAP_RATE, false), 5.0);
        assert_eq!(score_from_raw(9.0, &CAP_RATE, false), 8.0);

        assert_eq!(score_from_raw(55.0, &EXPENSE_RATIO, true), 1.0);
        assert_eq!(score_from_raw(45.0, &EXPENSE_RATIO, true), 5.0);
        assert_eq!(score_from_raw(35.0, &EXPENSE_RATIO, true), 8.0);
    }

    #[test]
    fn interpolates_within_segments() {
        assert_eq!(score_from_raw(5.0, &CAP_RATE, false), 3.0);
        assert_eq!(score_from_raw(7.5, &CAP_RATE, false), 6.5);
        assert_eq!(score_from_raw(50.0, &EXPENSE_RATIO, true), 3.0);
        assert_eq!(score_from_raw(40.0, &EXPENSE_RATIO, true), 6.5);
    }

    #[test]
    fn normal_scale_is_monotonic_and_inverted_scale_is_antitonic() {
        let mut previous_normal = f64::MIN;
        let mut previous_inverted = f64::MAX;
        for step in 0..=800 {
            let raw = step as f64 / 10.0;
            let normal = normalize_score(score_from_raw(raw, &CAP_RATE, false));
            let inverted = normalize_score(score_from_raw(raw, &EXPENSE_RATIO, true));
            assert!(normal >= previous_normal, "normal scale dropped at {raw}");
            assert!(inverted <= previous_inverted, "inverted scale rose at {raw}");
            previous_normal = normal;
            previous_inverted = inverted;
        }
    }

    #[test]
    fn normalize_clamps_rounds_and_absorbs_nan() {
        assert_eq!(normalize_score(9.7), 8.0);
        assert_eq!(normalize_score(-3.0), 1.0);
        assert_eq!(normalize_score(6.44), 6.4);
        assert_eq!(normalize_score(f64::NAN), MID_SCORE);
        assert_eq!(normalize_score(f64::INFINITY), MID_SCORE);
    }

    #[test]
    fn malformed_benchmarks_stay_bounded() {
        let reversed = Benchmark::new(9.0, 6.0, 4.0);
        for raw in [-100.0, 0.0, 5.0, 7.0, 100.0, f64::INFINITY, f64::NEG_INFINITY] {
            let score = normalize_score(score_from_raw(raw, &reversed, false));
            assert!((MIN_SCORE..=MAX_SCORE).contains(&score), "{raw} -> {score}");
        }
    }

    #[test]
    fn interpretation_buckets_cover_the_scale() {
        assert_eq!(interpret(0.2).label, "Critical");
        assert_eq!(interpret(4.6).label, "Average");
        assert_eq!(interpret(7.5).label, "Excellent");
        assert_eq!(interpret(f64::NAN).bucket, 5);
    }

    #[test]
    fn scale_conversions_round_like_reports() {
        assert_eq!(score_10_to_8(7.0), 5.6);
        assert_eq!(score_8_to_10(6.0), 7.5);
        assert_eq!(total_64_to_100(50.0), 78.0);
    }
}
