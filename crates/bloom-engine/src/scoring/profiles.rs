use super::catalog::{CatalogError, WEIGHT_TOLERANCE};
use super::category::CategoryValue;
use super::domain::Category;
use super::scale::{round_to_tenth, MAX_SCORE};
use super::ScoringError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Weight applied to a category the profile does not mention.
pub const DEFAULT_CATEGORY_WEIGHT: f64 = 0.125;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileId {
    #[default]
    Equal,
    IncomeFocus,
    GrowthFocus,
    ValueAdd,
    Conservative,
    Custom,
}

impl ProfileId {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Equal,
            Self::IncomeFocus,
            Self::GrowthFocus,
            Self::ValueAdd,
            Self::Conservative,
            Self::Custom,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::IncomeFocus => "income-focus",
            Self::GrowthFocus => "growth-focus",
            Self::ValueAdd => "value-add",
            Self::Conservative => "conservative",
            Self::Custom => "custom",
        }
    }

    /// Lenient lookup used on scoring paths: unknown ids select `equal`.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileId {
    type Err = ScoringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|id| id.as_str() == needle)
            .ok_or_else(|| ScoringError::UnknownProfile(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("weight for {category} must be a finite, non-negative number (got {weight})")]
    InvalidWeight { category: Category, weight: f64 },
    #[error("custom weights must include at least one positive weight")]
    ZeroTotal,
}

/// A named set of cross-category weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightingProfile {
    pub id: ProfileId,
    pub name: String,
    pub description: String,
    pub weights: BTreeMap<Category, f64>,
}

impl WeightingProfile {
    fn shipped(id: ProfileId, name: &str, description: &str, weights: [f64; 8]) -> Self {
        // cashflow, appreciation, financing, location, condition, tenancy, liquidity, compliance
        let order = [
            Category::Cashflow,
            Category::Appreciation,
            Category::Financing,
            Category::Location,
            Category::Condition,
            Category::Tenancy,
            Category::Liquidity,
            Category::Compliance,
        ];
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            weights: order.into_iter().zip(weights).collect(),
        }
    }

    /// Validates caller-supplied weights. The weights need not sum to 1.0;
    /// [`weighted_overall`] divides by the actual sum.
    pub fn custom(weights: BTreeMap<Category, f64>) -> Result<Self, ProfileError> {
        for (category, weight) in &weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ProfileError::InvalidWeight {
                    category: *category,
                    weight: *weight,
                });
            }
        }

        let profile = Self {
            id: ProfileId::Custom,
            name: "Custom".to_string(),
            description: "Caller-supplied weighting".to_string(),
            weights,
        };
        // Categories left out still carry the default weight.
        if profile.weight_sum() <= 0.0 {
            return Err(ProfileError::ZeroTotal);
        }

        Ok(profile)
    }

    pub fn weight(&self, category: Category) -> f64 {
        self.weights
            .get(&category)
            .copied()
            .unwrap_or(DEFAULT_CATEGORY_WEIGHT)
    }

    pub fn weight_sum(&self) -> f64 {
        Category::ordered()
            .into_iter()
            .map(|category| self.weight(category))
            .sum()
    }
}

/// The shipped profiles, with `equal` first as the fallback.
#[derive(Debug, Clone)]
pub struct WeightingRegistry {
    profiles: Vec<WeightingProfile>,
}

impl WeightingRegistry {
    pub fn standard() -> Self {
        let profiles = vec![
            WeightingProfile::shipped(
                ProfileId::Equal,
                "Equal Weight",
                "All petals weighted equally at 12.5% each",
                [0.125; 8],
            ),
            WeightingProfile::shipped(
                ProfileId::IncomeFocus,
                "Income Focus",
                "Prioritizes cash flow and tenancy for passive income",
                [0.25, 0.08, 0.12, 0.1, 0.1, 0.2, 0.08, 0.07],
            ),
            WeightingProfile::shipped(
                ProfileId::GrowthFocus,
                "Growth Focus",
                "Emphasizes appreciation and location for long-term gains",
                [0.08, 0.25, 0.1, 0.22, 0.1, 0.08, 0.1, 0.07],
            ),
            WeightingProfile::shipped(
                ProfileId::ValueAdd,
                "Value-Add",
                "Focuses on condition and location for renovation opportunities",
                [0.1, 0.15, 0.12, 0.18, 0.2, 0.08, 0.1, 0.07],
            ),
            WeightingProfile::shipped(
                ProfileId::Conservative,
                "Conservative",
                "Balanced approach with emphasis on stability and compliance",
                [0.15, 0.1, 0.12, 0.15, 0.12, 0.12, 0.12, 0.12],
            ),
            WeightingProfile::shipped(
                ProfileId::Custom,
                "Custom",
                "Create your own weighting profile",
                [0.125; 8],
            ),
        ];
        Self { profiles }
    }

    pub fn profiles(&self) -> &[WeightingProfile] {
        &self.profiles
    }

    /// Never fails: an id missing from the registry resolves to the first profile.
    pub fn get(&self, id: ProfileId) -> &WeightingProfile {
        self.profiles
            .iter()
            .find(|profile| profile.id == id)
            .unwrap_or(&self.profiles[0])
    }

    pub fn lookup(&self, id: &str) -> &WeightingProfile {
        self.get(ProfileId::parse_or_default(id))
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        for profile in &self.profiles {
            let sum = profile.weight_sum();
            if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
                return Err(CatalogError::ProfileWeightSum {
                    profile: profile.id.to_string(),
                    sum,
                });
            }
        }
        Ok(())
    }
}

impl Default for WeightingRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Unweighted sum of category scores, rounded to one decimal.
pub fn total_score<T: CategoryValue>(scores: &[T]) -> f64 {
    round_to_tenth(scores.iter().map(CategoryValue::value).sum())
}

/// Profile-weighted average on a 0-100 scale.
///
/// Divides by the weights actually applied, so a profile whose weights do not
/// sum to 1.0 still lands in range. Weights are taken relative to the largest
/// one so very large custom weights cannot overflow the sums.
pub fn weighted_overall<T: CategoryValue>(scores: &[T], profile: &WeightingProfile) -> f64 {
    let largest = scores
        .iter()
        .map(|entry| profile.weight(entry.category()))
        .fold(0.0, f64::max);
    if largest <= 0.0 || !largest.is_finite() {
        return 0.0;
    }

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for entry in scores {
        let weight = profile.weight(entry.category()) / largest;
        weighted_sum += entry.value() * weight;
        total_weight += weight;
    }

    if total_weight <= 0.0 || !weighted_sum.is_finite() {
        return 0.0;
    }

    let normalized = (weighted_sum / total_weight / MAX_SCORE * 100.0).clamp(0.0, 100.0);
    round_to_tenth(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(score: f64) -> Vec<(Category, f64)> {
        Category::ordered()
            .into_iter()
            .map(|category| (category, score))
            .collect()
    }

    #[test]
    fn shipped_profiles_sum_to_one() {
        let registry = WeightingRegistry::standard();
        registry.validate().expect("shipped profiles are normalized");
        assert_eq!(registry.profiles().len(), 6);
        for profile in registry.profiles() {
            assert!((profile.weight_sum() - 1.0).abs() <= WEIGHT_TOLERANCE);
        }
    }

    #[test]
    fn unknown_profile_ids_fall_back_to_equal() {
        let registry = WeightingRegistry::standard();
        assert_eq!(registry.lookup("yield-max").id, ProfileId::Equal);
        assert_eq!(registry.lookup("Income-Focus").id, ProfileId::IncomeFocus);
        assert!(matches!(
            "yield-max".parse::<ProfileId>(),
            Err(ScoringError::UnknownProfile(_))
        ));
    }

    #[test]
    fn total_is_an_unweighted_sum() {
        assert_eq!(total_score(&uniform(8.0)), 64.0);
        assert_eq!(total_score(&uniform(1.0)), 8.0);
        assert_eq!(total_score(&uniform(6.3)), 50.4);
    }

    #[test]
    fn weighted_overall_spans_zero_to_one_hundred() {
        let registry = WeightingRegistry::standard();
        let income = registry.get(ProfileId::IncomeFocus);
        assert_eq!(weighted_overall(&uniform(8.0), income), 100.0);
        assert_eq!(weighted_overall(&uniform(4.0), income), 50.0);

        let mut skewed = uniform(4.0);
        skewed[4].1 = 8.0; // cashflow carries 25% under income focus
        assert_eq!(weighted_overall(&skewed, income), 62.5);
    }

    #[test]
    fn partial_weights_are_normalized_by_their_actual_sum() {
        let weights = Category::ordered()
            .into_iter()
            .map(|category| (category, 0.0625))
            .collect();
        let profile = WeightingProfile::custom(weights).expect("valid weights");
        assert!((profile.weight_sum() - 0.5).abs() < 1e-12);

        assert_eq!(weighted_overall(&uniform(6.0), &profile), 75.0);
    }

    #[test]
    fn custom_weights_reject_negative_and_all_zero_sets() {
        let negative = BTreeMap::from([(Category::Cashflow, -0.2)]);
        assert!(matches!(
            WeightingProfile::custom(negative),
            Err(ProfileError::InvalidWeight { .. })
        ));

        let zeros = Category::ordered()
            .into_iter()
            .map(|category| (category, 0.0))
            .collect();
        assert_eq!(WeightingProfile::custom(zeros), Err(ProfileError::ZeroTotal));
    }

    #[test]
    fn zero_weight_on_some_categories_still_scores() {
        let profile = WeightingProfile::custom(BTreeMap::from([(Category::Cashflow, 0.0)]))
            .expect("remaining categories keep the default weight");
        assert!((profile.weight_sum() - 0.875).abs() < 1e-12);

        let mut scores = uniform(6.0);
        scores[4].1 = 1.0; // cashflow is ignored
        assert_eq!(weighted_overall(&scores, &profile), 75.0);
    }

    #[test]
    fn huge_custom_weights_are_normalized_not_zeroed() {
        let weights = Category::ordered()
            .into_iter()
            .map(|category| (category, 1e308))
            .collect();
        let profile = WeightingProfile::custom(weights).expect("finite weights");

        let scores: Vec<(Category, f64)> = Category::ordered()
            .into_iter()
            .zip([8.0, 6.0, 4.0, 2.0, 8.0, 6.0, 4.0, 2.0])
            .collect();
        let equal = WeightingRegistry::standard();
        assert_eq!(weighted_overall(&scores, &profile), 62.5);
        assert_eq!(weighted_overall(&scores, equal.get(ProfileId::Equal)), 62.5);
    }

    #[test]
    fn missing_categories_take_the_default_weight() {
        let profile = WeightingProfile::custom(BTreeMap::from([(Category::Cashflow, 0.5)]))
            .expect("valid weights");
        assert_eq!(profile.weight(Category::Location), DEFAULT_CATEGORY_WEIGHT);
        assert!(weighted_overall(&uniform(3.0), &profile) > 0.0);
    }
}
