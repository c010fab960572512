mod standard;

use super::domain::{Category, Dimension, SubCriterionDefinition};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

pub(crate) const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Configuration invariant violated by a sub-criteria catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("category {0} has no sub-criteria")]
    EmptyCategory(Category),
    #[error("sub-criterion {id} has weight {weight} outside (0, 1]")]
    WeightOutOfRange { id: String, weight: f64 },
    #[error("weights for {category} sum to {sum:.6}, expected 1.0")]
    WeightSum { category: Category, sum: f64 },
    #[error("benchmark for {id} is not strictly monotonic in its improving direction")]
    NonMonotonicBenchmark { id: String },
    #[error("sub-criterion id {0} is defined more than once")]
    DuplicateId(String),
    #[error("weighting profile {profile} sums to {sum:.6}, expected 1.0")]
    ProfileWeightSum { profile: String, sum: f64 },
    #[error("classifier table {0} must descend strictly and end at threshold 0")]
    ClassifierTable(&'static str),
}

/// The sub-criteria every category is scored on.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: BTreeMap<Category, Vec<SubCriterionDefinition>>,
}

impl Catalog {
    pub fn standard() -> Self {
        let categories = Category::ordered()
            .into_iter()
            .map(|category| (category, standard::definitions(category).to_vec()))
            .collect();
        Self { categories }
    }

    /// Builds a catalog from explicit definitions, rejecting any set that
    /// breaks the weight or benchmark invariants.
    pub fn from_definitions(
        categories: BTreeMap<Category, Vec<SubCriterionDefinition>>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self { categories };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn definitions(&self, category: Category) -> &[SubCriterionDefinition] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn find(&self, id: &str) -> Option<(Category, &SubCriterionDefinition)> {
        self.categories.iter().find_map(|(category, definitions)| {
            definitions
                .iter()
                .find(|definition| definition.id == id)
                .map(|definition| (*category, definition))
        })
    }

    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();

        for category in Category::ordered() {
            let definitions = self.definitions(category);
            if definitions.is_empty() {
                return Err(CatalogError::EmptyCategory(category));
            }

            let mut sum = 0.0;
            for definition in definitions {
                if !(definition.weight > 0.0 && definition.weight <= 1.0) {
                    return Err(CatalogError::WeightOutOfRange {
                        id: definition.id.to_string(),
                        weight: definition.weight,
                    });
                }
                if !definition.benchmark.is_monotonic(definition.invert_scale) {
                    return Err(CatalogError::NonMonotonicBenchmark {
                        id: definition.id.to_string(),
                    });
                }
                if !seen.insert(definition.id) {
                    return Err(CatalogError::DuplicateId(definition.id.to_string()));
                }
                sum += definition.weight;
            }

            if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
                return Err(CatalogError::WeightSum { category, sum });
            }
        }

        Ok(())
    }

    pub fn view(&self) -> Vec<CategoryCatalogView<'_>> {
        Category::ordered()
            .into_iter()
            .map(|category| CategoryCatalogView {
                category,
                label: category.label(),
                description: category.description(),
                icon: category.icon(),
                dimension: category.dimension(),
                sub_criteria: self.definitions(category),
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCatalogView<'a> {
    pub category: Category,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub dimension: Dimension,
    pub sub_criteria: &'a [SubCriterionDefinition],
}
