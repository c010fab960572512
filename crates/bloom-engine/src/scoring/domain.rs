use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ScoringError;

/// One of the eight petals a property is evaluated on.
///
/// Variants are declared in clockwise layout order starting at 12 o'clock, so
/// the derived `Ord` matches [`Category::ordered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Location,
    Tenancy,
    Compliance,
    Financing,
    Cashflow,
    Appreciation,
    Liquidity,
    Condition,
}

impl Category {
    pub const COUNT: usize = 8;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Location,
            Self::Tenancy,
            Self::Compliance,
            Self::Financing,
            Self::Cashflow,
            Self::Appreciation,
            Self::Liquidity,
            Self::Condition,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Tenancy => "tenancy",
            Self::Compliance => "compliance",
            Self::Financing => "financing",
            Self::Cashflow => "cashflow",
            Self::Appreciation => "appreciation",
            Self::Liquidity => "liquidity",
            Self::Condition => "condition",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Location => "Location",
            Self::Tenancy => "Tenancy",
            Self::Compliance => "Compliance",
            Self::Financing => "Financing",
            Self::Cashflow => "Cashflow",
            Self::Appreciation => "Appreciation",
            Self::Liquidity => "Liquidity",
            Self::Condition => "Condition",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Location => "Walkability, schools, safety, and amenities",
            Self::Tenancy => "Occupancy, tenant quality, and lease terms",
            Self::Compliance => "Permits, zoning, and regulatory requirements",
            Self::Financing => "Loan terms, DSCR, and refinancing options",
            Self::Cashflow => "Cap rate, CoC return, and revenue stability",
            Self::Appreciation => "Market trends, rent growth, and value appreciation",
            Self::Liquidity => "Days on market, buyer pool, and exit options",
            Self::Condition => "Structure, systems, and deferred maintenance",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Location => "📍",
            Self::Tenancy => "👥",
            Self::Compliance => "📋",
            Self::Financing => "🏦",
            Self::Cashflow => "💰",
            Self::Appreciation => "📈",
            Self::Liquidity => "💧",
            Self::Condition => "🔧",
        }
    }

    pub const fn dimension(self) -> Dimension {
        match self {
            Self::Cashflow | Self::Appreciation | Self::Financing => Dimension::Returns,
            Self::Location | Self::Condition | Self::Tenancy => Dimension::Asset,
            Self::Liquidity | Self::Compliance => Dimension::Risk,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = ScoringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|category| category.id() == needle)
            .ok_or_else(|| ScoringError::UnknownCategory(value.to_string()))
    }
}

/// Higher-level grouping of categories used for summary reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Returns,
    Asset,
    Risk,
}

impl Dimension {
    pub const fn ordered() -> [Self; 3] {
        [Self::Returns, Self::Asset, Self::Risk]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Returns => "Returns",
            Self::Asset => "Asset Quality",
            Self::Risk => "Risk Balance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

impl Trend {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "Improving",
            Self::Down => "Declining",
            Self::Stable => "Stable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementType {
    Percentage,
    Ratio,
    Years,
    Score,
    Boolean,
    Currency,
}

/// Raw-value reference points. `low` always maps to the worst score and
/// `high` to the best, whichever direction the underlying metric runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl Benchmark {
    pub const fn new(low: f64, mid: f64, high: f64) -> Self {
        Self { low, mid, high }
    }

    /// True when the three points strictly improve in the given direction.
    pub fn is_monotonic(&self, invert_scale: bool) -> bool {
        if invert_scale {
            self.low > self.mid && self.mid > self.high
        } else {
            self.low < self.mid && self.mid < self.high
        }
    }
}

/// A measured value as produced by extraction or manual entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Boolean(bool),
    Numeric(f64),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Boolean(value) => write!(f, "{value}"),
            RawValue::Numeric(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubCriterionDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub weight: f64,
    pub description: &'static str,
    pub measurement_type: MeasurementType,
    pub how_to_measure: &'static str,
    pub benchmark: Benchmark,
    pub invert_scale: bool,
}
