use crate::scoring::catalog::Catalog;
use crate::scoring::domain::{MeasurementType, RawValue};
use crate::scoring::scorecard::PropertyMetrics;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum IntakeError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownMetric { row: u64, metric: String },
    InvalidValue { row: u64, metric: String, value: String },
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::Io(err) => write!(f, "failed to read metrics file: {}", err),
            IntakeError::Csv(err) => write!(f, "invalid metrics CSV data: {}", err),
            IntakeError::UnknownMetric { row, metric } => {
                write!(f, "row {}: unknown metric '{}'", row, metric)
            }
            IntakeError::InvalidValue { row, metric, value } => write!(
                f,
                "row {}: '{}' is not a valid value for metric '{}'",
                row, value, metric
            ),
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Io(err) => Some(err),
            IntakeError::Csv(err) => Some(err),
            IntakeError::UnknownMetric { .. } | IntakeError::InvalidValue { .. } => None,
        }
    }
}

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for IntakeError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct MetricRow {
    metric: String,
    #[serde(default)]
    value: String,
}

/// Reads a `metric,value` CSV of raw sub-criterion measurements.
///
/// Blank values are treated as missing and left for the midpoint default.
/// A metric listed twice keeps its last value.
pub struct MetricsImporter;

impl MetricsImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        catalog: &Catalog,
    ) -> Result<PropertyMetrics, IntakeError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, catalog)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        catalog: &Catalog,
    ) -> Result<PropertyMetrics, IntakeError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut metrics = PropertyMetrics::new();

        for record in csv_reader.records() {
            let record = record?;
            let row_number = record.position().map(|pos| pos.line()).unwrap_or_default();
            let row: MetricRow = record.deserialize(Some(&headers))?;

            let metric = row.metric.to_ascii_lowercase();
            let Some((_, definition)) = catalog.find(&metric) else {
                return Err(IntakeError::UnknownMetric {
                    row: row_number,
                    metric: row.metric,
                });
            };

            if row.value.is_empty() {
                debug!(metric = definition.id, "blank metric value, using midpoint default");
                continue;
            }

            let value = parse_value(definition.measurement_type, &row.value).ok_or_else(|| {
                IntakeError::InvalidValue {
                    row: row_number,
                    metric: metric.clone(),
                    value: row.value.clone(),
                }
            })?;

            if metrics.values.insert(metric, value).is_some() {
                debug!(metric = definition.id, row = row_number, "duplicate metric overrides earlier row");
            }
        }

        debug!(supplied = metrics.values.len(), "imported raw metrics");
        Ok(metrics)
    }
}

fn parse_value(measurement_type: MeasurementType, value: &str) -> Option<RawValue> {
    match measurement_type {
        MeasurementType::Boolean => parse_flag(value).map(RawValue::Boolean),
        _ => value
            .parse::<f64>()
            .ok()
            .filter(|number| number.is_finite())
            .map(RawValue::Numeric),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}
