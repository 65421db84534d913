// File: crates/plot-core/src/series.rs
// Summary: Keyed dataset types for bar, comparison, and density charts, plus host-side aggregation helpers.

use std::collections::HashMap;

use crate::error::ChartError;

/// The atomic unit of a bar chart: a labeled count.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

/// Ordered sequence of data points, keyed by label for joins.
/// Labels are unique within a series at any instant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSeries {
    points: Vec<DataPoint>,
}

impl DataSeries {
    /// Construct a series enforcing label uniqueness.
    pub fn try_new(points: Vec<DataPoint>) -> Result<Self, ChartError> {
        for (i, p) in points.iter().enumerate() {
            if points[..i].iter().any(|q| q.label == p.label) {
                return Err(ChartError::DuplicateLabel(p.label.clone()));
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }

    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Values rescaled to percentages of the series total. A zero total
    /// yields all zeros rather than NaN.
    pub fn as_percentages(&self) -> DataSeries {
        let total = self.total();
        let points = self
            .points
            .iter()
            .map(|p| DataPoint::new(p.label.clone(), if total > 0.0 { p.value / total * 100.0 } else { 0.0 }))
            .collect();
        DataSeries { points }
    }
}

/// Exactly two labeled counts representing a binary split.
#[derive(Clone, Debug, PartialEq)]
pub struct PairSeries {
    first: DataPoint,
    second: DataPoint,
}

impl PairSeries {
    /// Construct a pair enforcing distinct labels and non-negative values.
    pub fn try_new(first: DataPoint, second: DataPoint) -> Result<Self, ChartError> {
        if first.label == second.label {
            return Err(ChartError::PairLabelsNotDistinct);
        }
        if first.value < 0.0 || second.value < 0.0 {
            return Err(ChartError::NegativePairValue);
        }
        Ok(Self { first, second })
    }

    pub fn first(&self) -> &DataPoint {
        &self.first
    }

    pub fn second(&self) -> &DataPoint {
        &self.second
    }

    pub fn total(&self) -> f64 {
        self.first.value + self.second.value
    }

    fn rescaled(&self, unit: f64) -> PairSeries {
        let total = self.total();
        let scale = |v: f64| if total > 0.0 { v / total * unit } else { 0.0 };
        PairSeries {
            first: DataPoint::new(self.first.label.clone(), scale(self.first.value)),
            second: DataPoint::new(self.second.label.clone(), scale(self.second.value)),
        }
    }

    /// Fractions summing to 1.0, labels preserved.
    pub fn normalized(&self) -> PairSeries {
        self.rescaled(1.0)
    }

    /// Percentages summing to 100, labels preserved.
    pub fn as_percentages(&self) -> PairSeries {
        self.rescaled(100.0)
    }
}

/// Raw numeric observations for density estimation. Non-finite markers are
/// dropped at construction so the estimator never sees them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleVector {
    samples: Vec<f64>,
}

impl SampleVector {
    pub fn from_raw(raw: impl IntoIterator<Item = f64>) -> Self {
        Self { samples: raw.into_iter().filter(|v| v.is_finite()).collect() }
    }

    pub fn values(&self) -> &[f64] {
        &self.samples
    }

    pub fn max(&self) -> f64 {
        self.samples.iter().copied().fold(0.0, f64::max)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

// ---- host-side aggregation helpers -------------------------------------------

/// Count rows per category value, skipping empty fields.
pub fn group_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> HashMap<String, f64> {
    let mut map = HashMap::new();
    for v in values {
        if v.is_empty() {
            continue;
        }
        *map.entry(v.to_string()).or_insert(0.0) += 1.0;
    }
    map
}

/// Order a count map under a fixed label order; labels absent from the map
/// count zero. An empty map yields an empty series.
pub fn ordered_series(counts: &HashMap<String, f64>, order: &[&str]) -> DataSeries {
    if counts.is_empty() {
        return DataSeries::default();
    }
    let points = order
        .iter()
        .map(|&label| DataPoint::new(label, counts.get(label).copied().unwrap_or(0.0)))
        .collect();
    // Labels in `order` are distinct by construction of the caller's config;
    // fall back to an empty series if they are not.
    DataSeries::try_new(points).unwrap_or_default()
}

/// Build a pair from a binary flag count map ("1"/"0"), assigning display
/// names to each side. The "1" side comes first, as the dashboard draws it.
pub fn pair_from_flag_counts(
    counts: &HashMap<String, f64>,
    name_for_one: &str,
    name_for_zero: &str,
) -> Result<PairSeries, ChartError> {
    PairSeries::try_new(
        DataPoint::new(name_for_one, counts.get("1").copied().unwrap_or(0.0)),
        DataPoint::new(name_for_zero, counts.get("0").copied().unwrap_or(0.0)),
    )
}
