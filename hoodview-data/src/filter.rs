use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::fields::{NEIGHBORHOOD, PROPERTY_TYPE, YEAR_BUILT};
use crate::record::Record;

/// The current bounds of one range slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    /// False while the range still spans the field's whole domain, in which
    /// case it imposes no constraint (records missing the field stay visible).
    pub narrowed: bool,
}

impl FieldRange {
    pub fn new(min: f64, max: f64, narrowed: bool) -> Self {
        Self { min, max, narrowed }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn accepts(&self, value: Option<f64>) -> bool {
        if !self.narrowed {
            return true;
        }
        value.is_some_and(|v| self.contains(v))
    }
}

/// Immutable snapshot of every active filter.
///
/// Snapshots are rebuilt through the `with_*` methods rather than mutated in
/// place, so a filtering pass always sees one consistent set of bounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    ranges: BTreeMap<String, FieldRange>,
    neighborhoods: BTreeSet<String>,
    property_types: BTreeSet<String>,
    min_year_built: Option<i64>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, field: impl Into<String>, range: FieldRange) -> Self {
        self.ranges.insert(field.into(), range);
        self
    }

    pub fn with_ranges(mut self, ranges: impl IntoIterator<Item = (String, FieldRange)>) -> Self {
        self.ranges.extend(ranges);
        self
    }

    /// Keep only records in these neighborhoods; an empty set disables the filter
    pub fn with_neighborhoods<I, S>(mut self, neighborhoods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.neighborhoods = neighborhoods.into_iter().map(Into::into).collect();
        self
    }

    /// Keep only records of these property types; an empty set disables the filter
    pub fn with_property_types<I, S>(mut self, property_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.property_types = property_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_year_built(mut self, year: Option<i64>) -> Self {
        self.min_year_built = year;
        self
    }

    pub fn ranges(&self) -> &BTreeMap<String, FieldRange> {
        &self.ranges
    }

    pub fn range(&self, field: &str) -> Option<&FieldRange> {
        self.ranges.get(field)
    }

    pub fn neighborhoods(&self) -> &BTreeSet<String> {
        &self.neighborhoods
    }

    pub fn property_types(&self) -> &BTreeSet<String> {
        &self.property_types
    }

    pub fn min_year_built(&self) -> Option<i64> {
        self.min_year_built
    }

    /// Whether a record passes every active criterion
    pub fn matches(&self, record: &Record) -> bool {
        if !self
            .ranges
            .iter()
            .all(|(field, range)| range.accepts(record.number(field)))
        {
            return false;
        }

        if !self.neighborhoods.is_empty()
            && !record
                .text(NEIGHBORHOOD)
                .is_some_and(|hood| self.neighborhoods.contains(hood))
        {
            return false;
        }

        if !self.property_types.is_empty()
            && !record
                .text(PROPERTY_TYPE)
                .is_some_and(|kind| self.property_types.contains(kind))
        {
            return false;
        }

        if let Some(min_year) = self.min_year_built {
            if !record
                .number(YEAR_BUILT)
                .is_some_and(|year| year >= min_year as f64)
            {
                return false;
            }
        }

        true
    }
}

/// Indices of the records that pass every criterion, in dataset order
#[tracing::instrument(skip_all, fields(records = dataset.len()))]
pub fn filter_records(dataset: &Dataset, criteria: &FilterCriteria) -> Vec<usize> {
    let visible: Vec<usize> = dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| criteria.matches(record))
        .map(|(index, _)| index)
        .collect();
    tracing::debug!(visible = visible.len(), "filtered records");
    visible
}
