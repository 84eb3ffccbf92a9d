use std::sync::Arc;

use hoodview_scales::array::extent;

use crate::record::Record;

/// The loaded housing records, shared read-only between the slider bank and
/// the filtering step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Arc<[Record]>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Minimum and maximum of a numeric field, ignoring missing values.
    /// `None` when the field has no numeric value at all.
    pub fn extent(&self, field: &str) -> Option<(f64, f64)> {
        extent(self.records.iter().map(|record| record.number(field)))
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
