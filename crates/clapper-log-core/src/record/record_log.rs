use crate::record::Record;

use serde::{Deserialize, Serialize};

/// Completed takes in completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordLog {
    records: Vec<Record>,
}

impl RecordLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed take.
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Remove the record at `index`; out of range leaves the log untouched.
    pub fn delete_at(&mut self, index: usize) -> Option<Record> {
        (index < self.records.len()).then(|| self.records.remove(index))
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
