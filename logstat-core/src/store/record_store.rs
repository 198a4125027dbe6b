use crate::store::{Bucket, LogRecord};
use ahash::RandomState;
use std::collections::HashMap;

/// Append-only, in-memory home of every ingested record.
///
/// Records live once, in insertion order. The per-type index only stores
/// positions into that sequence and is updated by the same `insert` call.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<LogRecord>,
    by_type: HashMap<String, Vec<usize>, RandomState>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: LogRecord) {
        let position = self.records.len();

        // Look up by &str first so repeat types don't allocate a new key.
        match self.by_type.get_mut(record.log_type.as_str()) {
            Some(bucket) => bucket.push(position),
            None => {
                self.by_type.insert(record.log_type.clone(), vec![position]);
            }
        }

        self.records.push(record);
    }

    /// Every record, in the order it was inserted.
    pub fn all_records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Records of `log_type` in insertion order. Unknown types yield an
    /// empty bucket.
    pub fn records_of_type(&self, log_type: &str) -> Bucket<'_> {
        match self.by_type.get(log_type) {
            Some(positions) => Bucket::new(&self.records, positions),
            None => Bucket::empty(&self.records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct types seen so far.
    pub fn type_count(&self) -> usize {
        self.by_type.len()
    }
}
