/// A single ingested log entry.
///
/// Records are never mutated once they are handed to the [`RecordStore`];
/// the store only gives out shared references.
///
/// [`RecordStore`]: super::RecordStore
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: i64,
    /// Exact-match, case-sensitive grouping key.
    pub log_type: String,
    pub severity: f32,
}

impl LogRecord {
    pub fn new(timestamp: i64, log_type: impl Into<String>, severity: f32) -> Self {
        Self {
            timestamp,
            log_type: log_type.into(),
            severity,
        }
    }
}
