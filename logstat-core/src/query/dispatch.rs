use crate::query::Query;
use crate::stats::{Stats, aggregate};
use crate::store::{LogRecord, RecordStore};
use tracing::trace;

/// Owns the record store and answers queries against it.
///
/// Inserts take `&mut self`; queries only read.
#[derive(Debug, Default)]
pub struct Monitor {
    store: RecordStore,
}

impl Monitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn insert(&mut self, record: LogRecord) {
        trace!(
            timestamp = record.timestamp,
            log_type = %record.log_type,
            severity = record.severity,
            "insert"
        );
        self.store.insert(record);
    }

    /// Resolve the subset a query selects and reduce it. Never fails: an
    /// unknown type or an empty window yields [`Stats::ZERO`].
    pub fn query(&self, query: &Query) -> Stats {
        let stats = match query {
            Query::ByType { log_type } => aggregate(self.store.records_of_type(log_type)),
            Query::Window { bound } => {
                aggregate(self.store.all_records().iter().filter(|r| bound.admits(r)))
            }
            Query::TypedWindow { log_type, bound } => {
                let bucket = self.store.records_of_type(log_type);
                aggregate(bucket.iter().filter(|r| bound.admits(r)))
            }
        };

        trace!(?query, matched = stats.count, "query");
        stats
    }
}
