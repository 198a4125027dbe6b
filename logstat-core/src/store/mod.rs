mod bucket;
mod record;
mod record_store;


pub use bucket::{Bucket, BucketIter};
pub use record::LogRecord;
pub use record_store::RecordStore;
