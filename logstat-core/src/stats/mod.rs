//! Severity aggregation
//!
//! Reduces any subset of stored records to a [`Stats`] triple and renders it
//! as one protocol output line:
//!
//! records
//! StatsAccumulator
//! Stats
//! render_stats
//!

mod aggregation;
mod render;


pub use aggregation::{Stats, StatsAccumulator, aggregate};
pub use render::render_stats;
