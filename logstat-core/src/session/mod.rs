//! Session driver
//!
//! A session reads protocol lines one at a time, applies each to a
//! [`Monitor`](crate::query::Monitor) and writes one output line per query.
//! Each line is handled completely before the next is read.
//!
//! input
//! parse_command
//! Command
//! Monitor
//! Stats
//! render_stats
//! output
//!

mod error;
mod runner;
mod summary;


pub use error::SessionError;
pub use runner::{Session, SessionOptions};
pub use summary::SessionSummary;
