mod fixture;
pub mod tracing;

pub use fixture::{Fixture, SessionRun, run_session};
pub use tracing::{CapturedEvent, capture_events};
