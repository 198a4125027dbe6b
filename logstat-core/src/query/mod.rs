mod dispatch;
mod types;


pub use dispatch::Monitor;
pub use types::{Direction, Query, TimeBound};
