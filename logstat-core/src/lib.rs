pub mod cli;
pub mod conf;
pub mod logging;
pub mod protocol;
pub mod query;
pub mod session;
pub mod stats;
pub mod store;
