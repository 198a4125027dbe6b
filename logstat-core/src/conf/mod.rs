mod error;
mod loader;
mod types;


pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, load_config, parse_config, resolve_config};
pub use types::{MonitorConfig, ParseErrorPolicy};
