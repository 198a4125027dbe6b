use crate::conf::{ConfigError, MonitorConfig};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "logstat.toml";

pub fn load_config(path: &Path) -> Result<MonitorConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config = parse_config(path, &contents)?;
    config.validate()?;

    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Parse config text. `path` is only used for error reporting.
pub fn parse_config(path: &Path, contents: &str) -> Result<MonitorConfig, ConfigError> {
    toml::from_str(contents).map_err(|e| ConfigError::parse(path, e))
}

/// Load `explicit` if given, else `logstat.toml` from the working directory
/// if it exists, else defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<MonitorConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let fallback = Path::new(DEFAULT_CONFIG_FILE);
    if fallback.is_file() {
        return load_config(fallback);
    }

    Ok(MonitorConfig::default())
}
