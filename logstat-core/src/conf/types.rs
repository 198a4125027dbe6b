use crate::conf::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What a session does with a line whose arguments fail to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseErrorPolicy {
    /// Log a warning, leave the store untouched, carry on.
    #[default]
    Skip,
    /// Stop the session with an error.
    Abort,
}

/// Resolved settings for one run.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorConfig {
    /// Read commands from this file instead of stdin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,

    /// Write results to this file instead of stdout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    pub on_parse_error: ParseErrorPolicy,

    /// Treat direction tokens other than BEFORE/AFTER as parse errors
    /// instead of silently ignoring the command.
    pub strict_directions: bool,
}

impl MonitorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(input), Some(output)) = (&self.input, &self.output) {
            if input == output {
                return Err(ConfigError::InputIsOutput {
                    path: input.clone(),
                });
            }
        }
        Ok(())
    }
}
