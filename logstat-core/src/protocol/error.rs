use std::num::{ParseFloatError, ParseIntError};
use std::str::Utf8Error;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("missing {field}")]
    MissingField { field: &'static str },

    #[error("invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid severity '{value}': {source}")]
    InvalidSeverity {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("log type must not be empty")]
    EmptyType,

    #[error("unknown direction '{token}', expected BEFORE or AFTER")]
    UnknownDirection { token: String },

    #[error("line is not valid UTF-8: {source}")]
    InvalidUtf8 {
        #[source]
        source: Utf8Error,
    },
}

impl ProtocolError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn invalid_timestamp(value: impl Into<String>, source: ParseIntError) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
            source,
        }
    }

    pub fn invalid_severity(value: impl Into<String>, source: ParseFloatError) -> Self {
        Self::InvalidSeverity {
            value: value.into(),
            source,
        }
    }
}
