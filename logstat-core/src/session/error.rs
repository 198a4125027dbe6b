use crate::protocol::ProtocolError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),

    #[error("line {line}: {source}")]
    Aborted {
        line: usize,
        #[source]
        source: ProtocolError,
    },
}
