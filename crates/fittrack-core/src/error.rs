//! Core error types for fittrack-core.
//!
//! Dispatch failures abort the packet they belong to; the driver propagates
//! them instead of catching and continuing, so one bad packet fails the
//! whole batch.

use thiserror::Error;

/// Core error type for fittrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Activity code not in the supported set
    #[error("unknown activity code '{0}'")]
    UnknownActivity(String),

    /// Wrong number of positional sensor values for the resolved variant
    #[error("{kind} expects {expected} sensor values, got {got}")]
    ArityMismatch {
        kind: &'static str,
        expected: usize,
        got: usize,
    },

    /// Packet batch was not valid JSON of the expected shape
    #[error("failed to parse packet batch: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors while reading a batch
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = CoreError> = std::result::Result<T, E>;
