//! Error type for instance loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building an [`Instance`](crate::instance::Instance).
///
/// Evaluation itself never fails: malformed candidates are answered with
/// [`INFEASIBLE_COST`](crate::cost::INFEASIBLE_COST).
#[derive(Debug, Error)]
pub enum MssError {
    #[error("failed to read instance file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("instance data ended while reading {field}")]
    InsufficientData { field: &'static str },

    #[error("invalid token {token:?} while reading {field}")]
    InvalidToken { field: &'static str, token: String },

    #[error("invalid instance: {0}")]
    InvalidInstance(String),
}
