//! Error types for the powergrid runner.

use thiserror::Error;

/// Result type for runner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or running scenarios.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Topology error (strict mode only)
    #[error("Topology error: {0}")]
    Topology(#[from] powergrid_topology::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reference scenarios produced results other than the recorded ones
    #[error("{0} reference scenario(s) diverged")]
    Diverged(usize),
}
