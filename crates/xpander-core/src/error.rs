//! Error types for lift generation and the text boundary.

use thiserror::Error;

/// Errors surfaced by lift generation and edge-list I/O.
#[derive(Debug, Error)]
pub enum XpanderError {
    /// Degree must be at least 1; the threshold `2*sqrt(d-1)` is
    /// undefined below that.
    #[error("Invalid degree: {0} (must be >= 1)")]
    InvalidDegree(usize),

    /// Lift multiplicity must be at least 1; `k = 0` produces an
    /// empty graph.
    #[error("Invalid lift multiplicity: {0} (must be >= 1)")]
    InvalidLiftCount(usize),

    /// The attempt cap was exhausted without any candidate meeting
    /// the spectral threshold.
    #[error("Spectral threshold not reached after {attempts} attempts")]
    ThresholdUnreachable { attempts: u64 },

    /// Malformed parameter file or edge list.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for lift operations.
pub type XpanderResult<T> = Result<T, XpanderError>;
