//! Errors raised while configuring a blob.
//!
//! Only construction can fail. Once a blob exists every tick succeeds, even
//! for degenerate geometry.

use thiserror::Error;

/// Invalid blob configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlobError {
    /// The ring needs at least 3 points to enclose any area.
    #[error("blob needs at least 3 ring points, got {points}")]
    InsufficientPoints { points: usize },
    /// Connection order must be in `1..=points / 2`.
    #[error("connection order {connect_every} out of range (expected 1..={max})")]
    InvalidConnectivity { connect_every: usize, max: usize },
    /// Radius must be positive and finite.
    #[error("radius must be positive and finite")]
    InvalidRadius,
    /// Stiffness must be finite.
    #[error("stiffness must be finite")]
    InvalidStiffness,
}

/// Convenience alias for `Result<T, BlobError>`.
pub type BlobResult<T> = Result<T, BlobError>;
