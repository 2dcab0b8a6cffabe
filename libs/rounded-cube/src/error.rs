//! # Mesh Errors
//!
//! Error types for rounded-cube mesh generation. All errors are explicit and
//! raised before any buffer is allocated.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when inputs are invalid
//! - All failures return explicit errors
//! - Errors include context for debugging

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur when configuring a rounded-cube build.
///
/// Generation itself is a pure deterministic computation with no failure
/// paths; every error below is an input-validation rejection.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A grid resolution is too small for the ring/cap topology.
    #[error("Invalid dimension: {message}")]
    InvalidDimension {
        /// Description of the rejected resolution.
        message: String,
    },

    /// The rounding radius is outside the supported range.
    #[error("Invalid roundness: {message}")]
    InvalidRoundness {
        /// Description of the rejected radius.
        message: String,
    },
}

impl MeshError {
    /// Creates an invalid dimension error.
    pub fn invalid_dimension(message: impl Into<String>) -> Self {
        Self::InvalidDimension {
            message: message.into(),
        }
    }

    /// Creates an invalid roundness error.
    pub fn invalid_roundness(message: impl Into<String>) -> Self {
        Self::InvalidRoundness {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================
