//! Validation errors for geometry and node construction.
//!
//! Every validating constructor in this crate rejects malformed input with a
//! [`ValidationError`] instead of producing a value the tree engine would
//! have to distrust.

use thiserror::Error;

/// Rejection of malformed geometry or a malformed atom identifier.
///
/// Raised at construction time; the failure aborts the single construction
/// call and the caller must not proceed with the invalid value. Nothing in
/// this taxonomy is fatal to the process.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    /// A coordinate was NaN or infinite.
    #[error("coordinate {axis} must be finite, got {value}")]
    NonFiniteCoordinate {
        /// Which coordinate axis carried the invalid value.
        axis: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A width, height, or radius was negative, NaN, or infinite.
    #[error("{what} must be finite and non-negative, got {value}")]
    InvalidDimension {
        /// Which dimension carried the invalid value.
        what: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// An atom identifier that is not a single Latin letter.
    #[error("atom identifier must be a single Latin letter, got {0:?}")]
    InvalidIdentifier(char),
}
