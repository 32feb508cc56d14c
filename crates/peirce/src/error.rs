//! Error types for graph engine and persistence operations.
//!
//! This module provides the main error type [`AegError`] and the insertion
//! rejection [`InsertionError`]. Structural verification failures are a
//! boolean result of [`AegTree::verify`](crate::AegTree::verify), never an
//! error; only the persistence adapter promotes them to [`AegError`] when a
//! loaded file fails the check.

use std::io;

use thiserror::Error;

use peirce_core::error::ValidationError;

/// Rejection of an [`insert`](crate::AegTree::insert) that would break the
/// graph's placement invariants.
///
/// Insertion rejections are expected and frequent during interactive
/// editing; callers should probe with
/// [`can_insert`](crate::AegTree::can_insert) rather than steering control
/// flow through this error. A rejected insert leaves the tree unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsertionError {
    /// The node's region overlaps a sibling it would not enclose.
    #[error("the node's region overlaps a sibling at the target cut")]
    OverlapsSibling,

    /// Only the sheet of assertion may be unbounded.
    #[error("an unbounded cut cannot be inserted below the sheet")]
    UnboundedCut,
}

/// The main error type for graph engine and persistence operations.
///
/// All conditions are scoped to one tree instance and one call; none is
/// fatal to the process.
#[derive(Debug, Error)]
pub enum AegError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("insertion rejected: {0}")]
    Insertion(#[from] InsertionError),

    #[error("malformed graph file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("structural verification failed: {0}")]
    Structural(&'static str),
}
