//! Peirce - a geometrically validated Alpha Existential Graph engine.
//!
//! An Alpha Existential Graph is a diagrammatic logic notation: proposition
//! letters (atoms) sit on an unbounded sheet of assertion, negation is an
//! enclosing ellipse (a cut), conjunction is juxtaposition, and cuts nest
//! arbitrarily. This crate owns the tree behind such a diagram and keeps it
//! well-formed under interactive editing: insertion with automatic
//! re-homing, removal with flattening, structural verification, point
//! navigation, a textual formula projection, and a JSON persistence adapter.
//!
//! Interaction and rendering layers are external collaborators: they build
//! geometry from user input, preview validity with
//! [`AegTree::can_insert`], and commit through [`AegTree::insert`] and
//! [`AegTree::remove`]. They do not take part in invariant enforcement.

pub mod persist;

mod error;
mod tree;

pub use peirce_core::{error::ValidationError, geometry, node};

pub use error::{AegError, InsertionError};
pub use tree::AegTree;
