//! Peirce Core Types and Definitions
//!
//! This crate provides the foundational types for the Peirce existential
//! graph workspace. It includes:
//!
//! - **Geometry**: points, rectangles, ellipses, and the polymorphic
//!   containment/overlap predicates over them ([`geometry`] module)
//! - **Nodes**: atoms and cuts, the two node kinds of an Alpha Existential
//!   Graph ([`node`] module)
//! - **Errors**: construction-time validation failures ([`error`] module)
//!
//! The tree engine that owns a graph and enforces its placement invariants
//! lives in the `peirce` crate; this crate only guarantees that every value
//! it hands out is individually well-formed.

pub mod error;
pub mod geometry;
pub mod node;
