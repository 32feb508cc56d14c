//! Persistence adapter: a plain-data JSON projection of the graph.
//!
//! Each node serializes as a discriminated record under a `"kind"` tag —
//! `{"kind": "cut", "ellipse": ..., "children": [...]}` or `{"kind":
//! "atom", "identifier": ..., "origin": ..., "width": ..., "height": ...}` —
//! inside a top-level `{"sheet": ...}` object. Loading reconstructs node
//! kinds from the discriminator, re-runs the same validating constructors as
//! the public API, and refuses any file whose contents fail structural
//! verification: a corrupt file is surfaced to the caller, never silently
//! accepted.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::AegError;
use crate::tree::AegTree;

/// Parses a graph from its JSON projection and verifies it.
///
/// # Errors
///
/// [`AegError::Malformed`] for JSON that does not match the projection or
/// carries invalid geometry or identifiers, and [`AegError::Structural`]
/// when the parsed tree fails verification: a bounded sheet, an unbounded
/// inner cut, a child escaping its cut, or overlapping siblings.
pub fn from_json(json: &str) -> Result<AegTree, AegError> {
    let tree: AegTree = serde_json::from_str(json)?;
    if tree.sheet().ellipse().is_some() {
        return Err(AegError::Structural(
            "the sheet of assertion must be unbounded",
        ));
    }
    if !tree.verify() {
        return Err(AegError::Structural(
            "the graph violates containment or sibling disjointness",
        ));
    }
    Ok(tree)
}

/// Serializes a graph to its JSON projection, compact or pretty-printed.
///
/// # Errors
///
/// Returns [`AegError::Malformed`] if serialization fails, which does not
/// happen for trees built through the public API.
pub fn to_json(tree: &AegTree, pretty: bool) -> Result<String, AegError> {
    let json = if pretty {
        serde_json::to_string_pretty(tree)?
    } else {
        serde_json::to_string(tree)?
    };
    Ok(json)
}

/// Reads and verifies a graph file.
///
/// # Errors
///
/// I/O failures plus everything [`from_json`] rejects.
pub fn load(path: impl AsRef<Path>) -> Result<AegTree, AegError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Loading graph");
    let content = fs::read_to_string(path)?;
    let tree = from_json(&content)?;
    debug!(formula = tree.formula(); "Graph loaded and verified");
    Ok(tree)
}

/// Writes a graph file.
///
/// # Errors
///
/// I/O failures plus everything [`to_json`] rejects.
pub fn save(tree: &AegTree, path: impl AsRef<Path>, pretty: bool) -> Result<(), AegError> {
    let path = path.as_ref();
    let json = to_json(tree, pretty)?;
    fs::write(path, json)?;
    info!(path = path.display().to_string(); "Graph saved");
    Ok(())
}
