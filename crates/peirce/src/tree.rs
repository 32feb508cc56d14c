//! The Alpha Existential Graph tree engine.
//!
//! [`AegTree`] owns a single root cut, the unbounded sheet of assertion, and
//! maintains two placement invariants across every completed mutation:
//!
//! - every bounded cut's ellipse strictly contains the region of each of its
//!   children;
//! - no two children of the same cut overlap.
//!
//! `insert` and `remove` are the only mutators; each either completes with
//! the invariants intact or rejects before touching the tree. All queries
//! are read-only and may be interleaved freely between mutations. Nodes are
//! owned exclusively by their parent's child list, with no back-references;
//! a node's parent is re-derived by descending from the sheet.

use std::fmt;
use std::mem;

use log::debug;
use serde::{Deserialize, Serialize};

use peirce_core::geometry::Point;
use peirce_core::node::{CutNode, Node};

use crate::error::{AegError, InsertionError};

/// A geometrically validated Alpha Existential Graph.
///
/// # Examples
///
/// ```
/// use peirce::AegTree;
/// use peirce_core::geometry::{Ellipse, Point};
/// use peirce_core::node::{AtomNode, CutNode, Node};
///
/// let mut tree = AegTree::new();
///
/// let ellipse = Ellipse::new(Point::new(0.0, 0.0)?, 50.0, 40.0)?;
/// tree.insert(Node::Cut(CutNode::new(ellipse, Vec::new())))?;
///
/// let atom = AtomNode::new('A', Point::new(-8.0, 8.0)?, 16.0, 16.0)?;
/// tree.insert(Node::Atom(atom))?;
///
/// assert!(tree.verify());
/// assert_eq!(tree.to_string(), "[(A)]");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AegTree {
    sheet: CutNode,
}

impl AegTree {
    /// Creates an empty graph: a sheet of assertion with no content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows the root cut, the sheet of assertion. Its ellipse is always
    /// `None`.
    pub fn sheet(&self) -> &CutNode {
        &self.sheet
    }

    /// Whether `node` can be inserted without violating the placement
    /// invariants. Pure query; the tree is not touched.
    ///
    /// The target cut is found by descending from the sheet into whichever
    /// cut's region encloses the node's shape. Insertion is allowed iff, for
    /// every existing child of the target, either the new node is a cut
    /// whose region fully encloses that child (the child is re-homed under
    /// it on insert), or the two regions do not overlap. This is exactly the
    /// condition under which [`insert`](Self::insert) leaves
    /// [`verify`](Self::verify) true.
    pub fn can_insert(&self, node: &Node) -> bool {
        let Some(shape) = node.bounding_shape() else {
            return false;
        };
        let target = self.sheet.current_cut(&shape);
        target.children().iter().all(|child| {
            let Some(child_shape) = child.bounding_shape() else {
                return false;
            };
            if node.is_cut() && shape.contains(&child_shape) {
                // The child will be re-homed under the new cut.
                return true;
            }
            !shape.overlaps(&child_shape)
        })
    }

    /// Inserts `node` at whichever cut geometrically owns its region.
    ///
    /// When the new node is a cut, children of the target that fall inside
    /// its region are moved under it ("re-homing"). The partition is
    /// computed over a snapshot of the pre-insertion child list; scanning a
    /// list that is being mutated would drop or duplicate children.
    ///
    /// # Errors
    ///
    /// Returns an [`InsertionError`] wrapped in [`AegError`] when
    /// [`can_insert`](Self::can_insert) is false or the node is an unbounded
    /// cut; the tree is left unchanged.
    pub fn insert(&mut self, node: Node) -> Result<(), AegError> {
        let Some(shape) = node.bounding_shape() else {
            return Err(InsertionError::UnboundedCut.into());
        };
        if !self.can_insert(&node) {
            return Err(InsertionError::OverlapsSibling.into());
        }
        let target = self.sheet.current_cut_mut(&shape);
        match node {
            Node::Cut(mut cut) => {
                // Snapshot of the pre-insertion children; the partition must
                // not run against the list being rebuilt.
                let siblings = mem::take(target.children_mut());
                let (enclosed, kept): (Vec<Node>, Vec<Node>) =
                    siblings.into_iter().partition(|sibling| {
                        sibling
                            .bounding_shape()
                            .is_some_and(|s| shape.contains(&s))
                    });
                debug!(rehomed = enclosed.len(); "Inserting cut");
                cut.children_mut().extend(enclosed);
                *target.children_mut() = kept;
                target.children_mut().push(Node::Cut(cut));
            }
            atom @ Node::Atom(_) => target.children_mut().push(atom),
        }
        Ok(())
    }

    /// Removes the most deeply nested node whose region contains `point`.
    ///
    /// Atoms and empty cuts are detached from their parent. A non-empty cut
    /// is flattened: it is detached and each of its former children is
    /// re-inserted through the standard [`insert`](Self::insert) path, so
    /// each re-attaches to whichever cut now encloses it. A cut emptied by
    /// removing its last child stays in place; cuts are never pruned
    /// automatically.
    ///
    /// Returns `false`, as a reported no-op rather than an error, when the
    /// point hits nothing below the sheet itself.
    ///
    /// # Errors
    ///
    /// Propagates insertion failures from flattening. With intact invariants
    /// the re-inserted children cannot collide, so this is not expected in
    /// practice.
    pub fn remove(&mut self, point: Point) -> Result<bool, AegError> {
        match detach_lowest(&mut self.sheet, point) {
            None => {
                debug!(x = point.x(), y = point.y(); "No removable node at point");
                Ok(false)
            }
            Some(Node::Cut(cut)) => {
                for child in cut.into_children() {
                    self.insert(child)?;
                }
                Ok(true)
            }
            Some(Node::Atom(_)) => Ok(true),
        }
    }

    /// The most deeply nested node whose region contains `point`: an atom if
    /// one is hit, otherwise the deepest cut containing the point with no
    /// qualifying descendant. `None` means only the sheet itself contains
    /// the point.
    pub fn lowest_node(&self, point: Point) -> Option<&Node> {
        lowest_in(&self.sheet, point)
    }

    /// The cut that owns [`lowest_node`](Self::lowest_node) for this point,
    /// `None` under the same condition.
    pub fn lowest_parent(&self, point: Point) -> Option<&CutNode> {
        lowest_parent_in(&self.sheet, point)
    }

    /// Checks the placement invariants across the whole tree: every bounded
    /// cut strictly contains each of its children, no two siblings overlap,
    /// and only the sheet is unbounded. Returns `false` on the first
    /// violation at any depth.
    ///
    /// This is the authoritative soundness check after a bulk load or a
    /// batch of mutations. Violations are reported, never thrown, so the
    /// caller decides how to react.
    pub fn verify(&self) -> bool {
        self.sheet.ellipse().is_none() && verify_cut(&self.sheet, true)
    }

    /// The canonical textual projection of the graph: an atom renders as its
    /// letter, a cut as its space-joined children in parentheses, and the
    /// sheet as a bracketed list. Children appear in insertion order.
    /// Output-only; no parser consumes this form.
    pub fn formula(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AegTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        write_children(f, self.sheet.children())?;
        write!(f, "]")
    }
}

fn write_children(f: &mut fmt::Formatter<'_>, children: &[Node]) -> fmt::Result {
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write_node(f, child)?;
    }
    Ok(())
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
    match node {
        Node::Atom(atom) => write!(f, "{}", atom.identifier()),
        Node::Cut(cut) => {
            write!(f, "(")?;
            write_children(f, cut.children())?;
            write!(f, ")")
        }
    }
}

/// Sibling regions are disjoint, so at most one child of a cut contains any
/// given point; the descent follows that child.
fn lowest_in(cut: &CutNode, point: Point) -> Option<&Node> {
    let child = cut
        .children()
        .iter()
        .find(|child| child.contains_point(point))?;
    if let Node::Cut(inner) = child {
        if let Some(deeper) = lowest_in(inner, point) {
            return Some(deeper);
        }
    }
    Some(child)
}

fn lowest_parent_in<'a>(cut: &'a CutNode, point: Point) -> Option<&'a CutNode> {
    let child = cut
        .children()
        .iter()
        .find(|child| child.contains_point(point))?;
    if let Node::Cut(inner) = child {
        if let Some(deeper) = lowest_parent_in(inner, point) {
            return Some(deeper);
        }
    }
    Some(cut)
}

/// Detaches the lowest node containing `point` from its parent's child list
/// and returns it; `None` when only the sheet contains the point.
fn detach_lowest(cut: &mut CutNode, point: Point) -> Option<Node> {
    let index = cut
        .children()
        .iter()
        .position(|child| child.contains_point(point))?;
    let descend = matches!(
        &cut.children()[index],
        Node::Cut(inner) if inner.children().iter().any(|c| c.contains_point(point))
    );
    if descend {
        match &mut cut.children_mut()[index] {
            Node::Cut(inner) => detach_lowest(inner, point),
            Node::Atom(_) => unreachable!("descend targets are cut children"),
        }
    } else {
        Some(cut.children_mut().remove(index))
    }
}

fn verify_cut(cut: &CutNode, is_root: bool) -> bool {
    if !is_root && cut.ellipse().is_none() {
        return false;
    }
    let mut shapes = Vec::with_capacity(cut.children().len());
    for child in cut.children() {
        match child.bounding_shape() {
            Some(shape) => shapes.push(shape),
            // An unbounded cut below the root.
            None => return false,
        }
    }
    if let Some(region) = cut.bounding_shape() {
        if !shapes.iter().all(|shape| region.contains(shape)) {
            return false;
        }
    }
    for (i, a) in shapes.iter().enumerate() {
        for b in &shapes[i + 1..] {
            if a.overlaps(b) {
                return false;
            }
        }
    }
    cut.children().iter().all(|child| match child {
        Node::Cut(inner) => verify_cut(inner, false),
        Node::Atom(_) => true,
    })
}
