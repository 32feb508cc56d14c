//! Node model for Alpha Existential Graphs.
//!
//! Two node kinds make up a graph: [`AtomNode`], a proposition letter with a
//! derived bounding rectangle, and [`CutNode`], a negation region whose
//! ellipse encloses an ordered list of children. [`Node`] is the closed sum
//! over both kinds; predicates dispatch by exhaustive match, so a new node
//! kind forces every site to be revisited.
//!
//! These types carry no placement policy of their own: containment and
//! sibling-disjointness invariants are enforced by the tree engine that owns
//! the root cut. Child order has no logical meaning but is preserved, which
//! keeps the textual projection of a graph stable.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::geometry::{Ellipse, Point, Rectangle, Shape};

/// A proposition letter placed on the sheet or inside a cut.
///
/// The origin is the rendering baseline of the letter, not the top-left of
/// its box: the bounding rectangle spans from `(origin.x, origin.y -
/// height)` down to the baseline. The identifier must be exactly one Latin
/// letter; repeated letters across different cuts are legal and common.
///
/// # Examples
///
/// ```
/// # use peirce_core::geometry::Point;
/// # use peirce_core::node::AtomNode;
/// let atom = AtomNode::new('A', Point::new(0.0, 10.0)?, 8.0, 10.0)?;
/// assert_eq!(atom.bounding_rect().start_vertex(), Point::new(0.0, 0.0)?);
///
/// assert!(AtomNode::new('1', Point::new(0.0, 0.0)?, 8.0, 10.0).is_err());
/// # Ok::<(), peirce_core::error::ValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAtomNode")]
pub struct AtomNode {
    identifier: char,
    origin: Point,
    width: f32,
    height: f32,
    #[serde(skip)]
    bounds: Rectangle,
}

impl AtomNode {
    /// Creates a new atom from its letter, baseline origin, and dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidIdentifier`] when the identifier is
    /// not a single Latin letter, and the rectangle validation errors for
    /// malformed dimensions.
    pub fn new(
        identifier: char,
        origin: Point,
        width: f32,
        height: f32,
    ) -> Result<Self, ValidationError> {
        if !identifier.is_ascii_alphabetic() {
            return Err(ValidationError::InvalidIdentifier(identifier));
        }
        if !(height.is_finite() && height >= 0.0) {
            return Err(ValidationError::InvalidDimension {
                what: "height",
                value: height,
            });
        }
        let top_left = origin.with_y(origin.y() - height)?;
        let bounds = Rectangle::new(top_left, width, height)?;
        Ok(Self {
            identifier,
            origin,
            width,
            height,
            bounds,
        })
    }

    /// Returns the proposition letter.
    pub fn identifier(&self) -> char {
        self.identifier
    }

    /// Returns the baseline origin the letter is anchored at.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the width of the letter's box.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the height of the letter's box.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The bounding rectangle derived from origin, width, and height.
    pub fn bounding_rect(&self) -> Rectangle {
        self.bounds
    }

    /// The atom's region as a [`Shape`].
    pub fn bounding_shape(&self) -> Shape {
        Shape::Rectangle(self.bounds)
    }

    /// Whether the point lies within the atom's bounding rectangle.
    pub fn contains_point(&self, point: Point) -> bool {
        self.bounds.contains_point(point)
    }

    /// Whether the other node's region lies fully inside this atom's box.
    pub fn contains_node(&self, other: &Node) -> bool {
        other
            .bounding_shape()
            .is_some_and(|shape| self.bounding_shape().contains(&shape))
    }
}

#[derive(Deserialize)]
struct RawAtomNode {
    identifier: char,
    origin: Point,
    width: f32,
    height: f32,
}

impl TryFrom<RawAtomNode> for AtomNode {
    type Error = ValidationError;

    fn try_from(raw: RawAtomNode) -> Result<Self, Self::Error> {
        Self::new(raw.identifier, raw.origin, raw.width, raw.height)
    }
}

/// A cut: a negation region holding an ordered list of child nodes.
///
/// A cut with no ellipse is the unbounded sheet of assertion and is legal
/// only at the root of a tree; every other cut carries the ellipse that
/// bounds its region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutNode {
    ellipse: Option<Ellipse>,
    children: Vec<Node>,
}

impl CutNode {
    /// Creates a bounded cut with the given region and children.
    pub fn new(ellipse: Ellipse, children: Vec<Node>) -> Self {
        Self {
            ellipse: Some(ellipse),
            children,
        }
    }

    /// Creates the unbounded sheet of assertion.
    pub fn sheet() -> Self {
        Self::default()
    }

    /// Returns the bounding ellipse, or `None` for the sheet.
    pub fn ellipse(&self) -> Option<Ellipse> {
        self.ellipse
    }

    /// Borrows the ordered child list.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Mutably borrows the ordered child list.
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Consumes the cut, yielding its children.
    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    /// Whether the cut has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The cut's region as a [`Shape`], or `None` for the sheet.
    pub fn bounding_shape(&self) -> Option<Shape> {
        self.ellipse.map(Shape::Ellipse)
    }

    /// Whether the point lies in this cut's region. The sheet contains every
    /// point.
    pub fn contains_point(&self, point: Point) -> bool {
        self.ellipse.is_none_or(|e| e.contains_point(point))
    }

    /// Whether `shape` lies fully inside this cut's region. The sheet
    /// encloses every shape.
    pub fn encloses_shape(&self, shape: &Shape) -> bool {
        match self.ellipse {
            Some(ellipse) => Shape::Ellipse(ellipse).contains(shape),
            None => true,
        }
    }

    /// Whether the other node's region lies fully inside this cut's region.
    pub fn contains_node(&self, other: &Node) -> bool {
        other
            .bounding_shape()
            .is_some_and(|shape| self.encloses_shape(&shape))
    }

    /// The cut a node with this `shape` would attach to: descends into
    /// whichever child cut's region encloses the shape, recursively, until
    /// none does.
    pub fn current_cut(&self, shape: &Shape) -> &CutNode {
        for child in &self.children {
            if let Node::Cut(cut) = child {
                if cut.encloses_shape(shape) {
                    return cut.current_cut(shape);
                }
            }
        }
        self
    }

    /// Mutable variant of [`CutNode::current_cut`].
    pub fn current_cut_mut(&mut self, shape: &Shape) -> &mut CutNode {
        let next = self
            .children
            .iter()
            .position(|child| matches!(child, Node::Cut(cut) if cut.encloses_shape(shape)));
        match next {
            Some(index) => match &mut self.children[index] {
                Node::Cut(cut) => cut.current_cut_mut(shape),
                Node::Atom(_) => unreachable!("position only matches cut children"),
            },
            None => self,
        }
    }
}

/// A graph node: an atom leaf or a cut region.
///
/// Serialized as a discriminated record under a `"kind"` tag, matching the
/// plain-data projection the persistence adapter reads and writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    /// A proposition letter.
    Atom(AtomNode),
    /// A nested negation region.
    Cut(CutNode),
}

impl Node {
    /// The node's region. `None` only for an unbounded cut, which is legal
    /// solely as a tree root and never appears in the child list of a
    /// verified tree.
    pub fn bounding_shape(&self) -> Option<Shape> {
        match self {
            Node::Atom(atom) => Some(atom.bounding_shape()),
            Node::Cut(cut) => cut.bounding_shape(),
        }
    }

    /// Whether the point lies in the node's region.
    pub fn contains_point(&self, point: Point) -> bool {
        match self {
            Node::Atom(atom) => atom.contains_point(point),
            Node::Cut(cut) => cut.contains_point(point),
        }
    }

    /// Whether the other node's region lies fully inside this node's region.
    pub fn contains_node(&self, other: &Node) -> bool {
        match self {
            Node::Atom(atom) => atom.contains_node(other),
            Node::Cut(cut) => cut.contains_node(other),
        }
    }

    /// Whether this node is a cut.
    pub fn is_cut(&self) -> bool {
        matches!(self, Node::Cut(_))
    }

    /// Whether this node is an atom.
    pub fn is_atom(&self) -> bool {
        matches!(self, Node::Atom(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f32, y: f32) -> Point {
        Point::new(x, y).unwrap()
    }

    fn ellipse(cx: f32, cy: f32, rx: f32, ry: f32) -> Ellipse {
        Ellipse::new(point(cx, cy), rx, ry).unwrap()
    }

    fn atom(identifier: char, cx: f32, cy: f32) -> AtomNode {
        // A 16x16 box centered on (cx, cy), anchored at its baseline.
        AtomNode::new(identifier, point(cx - 8.0, cy + 8.0), 16.0, 16.0).unwrap()
    }

    #[test]
    fn test_atom_identifier_must_be_a_single_latin_letter() {
        let origin = point(0.0, 0.0);
        assert!(AtomNode::new('A', origin, 8.0, 10.0).is_ok());
        assert!(AtomNode::new('z', origin, 8.0, 10.0).is_ok());
        assert_eq!(
            AtomNode::new('1', origin, 8.0, 10.0),
            Err(ValidationError::InvalidIdentifier('1'))
        );
        assert!(AtomNode::new('é', origin, 8.0, 10.0).is_err());
        assert!(AtomNode::new(' ', origin, 8.0, 10.0).is_err());
    }

    #[test]
    fn test_atom_rejects_malformed_dimensions() {
        let origin = point(0.0, 0.0);
        assert!(AtomNode::new('A', origin, -1.0, 10.0).is_err());
        assert!(AtomNode::new('A', origin, 8.0, f32::NAN).is_err());
    }

    #[test]
    fn test_atom_bounds_are_anchored_at_the_baseline() {
        let a = AtomNode::new('A', point(2.0, 10.0), 8.0, 6.0).unwrap();
        let bounds = a.bounding_rect();
        assert_eq!(bounds.start_vertex(), point(2.0, 4.0));
        assert_eq!(bounds.width(), 8.0);
        assert_eq!(bounds.height(), 6.0);
        assert!(a.contains_point(point(6.0, 7.0)));
        assert!(!a.contains_point(point(6.0, 11.0)));
    }

    #[test]
    fn test_sheet_contains_every_point() {
        let sheet = CutNode::sheet();
        assert!(sheet.ellipse().is_none());
        assert!(sheet.contains_point(point(1.0e6, -1.0e6)));
        assert!(sheet.encloses_shape(&Shape::Rectangle(
            Rectangle::new(point(-500.0, -500.0), 1000.0, 1000.0).unwrap()
        )));
    }

    #[test]
    fn test_bounded_cut_respects_its_ellipse() {
        let cut = CutNode::new(ellipse(0.0, 0.0, 10.0, 5.0), Vec::new());
        assert!(cut.contains_point(point(0.0, 0.0)));
        assert!(!cut.contains_point(point(10.0, 0.0)));
        assert!(!cut.contains_point(point(20.0, 20.0)));
    }

    #[test]
    fn test_contains_node_delegates_to_shapes() {
        let big = CutNode::new(ellipse(0.0, 0.0, 50.0, 50.0), Vec::new());
        let inner = Node::Atom(atom('A', 0.0, 0.0));
        let outer = Node::Atom(atom('B', 100.0, 0.0));
        assert!(big.contains_node(&inner));
        assert!(!big.contains_node(&outer));
        // The sheet can never be contained by anything.
        assert!(!big.contains_node(&Node::Cut(CutNode::sheet())));
    }

    #[test]
    fn test_current_cut_descends_to_the_owning_region() {
        let inner = CutNode::new(ellipse(0.0, 0.0, 20.0, 15.0), Vec::new());
        let outer = CutNode::new(
            ellipse(0.0, 0.0, 60.0, 45.0),
            vec![Node::Cut(inner.clone())],
        );
        let sheet = CutNode {
            ellipse: None,
            children: vec![Node::Cut(outer.clone())],
        };

        let small = Shape::Rectangle(Rectangle::new(point(-4.0, -4.0), 8.0, 8.0).unwrap());
        assert_eq!(sheet.current_cut(&small).ellipse(), inner.ellipse());

        let mid = Shape::Rectangle(Rectangle::new(point(-30.0, -10.0), 60.0, 20.0).unwrap());
        assert_eq!(sheet.current_cut(&mid).ellipse(), outer.ellipse());

        let huge = Shape::Rectangle(Rectangle::new(point(-200.0, -200.0), 400.0, 400.0).unwrap());
        assert!(sheet.current_cut(&huge).ellipse().is_none());
    }

    #[test]
    fn test_current_cut_mut_matches_current_cut() {
        let inner = CutNode::new(ellipse(0.0, 0.0, 20.0, 15.0), Vec::new());
        let mut sheet = CutNode {
            ellipse: None,
            children: vec![Node::Cut(CutNode::new(
                ellipse(0.0, 0.0, 60.0, 45.0),
                vec![Node::Cut(inner)],
            ))],
        };

        let small = Shape::Rectangle(Rectangle::new(point(-4.0, -4.0), 8.0, 8.0).unwrap());
        let expected = sheet.current_cut(&small).ellipse();
        assert_eq!(sheet.current_cut_mut(&small).ellipse(), expected);
    }
}
