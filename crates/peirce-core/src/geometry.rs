//! Geometric primitives for existential graph regions.
//!
//! This module provides the shape kernel the node model and the tree engine
//! are built on:
//!
//! - [`Point`] - A 2D coordinate in graph space
//! - [`Rectangle`] - An axis-aligned rectangle anchored at its top-left vertex
//! - [`Ellipse`] - An axis-aligned ellipse with a derived bounding rectangle
//! - [`Shape`] - The closed set of region kinds a graph node can occupy
//!
//! # Coordinate System
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward (positive to the right)
//! - **Y-axis**: Increases downward (positive downward)
//!
//! This convention matches SVG and most screen coordinate systems.
//!
//! # Containment and overlap conventions
//!
//! - Rectangle point tests use closed (inclusive) bounds on both axes, and
//!   that convention applies to every rectangle test in this module.
//! - Ellipse point tests use the strict interior of the normalized quadratic
//!   form: `(dx/rx)^2 + (dy/ry)^2 < 1`.
//! - [`Shape::overlaps`] is symmetric region intersection: full containment
//!   of one region in the other counts as overlap, while rectangles that
//!   merely share an edge do not.
//! - [`Shape::contains`] ("fully encloses") is not symmetric.
//! - Any test involving an ellipse boundary approximates the boundary as a
//!   sampled polygon with [`BOUNDARY_SAMPLES`] vertices rather than solving
//!   the conic intersection analytically.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of vertices used when an ellipse boundary is approximated as a
/// polygon: one per degree of arc.
///
/// Overlap and containment queries involving an ellipse reduce to point
/// checks against these sampled vertices. The approximation trades exactness
/// near tangency for simple, uniform point predicates; raising the constant
/// tightens the boundary at a linear cost per query.
pub const BOUNDARY_SAMPLES: usize = 360;

/// A 2D point with finite coordinates.
///
/// Construction and coordinate replacement reject NaN and infinite values,
/// so every `Point` held by a node is usable in the containment predicates
/// without further checks.
///
/// # Examples
///
/// ```
/// # use peirce_core::geometry::Point;
/// let p = Point::new(3.0, 4.0)?;
/// assert_eq!(p.distance(Point::new(0.0, 0.0)?), 5.0);
///
/// assert!(Point::new(f32::NAN, 0.0).is_err());
/// # Ok::<(), peirce_core::error::ValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFiniteCoordinate`] if either coordinate
    /// is NaN or infinite.
    pub fn new(x: f32, y: f32) -> Result<Self, ValidationError> {
        if !x.is_finite() {
            return Err(ValidationError::NonFiniteCoordinate { axis: "x", value: x });
        }
        if !y.is_finite() {
            return Err(ValidationError::NonFiniteCoordinate { axis: "y", value: y });
        }
        Ok(Self { x, y })
    }

    /// Returns the x-coordinate of the point.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns a new point with the specified x-coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFiniteCoordinate`] for a non-finite
    /// replacement value.
    pub fn with_x(self, x: f32) -> Result<Self, ValidationError> {
        Self::new(x, self.y)
    }

    /// Returns a new point with the specified y-coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFiniteCoordinate`] for a non-finite
    /// replacement value.
    pub fn with_y(self, y: f32) -> Result<Self, ValidationError> {
        Self::new(self.x, y)
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Deserialize)]
struct RawPoint {
    x: f32,
    y: f32,
}

impl TryFrom<RawPoint> for Point {
    type Error = ValidationError;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        Self::new(raw.x, raw.y)
    }
}

/// An axis-aligned rectangle anchored at its top-left start vertex.
///
/// Width and height are validated to be finite and non-negative; corners are
/// derived in a fixed clockwise order starting at the top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rectangle {
    start_vertex: Point,
    width: f32,
    height: f32,
}

impl Rectangle {
    /// Creates a new rectangle from its top-left vertex and dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDimension`] for a negative, NaN, or
    /// infinite width or height, and [`ValidationError::NonFiniteCoordinate`]
    /// when the derived far corner overflows the finite range.
    pub fn new(start_vertex: Point, width: f32, height: f32) -> Result<Self, ValidationError> {
        if !(width.is_finite() && width >= 0.0) {
            return Err(ValidationError::InvalidDimension { what: "width", value: width });
        }
        if !(height.is_finite() && height >= 0.0) {
            return Err(ValidationError::InvalidDimension { what: "height", value: height });
        }
        // Reject extents whose far corner is not representable.
        Point::new(start_vertex.x + width, start_vertex.y + height)?;
        Ok(Self {
            start_vertex,
            width,
            height,
        })
    }

    /// Returns the top-left start vertex.
    pub fn start_vertex(self) -> Point {
        self.start_vertex
    }

    /// Returns the width of the rectangle.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height of the rectangle.
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the minimum x-coordinate of the rectangle.
    pub fn min_x(self) -> f32 {
        self.start_vertex.x
    }

    /// Returns the minimum y-coordinate of the rectangle.
    pub fn min_y(self) -> f32 {
        self.start_vertex.y
    }

    /// Returns the maximum x-coordinate of the rectangle.
    pub fn max_x(self) -> f32 {
        self.start_vertex.x + self.width
    }

    /// Returns the maximum y-coordinate of the rectangle.
    pub fn max_y(self) -> f32 {
        self.start_vertex.y + self.height
    }

    /// Returns the center of the rectangle.
    pub fn center(self) -> Point {
        Point {
            x: self.start_vertex.x + self.width / 2.0,
            y: self.start_vertex.y + self.height / 2.0,
        }
    }

    /// The four corners in clockwise order from the top-left.
    pub fn corners(self) -> [Point; 4] {
        let min_x = self.min_x();
        let min_y = self.min_y();
        let max_x = self.max_x();
        let max_y = self.max_y();
        [
            Point { x: min_x, y: min_y },
            Point { x: max_x, y: min_y },
            Point { x: max_x, y: max_y },
            Point { x: min_x, y: max_y },
        ]
    }

    /// Whether the point lies within the rectangle, edges included.
    pub fn contains_point(self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }
}

/// An axis-aligned ellipse with validated radii and a derived bounding
/// rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEllipse", rename_all = "camelCase")]
pub struct Ellipse {
    center: Point,
    radius_x: f32,
    radius_y: f32,
    #[serde(skip)]
    bounds: Rectangle,
}

impl Ellipse {
    /// Creates a new ellipse from its center and semi-axis radii.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDimension`] for a negative, NaN, or
    /// infinite radius.
    pub fn new(center: Point, radius_x: f32, radius_y: f32) -> Result<Self, ValidationError> {
        if !(radius_x.is_finite() && radius_x >= 0.0) {
            return Err(ValidationError::InvalidDimension {
                what: "radiusX",
                value: radius_x,
            });
        }
        if !(radius_y.is_finite() && radius_y >= 0.0) {
            return Err(ValidationError::InvalidDimension {
                what: "radiusY",
                value: radius_y,
            });
        }
        let start = Point::new(center.x - radius_x, center.y - radius_y)?;
        let bounds = Rectangle::new(start, radius_x * 2.0, radius_y * 2.0)?;
        Ok(Self {
            center,
            radius_x,
            radius_y,
            bounds,
        })
    }

    /// Returns the center of the ellipse.
    pub fn center(self) -> Point {
        self.center
    }

    /// Returns the semi-axis radius along x.
    pub fn radius_x(self) -> f32 {
        self.radius_x
    }

    /// Returns the semi-axis radius along y.
    pub fn radius_y(self) -> f32 {
        self.radius_y
    }

    /// The axis-aligned bounding rectangle of the ellipse.
    pub fn bounding_rect(self) -> Rectangle {
        self.bounds
    }

    /// Whether the point lies in the strict interior of the ellipse.
    ///
    /// Uses the normalized quadratic form `(dx/rx)^2 + (dy/ry)^2 < 1`; a
    /// degenerate ellipse with a zero radius contains no points.
    pub fn contains_point(self, point: Point) -> bool {
        if self.radius_x <= 0.0 || self.radius_y <= 0.0 {
            return false;
        }
        let dx = (point.x - self.center.x) / self.radius_x;
        let dy = (point.y - self.center.y) / self.radius_y;
        dx * dx + dy * dy < 1.0
    }

    /// Vertices of the sampled boundary polygon, [`BOUNDARY_SAMPLES`] points
    /// at uniform parameter steps around the ellipse.
    pub fn boundary_points(self) -> impl Iterator<Item = Point> {
        let step = TAU / BOUNDARY_SAMPLES as f32;
        (0..BOUNDARY_SAMPLES).map(move |i| {
            let theta = i as f32 * step;
            Point {
                x: self.center.x + self.radius_x * theta.cos(),
                y: self.center.y + self.radius_y * theta.sin(),
            }
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEllipse {
    center: Point,
    radius_x: f32,
    radius_y: f32,
}

impl TryFrom<RawEllipse> for Ellipse {
    type Error = ValidationError;

    fn try_from(raw: RawEllipse) -> Result<Self, Self::Error> {
        Self::new(raw.center, raw.radius_x, raw.radius_y)
    }
}

/// The closed set of region kinds a graph node can occupy.
///
/// Every predicate dispatches by exhaustive match over the shape-kind pair,
/// so adding a kind forces each predicate site to be revisited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// An axis-aligned rectangle (atom bounding boxes).
    Rectangle(Rectangle),
    /// An axis-aligned ellipse (cut regions).
    Ellipse(Ellipse),
}

impl Shape {
    /// The axis-aligned bounding rectangle of the region.
    pub fn bounding_rect(&self) -> Rectangle {
        match self {
            Shape::Rectangle(rect) => *rect,
            Shape::Ellipse(ellipse) => ellipse.bounding_rect(),
        }
    }

    /// Whether the point lies in the region, under the per-kind conventions
    /// documented at the [module level](self).
    pub fn contains_point(&self, point: Point) -> bool {
        match self {
            Shape::Rectangle(rect) => rect.contains_point(point),
            Shape::Ellipse(ellipse) => ellipse.contains_point(point),
        }
    }

    /// Whether the two regions share area. Symmetric for any shape-kind
    /// pair; containment of one region in the other counts as overlap, while
    /// rectangles sharing only an edge do not.
    pub fn overlaps(&self, other: &Shape) -> bool {
        match (self, other) {
            (Shape::Rectangle(a), Shape::Rectangle(b)) => rectangles_overlap(*a, *b),
            (Shape::Rectangle(rect), Shape::Ellipse(ellipse))
            | (Shape::Ellipse(ellipse), Shape::Rectangle(rect)) => {
                rectangle_ellipse_overlap(*rect, *ellipse)
            }
            (Shape::Ellipse(a), Shape::Ellipse(b)) => ellipses_overlap(*a, *b),
        }
    }

    /// Whether this region fully encloses `other`. Not symmetric: every
    /// corner, extremum, or sampled boundary vertex of `other` is checked
    /// against this region.
    pub fn contains(&self, other: &Shape) -> bool {
        match (self, other) {
            (Shape::Rectangle(outer), Shape::Rectangle(inner)) => {
                inner.corners().iter().all(|&c| outer.contains_point(c))
            }
            (Shape::Rectangle(outer), Shape::Ellipse(inner)) => inner
                .bounding_rect()
                .corners()
                .iter()
                .all(|&c| outer.contains_point(c)),
            (Shape::Ellipse(outer), Shape::Rectangle(inner)) => {
                // An ellipse is convex, so corner containment is exact here.
                inner.corners().iter().all(|&c| outer.contains_point(c))
            }
            (Shape::Ellipse(outer), Shape::Ellipse(inner)) => {
                inner.boundary_points().all(|p| outer.contains_point(p))
            }
        }
    }
}

fn rectangles_overlap(a: Rectangle, b: Rectangle) -> bool {
    a.min_x() < b.max_x() && b.min_x() < a.max_x() && a.min_y() < b.max_y() && b.min_y() < a.max_y()
}

fn rectangle_ellipse_overlap(rect: Rectangle, ellipse: Ellipse) -> bool {
    ellipse.boundary_points().any(|p| rect.contains_point(p))
        || rect.corners().iter().any(|&c| ellipse.contains_point(c))
}

fn ellipses_overlap(a: Ellipse, b: Ellipse) -> bool {
    // Center checks catch coincident ellipses, whose sampled boundary
    // vertices can all land on or outside the other boundary.
    a.contains_point(b.center())
        || b.contains_point(a.center())
        || a.boundary_points().any(|p| b.contains_point(p))
        || b.boundary_points().any(|p| a.contains_point(p))
}
