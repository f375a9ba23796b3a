use serde::{Deserialize, Serialize};

use crate::num::Number;
use crate::point::Point;
use crate::shape::{Line, Rectangle};
use crate::size::Size;
use crate::vector::Vector;

/// A 2D polygon as an ordered list of vertices.
///
/// Vertex order is significant (counter-clockwise by convention) and
/// preserved by every operation. Zero vertices is a valid, empty polygon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon<T> {
    pub vertices: Vec<Point<T>>,
}

impl<T: Number> Polygon<T> {
    /// Creates a polygon from its vertices.
    #[must_use]
    pub fn new(vertices: Vec<Point<T>>) -> Self {
        Self { vertices }
    }

    /// The centroid: arithmetic mean of the vertices.
    ///
    /// Undefined for an empty polygon: the division by zero follows the
    /// scalar type (NaN components for floats, a panic for integers).
    /// Callers guard with [`is_empty`](Self::is_empty).
    #[must_use]
    pub fn center(&self) -> Point<T> {
        let mut x = T::zero();
        let mut y = T::zero();
        for vertex in &self.vertices {
            x = x + vertex.x;
            y = y + vertex.y;
        }

        #[allow(clippy::cast_precision_loss)]
        let count = T::of(self.vertices.len() as f64);

        Point::new(x / count, y / count)
    }

    /// Translates every vertex by the given vector.
    #[must_use]
    pub fn translate(&self, vector: Vector<T>) -> Self {
        self.map(|vertex| vertex.add(vector))
    }

    /// Moves the centroid to the given point, preserving shape.
    #[must_use]
    pub fn move_to(&self, point: Point<T>) -> Self {
        self.translate(point.subtract(self.center()))
    }

    /// Scales uniformly about the centroid, recomputed on each call.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        let center = self.center();

        self.map(|vertex| center.add(vertex.subtract(center).multiply(factor)))
    }

    /// Scales about the centroid by separate factors.
    #[must_use]
    pub fn scale_xy(&self, factor_x: f64, factor_y: f64) -> Self {
        let center = self.center();

        self.map(|vertex| center.add(vertex.subtract(center).multiply_xy(factor_x, factor_y)))
    }

    /// The edges joining consecutive vertices, including the closing edge
    /// back to the first. Empty for polygons with fewer than two vertices.
    #[must_use]
    pub fn edges(&self) -> Vec<Line<T>> {
        if self.vertices.len() < 2 {
            return Vec::new();
        }

        (0..self.vertices.len())
            .map(|i| {
                Line::new(
                    self.vertices[i],
                    self.vertices[(i + 1) % self.vertices.len()],
                )
            })
            .collect()
    }

    /// Tight axis-aligned bounding rectangle of the vertices.
    ///
    /// An empty polygon yields the zero rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rectangle<T> {
        let Some(&first) = self.vertices.first() else {
            return Rectangle::new(Point::zero(), Size::zero());
        };

        let (mut min, mut max) = (first, first);
        for vertex in &self.vertices[1..] {
            min = Point::new(min_scalar(min.x, vertex.x), min_scalar(min.y, vertex.y));
            max = Point::new(max_scalar(max.x, vertex.x), max_scalar(max.y, vertex.y));
        }

        Rectangle::from_min_max(min, max)
    }

    /// Checks for the same vertex count and pairwise tolerant equality in
    /// order. No rotation or reflection normalization is applied.
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self.vertices.len() == other.vertices.len()
            && self
                .vertices
                .iter()
                .zip(&other.vertices)
                .all(|(a, b)| a.equal(*b))
    }

    /// Checks if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Checks for the zero polygon, which is the empty one.
    ///
    /// A polygon with a single vertex at the origin still has a vertex and
    /// is not zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.is_empty()
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Converts to a polygon with a different scalar type via rounding
    /// casts.
    #[must_use]
    pub fn cast<U: Number>(&self) -> Polygon<U> {
        Polygon::new(self.vertices.iter().map(|vertex| vertex.cast()).collect())
    }

    fn map(&self, f: impl Fn(Point<T>) -> Point<T>) -> Self {
        Self::new(self.vertices.iter().map(|&vertex| f(vertex)).collect())
    }
}

fn min_scalar<T: Number>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

fn max_scalar<T: Number>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}
