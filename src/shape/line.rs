use std::fmt;

use serde::{Deserialize, Serialize};

use crate::num::Number;
use crate::point::Point;
use crate::shape::Rectangle;
use crate::size::Size;
use crate::vector::Vector;

/// A 2D line segment from `start` to `end`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Line<T> {
    #[serde(rename = "a")]
    pub start: Point<T>,
    #[serde(rename = "b")]
    pub end: Point<T>,
}

impl<T: Number> Line<T> {
    /// Creates a new line segment.
    pub const fn new(start: Point<T>, end: Point<T>) -> Self {
        Self { start, end }
    }

    /// Creates a line segment from raw coordinates.
    pub const fn from_xy(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Translates both endpoints by the given vector.
    #[must_use]
    pub fn translate(self, vector: Vector<T>) -> Self {
        Self::new(self.start.add(vector), self.end.add(vector))
    }

    /// Re-centers the segment so its midpoint lands on the given point,
    /// preserving direction and length.
    #[must_use]
    pub fn move_to(self, point: Point<T>) -> Self {
        self.translate(point.subtract(self.midpoint()))
    }

    /// Scales the segment about its midpoint.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        self.scale_xy(factor, factor)
    }

    /// Scales the segment about its midpoint by separate factors.
    #[must_use]
    pub fn scale_xy(self, factor_x: f64, factor_y: f64) -> Self {
        let midpoint = self.midpoint();

        Self::new(
            midpoint.add(self.start.subtract(midpoint).multiply_xy(factor_x, factor_y)),
            midpoint.add(self.end.subtract(midpoint).multiply_xy(factor_x, factor_y)),
        )
    }

    /// The segment with swapped endpoints.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Point exactly halfway between the endpoints.
    #[must_use]
    pub fn midpoint(self) -> Point<T> {
        self.start.midpoint(self.end)
    }

    /// Displacement from start to end.
    #[must_use]
    pub fn direction(self) -> Vector<T> {
        self.end.subtract(self.start)
    }

    /// Length of the segment.
    #[must_use]
    pub fn length(self) -> f64 {
        self.direction().length()
    }

    /// Tight axis-aligned bounding rectangle, centered on the midpoint with
    /// the absolute direction as its size.
    #[must_use]
    pub fn bounds(self) -> Rectangle<T> {
        let direction = self.direction().abs();

        Rectangle::new(self.midpoint(), Size::new(direction.x, direction.y))
    }

    /// Checks for tolerantly equal endpoints, in order.
    #[must_use]
    pub fn equal(self, other: Self) -> bool {
        self.start.equal(other.start) && self.end.equal(other.end)
    }

    /// Checks if both endpoints are tolerantly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.start.is_zero() && self.end.is_zero()
    }

    /// Converts to a line with a different scalar type via rounding casts.
    #[must_use]
    pub fn cast<U: Number>(self) -> Line<U> {
        Line::new(self.start.cast(), self.end.cast())
    }
}

impl<T: Number> fmt::Display for Line<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L({};{})", self.start, self.end)
    }
}
