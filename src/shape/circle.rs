use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::num::{self, cast, format_number, Number};
use crate::point::Point;
use crate::shape::Rectangle;
use crate::size::Size;
use crate::vector::Vector;

/// A 2D circle defined by center and radius.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Circle<T> {
    #[serde(flatten)]
    pub center: Point<T>,
    #[serde(rename = "r")]
    pub radius: T,
}

impl<T: Number> Circle<T> {
    /// Creates a new circle.
    pub const fn new(center: Point<T>, radius: T) -> Self {
        Self { center, radius }
    }

    /// Translates the circle by the given vector.
    #[must_use]
    pub fn translate(self, vector: Vector<T>) -> Self {
        Self::new(self.center.add(vector), self.radius)
    }

    /// Re-centers the circle at the given point, preserving the radius.
    #[must_use]
    pub fn move_to(self, point: Point<T>) -> Self {
        Self::new(point, self.radius)
    }

    /// Scales the radius by the given factor.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.center, num::scale(self.radius, factor))
    }

    /// Replaces the radius.
    #[must_use]
    pub fn resize(self, radius: T) -> Self {
        Self::new(self.center, radius)
    }

    /// Increases the radius by the given amount.
    #[must_use]
    pub fn expand(self, amount: T) -> Self {
        Self::new(self.center, self.radius + amount)
    }

    /// Decreases the radius by the given amount.
    #[must_use]
    pub fn shrink(self, amount: T) -> Self {
        Self::new(self.center, self.radius - amount)
    }

    /// Area (`PI * radius^2`).
    #[must_use]
    pub fn area(self) -> f64 {
        let radius = self.radius.as_f64();

        PI * radius * radius
    }

    /// Circumference (`2 * PI * radius`).
    #[must_use]
    pub fn circumference(self) -> f64 {
        2.0 * PI * self.radius.as_f64()
    }

    /// Diameter (`2 * radius`).
    #[must_use]
    pub fn diameter(self) -> T {
        self.radius + self.radius
    }

    /// Tight axis-aligned bounding rectangle.
    #[must_use]
    pub fn bounds(self) -> Rectangle<T> {
        Rectangle::new(self.center, Size::new(self.diameter(), self.diameter()))
    }

    /// Checks if the point lies strictly inside the circle. Points on the
    /// boundary are outside, matching the strict squared-distance primitive.
    #[must_use]
    pub fn contains(self, point: Point<T>) -> bool {
        self.center.subtract(point).shorter_than(self.radius)
    }

    /// Checks for tolerantly equal center and radius.
    #[must_use]
    pub fn equal(self, other: Self) -> bool {
        self.center.equal(other.center) && num::equal(self.radius, other.radius)
    }

    /// Checks if center and radius are tolerantly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.center.is_zero() && num::equal(self.radius, T::zero())
    }

    /// Converts to a circle with a different scalar type via rounding
    /// casts.
    #[must_use]
    pub fn cast<U: Number>(self) -> Circle<U> {
        Circle::new(self.center.cast(), cast(self.radius.as_f64()))
    }
}

impl<T: Number> fmt::Display for Circle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C({};{})", self.center, format_number(self.radius))
    }
}
