use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;
use crate::num::{self, cast, format_number, Number};
use crate::vector::Vector;

/// A located 2D position `(x, y)`.
///
/// Structurally identical to [`Vector`] but semantically distinct:
/// subtracting two points yields the displacement between them. Immutable;
/// every operation returns a new value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Number> Point<T> {
    /// Creates a new point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Displaces the point by the given vector.
    #[must_use]
    pub fn add(self, vector: Vector<T>) -> Self {
        Self::new(self.x + vector.x, self.y + vector.y)
    }

    /// Displaces the point by the given deltas.
    #[must_use]
    pub fn add_xy(self, delta_x: T, delta_y: T) -> Self {
        Self::new(self.x + delta_x, self.y + delta_y)
    }

    /// Returns the displacement from the other point to this point.
    #[must_use]
    pub fn subtract(self, other: Self) -> Vector<T> {
        Vector::new(self.x - other.x, self.y - other.y)
    }

    /// Multiplies both coordinates by the factor.
    #[must_use]
    pub fn multiply(self, factor: f64) -> Self {
        Self::new(num::scale(self.x, factor), num::scale(self.y, factor))
    }

    /// Multiplies the coordinates by separate factors.
    #[must_use]
    pub fn multiply_xy(self, factor_x: f64, factor_y: f64) -> Self {
        Self::new(num::scale(self.x, factor_x), num::scale(self.y, factor_y))
    }

    /// Divides both coordinates by the factor. A zero factor returns the
    /// point unchanged.
    #[must_use]
    pub fn divide(self, factor: f64) -> Self {
        Self::new(num::divide(self.x, factor), num::divide(self.y, factor))
    }

    /// Divides the coordinates by separate factors. Zero factors leave the
    /// corresponding coordinate unchanged.
    #[must_use]
    pub fn divide_xy(self, factor_x: f64, factor_y: f64) -> Self {
        Self::new(num::divide(self.x, factor_x), num::divide(self.y, factor_y))
    }

    /// Point exactly halfway towards the other point.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new(
            num::midpoint(self.x, other.x),
            num::midpoint(self.y, other.y),
        )
    }

    /// Linear interpolation towards the other point (not clamped to
    /// `[0, 1]`).
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(num::lerp(self.x, other.x, t), num::lerp(self.y, other.y, t))
    }

    /// Euclidean distance to the other point.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        other.subtract(self).length()
    }

    /// Squared euclidean distance, avoiding the square root for
    /// comparisons.
    #[must_use]
    pub fn distance_to_squared(self, other: Self) -> f64 {
        other.subtract(self).length_squared()
    }

    /// Angle of the displacement towards the other point, in `(-PI, PI]`.
    #[must_use]
    pub fn angle_to(self, other: Self) -> f64 {
        other.subtract(self).angle()
    }

    /// Checks for tolerantly equal coordinates.
    #[must_use]
    pub fn equal(self, other: Self) -> bool {
        num::equal(self.x, other.x) && num::equal(self.y, other.y)
    }

    /// Checks if both coordinates are tolerantly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.equal(Self::zero())
    }

    /// Applies the full affine transform, translation included.
    #[must_use]
    pub fn transform(self, matrix: &Matrix) -> Self {
        matrix.transform_point(self)
    }

    /// Converts to a point with a different scalar type via rounding casts.
    #[must_use]
    pub fn cast<U: Number>(self) -> Point<U> {
        Point::new(cast(self.x.as_f64()), cast(self.y.as_f64()))
    }

    /// Returns the x, y coordinates in standard order.
    pub fn xy(self) -> (T, T) {
        (self.x, self.y)
    }
}

impl<T: Number> Add<Vector<T>> for Point<T> {
    type Output = Self;

    fn add(self, vector: Vector<T>) -> Self {
        Point::add(self, vector)
    }
}

impl<T: Number> Sub<Vector<T>> for Point<T> {
    type Output = Self;

    fn sub(self, vector: Vector<T>) -> Self {
        self.add(vector.negate())
    }
}

impl<T: Number> Sub for Point<T> {
    type Output = Vector<T>;

    fn sub(self, other: Self) -> Vector<T> {
        self.subtract(other)
    }
}

impl<T: Number> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", format_number(self.x), format_number(self.y))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::num::DELTA;

    const TOL: f64 = DELTA;

    fn assert_point<T: Number>(p: Point<T>, x: f64, y: f64) {
        assert_abs_diff_eq!(p.x.as_f64(), x, epsilon = TOL);
        assert_abs_diff_eq!(p.y.as_f64(), y, epsilon = TOL);
    }

    #[test]
    fn displacement() {
        let p = Point::new(1.0, 2.0);

        assert_point(p.add(Vector::new(2.0, -1.0)), 3.0, 1.0);
        assert_point(p.add_xy(-1.0, 1.0), 0.0, 3.0);
    }

    #[test]
    fn subtracting_points_yields_vector() {
        let a = Point::new(4.0, 1.0);
        let b = Point::new(1.0, 5.0);

        let v = a.subtract(b);
        assert_abs_diff_eq!(v.x, 3.0, epsilon = TOL);
        assert_abs_diff_eq!(v.y, -4.0, epsilon = TOL);
        assert!((a - b).equal(v));
    }

    #[test]
    fn translate_round_trip() {
        let p = Point::new(1.5, -2.5);
        let v = Vector::new(3.25, 4.75);

        assert!(p.add(v).add(v.negate()).equal(p));
        assert!((p + v - v).equal(p));
    }

    #[test]
    fn scaling() {
        let p = Point::new(4.0, -6.0);

        assert_point(p.multiply(0.5), 2.0, -3.0);
        assert_point(p.multiply_xy(0.5, 2.0), 2.0, -12.0);
        assert_point(p.divide(2.0), 2.0, -3.0);
        assert_point(p.divide(0.0), 4.0, -6.0);
        assert_point(p.divide_xy(4.0, 0.0), 1.0, -6.0);
    }

    #[test]
    fn midpoint_and_lerp() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 4.0);

        assert_point(a.midpoint(b), 5.0, 2.0);
        assert_point(a.lerp(b, 0.25), 2.5, 1.0);
        assert_point(a.lerp(b, 0.0), 0.0, 0.0);
        assert_point(a.lerp(b, 1.0), 10.0, 4.0);
        assert_eq!(Point::new(0, 0).midpoint(Point::new(0, 5)).xy(), (0, 3));
    }

    #[test]
    fn distances_and_angle() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);

        assert_abs_diff_eq!(a.distance_to(b), 5.0, epsilon = TOL);
        assert_abs_diff_eq!(a.distance_to_squared(b), 25.0, epsilon = TOL);
        assert_abs_diff_eq!(
            Point::new(0.0, 0.0).angle_to(Point::new(1.0, 1.0)),
            FRAC_PI_4,
            epsilon = TOL
        );
    }

    #[test]
    fn tolerant_equality() {
        let p = Point::new(1.0, 2.0);

        assert!(p.equal(Point::new(1.0 + 1e-7, 2.0 - 1e-7)));
        assert!(!p.equal(Point::new(1.0 + 1e-5, 2.0)));
        assert!(Point::<f64>::zero().is_zero());
        assert!(!Point::new(0, 1).is_zero());
    }

    #[test]
    fn cast_between_scalars() {
        assert_eq!(Point::new(1.5, -2.4).cast::<i32>().xy(), (2, -2));
        assert_point(Point::new(3, -4).cast::<f64>(), 3.0, -4.0);
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(1, -2).to_string(), "(+1,-2)");
        assert_eq!(Point::new(0.5, 29.59).to_string(), "(+0.50,+29.59)");
    }
}
