use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;
use crate::num::{self, cast, equal_delta, format_number, Number, DELTA};

/// A free 2D displacement `(x, y)`, with no fixed location.
///
/// Structurally identical to [`Point`](crate::Point) but semantically
/// distinct: translations are not applied to vectors. Immutable; every
/// operation returns a new value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vector<T> {
    pub x: T,
    pub y: T,
}

impl<T: Number> Vector<T> {
    /// Creates a new vector.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a vector of the given length pointing at the given angle
    /// (in radians), rounding components for integer scalars.
    #[must_use]
    pub fn from_angle(angle: f64, length: f64) -> Self {
        let (sin, cos) = angle.sin_cos();

        Self::new(cast(length * cos), cast(length * sin))
    }

    /// The zero vector `(0, 0)`.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// The identity vector `(1, 1)`.
    #[must_use]
    pub fn one() -> Self {
        Self::new(T::one(), T::one())
    }

    /// The up (+y) unit vector `(0, 1)`.
    #[must_use]
    pub fn up() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// The down (-y) unit vector `(0, -1)`.
    #[must_use]
    pub fn down() -> Self {
        Self::new(T::zero(), -T::one())
    }

    /// The right (+x) unit vector `(1, 0)`.
    #[must_use]
    pub fn right() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// The left (-x) unit vector `(-1, 0)`.
    #[must_use]
    pub fn left() -> Self {
        Self::new(-T::one(), T::zero())
    }

    /// Adds the given vector componentwise.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Adds the given deltas componentwise.
    #[must_use]
    pub fn add_xy(self, delta_x: T, delta_y: T) -> Self {
        Self::new(self.x + delta_x, self.y + delta_y)
    }

    /// Subtracts the given vector componentwise.
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Subtracts the given deltas componentwise.
    #[must_use]
    pub fn subtract_xy(self, delta_x: T, delta_y: T) -> Self {
        Self::new(self.x - delta_x, self.y - delta_y)
    }

    /// Multiplies both components by the factor.
    #[must_use]
    pub fn multiply(self, factor: f64) -> Self {
        Self::new(num::scale(self.x, factor), num::scale(self.y, factor))
    }

    /// Multiplies the components by separate factors.
    #[must_use]
    pub fn multiply_xy(self, factor_x: f64, factor_y: f64) -> Self {
        Self::new(num::scale(self.x, factor_x), num::scale(self.y, factor_y))
    }

    /// Divides both components by the factor. A zero factor returns the
    /// vector unchanged.
    #[must_use]
    pub fn divide(self, factor: f64) -> Self {
        Self::new(num::divide(self.x, factor), num::divide(self.y, factor))
    }

    /// Divides the components by separate factors. Zero factors leave the
    /// corresponding component unchanged.
    #[must_use]
    pub fn divide_xy(self, factor_x: f64, factor_y: f64) -> Self {
        Self::new(num::divide(self.x, factor_x), num::divide(self.y, factor_y))
    }

    /// Returns the vector with opposite direction.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Returns the vector with absolute components.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(num::abs(self.x), num::abs(self.y))
    }

    /// Rotates the vector by the given angle (in radians).
    #[must_use]
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let (x, y) = (self.x.as_f64(), self.y.as_f64());

        Self::new(cast(x * cos - y * sin), cast(x * sin + y * cos))
    }

    /// Scales the vector so its length becomes `length`.
    ///
    /// Degenerate for zero-length vectors; callers guard with
    /// [`is_zero`](Self::is_zero) or use [`normalize`](Self::normalize).
    #[must_use]
    pub fn resize(self, length: f64) -> Self {
        self.multiply(length / self.length())
    }

    /// Scales the vector to length 1.
    ///
    /// The zero vector normalizes to the canonical `(1, 0)`.
    #[must_use]
    pub fn normalize(self) -> Self {
        if self.is_zero() {
            return Self::right();
        }

        self.resize(1.0)
    }

    /// Linear interpolation towards the other vector (not clamped to
    /// `[0, 1]`).
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(num::lerp(self.x, other.x, t), num::lerp(self.y, other.y, t))
    }

    /// Dot (scalar) product.
    #[must_use]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Scalar z-component of the 3D cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Perpendicular vector `(-y, x)`. Faster equivalent to
    /// `rotate(PI / 2)`.
    #[must_use]
    pub fn normal(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// The vector's length (magnitude).
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.as_f64().hypot(self.y.as_f64())
    }

    /// The squared length, avoiding the square root for comparisons.
    #[must_use]
    pub fn length_squared(self) -> f64 {
        let (x, y) = (self.x.as_f64(), self.y.as_f64());

        x * x + y * y
    }

    /// The vector's angle in radians, in `(-PI, PI]`.
    #[must_use]
    pub fn angle(self) -> f64 {
        self.y.as_f64().atan2(self.x.as_f64())
    }

    /// Checks if the vector is strictly shorter than the threshold,
    /// comparing squared lengths to avoid the square root.
    #[must_use]
    pub fn shorter_than(self, threshold: T) -> bool {
        let threshold = threshold.as_f64();

        self.length_squared() < threshold * threshold
    }

    /// Checks for tolerantly equal components.
    #[must_use]
    pub fn equal(self, other: Self) -> bool {
        num::equal(self.x, other.x) && num::equal(self.y, other.y)
    }

    /// Checks if both components are tolerantly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.equal(Self::zero())
    }

    /// Checks if the vector is tolerantly normalized.
    #[must_use]
    pub fn is_unit(self) -> bool {
        equal_delta(self.length_squared(), 1.0, DELTA)
    }

    /// Applies the linear part of an affine transform (translation does not
    /// affect a free vector).
    #[must_use]
    pub fn transform(self, matrix: &Matrix) -> Self {
        matrix.transform_vector(self)
    }

    /// Converts to a vector with a different scalar type via rounding casts.
    #[must_use]
    pub fn cast<U: Number>(self) -> Vector<U> {
        Vector::new(cast(self.x.as_f64()), cast(self.y.as_f64()))
    }

    /// Returns the x, y components in standard order.
    pub fn xy(self) -> (T, T) {
        (self.x, self.y)
    }
}

impl<T: Number> Add for Vector<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector::add(self, other)
    }
}

impl<T: Number> Sub for Vector<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.subtract(other)
    }
}

impl<T: Number> Neg for Vector<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl<T: Number> Mul<f64> for Vector<T> {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        self.multiply(factor)
    }
}

impl<T: Number> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{27e8}{},{}\u{27e9}", format_number(self.x), format_number(self.y))
    }
}
