use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::num::{self, cast, Number};
use crate::point::Point;
use crate::shape::{Polygon, Rectangle};
use crate::size::Size;
use crate::vector::Vector;

/// Base-angle presets for regular polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// An edge faces up: base angle `PI * (n - 2) / (2n)`.
    FlatTop,
    /// A vertex faces up: base angle `PI / 2`.
    PointTop,
}

/// Base angle placing a regular polygon's first vertex for the given
/// orientation.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn orientation_angle(sides: usize, orientation: Orientation) -> f64 {
    match orientation {
        Orientation::FlatTop => PI * (sides as f64 - 2.0) / (2.0 * sides as f64),
        Orientation::PointTop => FRAC_PI_2,
    }
}

/// A polygon with equally spaced vertices around a center.
///
/// Vertices are derived lazily, never stored: a unit direction is rotated by
/// `2 * PI / sides` increments starting at the base angle, scaled
/// independently by the width and height (supporting elliptical regular
/// polygons), and translated to the center.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RegularPolygon<T> {
    #[serde(flatten)]
    pub center: Point<T>,
    #[serde(flatten)]
    pub size: Size<T>,
    #[serde(rename = "n")]
    pub sides: usize,
    #[serde(rename = "a")]
    pub angle: f64,
}

impl<T: Number> RegularPolygon<T> {
    /// Creates a new regular polygon.
    pub const fn new(center: Point<T>, size: Size<T>, sides: usize, angle: f64) -> Self {
        Self {
            center,
            size,
            sides,
            angle,
        }
    }

    /// A regular polygon with 3 vertices.
    #[must_use]
    pub fn triangle(center: Point<T>, size: Size<T>, orientation: Orientation) -> Self {
        Self::new(center, size, 3, orientation_angle(3, orientation))
    }

    /// A regular polygon with 4 vertices.
    #[must_use]
    pub fn square(center: Point<T>, size: Size<T>, orientation: Orientation) -> Self {
        Self::new(center, size, 4, orientation_angle(4, orientation))
    }

    /// A regular polygon with 6 vertices.
    #[must_use]
    pub fn hexagon(center: Point<T>, size: Size<T>, orientation: Orientation) -> Self {
        Self::new(center, size, 6, orientation_angle(6, orientation))
    }

    /// Translates the polygon by the given vector.
    #[must_use]
    pub fn translate(self, vector: Vector<T>) -> Self {
        Self::new(self.center.add(vector), self.size, self.sides, self.angle)
    }

    /// Re-centers the polygon at the given point.
    #[must_use]
    pub fn move_to(self, point: Point<T>) -> Self {
        Self::new(point, self.size, self.sides, self.angle)
    }

    /// Scales the size uniformly.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.center, self.size.scale(factor), self.sides, self.angle)
    }

    /// Scales the size by separate factors.
    #[must_use]
    pub fn scale_xy(self, factor_x: f64, factor_y: f64) -> Self {
        Self::new(
            self.center,
            self.size.scale_xy(factor_x, factor_y),
            self.sides,
            self.angle,
        )
    }

    /// Rotates the polygon by the given angle (in radians).
    // TODO: normalize the accumulated base angle into [0, 2*pi)
    #[must_use]
    pub fn rotate(self, angle: f64) -> Self {
        Self::new(self.center, self.size, self.sides, self.angle + angle)
    }

    /// The vertices in counter-clockwise order starting at the base angle.
    ///
    /// Zero sides yields an empty list.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn vertices(self) -> Vec<Point<T>> {
        let step = TAU / self.sides as f64;
        let (width, height) = (self.size.width.as_f64(), self.size.height.as_f64());

        (0..self.sides)
            .map(|i| {
                let (sin, cos) = (self.angle + step * i as f64).sin_cos();

                self.center
                    .add(Vector::new(cast(cos * width), cast(sin * height)))
            })
            .collect()
    }

    /// Converts into a generic polygon with computed vertices.
    #[must_use]
    pub fn to_polygon(self) -> Polygon<T> {
        Polygon::new(self.vertices())
    }

    /// Approximate axis-aligned bounding rectangle.
    ///
    /// Deliberately not tight: the extremal cosine/sine factors are fixed at
    /// 1.0 instead of being derived from the actual vertices.
    #[must_use]
    pub fn bounds(self) -> Rectangle<T> {
        let (max_abs_cos, max_abs_sin) = (1.0, 1.0);

        Rectangle::new(
            self.center,
            self.size.scale_xy(2.0 * max_abs_cos, 2.0 * max_abs_sin),
        )
    }

    /// Checks for tolerantly equal center, size and base angle, and the
    /// same number of sides.
    #[must_use]
    pub fn equal(self, other: Self) -> bool {
        self.center.equal(other.center)
            && self.size.equal(other.size)
            && self.sides == other.sides
            && num::equal(self.angle, other.angle)
    }

    /// Checks if center, size and side count are zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.center.is_zero() && self.size.is_zero() && self.sides == 0
    }

    /// Checks if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.sides == 0
    }

    /// Converts to a regular polygon with a different scalar type via
    /// rounding casts.
    #[must_use]
    pub fn cast<U: Number>(self) -> RegularPolygon<U> {
        RegularPolygon::new(self.center.cast(), self.size.cast(), self.sides, self.angle)
    }
}

impl<T: Number> fmt::Display for RegularPolygon<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RegPol({};{};{};{:.2})",
            self.center, self.size, self.sides, self.angle
        )
    }
}
