use std::fmt;

use serde::{Deserialize, Serialize};

use crate::num::Number;
use crate::padding::Padding;
use crate::point::Point;
use crate::shape::{Line, Polygon};
use crate::size::Size;
use crate::vector::Vector;

/// A 2D axis-aligned rectangle represented by its center and size.
///
/// The min/max corners are derived, not stored. For integer scalars the
/// halving is asymmetric (`min = center - size/2`, `max = min + size`) so an
/// odd size still spans exactly `size` units.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Rectangle<T> {
    #[serde(flatten)]
    pub center: Point<T>,
    #[serde(flatten)]
    pub size: Size<T>,
}

impl<T: Number> Rectangle<T> {
    /// Creates a new rectangle from center and size.
    pub const fn new(center: Point<T>, size: Size<T>) -> Self {
        Self { center, size }
    }

    /// Creates a rectangle from its minimum corner and size.
    #[must_use]
    pub fn from_min(min: Point<T>, size: Size<T>) -> Self {
        let two = T::one() + T::one();
        let (width, height) = size.xy();

        Self::new(min.add_xy(width / two, height / two), size)
    }

    /// Creates a rectangle from its minimum and maximum corners.
    #[must_use]
    pub fn from_min_max(min: Point<T>, max: Point<T>) -> Self {
        let diagonal = max.subtract(min);

        Self::from_min(min, Size::new(diagonal.x, diagonal.y))
    }

    /// Translates the rectangle by the given vector.
    #[must_use]
    pub fn translate(self, vector: Vector<T>) -> Self {
        Self::new(self.center.add(vector), self.size)
    }

    /// Re-centers the rectangle at the given point, preserving the size.
    #[must_use]
    pub fn move_to(self, point: Point<T>) -> Self {
        Self::new(point, self.size)
    }

    /// Scales the size uniformly about the center.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.center, self.size.scale(factor))
    }

    /// Scales the size about the center by separate factors.
    #[must_use]
    pub fn scale_xy(self, factor_x: f64, factor_y: f64) -> Self {
        Self::new(self.center, self.size.scale_xy(factor_x, factor_y))
    }

    /// Replaces the size, keeping the center.
    #[must_use]
    pub fn resize(self, size: Size<T>) -> Self {
        Self::new(self.center, size)
    }

    /// Expands the size by the same amount in both dimensions.
    #[must_use]
    pub fn expand(self, amount: T) -> Self {
        Self::new(self.center, self.size.expand(amount))
    }

    /// Expands the size by separate amounts.
    #[must_use]
    pub fn expand_xy(self, amount_x: T, amount_y: T) -> Self {
        Self::new(self.center, self.size.expand_xy(amount_x, amount_y))
    }

    /// Shrinks the size by the same amount in both dimensions.
    #[must_use]
    pub fn shrink(self, amount: T) -> Self {
        Self::new(self.center, self.size.shrink(amount))
    }

    /// Shrinks the size by separate amounts.
    #[must_use]
    pub fn shrink_xy(self, amount_x: T, amount_y: T) -> Self {
        Self::new(self.center, self.size.shrink_xy(amount_x, amount_y))
    }

    /// Shrinks by per-side amounts and re-centers accordingly.
    #[must_use]
    pub fn inset(self, padding: Padding<T>) -> Self {
        Self::from_min_max(
            self.min().add_xy(padding.left, padding.bottom),
            self.max().add_xy(-padding.right, -padding.top),
        )
    }

    /// The rectangle width.
    #[must_use]
    pub fn width(self) -> T {
        self.size.width
    }

    /// The rectangle height.
    #[must_use]
    pub fn height(self) -> T {
        self.size.height
    }

    /// The minimum (bottom-left) corner.
    #[must_use]
    pub fn min(self) -> Point<T> {
        let two = T::one() + T::one();
        let (width, height) = self.size.xy();

        self.center.add_xy(-(width / two), -(height / two))
    }

    /// The maximum (top-right) corner.
    #[must_use]
    pub fn max(self) -> Point<T> {
        let two = T::one() + T::one();
        let (width, height) = self.size.xy();

        self.center.add_xy(width - width / two, height - height / two)
    }

    /// The bottom-left corner.
    #[must_use]
    pub fn bottom_left(self) -> Point<T> {
        self.min()
    }

    /// The bottom-right corner.
    #[must_use]
    pub fn bottom_right(self) -> Point<T> {
        Point::new(self.max().x, self.min().y)
    }

    /// The top-right corner.
    #[must_use]
    pub fn top_right(self) -> Point<T> {
        self.max()
    }

    /// The top-left corner.
    #[must_use]
    pub fn top_left(self) -> Point<T> {
        Point::new(self.min().x, self.max().y)
    }

    /// The corners in counter-clockwise order starting at the min corner.
    #[must_use]
    pub fn vertices(self) -> Vec<Point<T>> {
        vec![
            self.bottom_left(),
            self.bottom_right(),
            self.top_right(),
            self.top_left(),
        ]
    }

    /// The edges joining consecutive corners, same winding as
    /// [`vertices`](Self::vertices).
    #[must_use]
    pub fn edges(self) -> Vec<Line<T>> {
        vec![
            Line::new(self.bottom_left(), self.bottom_right()),
            Line::new(self.bottom_right(), self.top_right()),
            Line::new(self.top_right(), self.top_left()),
            Line::new(self.top_left(), self.bottom_left()),
        ]
    }

    /// Area of the rectangle.
    #[must_use]
    pub fn area(self) -> T {
        self.size.area()
    }

    /// Perimeter of the rectangle.
    #[must_use]
    pub fn perimeter(self) -> T {
        self.size.perimeter()
    }

    /// Aspect ratio (`width / height`).
    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        self.size.aspect_ratio()
    }

    /// The rectangle is its own bounding box.
    #[must_use]
    pub fn bounds(self) -> Self {
        self
    }

    /// Checks if the point lies within the rectangle, boundary included.
    #[must_use]
    pub fn contains(self, point: Point<T>) -> bool {
        let (min, max) = (self.min(), self.max());

        min.x <= point.x && point.x <= max.x && min.y <= point.y && point.y <= max.y
    }

    /// Projects the point into `[min, max]` per axis.
    #[must_use]
    pub fn clamp(self, point: Point<T>) -> Point<T> {
        let (min, max) = (self.min(), self.max());

        Point::new(
            clamp_scalar(point.x, min.x, max.x),
            clamp_scalar(point.y, min.y, max.y),
        )
    }

    /// Converts into a generic polygon with computed vertices.
    #[must_use]
    pub fn to_polygon(self) -> Polygon<T> {
        Polygon::new(self.vertices())
    }

    /// Checks for tolerantly equal center and size.
    #[must_use]
    pub fn equal(self, other: Self) -> bool {
        self.center.equal(other.center) && self.size.equal(other.size)
    }

    /// Checks if center and size are tolerantly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.center.is_zero() && self.size.is_zero()
    }

    /// Converts to a rectangle with a different scalar type via rounding
    /// casts.
    #[must_use]
    pub fn cast<U: Number>(self) -> Rectangle<U> {
        Rectangle::new(self.center.cast(), self.size.cast())
    }
}

fn clamp_scalar<T: Number>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

impl<T: Number> fmt::Display for Rectangle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min(), self.max())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::num::DELTA;

    const TOL: f64 = DELTA;

    fn rect(cx: f64, cy: f64, w: f64, h: f64) -> Rectangle<f64> {
        Rectangle::new(Point::new(cx, cy), Size::new(w, h))
    }

    #[test]
    fn corners() {
        let r = rect(1.0, 2.0, 2.0, 3.0);

        assert!(r.min().equal(Point::new(0.0, 0.5)));
        assert!(r.max().equal(Point::new(2.0, 3.5)));
        assert!(r.bottom_left().equal(Point::new(0.0, 0.5)));
        assert!(r.bottom_right().equal(Point::new(2.0, 0.5)));
        assert!(r.top_right().equal(Point::new(2.0, 3.5)));
        assert!(r.top_left().equal(Point::new(0.0, 3.5)));
    }

    #[test]
    fn integer_corners_with_odd_size() {
        let r = Rectangle::new(Point::new(0, 0), Size::new(3, 5));

        assert_eq!(r.min().xy(), (-1, -2));
        assert_eq!(r.max().xy(), (2, 3));
        assert_eq!(r.max().subtract(r.min()).xy(), (3, 5));
    }

    #[test]
    fn construction_from_corners() {
        let r = Rectangle::from_min(Point::new(0.0, 0.5), Size::new(2.0, 3.0));
        assert!(r.equal(rect(1.0, 2.0, 2.0, 3.0)));

        let r = Rectangle::from_min_max(Point::new(0.0, 0.5), Point::new(2.0, 3.5));
        assert!(r.equal(rect(1.0, 2.0, 2.0, 3.0)));

        let r = Rectangle::<i32>::from_min(Point::new(0, 0), Size::new(3, 5));
        assert_eq!(r.min().xy(), (0, 0));
        assert_eq!(r.max().xy(), (3, 5));
    }

    #[test]
    fn movement_and_resizing() {
        let r = rect(1.0, 2.0, 4.0, 6.0);

        assert!(r.translate(Vector::new(1.0, -1.0)).equal(rect(2.0, 1.0, 4.0, 6.0)));
        assert!(r.move_to(Point::new(0.0, 0.0)).equal(rect(0.0, 0.0, 4.0, 6.0)));
        assert!(r.scale(0.5).equal(rect(1.0, 2.0, 2.0, 3.0)));
        assert!(r.scale_xy(0.5, 2.0).equal(rect(1.0, 2.0, 2.0, 12.0)));
        assert!(r.resize(Size::new(1.0, 1.0)).equal(rect(1.0, 2.0, 1.0, 1.0)));
        assert!(r.expand(2.0).equal(rect(1.0, 2.0, 6.0, 8.0)));
        assert!(r.shrink_xy(2.0, 4.0).equal(rect(1.0, 2.0, 2.0, 2.0)));
    }

    #[test]
    fn inset_shrinks_and_recenters() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        let inset = r.inset(Padding::new(1.0, 2.0, 3.0, 4.0));

        // min moves by (left, bottom), max by (-right, -top).
        assert!(inset.min().equal(Point::new(-1.0, -2.0)));
        assert!(inset.max().equal(Point::new(3.0, 4.0)));
        assert!(inset.size.equal(Size::new(4.0, 6.0)));

        let uniform = r.inset(Padding::uniform(2.0));
        assert!(uniform.equal(rect(0.0, 0.0, 6.0, 6.0)));
    }

    #[test]
    fn inset_with_negative_padding_grows() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        let grown = r.inset(Padding::new(1.5, -2.0, 0.0, 1.0));

        assert!(grown.size.equal(Size::new(11.0, 8.5)));
        assert!(grown.center.equal(Point::new(1.5, -0.75)));
    }

    #[test]
    fn contains_includes_boundary() {
        let r = rect(0.0, 0.0, 4.0, 2.0);

        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(2.0, 1.0)));
        assert!(r.contains(Point::new(-2.0, -1.0)));
        assert!(!r.contains(Point::new(2.1, 0.0)));
        assert!(!r.contains(Point::new(0.0, 1.1)));
    }

    #[test]
    fn clamp_projects_per_axis() {
        let r = rect(0.0, 0.0, 4.0, 2.0);

        assert!(r.clamp(Point::new(5.0, 0.5)).equal(Point::new(2.0, 0.5)));
        assert!(r.clamp(Point::new(-5.0, 5.0)).equal(Point::new(-2.0, 1.0)));
        assert!(r.clamp(Point::new(1.0, 0.5)).equal(Point::new(1.0, 0.5)));
    }

    #[test]
    fn vertices_and_edges_share_winding() {
        let r = rect(0.0, 0.0, 2.0, 2.0);
        let vertices = r.vertices();
        let edges = r.edges();

        assert_eq!(vertices.len(), 4);
        assert_eq!(edges.len(), 4);
        for (i, edge) in edges.iter().enumerate() {
            assert!(edge.start.equal(vertices[i]));
            assert!(edge.end.equal(vertices[(i + 1) % 4]));
        }
    }

    #[test]
    fn measurements() {
        let r = rect(1.0, 2.0, 4.0, 6.0);

        assert_abs_diff_eq!(r.area(), 24.0, epsilon = TOL);
        assert_abs_diff_eq!(r.perimeter(), 20.0, epsilon = TOL);
        assert_abs_diff_eq!(r.aspect_ratio(), 2.0 / 3.0, epsilon = TOL);
        assert_abs_diff_eq!(r.width(), 4.0, epsilon = TOL);
        assert_abs_diff_eq!(r.height(), 6.0, epsilon = TOL);
    }

    #[test]
    fn bounds_is_identity() {
        let r = rect(1.0, 2.0, 4.0, 6.0);

        assert!(r.bounds().equal(r));
    }

    #[test]
    fn polygon_conversion() {
        let p = rect(0.0, 0.0, 2.0, 2.0).to_polygon();

        assert_eq!(p.len(), 4);
        assert!(p.vertices[0].equal(Point::new(-1.0, -1.0)));
        assert!(p.vertices[2].equal(Point::new(1.0, 1.0)));
    }

    #[test]
    fn equality_and_zero() {
        let r = rect(1.0, 2.0, 3.0, 4.0);

        assert!(r.equal(rect(1.0 + 1e-7, 2.0, 3.0, 4.0 - 1e-7)));
        assert!(!r.equal(rect(1.0, 2.0, 3.0, 4.1)));
        assert!(rect(0.0, 0.0, 0.0, 0.0).is_zero());
        assert!(!r.is_zero());
    }

    #[test]
    fn cast_between_scalars() {
        let r = rect(1.5, -2.4, 3.6, 4.4).cast::<i32>();

        assert_eq!(r.center.xy(), (2, -2));
        assert_eq!(r.size.xy(), (4, 4));
    }

    #[test]
    fn display() {
        assert_eq!(rect(1.0, 2.0, 2.0, 3.0).to_string(), "(+0,+0.50)-(+2,+3.50)");
    }
}
