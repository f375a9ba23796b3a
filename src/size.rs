use std::fmt;

use serde::{Deserialize, Serialize};

use crate::num::{self, cast, format_number, Number};
use crate::vector::Vector;

/// 2D extents `(width, height)`.
///
/// Non-negative by convention; negative sizes are tolerated, never
/// rejected.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Size<T> {
    #[serde(rename = "w")]
    pub width: T,
    #[serde(rename = "h")]
    pub height: T,
}

impl<T: Number> Size<T> {
    /// Creates a new size.
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }

    /// The zero size.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Scales both dimensions by the factor.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(num::scale(self.width, factor), num::scale(self.height, factor))
    }

    /// Scales the dimensions by separate factors.
    #[must_use]
    pub fn scale_xy(self, factor_x: f64, factor_y: f64) -> Self {
        Self::new(
            num::scale(self.width, factor_x),
            num::scale(self.height, factor_y),
        )
    }

    /// Expands both dimensions by the same delta.
    #[must_use]
    pub fn expand(self, delta: T) -> Self {
        Self::new(self.width + delta, self.height + delta)
    }

    /// Expands the dimensions by separate deltas.
    #[must_use]
    pub fn expand_xy(self, delta_width: T, delta_height: T) -> Self {
        Self::new(self.width + delta_width, self.height + delta_height)
    }

    /// Shrinks both dimensions by the same delta.
    #[must_use]
    pub fn shrink(self, delta: T) -> Self {
        Self::new(self.width - delta, self.height - delta)
    }

    /// Shrinks the dimensions by separate deltas.
    #[must_use]
    pub fn shrink_xy(self, delta_width: T, delta_height: T) -> Self {
        Self::new(self.width - delta_width, self.height - delta_height)
    }

    /// Area (`width * height`).
    #[must_use]
    pub fn area(self) -> T {
        self.width * self.height
    }

    /// Perimeter (`2 * (width + height)`).
    #[must_use]
    pub fn perimeter(self) -> T {
        let sum = self.width + self.height;

        sum + sum
    }

    /// Aspect ratio (`width / height`), following IEEE division for a zero
    /// height.
    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        self.width.as_f64() / self.height.as_f64()
    }

    /// The size as a displacement vector.
    #[must_use]
    pub fn to_vector(self) -> Vector<T> {
        Vector::new(self.width, self.height)
    }

    /// Checks for tolerantly equal dimensions.
    #[must_use]
    pub fn equal(self, other: Self) -> bool {
        num::equal(self.width, other.width) && num::equal(self.height, other.height)
    }

    /// Checks if both dimensions are tolerantly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.equal(Self::zero())
    }

    /// Converts to a size with a different scalar type via rounding casts.
    #[must_use]
    pub fn cast<U: Number>(self) -> Size<U> {
        Size::new(cast(self.width.as_f64()), cast(self.height.as_f64()))
    }

    /// Returns the width, height dimensions in standard order.
    pub fn xy(self) -> (T, T) {
        (self.width, self.height)
    }
}

impl<T: Number> fmt::Display for Size<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", format_number(self.width), format_number(self.height))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::num::DELTA;

    const TOL: f64 = DELTA;

    #[test]
    fn scaling() {
        let s = Size::new(4.0, 6.0);

        assert!(s.scale(0.5).equal(Size::new(2.0, 3.0)));
        assert!(s.scale_xy(0.5, 2.0).equal(Size::new(2.0, 12.0)));
        assert_eq!(Size::new(3, 5).scale(0.5).xy(), (2, 3));
    }

    #[test]
    fn expanding_and_shrinking() {
        let s = Size::new(4, 6);

        assert_eq!(s.expand(2).xy(), (6, 8));
        assert_eq!(s.expand_xy(1, 2).xy(), (5, 8));
        assert_eq!(s.shrink(2).xy(), (2, 4));
        assert_eq!(s.shrink_xy(1, 2).xy(), (3, 4));
    }

    #[test]
    fn negative_sizes_are_tolerated() {
        let s = Size::new(2, 3).shrink(5);

        assert_eq!(s.xy(), (-3, -2));
        assert_eq!(s.area(), 6);
    }

    #[test]
    fn area_and_perimeter() {
        let s = Size::new(4.0, 6.0);

        assert_abs_diff_eq!(s.area(), 24.0, epsilon = TOL);
        assert_abs_diff_eq!(s.perimeter(), 20.0, epsilon = TOL);
        assert_abs_diff_eq!(s.aspect_ratio(), 2.0 / 3.0, epsilon = TOL);
    }

    #[test]
    fn zero_height_aspect_ratio_follows_ieee() {
        assert!(Size::new(1.0, 0.0).aspect_ratio().is_infinite());
    }

    #[test]
    fn conversions() {
        let s = Size::new(1.5, 2.5);

        assert_eq!(s.cast::<i32>().xy(), (2, 3));
        assert!(s.to_vector().equal(Vector::new(1.5, 2.5)));
    }

    #[test]
    fn equality_and_zero() {
        assert!(Size::new(1.0, 2.0).equal(Size::new(1.0 + 1e-7, 2.0)));
        assert!(!Size::new(1.0, 2.0).equal(Size::new(1.1, 2.0)));
        assert!(Size::<i32>::zero().is_zero());
    }

    #[test]
    fn display() {
        assert_eq!(Size::new(800, 600).to_string(), "+800x+600");
        assert_eq!(Size::new(1.5, 2.0).to_string(), "+1.50x+2");
    }
}
