use serde::{Deserialize, Serialize};

use crate::num::{self, Number};
use crate::size::Size;

/// Per-side 2D padding, consumed by
/// [`Rectangle::inset`](crate::Rectangle::inset).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Padding<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Number> Padding<T> {
    /// Creates a padding from its four sides.
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same padding on all four sides.
    #[must_use]
    pub fn uniform(padding: T) -> Self {
        Self::new(padding, padding, padding, padding)
    }

    /// Vertical padding on top/bottom, horizontal on left/right.
    #[must_use]
    pub fn symmetric(top_bottom: T, left_right: T) -> Self {
        Self::new(top_bottom, left_right, top_bottom, left_right)
    }

    /// Total horizontal padding (`left + right`).
    #[must_use]
    pub fn width(self) -> T {
        self.left + self.right
    }

    /// Total vertical padding (`top + bottom`).
    #[must_use]
    pub fn height(self) -> T {
        self.top + self.bottom
    }

    /// Total padding extents as a size.
    #[must_use]
    pub fn size(self) -> Size<T> {
        Size::new(self.width(), self.height())
    }

    /// Total padding extents as a `(width, height)` pair.
    #[must_use]
    pub fn xy(self) -> (T, T) {
        (self.width(), self.height())
    }

    /// Checks for tolerantly equal sides.
    #[must_use]
    pub fn equal(self, other: Self) -> bool {
        num::equal(self.top, other.top)
            && num::equal(self.right, other.right)
            && num::equal(self.bottom, other.bottom)
            && num::equal(self.left, other.left)
    }

    /// Checks if all sides are tolerantly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.equal(Self::uniform(T::zero()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        let p = Padding::new(1, 2, 3, 4);
        assert_eq!((p.top, p.right, p.bottom, p.left), (1, 2, 3, 4));

        let u = Padding::uniform(2);
        assert_eq!((u.top, u.right, u.bottom, u.left), (2, 2, 2, 2));

        let s = Padding::symmetric(1, 3);
        assert_eq!((s.top, s.right, s.bottom, s.left), (1, 3, 1, 3));
    }

    #[test]
    fn totals() {
        let p = Padding::new(1, 2, 3, 4);

        assert_eq!(p.width(), 6);
        assert_eq!(p.height(), 4);
        assert_eq!(p.size().xy(), (6, 4));
        assert_eq!(p.xy(), (6, 4));
    }

    #[test]
    fn equality_and_zero() {
        assert!(Padding::uniform(1.0).equal(Padding::uniform(1.0 + 1e-7)));
        assert!(!Padding::uniform(1.0).equal(Padding::uniform(1.1)));
        assert!(Padding::<i32>::default().is_zero());
    }
}
