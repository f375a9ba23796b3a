//! Type aliases binding the generic geometry to the common concrete
//! scalars.
//!
//! Conversions between the two worlds go through the `cast` method every
//! type carries, e.g. `floats::Point::new(1.5, 2.5).cast::<i32>()`.

/// Aliases for pixel-grid geometry over `i32`.
pub mod ints {
    pub type Point = crate::Point<i32>;
    pub type Vector = crate::Vector<i32>;
    pub type Size = crate::Size<i32>;
    pub type Padding = crate::Padding<i32>;
    pub type Circle = crate::Circle<i32>;
    pub type Line = crate::Line<i32>;
    pub type Rectangle = crate::Rectangle<i32>;
    pub type Polygon = crate::Polygon<i32>;
    pub type RegularPolygon = crate::RegularPolygon<i32>;
}

/// Aliases for continuous geometry over `f64`.
pub mod floats {
    pub type Point = crate::Point<f64>;
    pub type Vector = crate::Vector<f64>;
    pub type Size = crate::Size<f64>;
    pub type Padding = crate::Padding<f64>;
    pub type Circle = crate::Circle<f64>;
    pub type Line = crate::Line<f64>;
    pub type Rectangle = crate::Rectangle<f64>;
    pub type Polygon = crate::Polygon<f64>;
    pub type RegularPolygon = crate::RegularPolygon<f64>;
}
