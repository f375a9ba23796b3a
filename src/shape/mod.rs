//! Shape primitives: immutable composites of points, vectors and sizes.

pub mod circle;
pub mod line;
pub mod polygon;
pub mod rectangle;
pub mod regular;

pub use circle::Circle;
pub use line::Line;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use regular::{Orientation, RegularPolygon};
