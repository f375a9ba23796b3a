//! A small, generic, immutable 2D geometry kernel.
//!
//! Design goals:
//! - Generic: every core type is parameterized by the [`Number`] scalar
//!   constraint, so the same formulas work for pixel-grid (`i32`) and
//!   continuous (`f64`) coordinate systems.
//! - Immutable: no operation mutates its receiver; transforms return new
//!   values.
//! - Infallible: degenerate inputs produce documented fallback values
//!   instead of errors. Dividing by a zero factor returns the input,
//!   normalizing the zero vector yields `(1, 0)`, and inverting a
//!   near-singular matrix returns the matrix unchanged.
//!
//! Equality is tolerant everywhere: components are compared within the
//! crate-wide [`DELTA`] on their double-precision projections.

pub mod collision;
pub mod matrix;
pub mod num;
pub mod padding;
pub mod point;
pub mod shape;
pub mod size;
pub mod types;
pub mod vector;

pub use matrix::Matrix;
pub use num::{cast, equal, equal_delta, is_integer, is_whole, Number, DELTA};
pub use padding::Padding;
pub use point::Point;
pub use shape::{Circle, Line, Orientation, Polygon, Rectangle, RegularPolygon};
pub use size::Size;
pub use vector::Vector;
