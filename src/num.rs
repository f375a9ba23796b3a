use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, ToPrimitive, Zero};

/// Global numeric tolerance for nearly-equal comparisons.
pub const DELTA: f64 = 1e-6;

/// Scalar element type usable by every geometric type in this crate.
///
/// Covers the signed integer and floating-point primitives so the same
/// formulas work for pixel-grid (`i32`) and continuous (`f64`) coordinate
/// systems. All tolerance comparisons go through the `f64` projection.
pub trait Number:
    Copy
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + ToPrimitive
    + 'static
{
    /// True for integer scalar kinds, false for floating-point kinds.
    const INTEGER: bool;

    /// Native `as` conversion from `f64`: saturating for integers
    /// (NaN maps to zero), lossy truncation of precision for floats.
    fn of(value: f64) -> Self;

    /// Native `as` projection to `f64`.
    fn as_f64(self) -> f64;
}

macro_rules! impl_number {
    ($integer:literal: $($t:ty),+) => {$(
        impl Number for $t {
            const INTEGER: bool = $integer;

            #[allow(clippy::cast_possible_truncation)]
            fn of(value: f64) -> Self {
                value as $t
            }

            #[allow(clippy::cast_precision_loss)]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    )+};
}

impl_number!(true: i8, i16, i32, i64, isize);
impl_number!(false: f32, f64);

/// Casts an `f64` to the scalar type, rounding to nearest for integer
/// representations and truncating excess precision otherwise.
///
/// Out-of-range values follow Rust's native `as` behavior (saturation).
#[must_use]
pub fn cast<T: Number>(value: f64) -> T {
    if T::INTEGER {
        T::of(value.round())
    } else {
        T::of(value)
    }
}

/// Type-level predicate: true when the scalar type is an integer
/// representation.
#[must_use]
pub fn is_integer<T: Number>() -> bool {
    T::INTEGER
}

/// Checks for nearly-equal values within [`DELTA`].
#[must_use]
pub fn equal<T: Number>(a: T, b: T) -> bool {
    equal_delta(a, b, DELTA)
}

/// Checks for nearly-equal values within the given delta.
///
/// NaN and infinities never compare equal to anything, themselves included.
#[must_use]
pub fn equal_delta<T: Number>(a: T, b: T, delta: f64) -> bool {
    (a.as_f64() - b.as_f64()).abs() <= delta
}

/// Checks if the value equals its integer truncation.
///
/// NaN and infinities are never whole.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_whole<T: Number>(value: T) -> bool {
    let value = value.as_f64();

    value.is_finite() && value == value.trunc()
}

/// Linear interpolation between two scalars (not clamped to `[0, 1]`).
#[must_use]
pub fn lerp<T: Number>(a: T, b: T, t: f64) -> T {
    cast(a.as_f64() * (1.0 - t) + b.as_f64() * t)
}

/// Scalar exactly halfway between `a` and `b`. Shorthand for `lerp(a, b, 0.5)`.
#[must_use]
pub fn midpoint<T: Number>(a: T, b: T) -> T {
    cast((a.as_f64() + b.as_f64()) / 2.0)
}

/// Scales a scalar by an `f64` factor, casting back to the scalar type.
#[must_use]
pub fn scale<T: Number>(value: T, factor: f64) -> T {
    cast(value.as_f64() * factor)
}

/// Divides a scalar by an `f64` factor.
///
/// A zero factor returns the value unchanged.
#[must_use]
pub fn divide<T: Number>(value: T, factor: f64) -> T {
    // Only a literal zero factor takes the fallback.
    if factor == 0.0 {
        return value;
    }

    cast(value.as_f64() / factor)
}

/// Absolute value of a scalar.
#[must_use]
pub fn abs<T: Number>(value: T) -> T {
    if value < T::zero() {
        -value
    } else {
        value
    }
}

/// Formats a scalar as a signed numeric string: whole values without a
/// decimal point (`+3`), others with exactly two decimal places (`-1.01`).
#[must_use]
pub fn format_number<T: Number>(value: T) -> String {
    if is_whole(value) {
        format!("{:+.0}", value.as_f64())
    } else {
        format!("{:+.2}", value.as_f64())
    }
}
