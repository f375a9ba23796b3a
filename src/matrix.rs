use std::fmt;

use serde::{Deserialize, Serialize};

use crate::num::{cast, equal, Number};
use crate::point::Point;
use crate::vector::Vector;

/// A 2D affine transform as the 2x3 matrix `[[a, b, c], [d, e, f]]` with an
/// implicit `[0, 0, 1]` homogeneous row.
///
/// Always double precision, independent of the scalar type the transformed
/// points carry. `a`/`e` scale, `b`/`d` shear, `c`/`f` translate.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Matrix {
    /// Creates a matrix from its six coefficients, row by row.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// The identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0)
    }

    /// A pure translation by `(delta_x, delta_y)`.
    #[must_use]
    pub const fn translation(delta_x: f64, delta_y: f64) -> Self {
        Self::new(1.0, 0.0, delta_x, 0.0, 1.0, delta_y)
    }

    /// A pure rotation by the given angle (in radians) about the origin.
    #[must_use]
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();

        Self::new(cos, -sin, 0.0, sin, cos, 0.0)
    }

    /// A pure scale by `(factor_x, factor_y)` about the origin.
    #[must_use]
    pub const fn scaling(factor_x: f64, factor_y: f64) -> Self {
        Self::new(factor_x, 0.0, 0.0, 0.0, factor_y, 0.0)
    }

    /// Composition `self * other`: applying the result to a point applies
    /// `other` first, then `self`.
    #[must_use]
    pub fn multiply(self, other: Self) -> Self {
        Self::new(
            self.a * other.a + self.b * other.d,
            self.a * other.b + self.b * other.e,
            self.a * other.c + self.b * other.f + self.c,
            self.d * other.a + self.e * other.d,
            self.d * other.b + self.e * other.e,
            self.d * other.c + self.e * other.f + self.f,
        )
    }

    /// Determinant of the linear 2x2 block.
    #[must_use]
    pub fn determinant(self) -> f64 {
        self.a * self.e - self.b * self.d
    }

    /// The inverse affine transform.
    ///
    /// A near-singular matrix (`|det|` within tolerance of zero) is returned
    /// unchanged instead of signaling an error.
    #[must_use]
    pub fn inverse(self) -> Self {
        let det = self.determinant();
        if equal(det, 0.0) {
            return self;
        }

        let inv_det = 1.0 / det;
        Self::new(
            self.e * inv_det,
            -self.b * inv_det,
            (self.b * self.f - self.c * self.e) * inv_det,
            -self.d * inv_det,
            self.a * inv_det,
            (self.c * self.d - self.a * self.f) * inv_det,
        )
    }

    /// Composes a translation onto the right (applied before `self`).
    #[must_use]
    pub fn translate(self, delta_x: f64, delta_y: f64) -> Self {
        self.multiply(Self::translation(delta_x, delta_y))
    }

    /// Composes a rotation onto the right (applied before `self`).
    #[must_use]
    pub fn rotate(self, angle: f64) -> Self {
        self.multiply(Self::rotation(angle))
    }

    /// Composes a scale onto the right (applied before `self`).
    #[must_use]
    pub fn scale(self, factor_x: f64, factor_y: f64) -> Self {
        self.multiply(Self::scaling(factor_x, factor_y))
    }

    /// Composes a translation onto the left (applied after `self`).
    #[must_use]
    pub fn pre_translate(self, delta_x: f64, delta_y: f64) -> Self {
        Self::translation(delta_x, delta_y).multiply(self)
    }

    /// Composes a rotation onto the left (applied after `self`).
    #[must_use]
    pub fn pre_rotate(self, angle: f64) -> Self {
        Self::rotation(angle).multiply(self)
    }

    /// Composes a scale onto the left (applied after `self`).
    #[must_use]
    pub fn pre_scale(self, factor_x: f64, factor_y: f64) -> Self {
        Self::scaling(factor_x, factor_y).multiply(self)
    }

    /// Full affine application `(a*x + b*y + c, d*x + e*y + f)`.
    #[must_use]
    pub fn transform_point<T: Number>(&self, point: Point<T>) -> Point<T> {
        let (x, y) = (point.x.as_f64(), point.y.as_f64());

        Point::new(
            cast(self.a * x + self.b * y + self.c),
            cast(self.d * x + self.e * y + self.f),
        )
    }

    /// Linear-only application, omitting the translation terms: a free
    /// vector is not affected by translation.
    #[must_use]
    pub fn transform_vector<T: Number>(&self, vector: Vector<T>) -> Vector<T> {
        let (x, y) = (vector.x.as_f64(), vector.y.as_f64());

        Vector::new(cast(self.a * x + self.b * y), cast(self.d * x + self.e * y))
    }

    /// Checks for tolerantly equal coefficients.
    #[must_use]
    pub fn equal(self, other: Self) -> bool {
        equal(self.a, other.a)
            && equal(self.b, other.b)
            && equal(self.c, other.c)
            && equal(self.d, other.d)
            && equal(self.e, other.e)
            && equal(self.f, other.f)
    }

    /// Checks if all coefficients are tolerantly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.equal(Self::default())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} {} / {} {} {}]",
            self.a, self.b, self.c, self.d, self.e, self.f
        )
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::num::DELTA;

    const TOL: f64 = DELTA;

    fn assert_point(p: Point<f64>, x: f64, y: f64) {
        assert_abs_diff_eq!(p.x, x, epsilon = TOL);
        assert_abs_diff_eq!(p.y, y, epsilon = TOL);
    }

    #[test]
    fn identity_is_neutral() {
        let m = Matrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);

        assert!(m.multiply(Matrix::identity()).equal(m));
        assert!(Matrix::identity().multiply(m).equal(m));
    }

    #[test]
    fn rotation_quarter_turn() {
        let p = Matrix::rotation(FRAC_PI_2).transform_point(Point::new(1.0, 0.0));

        assert_point(p, 0.0, 1.0);
    }

    #[test]
    fn composition_applies_right_matrix_first() {
        // Translate after rotating: (1,0) -> (0,1) -> (10,1).
        let m = Matrix::translation(10.0, 0.0).rotate(FRAC_PI_2);
        assert_point(m.transform_point(Point::new(1.0, 0.0)), 10.0, 1.0);

        // Rotate after translating: (1,0) -> (11,0) -> (0,11).
        let m = Matrix::translation(10.0, 0.0).pre_rotate(FRAC_PI_2);
        assert_point(m.transform_point(Point::new(1.0, 0.0)), 0.0, 11.0);
    }

    #[test]
    fn pre_and_post_differ_for_non_commuting_transforms() {
        let m = Matrix::rotation(FRAC_PI_4);

        assert!(!m.translate(5.0, 0.0).equal(m.pre_translate(5.0, 0.0)));
        assert!(m.rotate(FRAC_PI_4).equal(m.pre_rotate(FRAC_PI_4)));
    }

    #[test]
    fn determinant_and_inverse() {
        let m = Matrix::translation(3.0, -2.0).scale(2.0, 4.0).rotate(0.5);

        assert_abs_diff_eq!(m.determinant(), 8.0, epsilon = TOL);
        assert!(m.multiply(m.inverse()).equal(Matrix::identity()));
        assert!(m.inverse().multiply(m).equal(Matrix::identity()));
    }

    #[test]
    fn inverse_round_trips_points() {
        let m = Matrix::translation(3.0, -2.0).rotate(1.2).scale(0.5, 3.0);
        let p = Point::new(2.5, -1.5);

        let q = m.inverse().transform_point(m.transform_point(p));
        assert!(q.equal(p));
    }

    #[test]
    fn near_singular_inverse_returns_input() {
        let m = Matrix::scaling(1.0, 0.0);

        assert!(m.inverse().equal(m));
        assert!(Matrix::scaling(1.0, DELTA / 2.0).inverse().equal(Matrix::scaling(1.0, DELTA / 2.0)));
    }

    #[test]
    fn vectors_ignore_translation() {
        let m = Matrix::translation(100.0, 100.0).rotate(FRAC_PI_2);
        let v = m.transform_vector(Vector::new(1.0, 0.0));

        assert_abs_diff_eq!(v.x, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = TOL);
    }

    #[test]
    fn transform_casts_for_integer_points() {
        let m = Matrix::rotation(FRAC_PI_2);

        assert_eq!(m.transform_point(Point::new(3, 0)).xy(), (0, 3));
        assert_eq!(m.transform_vector(Vector::new(0, 2)).xy(), (-2, 0));
    }

    #[test]
    fn zero_matrix() {
        assert!(Matrix::default().is_zero());
        assert!(!Matrix::identity().is_zero());
    }
}
