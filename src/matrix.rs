use std::fmt;

use serde::{Deserialize, Serialize};

use crate::point::{Point2D, PointLike};
use crate::surface::TransformSurface;
use crate::vertex::Vertex2D;

/// A 2D affine transform.
///
/// Maps `(x, y)` to `(a*x + c*y + tx, b*x + d*y + ty)`, the same six-value
/// layout a canvas `transform(a, b, c, d, e, f)` call takes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

const IDENTITY_ARRAY: [f64; 6] = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

impl Matrix {
    pub const IDENTITY: Matrix = Matrix::from_array(IDENTITY_ARRAY);

    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    pub const fn from_array([a, b, c, d, tx, ty]: [f64; 6]) -> Self {
        Self::new(a, b, c, d, tx, ty)
    }

    /// Builds a matrix from up to six positional values.
    ///
    /// A missing, zero or NaN entry takes its identity value, so a zero `a`
    /// or `d` becomes `1`.
    pub fn from_loose(values: &[f64]) -> Self {
        let mut out = IDENTITY_ARRAY;
        for (slot, &v) in out.iter_mut().zip(values) {
            if v != 0.0 && !v.is_nan() {
                *slot = v;
            }
        }
        Self::from_array(out)
    }

    pub fn to_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.tx, self.ty]
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Composes this matrix onto the surface's current transform.
    pub fn apply<S: TransformSurface + ?Sized>(&self, surface: &mut S) {
        surface.transform(self.a, self.b, self.c, self.d, self.tx, self.ty);
    }

    /// Replaces the surface's current transform with this matrix.
    pub fn override_on<S: TransformSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_transform(self.a, self.b, self.c, self.d, self.tx, self.ty);
    }

    /// Combines `m2` into this matrix: the result applies `self` first, then
    /// `m2`.
    pub fn multiply(&mut self, m2: &Matrix) {
        let Matrix { a, b, c, d, tx, ty } = *self;
        self.a = a * m2.a + b * m2.c;
        self.b = a * m2.b + b * m2.d;
        self.c = c * m2.a + d * m2.c;
        self.d = c * m2.b + d * m2.d;
        self.tx = tx * m2.a + ty * m2.c + m2.tx;
        self.ty = tx * m2.b + ty * m2.d + m2.ty;
    }

    pub fn identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// In-place inverse. A singular matrix leaves every field non-finite.
    pub fn invert(&mut self) {
        let Matrix { a, b, c, d, tx, ty } = *self;
        let det = a * d - b * c;
        self.a = d / det;
        self.b = -b / det;
        self.c = -c / det;
        self.d = a / det;
        self.tx = (c * ty - d * tx) / det;
        self.ty = -(a * ty - b * tx) / det;
    }

    /// Rotates the linear part by `angle` radians. The translation is not
    /// rotated.
    pub fn rotate(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        let Matrix { a, b, c, d, .. } = *self;
        self.a = a * cos - b * sin;
        self.b = a * sin + b * cos;
        self.c = c * cos - d * sin;
        self.d = c * sin + d * cos;
    }

    /// Scales `a` and `tx` by `sx`, `d` and `ty` by `sy`. `b` and `c` are
    /// untouched.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.a *= sx;
        self.d *= sy;
        self.tx *= sx;
        self.ty *= sy;
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.tx += dx;
        self.ty += dy;
    }

    #[inline]
    pub fn transform_point2(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.tx,
            self.b * x + self.d * y + self.ty,
        )
    }

    pub fn transform_point<P: PointLike + ?Sized>(&self, p: &P) -> Point2D {
        let (x, y) = self.transform_point2(p.x(), p.y());
        Point2D::new(x, y)
    }

    /// Maps the vertex and both of its control points.
    pub fn transform_vertex(&self, v: &Vertex2D) -> Vertex2D {
        Vertex2D {
            point: self.transform_point(&v.point),
            cp1: self.transform_point(&v.cp1),
            cp2: self.transform_point(&v.cp2),
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[a: {}, b: {}, c: {}, d: {}, tx: {}, ty: {}]",
            self.a, self.b, self.c, self.d, self.tx, self.ty
        )
    }
}
