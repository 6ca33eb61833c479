use std::fmt;
use std::ops::Neg;

use serde::{Deserialize, Serialize};

use crate::diag::{LogReporter, Reporter, Severity};

/// A free 2D vector: magnitude and direction, no position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, v2: &Vector2D) -> Vector2D {
        Vector2D::new(self.x + v2.x, self.y + v2.y)
    }

    pub fn substract(&self, v2: &Vector2D) -> Vector2D {
        Vector2D::new(self.x - v2.x, self.y - v2.y)
    }

    /// `(-y, x)`.
    pub fn right_normal(&self) -> Vector2D {
        Vector2D::new(-self.y, self.x)
    }

    /// Unit vector with the same direction. The zero vector stays zero.
    pub fn dir(&self) -> Vector2D {
        let mut v = *self;
        v.normalize();
        v
    }

    pub fn dot_product(&self, v2: &Vector2D) -> f64 {
        self.x * v2.x + self.y * v2.y
    }

    /// Scalar 2D cross product `x * v2.y - y * v2.x`.
    pub fn cross_product(&self, v2: &Vector2D) -> f64 {
        self.x * v2.y - self.y * v2.x
    }

    pub fn proj(&self, v2: &Vector2D) -> Vector2D {
        self.proj_with(v2, &LogReporter)
    }

    /// Projects `self` onto `v2`.
    ///
    /// A zero-length `v2` is reported and yields a copy of `self`.
    pub fn proj_with(&self, v2: &Vector2D, reporter: &dyn Reporter) -> Vector2D {
        let den = v2.dot_product(v2);
        if den == 0.0 {
            reporter.report(
                "Vector2D::proj was called with a 0 length vector",
                Severity::Warning,
            );
            return *self;
        }
        let mut v = *v2;
        v.multiply(self.dot_product(v2) / den);
        v
    }

    pub fn proj_length(&self, v2: &Vector2D) -> f64 {
        self.proj_length_with(v2, &LogReporter)
    }

    /// `|self·v2 / v2·v2|`, or `0` (reported) for a zero-length `v2`.
    pub fn proj_length_with(&self, v2: &Vector2D, reporter: &dyn Reporter) -> f64 {
        let den = v2.dot_product(v2);
        if den == 0.0 {
            reporter.report(
                "Vector2D::proj_length was called with a 0 length vector",
                Severity::Warning,
            );
            return 0.0;
        }
        (self.dot_product(v2) / den).abs()
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn multiply(&mut self, number: f64) {
        self.x *= number;
        self.y *= number;
    }

    pub fn normalize(&mut self) {
        let l = self.length();
        if l != 0.0 {
            self.x /= l;
            self.y /= l;
        }
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x={}, y={})", self.x, self.y)
    }
}
