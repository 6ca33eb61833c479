use std::fmt;

use serde::{Deserialize, Serialize};

use crate::arg::Arg;
use crate::diag::{LogReporter, Reporter, Severity};
use crate::error::{Error, Result};

/// Anything that exposes a 2D coordinate.
pub trait PointLike {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    fn to_point(&self) -> Point2D {
        Point2D::new(self.x(), self.y())
    }
}

/// A bare 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl PointLike for Point2D {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from `(0, 0)`.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn add<P: PointLike + ?Sized>(&self, p: &P) -> Point2D {
        Point2D::new(self.x + p.x(), self.y + p.y())
    }

    pub fn substract<P: PointLike + ?Sized>(&self, p: &P) -> Point2D {
        Point2D::new(self.x - p.x(), self.y - p.y())
    }

    /// `add` for an argument whose shape is only known at runtime.
    pub fn try_add(&self, arg: &Arg) -> Result<Point2D> {
        arg.as_point()
            .map(|p| self.add(&p))
            .ok_or(Error::NotPointLike { op: "add" })
    }

    /// `substract` for an argument whose shape is only known at runtime.
    pub fn try_substract(&self, arg: &Arg) -> Result<Point2D> {
        arg.as_point()
            .map(|p| self.substract(&p))
            .ok_or(Error::NotPointLike { op: "substract" })
    }

    /// Exact component comparison, no tolerance.
    pub fn equals<P: PointLike + ?Sized>(&self, other: &P) -> bool {
        self.x == other.x() && self.y == other.y()
    }

    pub fn offset(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Returns `(p1 + p2) * f`, with `f` defaulting to `0.5`.
    ///
    /// This is the midpoint for the default factor only; other factors scale
    /// the coordinate sum rather than moving along the segment.
    pub fn interpolate<A, B>(p1: &A, p2: &B, f: Option<f64>) -> Point2D
    where
        A: PointLike + ?Sized,
        B: PointLike + ?Sized,
    {
        let f = f.unwrap_or(0.5);
        Point2D::new((p1.x() + p2.x()) * f, (p1.y() + p2.y()) * f)
    }

    pub fn interpolate_args(a: &Arg, b: &Arg, f: Option<f64>) -> Point2D {
        Self::interpolate_args_with(a, b, f, &LogReporter)
    }

    /// Loose form of [`Point2D::interpolate`]: reports and yields `(0, 0)`
    /// unless both arguments carry a point.
    pub fn interpolate_args_with(
        a: &Arg,
        b: &Arg,
        f: Option<f64>,
        reporter: &dyn Reporter,
    ) -> Point2D {
        match (a.as_point(), b.as_point()) {
            (Some(p1), Some(p2)) => Self::interpolate(&p1, &p2, f),
            _ => {
                reporter.report(
                    "Point2D::interpolate expects first 2 arguments to be point-like",
                    Severity::Warning,
                );
                Point2D::ORIGIN
            }
        }
    }

    /// Converts polar coordinates to a cartesian point.
    pub fn polar(length: f64, angle: f64) -> Point2D {
        Point2D::new(length * angle.cos(), length * angle.sin())
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x={}, y={})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::RecordingReporter;
    use crate::vertex::Vertex2D;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn add_and_substract_return_new_points() {
        let p = Point2D::new(1.0, 2.0);
        let q = Point2D::new(3.0, 4.0);
        assert_eq!(p.add(&q), Point2D::new(4.0, 6.0));
        assert_eq!(p.substract(&q), Point2D::new(-2.0, -2.0));
        assert_eq!(p, Point2D::new(1.0, 2.0));
        assert_eq!(q, Point2D::new(3.0, 4.0));
    }

    #[test]
    fn add_accepts_vertices() {
        let p = Point2D::new(1.0, 1.0);
        let v = Vertex2D::new(2.0, 3.0);
        assert_eq!(p.add(&v), Point2D::new(3.0, 4.0));
    }

    #[test]
    fn try_add_rejects_non_points() {
        let p = Point2D::new(1.0, 2.0);
        assert_eq!(
            p.try_add(&Arg::from(Point2D::new(3.0, 4.0))).unwrap(),
            Point2D::new(4.0, 6.0)
        );
        let err = p.try_substract(&Arg::Number(3.0)).unwrap_err();
        assert!(matches!(err, Error::NotPointLike { op: "substract" }));
        assert!(p.try_add(&Arg::Other).is_err());
    }

    #[test]
    fn equals_is_exact() {
        let p = Point2D::new(0.1 + 0.2, 1.0);
        assert!(!p.equals(&Point2D::new(0.3, 1.0)));
        assert!(p.equals(&p.clone()));
    }

    #[test]
    fn offset_mutates_in_place() {
        let mut p = Point2D::new(1.0, 2.0);
        p.offset(-1.0, 0.5);
        assert_eq!(p, Point2D::new(0.0, 2.5));
    }

    #[test]
    fn length_is_euclidean() {
        assert_abs_diff_eq!(Point2D::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Point2D::default().length(), 0.0);
    }

    #[test]
    fn interpolate_scales_the_sum() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(10.0, 10.0);
        assert_eq!(Point2D::interpolate(&a, &b, None), Point2D::new(5.0, 5.0));
        assert_eq!(Point2D::interpolate(&a, &b, Some(1.0)), Point2D::new(10.0, 10.0));
        assert_eq!(Point2D::interpolate(&a, &b, Some(0.0)), Point2D::new(0.0, 0.0));

        // Not a lerp: the sum is scaled.
        let c = Point2D::new(2.0, 2.0);
        assert_eq!(Point2D::interpolate(&c, &b, Some(0.25)), Point2D::new(3.0, 3.0));
    }

    #[test]
    fn interpolate_args_reports_bad_input() {
        let reporter = RecordingReporter::default();
        let p = Point2D::interpolate_args_with(
            &Arg::from(Point2D::new(4.0, 4.0)),
            &Arg::Number(1.0),
            None,
            &reporter,
        );
        assert_eq!(p, Point2D::ORIGIN);
        assert_eq!(reporter.warnings(), 1);

        let p = Point2D::interpolate_args_with(
            &Arg::from(Point2D::new(4.0, 4.0)),
            &Arg::from(Point2D::new(2.0, 0.0)),
            None,
            &reporter,
        );
        assert_eq!(p, Point2D::new(3.0, 2.0));
        assert_eq!(reporter.warnings(), 1);
    }

    #[test]
    fn polar_to_cartesian() {
        assert_eq!(Point2D::polar(1.0, 0.0), Point2D::new(1.0, 0.0));
        let p = Point2D::polar(1.0, FRAC_PI_2);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-12);
        assert_eq!(Point2D::polar(0.0, 0.0), Point2D::ORIGIN);
    }

    #[test]
    fn display_format() {
        assert_eq!(Point2D::new(1.5, -2.0).to_string(), "(x=1.5, y=-2)");
    }
}
