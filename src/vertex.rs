use std::fmt;

use serde::{Deserialize, Serialize};

use crate::arg::Arg;
use crate::diag::{LogReporter, Reporter, Severity};
use crate::point::{Point2D, PointLike};

/// End point of a cubic curve segment together with its two control points.
///
/// A vertex whose control points sit on the vertex itself draws as a straight
/// line.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex2D {
    pub point: Point2D,
    pub cp1: Point2D,
    pub cp2: Point2D,
}

impl PointLike for Vertex2D {
    #[inline]
    fn x(&self) -> f64 {
        self.point.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.point.y
    }
}

// (point, x, y) argument positions for each of the three slots.
const PRIMARY_SLOT: (usize, usize, usize) = (0, 0, 1);
const CP1_SLOT: (usize, usize, usize) = (1, 2, 3);
const CP2_SLOT: (usize, usize, usize) = (2, 4, 5);

fn resolve_slot(args: &[Arg], (point_i, x_i, y_i): (usize, usize, usize)) -> Option<Point2D> {
    let get = |i: usize| args.get(i).copied().unwrap_or_default();
    if let Some(p) = get(point_i).as_point() {
        return Some(p);
    }
    match (get(x_i).as_number(), get(y_i).as_number()) {
        (Some(x), Some(y)) => Some(Point2D::new(x, y)),
        _ => None,
    }
}

impl Vertex2D {
    /// A straight-line vertex at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_point(&Point2D::new(x, y))
    }

    pub fn from_point<P: PointLike + ?Sized>(p: &P) -> Self {
        let point = p.to_point();
        Self {
            point,
            cp1: point,
            cp2: point,
        }
    }

    /// `cp1` defaults to the vertex itself, `cp2` defaults to `cp1`.
    pub fn with_controls(
        p: &dyn PointLike,
        cp1: Option<&dyn PointLike>,
        cp2: Option<&dyn PointLike>,
    ) -> Self {
        let point = p.to_point();
        let cp1 = cp1.map_or(point, |c| c.to_point());
        let cp2 = cp2.map_or(cp1, |c| c.to_point());
        Self { point, cp1, cp2 }
    }

    pub fn curve(x: f64, y: f64, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64) -> Self {
        Self {
            point: Point2D::new(x, y),
            cp1: Point2D::new(cp1x, cp1y),
            cp2: Point2D::new(cp2x, cp2y),
        }
    }

    pub fn from_args(args: &[Arg]) -> Self {
        Self::from_args_with(args, &LogReporter)
    }

    /// Builds a vertex from up to six positional values, each a point or a
    /// number.
    ///
    /// Three slots are read in order. The vertex itself comes from a point at
    /// `args[0]` or numbers at `args[0..2]`. The first control point comes from
    /// a point at `args[1]` or numbers at `args[2..4]`, the second from a point
    /// at `args[2]` or numbers at `args[4..6]`. An unresolved control point
    /// copies the slot before it. An unresolved vertex is reported and placed
    /// at `(0, 0)`.
    pub fn from_args_with(args: &[Arg], reporter: &dyn Reporter) -> Self {
        let point = resolve_slot(args, PRIMARY_SLOT).unwrap_or_else(|| {
            reporter.report(
                "Unable to process Vertex2D constructor arguments, used (0, 0) instead",
                Severity::Warning,
            );
            Point2D::ORIGIN
        });
        let cp1 = resolve_slot(args, CP1_SLOT).unwrap_or(point);
        let cp2 = resolve_slot(args, CP2_SLOT).unwrap_or(cp1);
        Self { point, cp1, cp2 }
    }

    pub fn length(&self) -> f64 {
        self.point.length()
    }

    /// Moves the vertex only; control points stay put.
    pub fn offset(&mut self, dx: f64, dy: f64) {
        self.point.offset(dx, dy);
    }

    pub fn equals<P: PointLike + ?Sized>(&self, other: &P) -> bool {
        self.point.equals(other)
    }

    /// `[cp1x, cp1y, cp2x, cp2y, x, y]`, the argument order of a cubic
    /// `bezierCurveTo`.
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.cp1.x,
            self.cp1.y,
            self.cp2.x,
            self.cp2.y,
            self.point.x,
            self.point.y,
        ]
    }
}

impl fmt::Display for Vertex2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [cp1x, cp1y, cp2x, cp2y, x, y] = self.to_array();
        write!(f, "[{cp1x}, {cp1y}, {cp2x}, {cp2y}, {x}, {y}]")
    }
}
