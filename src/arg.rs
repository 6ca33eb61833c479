use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::point::{Point2D, PointLike};
use crate::vertex::Vertex2D;

/// A loosely-shaped input value.
///
/// Only the few entry points that accept either a point or a pair of numbers
/// take these; everything else is typed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "ArgRaw")]
pub enum Arg {
    Point(Point2D),
    Number(f64),
    #[default]
    Other,
}

impl Arg {
    pub fn as_point(&self) -> Option<Point2D> {
        match self {
            Arg::Point(p) => Some(*p),
            _ => None,
        }
    }

    /// NaN does not count as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Arg::Number(n) if !n.is_nan() => Some(*n),
            _ => None,
        }
    }

    pub fn is_point(&self) -> bool {
        self.as_point().is_some()
    }

    pub fn is_number(&self) -> bool {
        self.as_number().is_some()
    }
}

impl From<f64> for Arg {
    fn from(n: f64) -> Self {
        Arg::Number(n)
    }
}

impl From<Point2D> for Arg {
    fn from(p: Point2D) -> Self {
        Arg::Point(p)
    }
}

impl From<&Vertex2D> for Arg {
    fn from(v: &Vertex2D) -> Self {
        Arg::Point(v.to_point())
    }
}

impl From<Vertex2D> for Arg {
    fn from(v: Vertex2D) -> Self {
        Arg::from(&v)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(v: Option<T>) -> Self {
        v.map_or(Arg::Other, Into::into)
    }
}

// JSON shape: `{"x": .., "y": ..}` is a point, a bare number is a number, and
// anything else (null, strings, ..) falls through to `Other`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ArgRaw {
    Point { x: f64, y: f64 },
    Number(f64),
    Other(IgnoredAny),
}

impl From<ArgRaw> for Arg {
    fn from(raw: ArgRaw) -> Self {
        match raw {
            ArgRaw::Point { x, y } => Arg::Point(Point2D::new(x, y)),
            ArgRaw::Number(n) => Arg::Number(n),
            ArgRaw::Other(_) => Arg::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_not_a_number() {
        assert!(Arg::Number(1.0).is_number());
        assert!(!Arg::Number(f64::NAN).is_number());
        assert!(!Arg::Other.is_number());
        assert!(!Arg::Number(1.0).is_point());
    }

    #[test]
    fn vertices_convert_to_their_own_coordinate() {
        let v = Vertex2D::curve(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(Arg::from(&v), Arg::Point(Point2D::new(1.0, 2.0)));
    }

    #[test]
    fn missing_values_are_other() {
        assert_eq!(Arg::from(None::<f64>), Arg::Other);
        assert_eq!(Arg::from(Some(2.0)), Arg::Number(2.0));
    }

    #[test]
    fn deserializes_each_shape() {
        let args: Vec<Arg> =
            serde_json::from_str(r#"[{"x": 1, "y": 2}, 3.5, null, "seven"]"#)
                .expect("args should deserialize");
        assert_eq!(
            args,
            vec![
                Arg::Point(Point2D::new(1.0, 2.0)),
                Arg::Number(3.5),
                Arg::Other,
                Arg::Other,
            ]
        );
    }
}
