use std::path::Path;

use serde::Deserialize;

use crate::arg::Arg;
use crate::diag::{LogReporter, Reporter};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::vertex::Vertex2D;

/// Geometry as it arrives in JSON, before any argument resolution.
///
/// ```json
/// {
///     "matrix": [2, 0, 0, 2, 10, 10],
///     "vertices": [
///         [{"x": 0, "y": 0}],
///         [100, 0, 25, -20, 75, -20]
///     ]
/// }
/// ```
///
/// `matrix` follows [`Matrix::from_loose`], each `vertices` entry follows
/// [`Vertex2D::from_args`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeomDesc {
    #[serde(default)]
    pub matrix: Vec<f64>,
    #[serde(default)]
    pub vertices: Vec<Vec<Arg>>,
}

/// Resolved geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Geom {
    pub matrix: Matrix,
    pub vertices: Vec<Vertex2D>,
}

pub fn parse_geom_json(json_text: &str) -> Result<GeomDesc> {
    Ok(serde_json::from_str(json_text)?)
}

pub fn load_geom_file(path: impl AsRef<Path>) -> Result<GeomDesc> {
    let text = std::fs::read_to_string(path)?;
    parse_geom_json(&text)
}

impl GeomDesc {
    pub fn resolve(&self) -> Geom {
        self.resolve_with(&LogReporter)
    }

    pub fn resolve_with(&self, reporter: &dyn Reporter) -> Geom {
        Geom {
            matrix: Matrix::from_loose(&self.matrix),
            vertices: self
                .vertices
                .iter()
                .map(|args| Vertex2D::from_args_with(args, reporter))
                .collect(),
        }
    }
}

impl Geom {
    /// Every vertex mapped through `matrix`.
    pub fn transformed_vertices(&self) -> Vec<Vertex2D> {
        self.vertices
            .iter()
            .map(|v| self.matrix.transform_vertex(v))
            .collect()
    }
}
