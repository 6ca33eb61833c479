// Library crate root.
//
// 2D affine geometry: points, curve vertices, free vectors and 2x3 transform
// matrices, plus the seams (drawing surface, diagnostics) they talk through.

pub mod arg;
pub mod diag;
pub mod error;
pub mod matrix;
pub mod point;
pub mod surface;
pub mod vector;
pub mod vertex;

#[cfg(feature = "desc")]
pub mod desc;

pub use arg::Arg;
pub use diag::{LogReporter, NullReporter, Reporter, Severity};
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use point::{Point2D, PointLike};
pub use surface::{TransformState, TransformSurface};
pub use vector::Vector2D;
pub use vertex::Vertex2D;

#[cfg(test)]
pub mod test_helpers;
