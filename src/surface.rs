use crate::matrix::Matrix;

/// The two transform entry points of a drawing surface.
///
/// Argument layout matches a canvas context: `(a, b, c, d, e, f)`.
pub trait TransformSurface {
    /// Composes the given transform onto the current one.
    fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64);

    /// Replaces the current transform.
    fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64);
}

/// In-memory surface that only tracks its current transform.
///
/// `transform(m)` follows canvas semantics: geometry drawn afterwards is
/// mapped through `m` first and then through the previous transform.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformState {
    current: Matrix,
}

impl TransformState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Matrix {
        &self.current
    }

    pub fn reset(&mut self) {
        self.current.identity();
    }
}

impl TransformSurface for TransformState {
    fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) {
        let mut m = Matrix::new(a, b, c, d, tx, ty);
        m.multiply(&self.current);
        self.current = m;
    }

    fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) {
        self.current = Matrix::new(a, b, c, d, tx, ty);
    }
}
