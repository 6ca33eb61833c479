use std::cell::RefCell;

use crate::diag::{Reporter, Severity};
use crate::surface::TransformSurface;

/// Keeps every reported diagnostic.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub entries: RefCell<Vec<(String, Severity)>>,
}

impl RecordingReporter {
    pub fn warnings(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(_, sev)| *sev == Severity::Warning)
            .count()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries.borrow().iter().map(|(m, _)| m.clone()).collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, message: &str, severity: Severity) {
        self.entries.borrow_mut().push((message.to_string(), severity));
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceCall {
    Transform([f64; 6]),
    SetTransform([f64; 6]),
}

/// Surface that records the calls it receives.
#[derive(Debug, Default)]
pub struct SurfaceCallLog {
    pub calls: Vec<SurfaceCall>,
}

impl TransformSurface for SurfaceCallLog {
    fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) {
        self.calls.push(SurfaceCall::Transform([a, b, c, d, tx, ty]));
    }

    fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) {
        self.calls.push(SurfaceCall::SetTransform([a, b, c, d, tx, ty]));
    }
}
