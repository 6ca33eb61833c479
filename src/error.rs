#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A loose argument did not carry a point.
    #[error("Point2D::{op} expects a point-like argument")]
    NotPointLike { op: &'static str },

    #[error("failed to parse geometry description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read geometry description: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
