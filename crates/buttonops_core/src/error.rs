//! Error types for project materialization.

use thiserror::Error;

/// Result type alias for materialization operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while materializing a project.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Template(#[from] buttonops_templates::TemplateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
