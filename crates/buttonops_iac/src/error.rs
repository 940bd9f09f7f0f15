//! Error types for IaC generation.

use thiserror::Error;

/// Result type alias for IaC operations.
pub type IacResult<T> = Result<T, IacError>;

/// Errors that can occur during IaC generation.
#[derive(Error, Debug)]
pub enum IacError {
    #[error("Invalid Service Bus SKU tier '{0}': must be Basic, Standard, or Premium")]
    InvalidTier(String),

    #[error("Duplicate {kind} identifier '{identifier}' produced by names {names:?}")]
    DuplicateIdentifier {
        kind: &'static str,
        identifier: String,
        names: Vec<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
