//! Workflow error types.

use qtag_api::ApiError;
use qtag_core::CoreError;
use thiserror::Error;

/// Errors that abort a workflow operation.
///
/// Failures of a single mutating call are not errors: they are caught, logged
/// and returned inside the operation's outcome.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A required argument is missing or malformed. Raised before any request.
    #[error("invalid arguments: {0}")]
    Validation(String),

    /// The single entity an operation needs does not exist.
    #[error("{entity} '{key}' not found")]
    NotFound {
        entity: &'static str,
        key: String,
    },

    /// A name search matched several entities where exactly one is required.
    #[error(
        "{entity} search '{key}' matched {} entries, narrow it down: {}",
        matches.len(),
        matches.join(", ")
    )]
    Ambiguous {
        entity: &'static str,
        key: String,
        matches: Vec<String>,
    },

    /// Transport or decoding failure of a lookup.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<CoreError> for WorkflowError {
    fn from(error: CoreError) -> Self {
        Self::Validation(error.to_string())
    }
}
