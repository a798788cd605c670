//! Cross-cutting error types for qtag.
//!
//! Transport errors live in `qtag-api`, workflow errors in `qtag-workflow`.
//! This module only covers failures of the core value types themselves.

use thiserror::Error;

/// Errors raised while building core values from operator input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A host id in a comma-separated list is not a positive integer.
    #[error("invalid host id '{value}': expected a positive integer")]
    InvalidHostId { value: String },

    /// The host id list contains no ids.
    #[error("host id list is empty")]
    EmptyHostIdList,
}
