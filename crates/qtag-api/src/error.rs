//! Transport and directory error types.

use thiserror::Error;

/// Errors that can occur when talking to the asset management API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// HTTP 200 with a non-success `responseCode` in the `ServiceResponse`.
    #[error("service error {code}: {message}")]
    Service {
        /// Platform response code, e.g. `INVALID_REQUEST`.
        code: String,
        /// `responseErrorDetails.errorMessage`, empty when absent.
        message: String,
    },

    /// The response body is not the expected JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// A get-by-id returned an empty `data` list.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity kind, e.g. `host asset`.
        entity: &'static str,
        /// The id that was looked up.
        id: String,
    },

    /// The transport cannot be built from the current configuration.
    #[error("API not configured: {0}")]
    NotConfigured(String),
}
