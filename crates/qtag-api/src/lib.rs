//! # qtag-api
//!
//! REST client layer for the asset management API.
//!
//! - [`Transport`] / [`HttpTransport`]: authenticated GET/POST of JSON bodies
//! - [`HostDirectory`]: host asset get-by-id, search, partial update
//! - [`TagDirectory`]: tag search
//!
//! Directories share one transport through an `Arc` and decode the
//! `ServiceResponse` envelope; they apply no resolution policy of their own.

pub mod hosts;
pub mod tags;
pub mod transport;

mod error;
mod http;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::ApiError;
pub use hosts::HostDirectory;
pub use tags::TagDirectory;
pub use transport::{HttpTransport, Transport};
