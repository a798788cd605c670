//! Tag directory: search tag definitions by name.

use std::sync::Arc;

use qtag_core::wire::search_body;
use qtag_core::{SearchCriterion, Tag};

use crate::error::ApiError;
use crate::http::decode_service_response;
use crate::transport::Transport;

pub const SEARCH_PATH: &str = "/qps/rest/2.0/search/am/tag";

/// Tag operations over a [`Transport`].
pub struct TagDirectory<T> {
    transport: Arc<T>,
}

impl<T: Transport> TagDirectory<T> {
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Search tags whose name contains `name_pattern`.
    ///
    /// An empty result is not an error; a warning naming the search term is
    /// logged instead.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response cannot be decoded.
    pub async fn search_by_name(&self, name_pattern: &str) -> Result<Vec<Tag>, ApiError> {
        let body = search_body(vec![SearchCriterion::contains("name", name_pattern)]);
        let response = self.transport.post(SEARCH_PATH, &body).await?;
        let tags = decode_service_response(response)?.into_tags();
        if tags.is_empty() {
            tracing::warn!(search = name_pattern, "no tags found");
        }
        Ok(tags)
    }
}
