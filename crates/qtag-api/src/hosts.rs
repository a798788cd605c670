//! Host asset directory: get by id, search by name/tag, partial update.

use std::sync::Arc;

use qtag_core::wire::{HostAssetUpdate, search_body};
use qtag_core::{HostAsset, SearchCriterion};

use crate::error::ApiError;
use crate::http::decode_service_response;
use crate::transport::Transport;

pub const SEARCH_PATH: &str = "/qps/rest/2.0/search/am/hostasset";
pub const GET_PATH: &str = "/qps/rest/2.0/get/am/hostasset";
pub const UPDATE_PATH: &str = "/qps/rest/2.0/update/am/hostasset";

/// Criteria of a host search.
///
/// Always a `name CONTAINS pattern` criterion. A non-empty tag filter adds
/// `tagName EQUALS tag` in front of it.
#[must_use]
pub fn host_search_criteria(name_pattern: &str, tag_name: Option<&str>) -> Vec<SearchCriterion> {
    let mut criteria = Vec::with_capacity(2);
    if let Some(tag) = tag_name.filter(|t| !t.is_empty()) {
        criteria.push(SearchCriterion::equals("tagName", tag));
    }
    criteria.push(SearchCriterion::contains("name", name_pattern));
    criteria
}

/// Host asset operations over a [`Transport`].
pub struct HostDirectory<T> {
    transport: Arc<T>,
}

impl<T: Transport> HostDirectory<T> {
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Fetch one host asset by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the platform answers with an empty
    /// `data` list (it does not 404), or any transport error.
    pub async fn get_by_id(&self, id: u64) -> Result<HostAsset, ApiError> {
        let body = self.transport.get(&format!("{GET_PATH}/{id}")).await?;
        decode_service_response(body)?
            .into_host_assets()
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound {
                entity: "host asset",
                id: id.to_string(),
            })
    }

    /// Search host assets whose name contains `name_pattern`, optionally
    /// restricted to hosts carrying the tag `tag_name`.
    ///
    /// Returns at most one result window, in server order; may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response cannot be decoded.
    pub async fn search(
        &self,
        name_pattern: &str,
        tag_name: Option<&str>,
    ) -> Result<Vec<HostAsset>, ApiError> {
        tracing::debug!(name_pattern, ?tag_name, "searching host assets");
        let body = search_body(host_search_criteria(name_pattern, tag_name));
        let response = self.transport.post(SEARCH_PATH, &body).await?;
        let hosts = decode_service_response(response)?.into_host_assets();
        tracing::debug!(count = hosts.len(), "host search returned");
        Ok(hosts)
    }

    /// Submit a partial update for host `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the platform rejects it.
    pub async fn update(&self, id: u64, update: &HostAssetUpdate) -> Result<(), ApiError> {
        tracing::debug!(id, document = %update.document(), "updating host asset");
        let response = self
            .transport
            .post(&format!("{UPDATE_PATH}/{id}"), &update.body())
            .await?;
        decode_service_response(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use qtag_core::Operator;
    use serde_json::json;

    use super::*;
    use crate::test_support::{Call, RecordingTransport, Reply, fixtures};

    fn directory(transport: &Arc<RecordingTransport>) -> HostDirectory<RecordingTransport> {
        HostDirectory::new(Arc::clone(transport))
    }

    #[test]
    fn criteria_without_tag_is_single_contains() {
        let criteria = host_search_criteria("WEB", None);
        assert_eq!(criteria, vec![SearchCriterion::contains("name", "WEB")]);
    }

    #[test]
    fn tag_criterion_precedes_name_criterion() {
        let criteria = host_search_criteria("WEB", Some("DMZ"));
        assert_eq!(criteria.len(), 2);
        assert_eq!(criteria[0].field, "tagName");
        assert_eq!(criteria[0].operator, Operator::Equals);
        assert_eq!(criteria[0].value, "DMZ");
        assert_eq!(criteria[1], SearchCriterion::contains("name", "WEB"));
    }

    #[test]
    fn empty_tag_filter_is_ignored() {
        assert_eq!(host_search_criteria("WEB", Some("")).len(), 1);
    }

    #[tokio::test]
    async fn search_posts_envelope_and_unwraps_hosts() {
        let transport = Arc::new(RecordingTransport::new());
        transport.on_post(
            SEARCH_PATH,
            fixtures::hosts_reply(&[
                fixtures::host(1, "WEB01", Some("web01.corp")),
                fixtures::host(2, "WEB02", None),
            ]),
        );

        let hosts = directory(&transport).search("WEB", Some("DMZ")).await.unwrap();
        assert_eq!(hosts.iter().map(|h| h.id).collect::<Vec<_>>(), vec![1, 2]);

        assert_eq!(
            transport.calls(),
            vec![Call::Post {
                path: SEARCH_PATH.to_string(),
                body: json!({
                    "ServiceRequest": {
                        "preferences": { "startFromOffset": 1, "limitResults": 10 },
                        "filters": {
                            "Criteria": [
                                { "field": "tagName", "operator": "EQUALS", "value": "DMZ" },
                                { "field": "name", "operator": "CONTAINS", "value": "WEB" }
                            ]
                        }
                    }
                }),
            }]
        );
    }

    #[tokio::test]
    async fn search_with_no_matches_is_empty() {
        let transport = Arc::new(RecordingTransport::new());
        transport.on_post(SEARCH_PATH, fixtures::hosts_reply(&[]));
        let hosts = directory(&transport).search("", None).await.unwrap();
        assert!(hosts.is_empty());
    }

    #[tokio::test]
    async fn get_by_id_takes_first_element() {
        let transport = Arc::new(RecordingTransport::new());
        transport.on_get(
            &format!("{GET_PATH}/42"),
            fixtures::hosts_reply(&[fixtures::host(42, "DB01", Some("db01.corp"))]),
        );
        let host = directory(&transport).get_by_id(42).await.unwrap();
        assert_eq!(host.id, 42);
        assert_eq!(host.name, "DB01");
    }

    #[tokio::test]
    async fn get_by_id_empty_data_is_not_found() {
        let transport = Arc::new(RecordingTransport::new());
        transport.on_get(&format!("{GET_PATH}/9"), fixtures::hosts_reply(&[]));
        let err = directory(&transport).get_by_id(9).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { ref id, .. } if id == "9"));
    }

    #[tokio::test]
    async fn update_posts_partial_document_to_id_path() {
        let transport = Arc::new(RecordingTransport::new());
        transport.on_post(&format!("{UPDATE_PATH}/42"), fixtures::updated_reply(42));

        directory(&transport)
            .update(42, &HostAssetUpdate::Rename { name: "DB01.CORP".into() })
            .await
            .unwrap();

        assert_eq!(
            transport.calls(),
            vec![Call::Post {
                path: format!("{UPDATE_PATH}/42"),
                body: json!({"ServiceRequest":{"data":{"HostAsset":{"name":"DB01.CORP"}}}}),
            }]
        );
    }

    #[tokio::test]
    async fn update_surfaces_http_failure() {
        let transport = Arc::new(RecordingTransport::new());
        transport.on_post(
            &format!("{UPDATE_PATH}/42"),
            Reply::Status(500, "internal error".into()),
        );
        let err = directory(&transport)
            .update(42, &HostAssetUpdate::AddTag { tag_id: 7 })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn update_surfaces_service_error_code() {
        let transport = Arc::new(RecordingTransport::new());
        transport.on_post(
            &format!("{UPDATE_PATH}/42"),
            Reply::Json(json!({
                "ServiceResponse": {
                    "responseCode": "INVALID_REQUEST",
                    "responseErrorDetails": { "errorMessage": "Tag 7 does not exist" }
                }
            })),
        );
        let err = directory(&transport)
            .update(42, &HostAssetUpdate::AddTag { tag_id: 7 })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Service { ref code, .. } if code == "INVALID_REQUEST"));
    }
}
