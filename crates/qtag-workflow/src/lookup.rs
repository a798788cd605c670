//! Read-only pass-through operations: search hosts, get host, search tags.

use qtag_api::{ApiError, Transport};
use qtag_core::{HostAsset, Tag};

use crate::Workflow;
use crate::error::WorkflowError;

impl<T: Transport> Workflow<T> {
    /// Hosts whose name contains `name_pattern`, optionally carrying `tag_name`.
    ///
    /// # Errors
    ///
    /// Only transport failures; an empty result is `Ok(vec![])`.
    pub async fn search_hosts(
        &self,
        name_pattern: &str,
        tag_name: Option<&str>,
    ) -> Result<Vec<HostAsset>, WorkflowError> {
        Ok(self.hosts.search(name_pattern, tag_name).await?)
    }

    /// The host with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::NotFound`] when the platform has no such host.
    pub async fn get_host(&self, id: u64) -> Result<HostAsset, WorkflowError> {
        self.hosts.get_by_id(id).await.map_err(|error| match error {
            ApiError::NotFound { entity, id } => WorkflowError::NotFound { entity, key: id },
            other => WorkflowError::Api(other),
        })
    }

    /// Tags whose name contains `tag_name`.
    ///
    /// # Errors
    ///
    /// Only transport failures; an empty result is `Ok(vec![])`.
    pub async fn search_tags(&self, tag_name: &str) -> Result<Vec<Tag>, WorkflowError> {
        Ok(self.tags.search_by_name(tag_name).await?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use qtag_api::test_support::{Reply, fixtures};
    use qtag_core::MatchPolicy;

    use crate::error::WorkflowError;
    use crate::test_support::{HOST_SEARCH, TAG_SEARCH, get_path, workflow};

    #[tokio::test]
    async fn search_hosts_with_no_matches_is_empty() {
        let (wf, transport) = workflow(MatchPolicy::Unique);
        transport.on_post(HOST_SEARCH, fixtures::hosts_reply(&[]));

        let hosts = wf.search_hosts("", None).await.unwrap();
        assert!(hosts.is_empty());
    }

    #[tokio::test]
    async fn search_hosts_keeps_server_order() {
        let (wf, transport) = workflow(MatchPolicy::Unique);
        transport.on_post(
            HOST_SEARCH,
            fixtures::hosts_reply(&[
                fixtures::host(3, "WEB03", None),
                fixtures::host(1, "WEB01", None),
            ]),
        );

        let hosts = wf.search_hosts("WEB", Some("DMZ")).await.unwrap();
        assert_eq!(hosts.iter().map(|h| h.id).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[tokio::test]
    async fn search_hosts_propagates_transport_error() {
        let (wf, transport) = workflow(MatchPolicy::Unique);
        transport.on_post(HOST_SEARCH, Reply::Status(401, "Bad Login".into()));

        let err = wf.search_hosts("WEB", None).await.unwrap_err();
        assert!(matches!(err, WorkflowError::Api(_)));
    }

    #[tokio::test]
    async fn get_host_missing_is_not_found() {
        let (wf, transport) = workflow(MatchPolicy::Unique);
        transport.on_get(&get_path(5), fixtures::hosts_reply(&[]));

        let err = wf.get_host(5).await.unwrap_err();
        assert!(matches!(err, WorkflowError::NotFound { ref key, .. } if key == "5"));
    }

    #[tokio::test]
    async fn get_host_returns_asset() {
        let (wf, transport) = workflow(MatchPolicy::Unique);
        transport.on_get(
            &get_path(5),
            fixtures::hosts_reply(&[fixtures::host(5, "DB01", Some("db01.corp"))]),
        );

        let host = wf.get_host(5).await.unwrap();
        assert_eq!(host.dns_host_name.as_deref(), Some("db01.corp"));
    }

    #[tokio::test]
    async fn search_tags_empty_is_ok() {
        let (wf, transport) = workflow(MatchPolicy::Unique);
        transport.on_post(TAG_SEARCH, fixtures::tags_reply(&[]));

        assert!(wf.search_tags("nothing").await.unwrap().is_empty());
    }
}
