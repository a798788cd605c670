//! Adding and removing tags, one host at a time or across a list of host ids.

use qtag_api::Transport;
use qtag_core::{HostAsset, HostAssetUpdate, Tag, TagChange, ids::parse_host_ids};

use crate::error::WorkflowError;
use crate::outcome::{BulkTagItem, BulkTagOutcome, TagChangeOutcome};
use crate::resolve::pick;
use crate::{Workflow, required};

impl<T: Transport> Workflow<T> {
    /// `addTag`: resolve host and tag by name, then attach the tag.
    ///
    /// # Errors
    ///
    /// [`WorkflowError::Validation`] for blank arguments,
    /// [`WorkflowError::NotFound`] when no host matches, and
    /// [`WorkflowError::Ambiguous`] when the match policy cannot narrow a
    /// search down to one entry.
    pub async fn add_tag_to_host(
        &self,
        tag_name: &str,
        host_name: &str,
    ) -> Result<TagChangeOutcome, WorkflowError> {
        self.change_tag_by_name(TagChange::Add, tag_name, host_name)
            .await
    }

    /// `removeTag`: resolve host and tag by name, then detach the tag.
    ///
    /// # Errors
    ///
    /// Same as [`Self::add_tag_to_host`].
    pub async fn remove_tag_from_host(
        &self,
        tag_name: &str,
        host_name: &str,
    ) -> Result<TagChangeOutcome, WorkflowError> {
        self.change_tag_by_name(TagChange::Remove, tag_name, host_name)
            .await
    }

    async fn change_tag_by_name(
        &self,
        change: TagChange,
        tag_name: &str,
        host_name: &str,
    ) -> Result<TagChangeOutcome, WorkflowError> {
        let host_name = required(Some(host_name))
            .ok_or_else(|| WorkflowError::Validation("--hostName is required".into()))?;
        let tag_name = required(Some(tag_name))
            .ok_or_else(|| WorkflowError::Validation("--tagName is required".into()))?;

        let host = self.resolve_host(host_name).await?;

        let tags = self.tags.search_by_name(tag_name).await?;
        let Some(tag) = pick(tags, tag_name, self.policy, "tag")? else {
            tracing::warn!(
                tag = tag_name,
                host_id = host.id,
                host = %host.name,
                "tag not found, no update sent"
            );
            return Ok(TagChangeOutcome::TagNotFound {
                change,
                host_id: host.id,
                host_name: host.name,
                tag: tag_name.to_string(),
            });
        };

        Ok(self.apply_tag_change(&host, &tag, change).await)
    }

    /// Send one tag change for an already resolved host and tag.
    ///
    /// Never fails: an update error is logged and returned as
    /// [`TagChangeOutcome::Failed`].
    pub async fn apply_tag_change(
        &self,
        host: &HostAsset,
        tag: &Tag,
        change: TagChange,
    ) -> TagChangeOutcome {
        if change == TagChange::Add && host.has_tag(tag.id) {
            tracing::debug!(host_id = host.id, tag_id = tag.id, "tag already present, sending add anyway");
        }

        match self
            .hosts
            .update(host.id, &HostAssetUpdate::tag(change, tag.id))
            .await
        {
            Ok(()) => {
                tracing::info!(
                    %change,
                    host_id = host.id,
                    host = %host.name,
                    tag_id = tag.id,
                    tag = %tag.name,
                    "tag change applied"
                );
                TagChangeOutcome::Applied {
                    change,
                    host_id: host.id,
                    host_name: host.name.clone(),
                    tag_id: tag.id,
                    tag_name: tag.name.clone(),
                }
            }
            Err(error) => {
                tracing::error!(
                    %change,
                    host_id = host.id,
                    host = %host.name,
                    tag_id = tag.id,
                    tag = %tag.name,
                    %error,
                    "tag change failed"
                );
                TagChangeOutcome::Failed {
                    change,
                    host_id: host.id,
                    host_name: host.name.clone(),
                    tag_id: tag.id,
                    tag_name: tag.name.clone(),
                    error: error.to_string(),
                }
            }
        }
    }

    /// `add-tag-to-hosts`: attach one tag to every host in a comma-separated
    /// id list, one host at a time.
    ///
    /// # Errors
    ///
    /// [`WorkflowError::Validation`] when the tag is blank or the id list is
    /// empty or malformed, raised before any request. Tag lookup failures
    /// propagate; per-host failures are recorded in the outcome.
    pub async fn bulk_tag_hosts(
        &self,
        tag_to_add: Option<&str>,
        host_ids: &str,
    ) -> Result<BulkTagOutcome, WorkflowError> {
        let tag_name = required(tag_to_add)
            .ok_or_else(|| WorkflowError::Validation("--tagToAdd is required".into()))?;
        let ids = parse_host_ids(host_ids)?;

        let tags = self.tags.search_by_name(tag_name).await?;
        let Some(tag) = pick(tags, tag_name, self.policy, "tag")? else {
            tracing::warn!(tag = tag_name, "tag not found, no hosts updated");
            return Ok(BulkTagOutcome::TagNotFound {
                tag: tag_name.to_string(),
            });
        };

        let mut results = Vec::with_capacity(ids.len());
        for id in ids {
            let host = match self.hosts.get_by_id(id).await {
                Ok(host) => host,
                Err(error) => {
                    tracing::error!(host_id = id, %error, "host lookup failed, skipping");
                    results.push(BulkTagItem::LookupFailed {
                        host_id: id,
                        error: error.to_string(),
                    });
                    continue;
                }
            };

            let item = match self.apply_tag_change(&host, &tag, TagChange::Add).await {
                TagChangeOutcome::Failed { error, .. } => BulkTagItem::UpdateFailed {
                    host_id: host.id,
                    host_name: host.name,
                    error,
                },
                _ => BulkTagItem::Tagged {
                    host_id: host.id,
                    host_name: host.name,
                },
            };
            results.push(item);
        }

        Ok(BulkTagOutcome::Processed {
            tag_id: tag.id,
            tag_name: tag.name,
            results,
        })
    }

    async fn resolve_host(&self, host_name: &str) -> Result<HostAsset, WorkflowError> {
        let hosts = self.hosts.search(host_name, None).await?;
        pick(hosts, host_name, self.policy, "host asset")?.ok_or_else(|| {
            WorkflowError::NotFound {
                entity: "host asset",
                key: host_name.to_string(),
            }
        })
    }
}
