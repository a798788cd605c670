//! Renaming hosts to their upper-cased DNS host name.

use qtag_api::Transport;
use qtag_core::{HostAsset, HostAssetUpdate};

use crate::error::WorkflowError;
use crate::outcome::{BulkRenameOutcome, HostRename, HostSummary, RenameOutcome};
use crate::{Workflow, required};

impl<T: Transport> Workflow<T> {
    /// `updateHostName`: rename the single host matching `host_name`.
    ///
    /// Requires exactly one search result whatever the match policy; zero or
    /// several matches are reported without sending an update.
    ///
    /// # Errors
    ///
    /// [`WorkflowError::Validation`] for a blank name, or a failed search.
    pub async fn rename_host_to_dns_name(
        &self,
        host_name: &str,
    ) -> Result<RenameOutcome, WorkflowError> {
        let search = required(Some(host_name))
            .ok_or_else(|| WorkflowError::Validation("--hostName is required".into()))?;

        let mut hosts = self.hosts.search(search, None).await?;
        match hosts.len() {
            0 => {
                tracing::warn!(search, "no host found");
                Ok(RenameOutcome::NoHostFound {
                    search: search.to_string(),
                })
            }
            1 => {
                let host = hosts.remove(0);
                Ok(RenameOutcome::Completed(self.rename_host(&host).await))
            }
            count => {
                tracing::warn!(search, count, "several hosts found, nothing renamed");
                Ok(RenameOutcome::MultipleHostsFound {
                    search: search.to_string(),
                    hosts: hosts.iter().map(HostSummary::from).collect(),
                })
            }
        }
    }

    /// Rename one host to its DNS host name, upper-cased.
    ///
    /// Never fails: a missing DNS name or a failed update is logged and
    /// returned as the corresponding [`HostRename`] variant.
    pub async fn rename_host(&self, host: &HostAsset) -> HostRename {
        let Some(target) = host.dns_rename_target() else {
            tracing::warn!(host_id = host.id, host = %host.name, "host has no DNS name, skipping");
            return HostRename::MissingDnsName {
                id: host.id,
                name: host.name.clone(),
            };
        };

        let update = HostAssetUpdate::Rename {
            name: target.clone(),
        };
        match self.hosts.update(host.id, &update).await {
            Ok(()) => {
                tracing::info!(host_id = host.id, from = %host.name, to = %target, "host renamed");
                HostRename::Renamed {
                    id: host.id,
                    from: host.name.clone(),
                    to: target,
                }
            }
            Err(error) => {
                tracing::error!(host_id = host.id, host = %host.name, to = %target, %error, "rename failed");
                HostRename::Failed {
                    id: host.id,
                    name: host.name.clone(),
                    to: target,
                    error: error.to_string(),
                }
            }
        }
    }

    /// `update-hosts-with-domain`: rename every host matching both the name
    /// pattern and the tag, one at a time in the order the platform returns
    /// them.
    ///
    /// # Errors
    ///
    /// [`WorkflowError::Validation`] when either argument is missing or
    /// blank, raised before any request, or a failed search.
    pub async fn rename_hosts_with_domain(
        &self,
        host_name: Option<&str>,
        tag_name: Option<&str>,
    ) -> Result<BulkRenameOutcome, WorkflowError> {
        let (Some(host_name), Some(tag_name)) = (required(host_name), required(tag_name)) else {
            return Err(WorkflowError::Validation(
                "both --hostName and --tagName are required".into(),
            ));
        };

        let hosts = self.hosts.search(host_name, Some(tag_name)).await?;
        if hosts.is_empty() {
            tracing::warn!(host = host_name, tag = tag_name, "no hosts found");
            return Ok(BulkRenameOutcome::NoHostsFound {
                host_name: host_name.to_string(),
                tag_name: tag_name.to_string(),
            });
        }

        tracing::info!(count = hosts.len(), "renaming hosts");
        let mut results = Vec::with_capacity(hosts.len());
        for host in &hosts {
            results.push(self.rename_host(host).await);
        }
        Ok(BulkRenameOutcome::Processed { results })
    }
}
