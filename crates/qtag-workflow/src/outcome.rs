//! Reportable results of the workflow operations.
//!
//! Outcomes serialize with a `status` (or per-item `result`) discriminator so
//! the CLI can render them as JSON or as a table.

use qtag_core::{HostAsset, TagChange};
use serde::Serialize;

/// Compact view of a host for reports.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HostSummary {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_host_name: Option<String>,
}

impl From<&HostAsset> for HostSummary {
    fn from(host: &HostAsset) -> Self {
        Self {
            id: host.id,
            name: host.name.clone(),
            dns_host_name: host.dns_host_name.clone(),
        }
    }
}

/// Result of adding or removing one tag on one host.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TagChangeOutcome {
    Applied {
        change: TagChange,
        host_id: u64,
        host_name: String,
        tag_id: u64,
        tag_name: String,
    },
    /// The tag search found nothing; no update was sent.
    TagNotFound {
        change: TagChange,
        host_id: u64,
        host_name: String,
        tag: String,
    },
    /// The update call failed; the error was logged.
    Failed {
        change: TagChange,
        host_id: u64,
        host_name: String,
        tag_id: u64,
        tag_name: String,
        error: String,
    },
}

/// Result of renaming one host to its DNS name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum HostRename {
    Renamed { id: u64, from: String, to: String },
    /// The platform has no DNS name for this host; no update was sent.
    MissingDnsName { id: u64, name: String },
    Failed {
        id: u64,
        name: String,
        to: String,
        error: String,
    },
}

impl HostRename {
    #[must_use]
    pub const fn is_renamed(&self) -> bool {
        matches!(self, Self::Renamed { .. })
    }
}

/// Result of `updateHostName`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenameOutcome {
    NoHostFound { search: String },
    /// Rename needs exactly one match; nothing was updated.
    MultipleHostsFound {
        search: String,
        hosts: Vec<HostSummary>,
    },
    Completed(HostRename),
}

/// Result of `update-hosts-with-domain`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BulkRenameOutcome {
    NoHostsFound { host_name: String, tag_name: String },
    Processed { results: Vec<HostRename> },
}

impl BulkRenameOutcome {
    /// Number of hosts actually renamed.
    #[must_use]
    pub fn renamed_count(&self) -> usize {
        match self {
            Self::NoHostsFound { .. } => 0,
            Self::Processed { results } => results.iter().filter(|r| r.is_renamed()).count(),
        }
    }
}

/// Per-host result of `add-tag-to-hosts`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum BulkTagItem {
    Tagged { host_id: u64, host_name: String },
    /// Fetching the host by id failed; no update was sent.
    LookupFailed { host_id: u64, error: String },
    UpdateFailed {
        host_id: u64,
        host_name: String,
        error: String,
    },
}

/// Result of `add-tag-to-hosts`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BulkTagOutcome {
    TagNotFound { tag: String },
    Processed {
        tag_id: u64,
        tag_name: String,
        results: Vec<BulkTagItem>,
    },
}

impl BulkTagOutcome {
    /// Number of hosts that received the tag.
    #[must_use]
    pub fn tagged_count(&self) -> usize {
        match self {
            Self::TagNotFound { .. } => 0,
            Self::Processed { results, .. } => results
                .iter()
                .filter(|r| matches!(r, BulkTagItem::Tagged { .. }))
                .count(),
        }
    }
}
