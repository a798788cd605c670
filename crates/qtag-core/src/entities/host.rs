use serde::{Deserialize, Serialize};

use crate::entities::TagSimple;

/// A host asset as returned by the asset search and get endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HostAsset {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_host_name: Option<String>,
    #[serde(default)]
    pub tags: TagList,
}

impl HostAsset {
    /// The name this host should carry after a DNS rename: the DNS host name,
    /// upper-cased. `None` when the platform has no DNS name on record.
    #[must_use]
    pub fn dns_rename_target(&self) -> Option<String> {
        self.dns_host_name
            .as_deref()
            .map(str::trim)
            .filter(|dns| !dns.is_empty())
            .map(str::to_uppercase)
    }

    /// Whether the host currently carries the tag with `tag_id`.
    #[must_use]
    pub fn has_tag(&self, tag_id: u64) -> bool {
        self.tags.list.iter().any(|a| a.tag_simple.id == tag_id)
    }
}

/// The `tags` block of a host asset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagList {
    #[serde(default)]
    pub list: Vec<TagAssignment>,
}

/// Host-side wrapper around a tag reference: `{"TagSimple": {"id": .., "name": ..}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagAssignment {
    #[serde(rename = "TagSimple")]
    pub tag_simple: TagSimple,
}
