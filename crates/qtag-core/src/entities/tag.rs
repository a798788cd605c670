use serde::{Deserialize, Serialize};

/// A tag definition. qtag only reads tags; it never creates or renames them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// Minimal tag reference used inside host assets and update documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagSimple {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
