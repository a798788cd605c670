//! `ServiceRequest` / `ServiceResponse` envelopes of the asset management API.
//!
//! Requests wrap their payload as `{"ServiceRequest": {...}}`. Responses come
//! back as `{"ServiceResponse": {"responseCode": .., "data": [..]}}` where each
//! `data` element is a single-key wrapper such as `{"HostAsset": {...}}`.

use serde::Deserialize;
use serde_json::{Value, json};

use crate::entities::{HostAsset, Tag};
use crate::enums::TagChange;
use crate::search::{SearchCriterion, SearchRequest};

/// Response code the platform uses for a successful call.
pub const RESPONSE_CODE_SUCCESS: &str = "SUCCESS";

/// Build the JSON body of a search request:
/// `{"ServiceRequest": {"preferences": .., "filters": {"Criteria": [..]}}}`.
#[must_use]
pub fn search_body(criteria: Vec<SearchCriterion>) -> Value {
    json!({ "ServiceRequest": SearchRequest::new(criteria) })
}

/// A partial host update. Exactly one of three shapes is ever sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAssetUpdate {
    /// `{"name": name}`
    Rename { name: String },
    /// `{"tags": {"add": {"TagSimple": {"id": tag_id}}}}`
    AddTag { tag_id: u64 },
    /// `{"tags": {"remove": {"TagSimple": {"id": tag_id}}}}`
    RemoveTag { tag_id: u64 },
}

impl HostAssetUpdate {
    #[must_use]
    pub const fn tag(change: TagChange, tag_id: u64) -> Self {
        match change {
            TagChange::Add => Self::AddTag { tag_id },
            TagChange::Remove => Self::RemoveTag { tag_id },
        }
    }

    /// The partial `HostAsset` document.
    #[must_use]
    pub fn document(&self) -> Value {
        match self {
            Self::Rename { name } => json!({ "name": name }),
            Self::AddTag { tag_id } => tag_document(TagChange::Add, *tag_id),
            Self::RemoveTag { tag_id } => tag_document(TagChange::Remove, *tag_id),
        }
    }

    /// Full request body: `{"ServiceRequest": {"data": {"HostAsset": document}}}`.
    #[must_use]
    pub fn body(&self) -> Value {
        json!({ "ServiceRequest": { "data": { "HostAsset": self.document() } } })
    }
}

fn tag_document(change: TagChange, tag_id: u64) -> Value {
    json!({ "tags": { change.as_str(): { "TagSimple": { "id": tag_id } } } })
}

/// Incoming `{"ServiceResponse": ...}` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "ServiceResponse")]
    pub service_response: ServiceResponse,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    #[serde(default)]
    pub response_code: Option<String>,
    #[serde(default)]
    pub response_error_details: Option<ResponseErrorDetails>,
    #[serde(default)]
    pub data: Vec<DataItem>,
}

impl ServiceResponse {
    /// `Err((code, message))` when the platform reported a non-success code.
    ///
    /// A missing `responseCode` counts as success.
    pub fn check(&self) -> Result<(), (String, String)> {
        match self.response_code.as_deref() {
            None | Some(RESPONSE_CODE_SUCCESS) => Ok(()),
            Some(code) => {
                let message = self
                    .response_error_details
                    .as_ref()
                    .and_then(|d| d.error_message.clone())
                    .unwrap_or_default();
                Err((code.to_string(), message))
            }
        }
    }

    /// Unwrap the `HostAsset` elements of `data`, in server order.
    #[must_use]
    pub fn into_host_assets(self) -> Vec<HostAsset> {
        self.data
            .into_iter()
            .filter_map(|item| match item {
                DataItem::HostAsset(host) => Some(host),
                DataItem::Tag(_) => None,
            })
            .collect()
    }

    /// Unwrap the `Tag` elements of `data`, in server order.
    #[must_use]
    pub fn into_tags(self) -> Vec<Tag> {
        self.data
            .into_iter()
            .filter_map(|item| match item {
                DataItem::Tag(tag) => Some(tag),
                DataItem::HostAsset(_) => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseErrorDetails {
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Single-key wrapper around one entity of a response `data` list.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub enum DataItem {
    HostAsset(HostAsset),
    Tag(Tag),
}
