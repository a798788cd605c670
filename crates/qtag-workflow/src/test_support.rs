//! Shared helpers for workflow tests.

use std::sync::Arc;

use qtag_api::test_support::RecordingTransport;
use qtag_api::{hosts, tags};
use qtag_core::MatchPolicy;

use crate::Workflow;

pub const HOST_SEARCH: &str = hosts::SEARCH_PATH;
pub const TAG_SEARCH: &str = tags::SEARCH_PATH;

pub fn update_path(id: u64) -> String {
    format!("{}/{id}", hosts::UPDATE_PATH)
}

pub fn get_path(id: u64) -> String {
    format!("{}/{id}", hosts::GET_PATH)
}

/// Workflow over a fresh recording transport, plus the transport for assertions.
pub fn workflow(policy: MatchPolicy) -> (Workflow<RecordingTransport>, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::new());
    (Workflow::new(Arc::clone(&transport), policy), transport)
}
