//! # qtag-workflow
//!
//! The host/tag workflows behind the `qtag` commands.
//!
//! [`Workflow`] composes a [`HostDirectory`] and a [`TagDirectory`] over one
//! shared [`Transport`]. Every operation runs resolve → validate → mutate →
//! report, keeps no state between calls, and returns an outcome value from
//! [`outcome`] describing what happened. Operations are implemented as
//! `impl Workflow` blocks in [`lookup`], [`tagging`] and [`rename`].
//!
//! Error policy:
//! - missing or malformed arguments fail with [`WorkflowError::Validation`]
//!   before any request is made;
//! - a failed mutating call is logged and reported in the outcome, never
//!   propagated;
//! - in batches, one item's failure does not stop the next item.

use std::sync::Arc;

use qtag_api::{HostDirectory, TagDirectory, Transport};
use qtag_core::MatchPolicy;

pub mod error;
pub mod lookup;
pub mod outcome;
pub mod rename;
pub mod resolve;
pub mod tagging;

#[cfg(test)]
mod test_support;

pub use error::WorkflowError;
pub use outcome::{
    BulkRenameOutcome, BulkTagItem, BulkTagOutcome, HostRename, HostSummary, RenameOutcome,
    TagChangeOutcome,
};

/// Entry point for all host/tag operations.
pub struct Workflow<T> {
    hosts: HostDirectory<T>,
    tags: TagDirectory<T>,
    policy: MatchPolicy,
}

impl<T: Transport> Workflow<T> {
    /// Build a workflow over `transport`, narrowing name searches with `policy`.
    pub fn new(transport: Arc<T>, policy: MatchPolicy) -> Self {
        Self {
            hosts: HostDirectory::new(Arc::clone(&transport)),
            tags: TagDirectory::new(transport),
            policy,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> MatchPolicy {
        self.policy
    }
}

/// The argument as given, if it is present and not blank. Search patterns
/// are sent unchanged, surrounding spaces included.
pub(crate) fn required(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
