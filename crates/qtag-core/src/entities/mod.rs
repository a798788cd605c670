//! Entity structs for the asset inventory.
//!
//! Field names follow the platform's camelCase JSON. Fields the platform sends
//! that qtag never reads are ignored on deserialization.

mod host;
mod tag;

pub use host::{HostAsset, TagAssignment, TagList};
pub use tag::{Tag, TagSimple};
