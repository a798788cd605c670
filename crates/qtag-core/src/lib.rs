//! # qtag-core
//!
//! Core types and error types for qtag.
//!
//! This crate provides the foundational types shared across all qtag crates:
//! - Entity structs for the asset inventory (host assets, tags, tag assignments)
//! - Search criteria, operators, and the fixed result window
//! - `ServiceRequest` / `ServiceResponse` wire envelopes of the asset API
//! - Partial host update documents
//! - Host id list parsing and cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod search;
pub mod wire;

pub use entities::{HostAsset, Tag, TagAssignment, TagList, TagSimple};
pub use enums::{MatchPolicy, Operator, TagChange};
pub use errors::CoreError;
pub use search::{SearchCriterion, SearchPreferences};
pub use wire::HostAssetUpdate;
