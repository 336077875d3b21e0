//! Shared identity types for gvmap.
//!
//! A [`GroupVersion`] names one generation target, e.g. `apps/v1beta1`.
//! [`GroupVersions`] collects every version seen for a single group.

pub mod group_version;
pub mod types;

// Re-exports
pub use group_version::{ParseError, to_group_version};
pub use types::*;

/// Name of the legacy core group, whose packages live beside the base path
/// rather than beneath it.
pub const LEGACY_GROUP: &str = "api";
