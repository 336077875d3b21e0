//! Parsing of `group/version` strings into [`GroupVersion`] identities.
//!
//! Accepted forms:
//!
//! - `""` or `"/"`: the empty identity
//! - `"apps"`: group only, unversioned
//! - `"apps/v1"`: group and version
//!
//! A trailing separator is insignificant, so `"apps/"` and `"apps"` parse to
//! the same identity.
//!
//! # Example
//!
//! ```
//! use gvmap_schema::{GroupVersion, to_group_version};
//!
//! let gv = to_group_version("apps/v1beta1").unwrap();
//! assert_eq!(gv, GroupVersion::new("apps", "v1beta1"));
//! assert_eq!(to_group_version("api/").unwrap(), to_group_version("api").unwrap());
//! ```

use crate::types::GroupVersion;
use regex::Regex;
use std::sync::LazyLock;

/// Lowercase DNS-1123 subdomain (e.g. `rbac.authorization.k8s.io`).
static GROUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("group pattern is valid")
});

/// Lowercase DNS-1123 label (e.g. `v1beta1`).
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("version pattern is valid")
});

/// Errors that can occur when parsing a group/version string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// More than one `/` separator.
    #[error("unexpected GroupVersion string: {0}")]
    SegmentCount(String),

    /// The group token is not a lowercase DNS subdomain.
    #[error("invalid group {group:?} in {input:?}")]
    InvalidGroup {
        /// Offending group token.
        group: String,
        /// Full string being parsed.
        input: String,
    },

    /// The version token is not a lowercase DNS label.
    #[error("invalid version {version:?} in {input:?}")]
    InvalidVersion {
        /// Offending version token.
        version: String,
        /// Full string being parsed.
        input: String,
    },
}

/// Parse a `group/version` or bare `group` string.
///
/// # Errors
///
/// Returns [`ParseError::SegmentCount`] if the string holds more than one
/// `/`, and [`ParseError::InvalidGroup`] / [`ParseError::InvalidVersion`] if
/// either non-empty token contains characters outside its allowed set.
pub fn to_group_version(s: &str) -> Result<GroupVersion, ParseError> {
    if s.is_empty() || s == "/" {
        return Ok(GroupVersion::default());
    }

    let (group, version) = match s.split_once('/') {
        None => (s, ""),
        Some((_, rest)) if rest.contains('/') => {
            return Err(ParseError::SegmentCount(s.to_string()));
        }
        Some((group, version)) => (group, version),
    };

    if !group.is_empty() && !GROUP_RE.is_match(group) {
        return Err(ParseError::InvalidGroup {
            group: group.to_string(),
            input: s.to_string(),
        });
    }
    if !version.is_empty() && !VERSION_RE.is_match(version) {
        return Err(ParseError::InvalidVersion {
            version: version.to_string(),
            input: s.to_string(),
        });
    }

    Ok(GroupVersion::new(group, version))
}

impl std::str::FromStr for GroupVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        to_group_version(s)
    }
}
