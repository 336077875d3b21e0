//! Identity newtypes: groups, versions, and their pairings.

use serde::{Deserialize, Serialize};

/// A named collection of related API versions (e.g. `apps`, `rbac`).
///
/// Compared and ordered by exact string value. The empty group is valid and
/// names the legacy core group when it is spelled `/v1`.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Group(String);

impl Group {
    /// Create a group from the given string (stored as-is).
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Return the group name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the unnamed group.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for Group {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Group {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Group {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Group {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for Group {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Group {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One revision of a group's schema (e.g. `v1`, `v1beta1`).
///
/// Unlike package versions these are opaque labels: ordering is byte-wise,
/// so `v1beta1` sorts after `v1`. An empty version denotes the unversioned
/// (internal) package of a group.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Version(String);

impl Version {
    /// Create a version from the given string (stored as-is).
    pub fn new(v: &str) -> Self {
        Self(v.to_string())
    }

    /// Return the version string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the unversioned (internal) package.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for Version {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Version {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Version {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Version {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The pair identifying one generation target.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GroupVersion {
    /// Group half of the identity.
    pub group: Group,
    /// Version half of the identity; empty for an unversioned package.
    pub version: Version,
}

impl GroupVersion {
    /// Build a group/version pair.
    pub fn new(group: impl Into<Group>, version: impl Into<Version>) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
        }
    }
}

impl std::fmt::Display for GroupVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.group)
        } else {
            write!(f, "{}/{}", self.group, self.version)
        }
    }
}

/// Every version encountered for one group, in encounter order.
///
/// Duplicates are kept: listing `apps/v1` twice yields `["v1", "v1"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupVersions {
    /// The group all `versions` belong to.
    pub group: Group,
    /// Versions in the order their specs were processed.
    pub versions: Vec<Version>,
}

impl GroupVersions {
    /// Start a collection for `group` with its first version.
    pub fn new(group: Group, first: Version) -> Self {
        Self {
            group,
            versions: vec![first],
        }
    }

    /// Append a version, keeping duplicates.
    pub fn push(&mut self, version: Version) {
        self.versions.push(version);
    }

    /// Iterate the collection as full [`GroupVersion`] pairs.
    pub fn group_versions(&self) -> impl Iterator<Item = GroupVersion> + '_ {
        self.versions
            .iter()
            .map(|v| GroupVersion::new(self.group.clone(), v.clone()))
    }
}
