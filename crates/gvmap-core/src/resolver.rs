//! Resolution of raw input specs into directories and grouped versions.

use crate::config::DEFAULT_BASE_PATH;
use crate::error::ResolveError;
use crate::paths::resolve_path;
use crate::spec::parse_spec;
use gvmap_schema::{Group, GroupVersion, GroupVersions, LEGACY_GROUP, to_group_version};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info};

/// Settings that shape how group/versions map onto directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Root directory (or import path) holding the API group packages.
    pub base_path: PathBuf,
    /// Group whose packages sit beside `base_path` instead of beneath it.
    pub legacy_group: String,
}

impl ResolverConfig {
    /// Config rooted at `base_path` with the default legacy group (`api`).
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            legacy_group: LEGACY_GROUP.to_string(),
        }
    }

    /// Replace the legacy group name.
    pub fn with_legacy_group(mut self, group: impl Into<String>) -> Self {
        self.legacy_group = group.into();
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH)
    }
}

/// One group/version together with its resolved directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    /// The parsed identity.
    pub group_version: GroupVersion,
    /// Directory computed for it.
    pub path: PathBuf,
}

/// Everything produced by one resolution run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// One directory per input spec, in input order. Duplicates are kept.
    pub paths: Vec<PathBuf>,
    /// Versions grouped per group, groups sorted by name (byte-wise).
    pub groups: Vec<GroupVersions>,
    /// Directory for each distinct group/version; the last spec wins.
    pub path_by_gv: HashMap<GroupVersion, PathBuf>,
    /// Identity and directory per input spec, in input order.
    pub entries: Vec<PathEntry>,
}

impl Resolution {
    /// Whether no specs were given.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Resolves raw input specs against a fixed [`ResolverConfig`].
///
/// Holds no state between calls; one resolver can serve many threads.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver for the given settings.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Resolve `specs` into directories and grouped versions.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Spec`] for the first spec whose group/version
    /// portion fails to parse. No partial result is produced.
    pub fn resolve<S: AsRef<str>>(&self, specs: &[S]) -> Result<Resolution, ResolveError> {
        resolve(specs, &self.config)
    }
}

/// Resolve `specs` into directories and grouped versions.
///
/// Each spec is split into an optional directory prefix and a group/version,
/// the group/version is parsed, and the directory is computed with
/// [`resolve_path`]. Versions accumulate per group in input order.
///
/// # Errors
///
/// Returns [`ResolveError::Spec`] for the first spec whose group/version
/// portion fails to parse. No partial result is produced.
pub fn resolve<S: AsRef<str>>(
    specs: &[S],
    config: &ResolverConfig,
) -> Result<Resolution, ResolveError> {
    let mut seen_groups: HashMap<Group, GroupVersions> = HashMap::new();
    let mut path_by_gv = HashMap::new();
    let mut paths = Vec::with_capacity(specs.len());
    let mut entries = Vec::with_capacity(specs.len());

    for raw in specs {
        let raw = raw.as_ref();
        let spec = parse_spec(raw);
        let gv = to_group_version(spec.group_version).map_err(|source| ResolveError::Spec {
            spec: raw.to_string(),
            source,
        })?;

        seen_groups
            .entry(gv.group.clone())
            .and_modify(|group| group.push(gv.version.clone()))
            .or_insert_with(|| GroupVersions::new(gv.group.clone(), gv.version.clone()));

        let path = resolve_path(
            &config.base_path,
            &config.legacy_group,
            spec.prefix,
            &gv.group,
            &gv.version,
        );
        debug!(spec = raw, group_version = %gv, path = %path.display(), "resolved input spec");

        paths.push(path.clone());
        path_by_gv.insert(gv.clone(), path.clone());
        entries.push(PathEntry {
            group_version: gv,
            path,
        });
    }

    // HashMap iteration order is arbitrary; the output order comes from here.
    let mut groups: Vec<GroupVersions> = seen_groups.into_values().collect();
    groups.sort_by(|a, b| a.group.cmp(&b.group));

    info!(
        inputs = paths.len(),
        groups = groups.len(),
        targets = path_by_gv.len(),
        "resolved input directories"
    );

    Ok(Resolution {
        paths,
        groups,
        path_by_gv,
        entries,
    })
}
