//! Mapping of group/version identities onto source directories.
//!
//! Paths are computed lexically. Nothing here touches the filesystem, so a
//! resolved directory need not exist.

use std::path::{Component, Path, PathBuf};

/// Returns the directory holding the sources for one group/version.
///
/// The legacy group lives beside `base` rather than beneath it, so its path
/// is `base/../<legacy_group>/<version>` and `prefix` is ignored. Every
/// other group resolves to `base/<prefix>/<group>/<version>`.
///
/// ```
/// use gvmap_core::resolve_path;
/// use std::path::Path;
///
/// let base = Path::new("k8s.io/kubernetes/pkg/apis");
/// assert_eq!(
///     resolve_path(base, "api", Some("apps"), "api", "v1"),
///     Path::new("k8s.io/kubernetes/pkg/api/v1"),
/// );
/// assert_eq!(
///     resolve_path(base, "api", None, "apps", "v1beta1"),
///     Path::new("k8s.io/kubernetes/pkg/apis/apps/v1beta1"),
/// );
/// ```
pub fn resolve_path(
    base: &Path,
    legacy_group: &str,
    prefix: Option<&str>,
    group: &str,
    version: &str,
) -> PathBuf {
    if group == legacy_group {
        join_clean(base, &["..", legacy_group, version])
    } else {
        join_clean(base, &[prefix.unwrap_or(""), group, version])
    }
}

/// Lexically normalize a path.
///
/// Drops empty and `.` segments and folds each `..` into the segment before
/// it. A `..` that has nothing to fold into is kept on relative paths and
/// dropped at the root. An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            c => out.push(c),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

// Segments are appended textually, so a leading `/` on a segment never
// replaces `base` the way `Path::join` would. Joining nothing yields an
// empty path, not `.`.
fn join_clean(base: &Path, segments: &[&str]) -> PathBuf {
    let tail = segments
        .iter()
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    if base.as_os_str().is_empty() && tail.is_empty() {
        return PathBuf::new();
    }
    clean_path(&base.join(tail))
}
