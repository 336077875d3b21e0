//! Splitting of raw input specs into a directory prefix and a group/version.

/// A raw spec split into its directory prefix and group/version parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSpec<'a> {
    /// Leading directories, present only when the spec has 3+ segments.
    pub prefix: Option<&'a str>,
    /// The trailing `group/version` (or bare group) portion.
    pub group_version: &'a str,
}

/// Split `raw` on `/` into an optional directory prefix and a group/version.
///
/// Specs with at most two segments have no prefix and are returned whole, so
/// `"api/"` and `"apps/v1"` pass through unchanged. Longer specs keep their
/// last two segments as the group/version: `"a/b/apps/v1"` splits into
/// `a/b` and `apps/v1`.
///
/// Empty segments count, which means `"a//v1"` has the prefix `a`.
pub fn parse_spec(raw: &str) -> PathSpec<'_> {
    let separators: Vec<usize> = raw.match_indices('/').map(|(i, _)| i).collect();

    // segments == separators + 1
    if separators.len() < 2 {
        return PathSpec {
            prefix: None,
            group_version: raw,
        };
    }

    let split = separators[separators.len() - 2];
    PathSpec {
        prefix: Some(&raw[..split]),
        group_version: &raw[split + 1..],
    }
}
