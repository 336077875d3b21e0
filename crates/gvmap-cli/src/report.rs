//! Rendering of a resolution for the terminal or as JSON.

use crossterm::style::Stylize;
use gvmap_core::{GeneratorConfig, PathEntry, Resolution};
use gvmap_schema::GroupVersions;
use serde::Serialize;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Everything the `resolve` command reports, in a JSON-friendly shape.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub base_path: &'a Path,
    pub legacy_group: &'a str,
    pub generator: &'a GeneratorConfig,
    /// Input directories for the generator, in spec order.
    pub paths: &'a [PathBuf],
    /// Versions per group, sorted by group.
    pub groups: &'a [GroupVersions],
    /// Identity and directory per spec, in spec order.
    pub entries: &'a [PathEntry],
}

impl<'a> Report<'a> {
    pub fn new(
        resolution: &'a Resolution,
        base_path: &'a Path,
        legacy_group: &'a str,
        generator: &'a GeneratorConfig,
    ) -> Self {
        Self {
            base_path,
            legacy_group,
            generator,
            paths: &resolution.paths,
            groups: &resolution.groups,
            entries: &resolution.entries,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable summary. `styled` adds terminal colors.
    pub fn to_text(&self, styled: bool) -> String {
        let heading = |s: &str| {
            if styled {
                s.bold().to_string()
            } else {
                s.to_string()
            }
        };

        let mut out = String::new();
        let _ = writeln!(out, "{} ({})", heading("Input directories"), self.paths.len());
        for path in self.paths {
            let _ = writeln!(out, "  {}", path.display());
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({})", heading("Groups"), self.groups.len());
        let width = self
            .groups
            .iter()
            .map(|g| display_group(g).len())
            .max()
            .unwrap_or(0);
        for group in self.groups {
            let versions = group
                .versions
                .iter()
                .map(|v| if v.is_empty() { "(unversioned)" } else { v.as_str() })
                .collect::<Vec<_>>()
                .join(", ");
            let name = format!("{:<width$}", display_group(group));
            let name = if styled { name.cyan().to_string() } else { name };
            let _ = writeln!(out, "  {name}  {versions}");
        }

        out
    }
}

fn display_group(group: &GroupVersions) -> &str {
    if group.group.is_empty() {
        "(core)"
    } else {
        group.group.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gvmap_core::{Resolver, ResolverConfig};

    const BASE: &str = "k8s.io/kubernetes/pkg/apis";

    fn sample() -> Resolution {
        Resolver::new(ResolverConfig::new(BASE))
            .resolve(&["rbac/", "api/", "apps/v1", "apps/v1beta1"])
            .unwrap()
    }

    #[test]
    fn test_text_lists_paths_and_groups() {
        let resolution = sample();
        let generator = GeneratorConfig::default();
        let report = Report::new(&resolution, Path::new(BASE), "api", &generator);
        let text = report.to_text(false);

        assert!(text.starts_with("Input directories (4)\n"));
        assert!(text.contains("  k8s.io/kubernetes/pkg/apis/rbac\n"));
        assert!(text.contains("  k8s.io/kubernetes/pkg/api\n"));
        assert!(text.contains("Groups (3)\n"));
        assert!(text.contains("  apps  v1, v1beta1\n"));
        assert!(text.contains("  api   (unversioned)\n"));

        let api = text.find("  api ").unwrap();
        let apps = text.find("  apps ").unwrap();
        let rbac = text.find("  rbac ").unwrap();
        assert!(api < apps && apps < rbac);
    }

    #[test]
    fn test_json_shape() {
        let resolution = sample();
        let generator = GeneratorConfig::default();
        let report = Report::new(&resolution, Path::new(BASE), "api", &generator);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["paths"][0], "k8s.io/kubernetes/pkg/apis/rbac");
        assert_eq!(value["groups"][0]["group"], "api");
        assert_eq!(value["groups"][1]["versions"][1], "v1beta1");
        assert_eq!(value["entries"][2]["group_version"]["version"], "v1");
        assert_eq!(value["generator"]["output_file_base_name"], "openapi_generated");
    }
}
