//! Configuration file (`gvmap.toml`) parsing.
//!
//! The file names the input specs to resolve, where their packages live, and
//! the settings handed on to the generator. Every key is optional; the
//! defaults describe the Kubernetes API tree:
//!
//! ```toml
//! base_path = "k8s.io/kubernetes/pkg/apis"
//! legacy_group = "api"
//! inputs = ["api/", "apps/", "rbac/"]
//!
//! [generator]
//! output_file_base_name = "openapi_generated"
//! ```

use crate::error::ConfigError;
use crate::resolver::ResolverConfig;
use gvmap_schema::LEGACY_GROUP;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "gvmap.toml";

/// Default root of the API group packages.
pub const DEFAULT_BASE_PATH: &str = "k8s.io/kubernetes/pkg/apis";

/// Default generated file base name.
pub const DEFAULT_OUTPUT_FILE_BASE_NAME: &str = "openapi_generated";

/// Input specs used when the config does not list any.
pub const DEFAULT_INPUTS: &[&str] = &[
    "api/",
    "authentication/",
    "authorization/",
    "autoscaling/",
    "batch/",
    "certificates/",
    "extensions/",
    "rbac/",
    "storage/",
    "apps/",
    "policy/",
];

/// Top-level configuration parsed from `gvmap.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root directory (or import path) holding the API group packages.
    pub base_path: PathBuf,
    /// Group whose packages sit beside `base_path`.
    pub legacy_group: String,
    /// Raw `[prefix/]group/version` specs, in the order to process them.
    pub inputs: Vec<String>,
    /// Settings passed through to the generator.
    pub generator: GeneratorConfig,
}

/// The `[generator]` section: arguments for the downstream generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Base name of the generated file, without extension.
    pub output_file_base_name: String,
    /// Boilerplate header prepended to generated files.
    pub go_header_file: Option<PathBuf>,
    /// Package the generated code is written into.
    pub output_package: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            legacy_group: LEGACY_GROUP.to_string(),
            inputs: DEFAULT_INPUTS.iter().map(ToString::to_string).collect(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_file_base_name: DEFAULT_OUTPUT_FILE_BASE_NAME.to_string(),
            go_header_file: None,
            output_package: None,
        }
    }
}

impl Config {
    /// Load and parse a `Config` from the given file path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are not valid config TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), inputs = config.inputs.len(), "loaded config");
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config TOML from a string.
    ///
    /// # Errors
    ///
    /// Returns the TOML error if `content` is malformed or has unknown keys.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The resolver settings described by this config.
    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig::new(self.base_path.clone()).with_legacy_group(self.legacy_group.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.inputs.len(), 11);
        assert_eq!(config.inputs[0], "api/");
        assert_eq!(config.generator.output_file_base_name, "openapi_generated");
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"
base_path = "example.com/pkg/apis"
legacy_group = "core"
inputs = ["core/v1", "apps/v1beta1"]

[generator]
output_file_base_name = "zz_openapi"
go_header_file = "hack/boilerplate.go.txt"
output_package = "example.com/pkg/generated/openapi"
"#,
        )
        .unwrap();

        assert_eq!(config.base_path, Path::new("example.com/pkg/apis"));
        assert_eq!(config.inputs, vec!["core/v1", "apps/v1beta1"]);
        assert_eq!(
            config.generator.go_header_file.as_deref(),
            Some(Path::new("hack/boilerplate.go.txt"))
        );

        let resolver = config.resolver_config();
        assert_eq!(resolver.legacy_group, "core");
        assert_eq!(resolver.base_path, Path::new("example.com/pkg/apis"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(Config::parse("basepath = \"x\"").is_err());
        assert!(Config::parse("[generator]\noutput = \"x\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "inputs = [\"rbac/\"]").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.inputs, vec!["rbac/"]);
        assert_eq!(config.base_path, Path::new(DEFAULT_BASE_PATH));
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "inputs = 3").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Read { .. })
        ));
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }
}
