//! Command modules - one file per CLI command

pub mod completions;
pub mod paths;
pub mod resolve;

use anyhow::{Context, Result};
use gvmap_core::config::DEFAULT_CONFIG_FILE;
use gvmap_core::{Config, Resolution, Resolver};
use std::path::{Path, PathBuf};

/// Load the config file and apply command-line overrides.
///
/// An explicitly named file must exist; the default `gvmap.toml` is optional.
pub fn load_config(
    path: Option<&Path>,
    base_path: Option<PathBuf>,
    legacy_group: Option<String>,
) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };

    if let Some(base_path) = base_path {
        config.base_path = base_path;
    }
    if let Some(legacy_group) = legacy_group {
        config.legacy_group = legacy_group;
    }

    tracing::debug!(
        base_path = %config.base_path.display(),
        legacy_group = %config.legacy_group,
        "effective configuration"
    );
    Ok(config)
}

/// Resolve `specs`, or the configured inputs when `specs` is empty.
pub fn resolve_inputs(config: &Config, specs: &[String]) -> Result<Resolution> {
    let inputs = if specs.is_empty() {
        config.inputs.as_slice()
    } else {
        specs
    };

    Resolver::new(config.resolver_config())
        .resolve(inputs)
        .context("Failed to resolve input versions")
}
