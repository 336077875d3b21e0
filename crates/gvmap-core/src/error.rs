//! Error types for resolution and configuration loading.

use gvmap_schema::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to resolve a list of input specs.
///
/// Resolution is all-or-nothing: the first spec that fails aborts the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A spec's group/version portion could not be parsed.
    #[error("invalid input spec {spec:?}: {source}")]
    Spec {
        /// The raw spec as given.
        spec: String,
        /// Why its group/version portion was rejected.
        #[source]
        source: ParseError,
    },
}

/// Failure to load a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration TOML.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}
