//! gvmap - group/version input resolution
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
//!
//! Resolves the configured `[prefix/]group/version` specs into the list of
//! source directories a code generator should load, along with the versions
//! found for each API group.
//!
//! # Configuration
//!
//! Settings come from `gvmap.toml` in the working directory (or `--config`),
//! overridden by `--base-path` / `--legacy-group`. Specs given on the
//! command line replace the configured `inputs`.

pub mod cmd;
pub mod report;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "gvmap")]
#[command(
    author,
    version,
    about = "Resolve API group/version specs into generator input directories"
)]
pub struct Cli {
    /// Config file (defaults to ./gvmap.toml when present)
    #[arg(long, short = 'c', global = true, env = "GVMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the root directory of the API group packages
    #[arg(long, global = true, env = "GVMAP_BASE_PATH")]
    pub base_path: Option<PathBuf>,

    /// Override the group that lives beside the base path
    #[arg(long, global = true)]
    pub legacy_group: Option<String>,

    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve specs and show directories and grouped versions
    Resolve {
        /// Specs to resolve instead of the configured inputs (e.g. apps/v1)
        specs: Vec<String>,
        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print only the input directories, one per line
    Paths {
        /// Specs to resolve instead of the configured inputs (e.g. apps/v1)
        specs: Vec<String>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Machine-readable JSON document
    Json,
}
