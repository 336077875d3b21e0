//! gvmap - group/version input resolution CLI

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gvmap_cli::cmd;
use gvmap_cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise -v switches on resolution details
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Resolve { specs, format } => {
            let config = cmd::load_config(cli.config.as_deref(), cli.base_path, cli.legacy_group)?;
            cmd::resolve::resolve(&config, &specs, format)
        }
        Commands::Paths { specs } => {
            let config = cmd::load_config(cli.config.as_deref(), cli.base_path, cli.legacy_group)?;
            cmd::paths::paths(&config, &specs)
        }
        Commands::Completions { shell } => {
            cmd::completions::completions(shell, &mut std::io::stdout());
            Ok(())
        }
    }
}
