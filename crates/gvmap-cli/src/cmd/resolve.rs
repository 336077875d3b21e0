//! Resolve command

use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use gvmap_core::Config;

use super::resolve_inputs;
use crate::OutputFormat;
use crate::report::Report;

/// Resolve the inputs and print directories plus grouped versions.
pub fn resolve(config: &Config, specs: &[String], format: OutputFormat) -> Result<()> {
    let resolution = resolve_inputs(config, specs)?;
    let report = Report::new(
        &resolution,
        &config.base_path,
        &config.legacy_group,
        &config.generator,
    );

    match format {
        OutputFormat::Text => print!("{}", report.to_text(std::io::stdout().is_tty())),
        OutputFormat::Json => {
            let json = report.to_json().context("Failed to serialize resolution")?;
            println!("{json}");
        }
    }

    Ok(())
}
