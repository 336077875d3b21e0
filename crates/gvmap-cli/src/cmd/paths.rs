//! Paths command

use anyhow::Result;
use gvmap_core::Config;

use super::resolve_inputs;

/// Print the resolved input directories, one per line, in input order.
pub fn paths(config: &Config, specs: &[String]) -> Result<()> {
    let resolution = resolve_inputs(config, specs)?;
    for path in &resolution.paths {
        println!("{}", path.display());
    }
    Ok(())
}
