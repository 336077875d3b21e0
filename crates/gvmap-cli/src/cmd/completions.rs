//! Completions command

use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io::Write;

/// Write completions for `shell` to `out`.
pub fn completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = crate::Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
}
