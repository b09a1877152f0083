//! Shell completion scripts for the `setcalc` command.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Name completions are registered under when the command has no bin name.
const BIN_NAME: &str = "setcalc";

/// Write the completion script for `shell` to `out`.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    let bin = cmd.get_bin_name().unwrap_or(BIN_NAME).to_string();
    generate(shell, cmd, bin, out);
}

/// The completion script for `shell` as a string.
#[must_use]
pub fn completion_script(cmd: &mut Command, shell: Shell) -> String {
    let mut buf = Vec::new();
    generate_completion(cmd, shell, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
