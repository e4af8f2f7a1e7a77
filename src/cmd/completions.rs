//! Completions command implementation
//!
//! Handles the `bytecode-diff completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// ```bash
/// # Bash
/// bytecode-diff completions bash > /etc/bash_completion.d/bytecode-diff
///
/// # Zsh
/// bytecode-diff completions zsh > ~/.zfunc/_bytecode-diff
///
/// # Fish
/// bytecode-diff completions fish > ~/.config/fish/completions/bytecode-diff.fish
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut Command) {
    write_completions(shell, cmd, &mut std::io::stdout());
}

/// Write the completion script for `cmd` to `out`
pub fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}
