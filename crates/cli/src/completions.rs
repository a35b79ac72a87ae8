// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation for the ew CLI.
//!
//! Install completions using:
//!
//! ```bash
//! # Bash
//! ew completions bash > ~/.local/share/bash-completion/completions/ew
//!
//! # Zsh
//! ew completions zsh > ~/.zfunc/_ew
//!
//! # Fish
//! ew completions fish > ~/.config/fish/completions/ew.fish
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Write completions for the `ew` command tree to stdout.
pub fn generate_completions<C: CommandFactory>(shell: Shell) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "ew", &mut io::stdout());
}

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
