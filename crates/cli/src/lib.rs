// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! csrs - command-line access to line-addressable delimited text files.
//!
//! This crate backs the `csvseek` binary. Each command opens the file as a
//! [`csvseek_core::IndexedLineStream`] with options resolved from the config
//! file and flags (see [`config`]), runs one operation and exits.

mod cli;
mod commands;
pub mod env;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat, StreamArgs};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Resolves configuration and runs one command.
pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::discover(cli.stream.config.as_deref(), &cwd)?.with_args(&cli.stream);
    let options = &config.stream;

    match cli.command {
        Command::Read {
            file,
            from,
            limit,
            output,
        } => commands::read::run(&file, options, from, limit, output.unwrap_or(config.output)),
        Command::Get { file, line, output } => {
            commands::read::get(&file, options, line, output.unwrap_or(config.output))
        }
        Command::Append { file, values } => commands::write::append(&file, options, &values),
        Command::Insert { file, line, values } => {
            commands::write::insert(&file, options, line, &values)
        }
        Command::Count { file } => commands::read::count(&file, options),
        Command::Header { file } => commands::read::header(&file, options, config.output),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "csvseek", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
