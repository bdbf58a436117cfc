// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stream configuration.
//!
//! Settings come from a TOML file and are then overridden by command-line
//! flags. The file is the first of:
//! - the path given with `--config`
//! - `csvseek.toml` in the current directory
//! - `config.toml` in the user config dir (`$CSVSEEK_CONFIG_DIR`, else
//!   `<platform config dir>/csvseek`)
//!
//! ```toml
//! delimiter = ";"
//! header = true
//! columns = ["id", "name"]
//! newline = "crlf"
//! output = "json"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use csvseek_core::{NewLine, Options};

use crate::cli::{OutputFormat, StreamArgs};
use crate::env;
use crate::error::{Error, Result};

const LOCAL_CONFIG_FILE_NAME: &str = "csvseek.toml";
const USER_CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub stream: Options,
    /// Default output format for commands that print lines.
    #[serde(default)]
    pub output: OutputFormat,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Loads the first config file found, or the defaults when there is none.
    ///
    /// An explicit path must exist.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match find_config(cwd) {
            Some(path) => Self::load(&path),
            None => Ok(Config::default()),
        }
    }

    /// Applies command-line flags on top of the file settings.
    pub fn with_args(mut self, args: &StreamArgs) -> Self {
        if let Some(delimiter) = args.delimiter {
            self.stream.delimiter = delimiter;
        }
        if args.header {
            self.stream.has_header = true;
        }
        if let Some(columns) = &args.columns {
            self.stream.has_header = true;
            self.stream.column_names = Some(columns.clone());
        }
        if args.crlf {
            self.stream.newline = NewLine::CrLf;
        }
        self
    }
}

fn find_config(cwd: &Path) -> Option<PathBuf> {
    let local = cwd.join(LOCAL_CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    let user = user_config_dir()?.join(USER_CONFIG_FILE_NAME);
    user.is_file().then_some(user)
}

/// Directory holding the user-level config file.
pub fn user_config_dir() -> Option<PathBuf> {
    env::config_dir().or_else(|| dirs::config_dir().map(|d| d.join("csvseek")))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
