// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::Deserialize;

/// Output format for commands that print lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "csvseek")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Read, append and insert lines of a delimited text file by line number")]
#[command(
    long_about = "Read, append and insert lines of a delimited text file by line number.\n\n\
    Line numbers are zero-based and count data lines only; a header line, when\n\
    enabled, is not numbered."
)]
pub struct Cli {
    #[command(flatten)]
    pub stream: StreamArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags that shape how a file is read and written.
///
/// Each one overrides the matching key from the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct StreamArgs {
    /// Config file (default: ./csvseek.toml, then the user config dir)
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Field delimiter
    #[arg(long, short = 'd', global = true)]
    pub delimiter: Option<char>,

    /// Treat the first line as column names
    #[arg(long, global = true)]
    pub header: bool,

    /// Expected column names (comma-separated); implies --header
    #[arg(long, global = true, value_delimiter = ',', value_name = "names")]
    pub columns: Option<Vec<String>>,

    /// Terminate written lines with \r\n
    #[arg(long, global = true)]
    pub crlf: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print lines, optionally starting at a line number
    #[command(after_help = "\
Examples:
  csvseek read data.csv                     Print every line
  csvseek read data.csv --from 100 -n 10    Print lines 100 to 109
  csvseek --header read data.csv -o json    Print lines as JSON")]
    Read {
        /// File to read
        file: PathBuf,

        /// First line to print
        #[arg(long, default_value_t = 0)]
        from: i64,

        /// Maximum number of lines to print
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum)]
        output: Option<OutputFormat>,
    },

    /// Print a single line
    #[command(arg_required_else_help = true)]
    Get {
        /// File to read
        file: PathBuf,

        /// Zero-based line number
        line: i64,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum)]
        output: Option<OutputFormat>,
    },

    /// Append a line after the last line
    #[command(arg_required_else_help = true)]
    Append {
        /// File to append to (created if missing)
        file: PathBuf,

        /// Field values
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Insert a line, moving it and every following line down by one
    #[command(
        arg_required_else_help = true,
        after_help = "\
Examples:
  csvseek insert data.csv 0 id name     Insert a new first line
  csvseek insert data.csv 5 6 six       Insert before the current line 5"
    )]
    Insert {
        /// File to modify
        file: PathBuf,

        /// Zero-based line number the new line takes
        line: i64,

        /// Field values
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Print the number of data lines
    Count {
        /// File to count
        file: PathBuf,
    },

    /// Print the column names from the header line
    Header {
        /// File to read
        file: PathBuf,
    },

    /// Generate shell completion script
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
