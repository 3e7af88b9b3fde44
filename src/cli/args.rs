//! Defines the command-line arguments and subcommands for the Nomen CLI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Profile;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "nomen",
    version,
    about = "Suggests variable names for JavaScript expressions, best first."
)]
pub struct NomenArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Naming profile: `context-sensitive` or `context-insensitive`.
    /// Overrides the configuration file.
    #[arg(long, global = true)]
    pub profile: Option<Profile>,

    /// YAML configuration file.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stop after this many names.
    #[arg(long, short = 'n', global = true, value_name = "N")]
    pub limit: Option<usize>,

    /// Keep candidates that are not valid identifiers.
    #[arg(long, global = true)]
    pub raw: bool,

    /// Print the names as a JSON array.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Name a JavaScript expression given as source text.
    Names {
        /// The expression, e.g. `string.indexOf(prefix)`.
        #[arg(required = true)]
        source: String,
    },
    /// Name an ESTree node read from a JSON file.
    Estree {
        /// The JSON file, or `-` for standard input.
        #[arg(default_value = "-")]
        file: PathBuf,
    },
}
