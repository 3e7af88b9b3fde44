//! The Nomen Command-Line Interface.
//!
//! Parses the arguments, builds an expression tree from the chosen front-end,
//! and prints the namer's candidates.

use crate::cli::args::{Command, NomenArgs};
use crate::config::NamerConfig;
use crate::errors::{print_error, ErrorKind, NomenError};
use crate::namer::ExpressionNamer;
use crate::{estree, syntax};
use clap::Parser;
use std::io::Read;
use std::path::Path;
use std::{fs, io, process};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = NomenArgs::parse();

    if let Err(error) = execute(&args) {
        print_error(error);
        process::exit(1);
    }
}

fn execute(args: &NomenArgs) -> Result<(), NomenError> {
    let namer = ExpressionNamer::new(resolve_config(args)?);
    log::debug!("naming with profile {}", namer.config().profile);

    let expr = match &args.command {
        Command::Names { source } => syntax::parse_named("<argument>", source)?,
        Command::Estree { file } => estree::from_json_str(&read_input(file)?)?,
    };

    let candidates = if args.raw {
        namer.names_for(&expr, None)
    } else {
        namer.names(&expr)
    };
    let names: Vec<String> = candidates.take(args.limit.unwrap_or(usize::MAX)).collect();

    if args.json {
        output::print_json(&names)
    } else {
        output::print_ranked(&names)
    }
}

/// Configuration file first, then command-line overrides.
fn resolve_config(args: &NomenArgs) -> Result<NamerConfig, NomenError> {
    let mut config = match &args.config {
        Some(path) => NamerConfig::load(path)?,
        None => NamerConfig::default(),
    };
    if let Some(profile) = args.profile {
        config.profile = profile;
    }
    Ok(config)
}

fn read_input(path: &Path) -> Result<String, NomenError> {
    let io_error = |e: io::Error| {
        NomenError::bare(ErrorKind::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    };

    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(io_error)?;
        Ok(text)
    } else {
        fs::read_to_string(path).map_err(io_error)
    }
}
