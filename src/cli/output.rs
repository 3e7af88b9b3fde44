//! Handles all user-facing output for the CLI.
//!
//! Names are printed as a ranked list, coloured when stdout is a terminal,
//! or as a JSON array.

use std::io::{self, IsTerminal, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::errors::{ErrorKind, NomenError};

fn color_choice() -> ColorChoice {
    if io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Prints `names` one per line with their rank. The best name is highlighted.
pub fn print_ranked(names: &[String]) -> Result<(), NomenError> {
    let mut stdout = StandardStream::stdout(color_choice());
    write_ranked(&mut stdout, names).map_err(stdout_error)
}

pub fn print_json(names: &[String]) -> Result<(), NomenError> {
    let json = serde_json::to_string(names).map_err(|e| {
        NomenError::bare(ErrorKind::Io {
            path: "<stdout>".into(),
            message: e.to_string(),
        })
    })?;
    writeln!(io::stdout(), "{json}").map_err(stdout_error)
}

fn write_ranked(out: &mut impl WriteColor, names: &[String]) -> io::Result<()> {
    if names.is_empty() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        writeln!(out, "no names found")?;
        return out.reset();
    }

    let width = names.len().to_string().len();
    for (rank, name) in names.iter().enumerate() {
        out.set_color(ColorSpec::new().set_dimmed(true))?;
        write!(out, "{:>width$}. ", rank + 1)?;
        if rank == 0 {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        } else {
            out.reset()?;
        }
        writeln!(out, "{name}")?;
    }
    out.reset()
}

fn stdout_error(e: io::Error) -> NomenError {
    NomenError::bare(ErrorKind::Io {
        path: "<stdout>".into(),
        message: e.to_string(),
    })
}
