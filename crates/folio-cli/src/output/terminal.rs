//! Table styling derived from the global flags and the terminal.

use std::io::IsTerminal;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};
use crate::output::table::TableOptions;

/// `COLUMNS` below this is ignored and the table is not shrunk.
const MIN_TABLE_WIDTH: usize = 40;

/// Options for the current process: stdout tty, `NO_COLOR` and `COLUMNS`.
pub fn table_options(flags: &GlobalFlags) -> TableOptions {
    TableOptions {
        max_width: table_width(std::env::var("COLUMNS").ok().as_deref()),
        color: wants_color(
            flags,
            std::io::stdout().is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
        ),
    }
}

fn wants_color(flags: &GlobalFlags, is_tty: bool, no_color: bool) -> bool {
    if flags.format != OutputFormat::Table {
        return false;
    }
    match flags.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty && !flags.quiet && !no_color,
    }
}

fn table_width(columns: Option<&str>) -> Option<usize> {
    columns?
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|width| *width >= MIN_TABLE_WIDTH)
}
