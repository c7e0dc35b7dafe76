mod impact;
mod screen;

use impact::run_impact;
use screen::run_screen;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use biosift::{load_params, HeuristicParams};

use crate::cli::Command;
use crate::display::Context as DisplayContext;
use crate::io::{create_output, stdout_is_tty};

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Screen(args) => run_screen(args, ctx),
        Command::Impact(args) => run_impact(args, ctx),
    }
}

fn load_heuristic_params(path: Option<&Path>) -> Result<HeuristicParams> {
    let custom = match path {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read parameter file: {}", path.display()))?,
        ),
        None => None,
    };

    load_params(custom.as_deref()).context("Failed to load heuristic parameters")
}

/// Writes the TOML report to the given path, or to stdout when output is
/// redirected. With no path and an interactive stdout the tables on stderr
/// already carry the results, so nothing is written.
fn write_report<T: Serialize>(path: Option<&Path>, report: &T) -> Result<()> {
    if path.is_none() && stdout_is_tty() {
        return Ok(());
    }

    let text = toml::to_string_pretty(report).context("Failed to encode report")?;

    let mut out = create_output(path)?;
    out.write_all(text.as_bytes())
        .context("Failed to write report")?;
    out.flush().context("Failed to write report")?;

    Ok(())
}
