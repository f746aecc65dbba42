//! Format command implementation.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use trimlint_core::{Analyzer, FormatMode};

use super::output;
use crate::{OutputFormat, TargetArgs};

/// Runs the format command.
///
/// With `--stdin` the corrected text is written to stdout verbatim and no
/// summary is printed; `--dry-run` then only affects the exit code.
pub fn run(
    target: &TargetArgs,
    dry_run: bool,
    format: OutputFormat,
    config: Option<&Path>,
) -> Result<ExitCode> {
    let analyzer = super::build_analyzer(target, config)?;

    if target.stdin {
        let text = super::read_stdin()?;
        return format_stdin(&analyzer, &text, dry_run, &mut std::io::stdout().lock());
    }

    let mode = if dry_run {
        FormatMode::DryRun
    } else {
        FormatMode::Write
    };
    let result = analyzer.format(mode).context("Format failed")?;

    output::print_format(&result, format, dry_run)?;

    if dry_run && !result.changed.is_empty() {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Writes the corrected `text` to `out`. A dry run fails if it changed.
fn format_stdin(
    analyzer: &Analyzer,
    text: &str,
    dry_run: bool,
    out: &mut impl Write,
) -> Result<ExitCode> {
    let formatted = analyzer.format_source(text);
    out.write_all(formatted.as_bytes())
        .context("Failed to write stdout")?;

    if dry_run && formatted != text {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
