//! Shared output formatting for lint and format results.

use anyhow::Result;
use miette::{NamedSource, Report};
use std::path::Path;
use trimlint_core::{FormatResult, LintResult, Severity, Violation, ViolationDiagnostic};

use crate::OutputFormat;

/// Where the text behind reported violations can be read back from.
#[derive(Debug, Clone, Copy)]
pub enum Sources<'a> {
    /// Files on disk, relative to this directory.
    Files(&'a Path),
    /// A single in-memory text (stdin).
    Text(&'a str),
}

impl Sources<'_> {
    fn load(&self, file: &Path) -> Option<String> {
        match self {
            Self::Files(base) => std::fs::read_to_string(base.join(file)).ok(),
            Self::Text(text) => Some((*text).to_string()),
        }
    }
}

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat, sources: Sources<'_>) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Pretty => print_pretty(result, sources),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for violation in &result.violations {
        let severity_indicator = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!(
            "{} {} at {}:{}:{}",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        );
        println!("  {}: {}", severity_indicator, violation.message);
        if let Some(suggestion) = &violation.suggestion {
            println!("  = help: {}", suggestion.message);
        }
        println!();
    }

    print_summary(result);
}

fn print_summary(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();
    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.files_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{}", compact_line(violation));
    }
}

fn compact_line(violation: &Violation) -> String {
    violation.to_string()
}

fn print_pretty(result: &LintResult, sources: Sources<'_>) {
    for violation in &result.violations {
        match sources.load(&violation.location.file) {
            Some(source) => {
                let name = violation.location.file.display().to_string();
                let report = Report::new(ViolationDiagnostic::from(violation))
                    .with_source_code(NamedSource::new(name, source));
                println!("{report:?}");
            }
            None => println!("{}", violation.format()),
        }
    }

    print_summary(result);
}

/// Print a format run summary.
pub fn print_format(result: &FormatResult, format: OutputFormat, dry_run: bool) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Compact => {
            for change in &result.changed {
                println!("{}", change.file.display());
            }
        }
        OutputFormat::Text | OutputFormat::Pretty => {
            println!("{}", format_summary(result, dry_run));
        }
    }
    Ok(())
}

fn format_summary(result: &FormatResult, dry_run: bool) -> String {
    use std::fmt::Write;

    if result.changed.is_empty() {
        return format!(
            "No trailing whitespace found in {} file(s).",
            result.files_checked
        );
    }

    let action = if dry_run { "Would fix" } else { "Fixed" };
    let mut out = String::new();
    for change in &result.changed {
        let _ = writeln!(
            out,
            "  {} ({} violation(s))",
            change.file.display(),
            change.fixed
        );
    }
    let _ = write!(
        out,
        "{} {} violation(s) in {} of {} file(s)",
        action,
        result.total_fixed(),
        result.changed.len(),
        result.files_checked
    );
    out
}
