//! Check command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::ExitCode;
use trimlint_core::LintResult;

use super::output::{self, Sources};
use crate::{OutputFormat, TargetArgs};

/// Runs the check command.
pub fn run(target: &TargetArgs, format: OutputFormat, config: Option<&Path>) -> Result<ExitCode> {
    let analyzer = super::build_analyzer(target, config)?;
    let fail_on = analyzer.config().fail_on();

    tracing::info!(
        "Checking {:?} with {} rules",
        analyzer.root(),
        analyzer.rule_count()
    );

    let result = if target.stdin {
        let text = super::read_stdin()?;
        let result = LintResult {
            violations: analyzer.lint_source(Path::new(super::STDIN_NAME), &text),
            files_checked: 1,
        };
        output::print(&result, format, Sources::Text(&text))?;
        result
    } else {
        let result = analyzer.analyze().context("Analysis failed")?;
        output::print(&result, format, Sources::Files(analyzer.base_dir()))?;
        result
    };

    if result.has_violations_at(fail_on) {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
