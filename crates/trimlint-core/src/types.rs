//! Core types for lint violations and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown severity '{other}'")),
        }
    }
}

/// Source text location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to project root.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, counted in characters).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A suggested fix for a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
    /// Optional automatic replacement.
    pub replacement: Option<Replacement>,
}

impl Suggestion {
    /// Creates a new suggestion without automatic fix.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: None,
        }
    }

    /// Creates a new suggestion with automatic fix.
    #[must_use]
    pub fn with_fix(message: impl Into<String>, replacement: Replacement) -> Self {
        Self {
            message: message.into(),
            replacement: Some(replacement),
        }
    }
}

/// An automatic text replacement.
///
/// The span to replace is `location.offset .. location.offset + location.length`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// Location to replace.
    pub location: Location,
    /// New text to insert.
    pub new_text: String,
}

impl Replacement {
    /// Creates a new replacement.
    #[must_use]
    pub fn new(location: Location, new_text: impl Into<String>) -> Self {
        Self {
            location,
            new_text: new_text.into(),
        }
    }
}

/// A lint violation found during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "TL001").
    pub code: String,
    /// Rule name (e.g., "no-trailing-spaces").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Primary location of the violation.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Adds a suggestion to this violation.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Returns true if this violation carries an automatic replacement.
    #[must_use]
    pub fn is_fixable(&self) -> bool {
        self.suggestion
            .as_ref()
            .is_some_and(|s| s.replacement.is_some())
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}:{}\n",
            self.code,
            self.rule,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        if let Some(suggestion) = &self.suggestion {
            let _ = writeln!(output, "  = help: {}", suggestion.message);
        }
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// A violation converted into a miette [`Diagnostic`] for rich error display.
///
/// Attach the file's source with `miette::Report::with_source_code` to render
/// the offending span.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        Self {
            message: format!("[{}] {}", v.code, v.message),
            help: v.suggestion.as_ref().map(|s| s.message.clone()),
            span: SourceSpan::from((v.location.offset, v.location.length)),
            label_message: v.rule.clone(),
        }
    }
}

/// Result of running lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_violations_at(Severity::Error)
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Counts violations by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.violations
            .iter()
            .fold((0, 0, 0), |(e, w, i), v| match v.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }

    /// Adds violations from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.files_checked += other.files_checked;
    }
}

/// A file whose content was (or would be) rewritten by formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    /// File path relative to project root.
    pub file: PathBuf,
    /// Number of violations corrected in this file.
    pub fixed: usize,
}

/// Result of running the formatter.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FormatResult {
    /// Files that changed, in discovery order.
    pub changed: Vec<FileChange>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl FormatResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of corrected violations across all files.
    #[must_use]
    pub fn total_fixed(&self) -> usize {
        self.changed.iter().map(|c| c.fixed).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(severity: Severity) -> Violation {
        Violation::new(
            "TL001",
            "no-trailing-spaces",
            severity,
            Location::new(PathBuf::from("src/Main.kt"), 42, 10),
            "Trailing space(s)",
        )
    }

    #[test]
    fn violation_display_is_compact() {
        let v = make_violation(Severity::Error);
        assert_eq!(
            v.to_string(),
            "src/Main.kt:42:10: error [TL001] Trailing space(s)"
        );
    }

    #[test]
    fn violation_format_includes_suggestion() {
        let v = make_violation(Severity::Error)
            .with_suggestion(Suggestion::new("Remove the trailing whitespace"));
        let formatted = v.format();
        assert!(formatted.starts_with("TL001 no-trailing-spaces at src/Main.kt:42:10"));
        assert!(formatted.contains("= help: Remove the trailing whitespace"));
    }

    #[test]
    fn violation_format_omits_help_when_none() {
        let formatted = make_violation(Severity::Error).format();
        assert!(!formatted.contains("help:"));
    }

    #[test]
    fn fixable_only_with_replacement() {
        let location = Location::new(PathBuf::from("a.kt"), 1, 2).with_span(1, 1);
        let plain = make_violation(Severity::Error).with_suggestion(Suggestion::new("x"));
        let fix = make_violation(Severity::Error)
            .with_suggestion(Suggestion::with_fix("x", Replacement::new(location, "")));
        assert!(!make_violation(Severity::Error).is_fixable());
        assert!(!plain.is_fixable());
        assert!(fix.is_fixable());
    }

    #[test]
    fn severity_parses_case_insensitively() {
        assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn diagnostic_carries_span_and_code() {
        let mut v = make_violation(Severity::Error);
        v.location = v.location.with_span(7, 3);
        let diag = ViolationDiagnostic::from(&v);
        assert_eq!(diag.to_string(), "[TL001] Trailing space(s)");
        assert_eq!(diag.span.offset(), 7);
        assert_eq!(diag.span.len(), 3);
    }

    // --- LintResult tests ---

    #[test]
    fn has_violations_at_error_only() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning));
        assert!(!result.has_violations_at(Severity::Error));
        assert!(result.has_violations_at(Severity::Warning));
        assert!(!result.has_errors());
    }

    #[test]
    fn count_by_severity_splits_levels() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Error));
        result.violations.push(make_violation(Severity::Error));
        result.violations.push(make_violation(Severity::Info));
        assert_eq!(result.count_by_severity(), (2, 0, 1));
    }

    #[test]
    fn extend_merges_counts() {
        let mut a = LintResult::new();
        a.files_checked = 2;
        a.violations.push(make_violation(Severity::Error));
        let mut b = LintResult::new();
        b.files_checked = 3;
        b.violations.push(make_violation(Severity::Warning));

        a.extend(b);
        assert_eq!(a.files_checked, 5);
        assert_eq!(a.violations.len(), 2);
    }

    #[test]
    fn format_result_totals_fixes() {
        let mut result = FormatResult::new();
        result.changed.push(FileChange {
            file: PathBuf::from("a.kt"),
            fixed: 2,
        });
        result.changed.push(FileChange {
            file: PathBuf::from("b.kt"),
            fixed: 3,
        });
        assert_eq!(result.total_fixed(), 5);
    }
}
