//! Rule to forbid trailing whitespace at the end of lines.
//!
//! # Rationale
//!
//! Trailing whitespace is invisible in most editors, produces noisy diffs,
//! and is silently mangled by tools that strip it on save.
//!
//! The rule works on raw lines of text. Code, line comments, block comments
//! and documentation comments are treated the same way.
//!
//! # Configuration
//!
//! - `whitespace`: which characters count as trailing whitespace,
//!   `"ascii"` (space and tab, default) or `"unicode"` (any non-line-break
//!   Unicode whitespace)
//!
//! # Fixing
//!
//! The trailing run is removed. Whitespace-only lines become empty lines,
//! they are never deleted, and line terminators are left untouched.

use std::fmt;
use std::str::FromStr;

use trimlint_core::{
    source_lines, FileContext, Location, Replacement, Rule, Severity, SourceLine, Suggestion,
    Violation,
};

/// Rule code for no-trailing-spaces.
pub const CODE: &str = "TL001";

/// Rule name for no-trailing-spaces.
pub const NAME: &str = "no-trailing-spaces";

/// Message reported for every violation.
pub const MESSAGE: &str = "Trailing space(s)";

/// Characters treated as horizontal whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Whitespace {
    /// Space (U+0020) and tab (U+0009).
    #[default]
    Ascii,
    /// Any Unicode whitespace that is not a line break.
    Unicode,
}

impl Whitespace {
    /// Returns true if `c` belongs to this whitespace class.
    #[must_use]
    pub fn matches(self, c: char) -> bool {
        match self {
            Self::Ascii => c == ' ' || c == '\t',
            Self::Unicode => c.is_whitespace() && !is_line_break(c),
        }
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

impl fmt::Display for Whitespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascii => write!(f, "ascii"),
            Self::Unicode => write!(f, "unicode"),
        }
    }
}

impl FromStr for Whitespace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascii" => Ok(Self::Ascii),
            "unicode" => Ok(Self::Unicode),
            other => Err(format!("expected \"ascii\" or \"unicode\", got \"{other}\"")),
        }
    }
}

/// Forbids trailing whitespace and removes it on request.
#[derive(Debug, Clone)]
pub struct NoTrailingSpaces {
    /// Which characters count as whitespace.
    pub whitespace: Whitespace,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoTrailingSpaces {
    fn default() -> Self {
        Self::new()
    }
}

impl NoTrailingSpaces {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            whitespace: Whitespace::Ascii,
            severity: Severity::Error,
        }
    }

    /// Sets the whitespace class.
    #[must_use]
    pub fn whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = whitespace;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Reports one violation per line that ends in whitespace.
    ///
    /// Violations carry an empty file path; use [`Rule::check`] with a
    /// [`FileContext`] to attach one.
    #[must_use]
    pub fn scan(&self, text: &str) -> Vec<Violation> {
        self.check(&FileContext::from_source(text))
    }

    /// Returns `text` with the trailing whitespace of every line removed.
    #[must_use]
    pub fn correct(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for line in source_lines(text) {
            out.push_str(self.strip(line.content));
            out.push_str(line.terminator);
        }
        out
    }

    fn strip<'a>(&self, content: &'a str) -> &'a str {
        content.trim_end_matches(|c| self.whitespace.matches(c))
    }

    fn violation(&self, ctx: &FileContext, line: &SourceLine) -> Option<Violation> {
        let kept = self.strip(line.content);
        let trailing = line.content.len() - kept.len();
        if trailing == 0 {
            return None;
        }

        let location = Location::new(
            ctx.relative_path.clone(),
            line.number,
            kept.chars().count() + 1,
        )
        .with_span(line.offset + kept.len(), trailing);

        Some(
            Violation::new(CODE, NAME, self.severity, location.clone(), MESSAGE).with_suggestion(
                Suggestion::with_fix(
                    "Remove the trailing whitespace",
                    Replacement::new(location, ""),
                ),
            ),
        )
    }
}

impl Rule for NoTrailingSpaces {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids whitespace at the end of a line"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn is_fixable(&self) -> bool {
        true
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        ctx.lines()
            .filter_map(|line| self.violation(ctx, &line))
            .collect()
    }

    fn fix(&self, ctx: &FileContext) -> Option<String> {
        Some(self.correct(ctx.content))
    }
}
