//! # trimlint-core
//!
//! Core framework for text-level linting and formatting.
//!
//! This crate provides the foundational traits and types for building
//! line-oriented lint rules. It includes:
//!
//! - [`Rule`] trait for per-file rules with optional correction
//! - [`Analyzer`] for orchestrating lint and format runs
//! - [`Violation`] for representing lint findings
//! - [`source_lines`] for splitting text without losing line terminators
//!
//! ## Example
//!
//! ```ignore
//! use trimlint_core::{Analyzer, FormatMode};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! analyzer.format(FormatMode::Write)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod lines;
mod rule;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError, FormatMode};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use lines::{source_lines, SourceLine, SourceLines};
pub use rule::{Rule, RuleBox};
pub use types::{
    FileChange, FormatResult, LintResult, Location, Replacement, Severity, Suggestion, Violation,
    ViolationDiagnostic,
};
