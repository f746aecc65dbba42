//! # trimlint-rules
//!
//! Built-in lint rules for trimlint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | TL001 | `no-trailing-spaces` | Forbids whitespace at the end of a line (fixable) |
//!
//! ## Usage
//!
//! ```ignore
//! use trimlint_core::{Analyzer, FormatMode};
//! use trimlint_rules::NoTrailingSpaces;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(NoTrailingSpaces::new())
//!     .build()?;
//! analyzer.format(FormatMode::Write)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod no_trailing_spaces;
mod registry;

pub use no_trailing_spaces::{NoTrailingSpaces, Whitespace};
pub use registry::{all_rules, filter_rules, rule_by_name, rules_from_config};

/// Re-export core types for convenience.
pub use trimlint_core::{Rule, Severity, Violation};
