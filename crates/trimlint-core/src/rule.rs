//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::types::{Severity, Violation};

/// A per-file lint rule operating on raw source text.
///
/// Rules are stateless with respect to the files they inspect: the same
/// rule value may be shared across threads and invoked on independent
/// inputs concurrently.
///
/// # Example
///
/// ```ignore
/// use trimlint_core::{FileContext, Location, Rule, Severity, Violation};
///
/// pub struct NoTabs;
///
/// impl Rule for NoTabs {
///     fn name(&self) -> &'static str { "no-tabs" }
///     fn code(&self) -> &'static str { "TL099" }
///
///     fn check(&self, ctx: &FileContext) -> Vec<Violation> {
///         ctx.lines()
///             .filter(|l| l.content.contains('\t'))
///             .map(|l| Violation::new(
///                 self.code(),
///                 self.name(),
///                 self.default_severity(),
///                 Location::new(ctx.relative_path.clone(), l.number, 1),
///                 "Tab character",
///             ))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-trailing-spaces").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "TL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether [`Rule::fix`] can correct this rule's violations.
    fn is_fixable(&self) -> bool {
        false
    }

    /// Checks a single file and returns any violations found, in ascending
    /// line order.
    fn check(&self, ctx: &FileContext) -> Vec<Violation>;

    /// Returns the corrected content of the file, or `None` if the rule
    /// does not support correction.
    ///
    /// Returning the content unchanged is valid and means nothing needed
    /// fixing.
    fn fix(&self, ctx: &FileContext) -> Option<String> {
        let _ = ctx;
        None
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
