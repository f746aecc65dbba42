//! Rule lookup and construction from configuration.

use crate::no_trailing_spaces::{self, NoTrailingSpaces, Whitespace};
use trimlint_core::{Config, ConfigError, RuleBox};

/// Returns all available rules with default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(NoTrailingSpaces::new())]
}

/// Looks up a rule by kebab-case name or code (e.g. `no-trailing-spaces` or `TL001`).
#[must_use]
pub fn rule_by_name(name: &str) -> Option<RuleBox> {
    all_rules()
        .into_iter()
        .find(|rule| rule.name() == name || rule.code().eq_ignore_ascii_case(name))
}

/// Builds every rule, applying rule-specific options from `config`.
///
/// Enabled/disabled state and severity overrides are applied later by the
/// analyzer; this only handles options that change what a rule detects.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidOption`] if an option value is not accepted.
pub fn rules_from_config(config: &Config) -> Result<Vec<RuleBox>, ConfigError> {
    let mut rule = NoTrailingSpaces::new();

    if let Some(rule_config) = config.rule(no_trailing_spaces::NAME) {
        let value = rule_config.get_str(no_trailing_spaces::NAME, "whitespace", "ascii")?;
        rule = rule.whitespace(value.parse::<Whitespace>().map_err(|message| {
            ConfigError::InvalidOption {
                rule: no_trailing_spaces::NAME.to_string(),
                key: "whitespace".to_string(),
                message,
            }
        })?);
        tracing::debug!("{} uses {} whitespace", no_trailing_spaces::NAME, rule.whitespace);
    }

    Ok(vec![Box::new(rule)])
}

/// Keeps only the rules named in `names` (by name or code), in registry order.
///
/// Unknown names are logged and ignored.
#[must_use]
pub fn filter_rules(rules: Vec<RuleBox>, names: &[&str]) -> Vec<RuleBox> {
    for name in names {
        if rule_by_name(name).is_none() {
            tracing::warn!("Unknown rule: {}", name);
        }
    }

    rules
        .into_iter()
        .filter(|rule| {
            names
                .iter()
                .any(|n| *n == rule.name() || rule.code().eq_ignore_ascii_case(n))
        })
        .collect()
}
