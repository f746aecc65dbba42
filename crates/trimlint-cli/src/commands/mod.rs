//! Subcommand implementations.

pub mod check;
pub mod format;
pub mod init;
pub mod list_rules;
pub mod output;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use trimlint_core::{Analyzer, Config};
use trimlint_rules::{filter_rules, rules_from_config};

use crate::config_resolver;
use crate::TargetArgs;

/// Name under which stdin content is reported.
pub const STDIN_NAME: &str = "<stdin>";

/// Resolves configuration for `target` and builds an analyzer for it.
pub fn build_analyzer(target: &TargetArgs, explicit_config: Option<&Path>) -> Result<Analyzer> {
    let search_from = target.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = config_resolver::resolve(&search_from, explicit_config).load()?;
    analyzer_for(target, config)
}

fn analyzer_for(target: &TargetArgs, config: Config) -> Result<Analyzer> {
    let mut rules = rules_from_config(&config).context("Invalid rule configuration")?;
    if let Some(filter) = &target.rules {
        let names: Vec<&str> = filter
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        rules = filter_rules(rules, &names);
    }

    let mut builder = Analyzer::builder()
        .config(config)
        .excludes(target.exclude.iter().cloned());
    if let Some(path) = &target.path {
        builder = builder.root(path);
    }
    for rule in rules {
        builder = builder.rule_box(rule);
    }

    builder.build().context("Failed to build analyzer")
}

/// Reads all of stdin as UTF-8 text.
pub fn read_stdin() -> Result<String> {
    std::io::read_to_string(std::io::stdin()).context("Failed to read stdin as UTF-8 text")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(rules: Option<&str>) -> TargetArgs {
        TargetArgs {
            path: Some(PathBuf::from(".")),
            rules: rules.map(String::from),
            exclude: vec!["**/fixtures/**".to_string()],
            stdin: false,
        }
    }

    #[test]
    fn analyzer_gets_all_rules_without_filter() {
        let analyzer = analyzer_for(&target(None), Config::default()).unwrap();
        assert_eq!(analyzer.rule_count(), 1);
    }

    #[test]
    fn rule_filter_accepts_codes() {
        let analyzer = analyzer_for(&target(Some(" TL001 ,")), Config::default()).unwrap();
        assert_eq!(analyzer.rule_count(), 1);

        let analyzer = analyzer_for(&target(Some("unknown")), Config::default()).unwrap();
        assert_eq!(analyzer.rule_count(), 0);
    }

    #[test]
    fn invalid_rule_option_is_reported() {
        let config = Config::parse("[rules.no-trailing-spaces]\nwhitespace = \"wide\"\n").unwrap();
        let err = analyzer_for(&target(None), config).err().unwrap();
        assert!(format!("{err:#}").contains("whitespace"));
    }
}
