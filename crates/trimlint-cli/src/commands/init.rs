//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# trimlint configuration

# Violations at or above this severity make `trimlint check` exit non-zero
fail_on = "error"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to include (empty = every file)
# include = ["**/*.kt", "**/*.kts"]

# Glob patterns to exclude from analysis
exclude = [
    "**/target/**",
    "**/build/**",
    "**/vendor/**",
]

# Respect .gitignore files
respect_gitignore = true

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.no-trailing-spaces]
enabled = true
# severity = "warning"  # Override default severity
# "ascii" = space and tab, "unicode" = any non-line-break whitespace
whitespace = "ascii"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("trimlint.toml"), force)?;

    println!("Created trimlint.toml");
    println!("\nNext steps:");
    println!("  1. Edit trimlint.toml to configure rules");
    println!("  2. Run: trimlint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use trimlint_core::Config;

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert!(config.is_rule_enabled("no-trailing-spaces"));
        assert!(trimlint_rules::rules_from_config(&config).is_ok());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("trimlint.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        write_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
