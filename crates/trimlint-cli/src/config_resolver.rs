//! Configuration file resolution with global fallback.
//!
//! Resolves the configuration file using a deterministic priority order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `trimlint.toml` or `.trimlint.toml` in the target directory or the
//!    nearest ancestor that has one
//! 3. `~/.trimlint/config.toml` (global fallback)
//! 4. No config found → defaults

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use trimlint_core::Config;

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the target directory or one of its ancestors.
    Project(PathBuf),
    /// Loaded from the global config directory (`~/.trimlint/`).
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config was loaded from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }

    /// Loads the configuration this source points at.
    pub fn load(&self) -> Result<Config> {
        let Some(p) = self.path() else {
            return Ok(Config::default());
        };
        if self.is_global() {
            tracing::info!("Using global config: {}", p.display());
        }
        Config::from_file(p).with_context(|| format!("Failed to load config: {}", p.display()))
    }
}

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["trimlint.toml", ".trimlint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration file for a lint target.
///
/// `target` may be a directory or a single file; for a file the search
/// starts in its parent directory. Relative targets are resolved against the
/// current directory so the ancestor search can leave it.
#[must_use]
pub fn resolve(target: &Path, explicit: Option<&Path>) -> ConfigSource {
    let start = if target.is_file() {
        target.parent().unwrap_or(target)
    } else {
        target
    };
    let cwd = std::env::current_dir().ok();
    let start = anchored(start, cwd.as_deref());
    resolve_inner(&start, explicit, global_config_dir())
}

/// Makes `dir` absolute relative to `cwd` and canonicalizes it when it exists.
fn anchored(dir: &Path, cwd: Option<&Path>) -> PathBuf {
    let joined = match cwd {
        Some(cwd) if dir.is_relative() => cwd.join(dir),
        _ => dir.to_path_buf(),
    };
    std::fs::canonicalize(&joined).unwrap_or(joined)
}

/// Testable core: accepts `global_dir` as parameter to avoid env var races.
fn resolve_inner(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    for dir in project_dir.ancestors() {
        if let Some(candidate) = PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
        {
            tracing::debug!("Found project config: {}", candidate.display());
            return ConfigSource::Project(candidate);
        }
    }

    if let Some(dir) = global_dir {
        let candidate = dir.join(GLOBAL_CONFIG_NAME);
        if candidate.is_file() {
            tracing::debug!("Found global config: {}", candidate.display());
            return ConfigSource::Global(candidate);
        }
    }

    ConfigSource::Default
}

/// Returns the global config directory path.
///
/// Resolution: `$TRIMLINT_CONFIG_DIR` > `~/.trimlint/`
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("TRIMLINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".trimlint"))
}
