//! Core analyzer for orchestrating lint and format runs.

use crate::config::Config;
use crate::context::FileContext;
use crate::rule::{Rule, RuleBox};
use crate::types::{FileChange, FormatResult, LintResult, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading or writing files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File content is not valid UTF-8 text.
    #[error("{path} is not valid UTF-8 text")]
    Decode {
        /// Path to the file that failed to decode.
        path: PathBuf,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Directory walk error.
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// How [`Analyzer::format`] treats files that need correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Rewrite changed files in place.
    Write,
    /// Only report which files would change.
    DryRun,
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    include_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_decode_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory (or single file) to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Adds an include glob pattern.
    #[must_use]
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether undecodable files abort the run (default: false, they
    /// are skipped with a warning).
    #[must_use]
    pub fn fail_on_decode_error(mut self, fail: bool) -> Self {
        self.fail_on_decode_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved or a
    /// glob pattern is invalid.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let root = self
            .root
            .or_else(|| self.config.as_ref().map(|c| c.analyzer.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut exclude_patterns = self.exclude_patterns;
        let mut include_patterns = self.include_patterns;
        if let Some(ref config) = self.config {
            exclude_patterns.extend(config.analyzer.exclude.clone());
            include_patterns.extend(config.analyzer.include.clone());
        }

        if exclude_patterns.is_empty() {
            exclude_patterns.extend(["**/target/**".to_string(), "**/vendor/**".to_string()]);
        }

        let exclude = compile_patterns(&exclude_patterns)?;
        let include = compile_patterns(&include_patterns)?;

        Ok(Analyzer {
            root,
            rules: self.rules,
            exclude_patterns,
            exclude,
            include,
            config: self.config.unwrap_or_default(),
            fail_on_decode_error: self.fail_on_decode_error,
        })
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<glob::Pattern>, glob::PatternError> {
    patterns.iter().map(|p| glob::Pattern::new(p)).collect()
}

/// The main analyzer that runs rules over a set of files.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    exclude: Vec<glob::Pattern>,
    include: Vec<glob::Pattern>,
    config: Config,
    fail_on_decode_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lints all discovered files.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery or reading fails.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files()?;

        info!("Found {} files to analyze", files.len());

        for file_path in &files {
            let Some(content) = self.read_file(file_path)? else {
                continue;
            };
            let ctx = FileContext::new(file_path, &content, self.base_dir());
            result.violations.extend(self.lint_context(&ctx));
            result.files_checked += 1;
        }

        result.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Corrects all discovered files with every enabled fixable rule.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery, reading, or writing fails.
    pub fn format(&self, mode: FormatMode) -> Result<FormatResult, AnalyzerError> {
        info!("Starting format at {:?} ({:?})", self.root, mode);

        let mut result = FormatResult::new();
        let files = self.discover_files()?;

        for file_path in &files {
            let Some(content) = self.read_file(file_path)? else {
                continue;
            };
            result.files_checked += 1;

            let ctx = FileContext::new(file_path, &content, self.base_dir());
            let (formatted, fixed) = self.fix_context(&ctx);
            if formatted == content {
                continue;
            }

            if mode == FormatMode::Write {
                debug!("Rewriting: {}", file_path.display());
                std::fs::write(file_path, &formatted)?;
            }
            result.changed.push(FileChange {
                file: ctx.relative_path,
                fixed,
            });
        }

        info!(
            "Format complete: {} of {} files changed",
            result.changed.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Lints in-memory text, reporting violations under `name`.
    #[must_use]
    pub fn lint_source(&self, name: &Path, text: &str) -> Vec<Violation> {
        self.lint_context(&FileContext::named(name, text))
    }

    /// Corrects in-memory text with every enabled fixable rule.
    #[must_use]
    pub fn format_source(&self, text: &str) -> String {
        self.fix_context(&FileContext::from_source(text)).0
    }

    fn lint_context(&self, ctx: &FileContext) -> Vec<Violation> {
        let mut violations = Vec::new();

        for rule in self.enabled_rules() {
            let rule_violations = rule.check(ctx);
            violations.extend(self.apply_severity_override(rule.name(), rule_violations));
        }

        violations
    }

    /// Applies fixable rules in registration order. Returns the corrected
    /// text and the number of violations it resolved.
    fn fix_context(&self, ctx: &FileContext) -> (String, usize) {
        let mut text = ctx.content.to_string();
        let mut fixed = 0;

        for rule in self.enabled_rules().filter(|r| r.is_fixable()) {
            let current = FileContext::named(ctx.path, &text);
            let found = rule.check(&current).len();
            if found == 0 {
                continue;
            }
            if let Some(corrected) = rule.fix(&current) {
                debug!("{} fixed {} violation(s) in {}", rule.name(), found, ctx.path.display());
                fixed += found;
                text = corrected;
            }
        }

        (text, fixed)
    }

    fn enabled_rules(&self) -> impl Iterator<Item = &RuleBox> {
        self.rules.iter().filter(|rule| {
            let enabled = self.config.is_rule_enabled(rule.name());
            if !enabled {
                debug!("Skipping disabled rule: {}", rule.name());
            }
            enabled
        })
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }

    /// Reads a file as UTF-8. Returns `Ok(None)` for undecodable files that
    /// should be skipped.
    fn read_file(&self, path: &Path) -> Result<Option<String>, AnalyzerError> {
        debug!("Reading: {}", path.display());

        let bytes = std::fs::read(path)?;
        match String::from_utf8(bytes) {
            Ok(content) => Ok(Some(content)),
            Err(_) if !self.fail_on_decode_error => {
                warn!("Skipping {}: not valid UTF-8 text", path.display());
                Ok(None)
            }
            Err(_) => Err(AnalyzerError::Decode {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Directory that reported paths are relative to: the root itself, or
    /// its parent when the root is a single file.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        if self.root.is_file() {
            self.root.parent().unwrap_or(self.root.as_path())
        } else {
            &self.root
        }
    }

    /// Discovers all files to analyze.
    ///
    /// A file root is analyzed as-is, bypassing include and exclude filters.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }

        let respect_gitignore = self.config.analyzer.respect_gitignore;
        let walker = ignore::WalkBuilder::new(&self.root)
            .git_ignore(respect_gitignore)
            .git_global(respect_gitignore)
            .git_exclude(respect_gitignore)
            .require_git(false)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.into_path();
            if self.should_exclude(&path) {
                debug!("Excluding: {}", path.display());
                continue;
            }
            if !self.should_include(&path) {
                continue;
            }

            files.push(path);
        }

        files.sort();
        Ok(files)
    }

    fn relative<'p>(&self, path: &'p Path) -> std::borrow::Cow<'p, str> {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        let relative = self.relative(path);

        if self
            .exclude
            .iter()
            .any(|p| p.matches(&path_str) || p.matches(&relative))
        {
            return true;
        }

        // Also check as substring for patterns like "**/target/**"
        let anchored = format!("/{relative}");
        self.exclude_patterns.iter().any(|pattern| {
            let normalized = pattern.replace("**", "");
            normalized.len() > 1 && anchored.contains(&normalized)
        })
    }

    /// Checks if a path matches the include patterns (all paths when none).
    fn should_include(&self, path: &Path) -> bool {
        if self.include.is_empty() {
            return true;
        }
        let relative = self.relative(path);
        self.include.iter().any(|p| p.matches(&relative))
    }
}
