//! Context types for rule execution.

use crate::lines::{source_lines, SourceLines};
use std::path::{Path, PathBuf};

/// Context provided to per-file rules.
///
/// Carries the file's raw text together with the path under which
/// violations are reported.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path to the file as discovered.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root, used in reported locations.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .ok()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            relative_path,
        }
    }

    /// Creates a context for text that does not come from a file.
    ///
    /// Violations are reported against an empty path.
    #[must_use]
    pub fn from_source(content: &'a str) -> Self {
        Self::named(Path::new(""), content)
    }

    /// Creates a context for in-memory text reported under `name`.
    #[must_use]
    pub fn named(name: &'a Path, content: &'a str) -> Self {
        Self {
            path: name,
            content,
            relative_path: name.to_path_buf(),
        }
    }

    /// Iterates the lines of the content, terminators included.
    #[must_use]
    pub fn lines(&self) -> SourceLines<'a> {
        source_lines(self.content)
    }
}
