//! Integration test: analyzer discovery, linting and formatting on disk.
//!
//! Uses a small fixable rule that flags lines ending in `!` so the
//! analyzer's behavior can be checked independently of the built-in rules.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use trimlint_core::{
    Analyzer, AnalyzerError, Config, FileContext, FormatMode, Location, Rule, Severity, Violation,
};

struct NoBang;

impl Rule for NoBang {
    fn name(&self) -> &'static str {
        "no-bang"
    }

    fn code(&self) -> &'static str {
        "T001"
    }

    fn is_fixable(&self) -> bool {
        true
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        ctx.lines()
            .filter(|l| l.content.ends_with('!'))
            .map(|l| {
                Violation::new(
                    self.code(),
                    self.name(),
                    self.default_severity(),
                    Location::new(ctx.relative_path.clone(), l.number, l.content.len()),
                    "Line ends with '!'",
                )
            })
            .collect()
    }

    fn fix(&self, ctx: &FileContext) -> Option<String> {
        Some(
            ctx.lines()
                .map(|l| format!("{}{}", l.content.trim_end_matches('!'), l.terminator))
                .collect(),
        )
    }
}

fn write(root: &Path, rel: &str, content: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(&path, content).expect("write fixture");
    path
}

fn fixture() -> TempDir {
    let tmp = TempDir::new().expect("tempdir");
    write(tmp.path(), "src/a.txt", b"hello!\nworld\n");
    write(tmp.path(), "src/b.txt", b"clean\n");
    write(tmp.path(), "target/out.txt", b"ignored!\n");
    tmp
}

#[test]
fn analyze_reports_sorted_relative_locations() {
    let tmp = fixture();
    write(tmp.path(), "src/c.txt", b"x!\ny!\n");

    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .rule(NoBang)
        .build()
        .expect("analyzer should build");
    let result = analyzer.analyze().expect("analysis should succeed");

    assert_eq!(result.files_checked, 3);
    let locations: Vec<_> = result
        .violations
        .iter()
        .map(|v| (v.location.file.clone(), v.location.line))
        .collect();
    assert_eq!(
        locations,
        vec![
            (PathBuf::from("src/a.txt"), 1),
            (PathBuf::from("src/c.txt"), 1),
            (PathBuf::from("src/c.txt"), 2),
        ]
    );
}

#[test]
fn severity_override_and_disable_from_config() {
    let tmp = fixture();

    let config = Config::parse("[rules.no-bang]\nseverity = \"info\"\n").unwrap();
    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .config(config)
        .rule(NoBang)
        .build()
        .unwrap();
    let result = analyzer.analyze().unwrap();
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].severity, Severity::Info);
    assert!(!result.has_errors());

    let config = Config::parse("[rules.no-bang]\nenabled = false\n").unwrap();
    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .config(config)
        .rule(NoBang)
        .build()
        .unwrap();
    assert!(analyzer.analyze().unwrap().violations.is_empty());
}

#[test]
fn include_patterns_limit_discovery() {
    let tmp = fixture();
    write(tmp.path(), "notes.md", b"todo!\n");

    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .include("**/*.md")
        .rule(NoBang)
        .build()
        .unwrap();
    let result = analyzer.analyze().unwrap();
    assert_eq!(result.files_checked, 1);
    assert_eq!(result.violations[0].location.file, PathBuf::from("notes.md"));
}

#[test]
fn gitignore_is_respected() {
    let tmp = fixture();
    write(tmp.path(), ".gitignore", b"generated/\n");
    write(tmp.path(), "generated/g.txt", b"gen!\n");

    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .rule(NoBang)
        .build()
        .unwrap();
    let result = analyzer.analyze().unwrap();
    assert!(result
        .violations
        .iter()
        .all(|v| !v.location.file.starts_with("generated")));

    let config = Config::parse("[analyzer]\nrespect_gitignore = false\n").unwrap();
    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .config(config)
        .exclude("**/target/**")
        .rule(NoBang)
        .build()
        .unwrap();
    let result = analyzer.analyze().unwrap();
    assert!(result
        .violations
        .iter()
        .any(|v| v.location.file.starts_with("generated")));
}

#[test]
fn undecodable_files_are_skipped_or_fatal() {
    let tmp = fixture();
    write(tmp.path(), "src/blob.bin", &[0xff, 0xfe, b'!', b'\n']);

    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .rule(NoBang)
        .build()
        .unwrap();
    let result = analyzer.analyze().unwrap();
    assert_eq!(result.files_checked, 2);

    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .rule(NoBang)
        .fail_on_decode_error(true)
        .build()
        .unwrap();
    assert!(matches!(
        analyzer.analyze(),
        Err(AnalyzerError::Decode { .. })
    ));
}

#[test]
fn single_file_root() {
    let tmp = fixture();
    let file = tmp.path().join("src/a.txt");

    let analyzer = Analyzer::builder().root(&file).rule(NoBang).build().unwrap();
    let result = analyzer.analyze().unwrap();
    assert_eq!(result.files_checked, 1);
    assert_eq!(result.violations[0].location.file, PathBuf::from("a.txt"));
    assert_eq!(analyzer.base_dir(), tmp.path().join("src"));
}

#[test]
fn format_dry_run_does_not_write() {
    let tmp = fixture();
    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .rule(NoBang)
        .build()
        .unwrap();

    let result = analyzer.format(FormatMode::DryRun).unwrap();
    assert_eq!(result.files_checked, 2);
    assert_eq!(result.changed.len(), 1);
    assert_eq!(result.changed[0].file, PathBuf::from("src/a.txt"));
    assert_eq!(result.changed[0].fixed, 1);
    assert_eq!(
        fs::read_to_string(tmp.path().join("src/a.txt")).unwrap(),
        "hello!\nworld\n"
    );
}

#[test]
fn format_write_rewrites_only_changed_files() {
    let tmp = fixture();
    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .rule(NoBang)
        .build()
        .unwrap();

    let result = analyzer.format(FormatMode::Write).unwrap();
    assert_eq!(result.total_fixed(), 1);
    assert_eq!(
        fs::read_to_string(tmp.path().join("src/a.txt")).unwrap(),
        "hello\nworld\n"
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("target/out.txt")).unwrap(),
        "ignored!\n"
    );

    // A second run finds nothing left to fix.
    let again = analyzer.format(FormatMode::Write).unwrap();
    assert!(again.changed.is_empty());
}

#[test]
fn in_memory_sources() {
    let analyzer = Analyzer::builder().root(".").rule(NoBang).build().unwrap();

    let violations = analyzer.lint_source(Path::new("<stdin>"), "a!\nb");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].location.file, PathBuf::from("<stdin>"));

    assert_eq!(analyzer.format_source("a!\r\nb!"), "a\r\nb");
}
