//! Traversal engine
//!
//! Walks a file or directory tree with the ignore crate, segments every
//! readable whitelisted file, and records failures instead of raising them.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use ignore::WalkBuilder;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::{FailureKind, LineResult, ScanFailure, ScanResult};
use crate::core::segment::segment;
use crate::scan::report::FailureLog;

/// Extensions scanned by default. Extra ones come in per run via
/// [`ScanConfig::extra_extensions`].
static DEFAULT_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "txt", "md", "markdown", "csv", "tsv", "log", "rs", "toml", "json", "yaml", "yml", "c",
        "h", "cpp", "hpp", "py", "rb", "go", "js", "ts", "sh", "html", "css", "xml", "ini", "cfg",
        "conf",
    ]
    .into_iter()
    .collect()
});

/// Traversal options, built in the CLI layer and handed to [`scan_path`].
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Descend into subdirectories
    pub recursive: bool,
    /// Include dotfiles and dot-directories
    pub include_hidden: bool,
    /// Additional extensions to whitelist, without the leading dot
    pub extra_extensions: Vec<String>,
}

impl ScanConfig {
    fn allows(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => {
                DEFAULT_EXTENSIONS.contains(ext)
                    || self.extra_extensions.iter().any(|extra| extra == ext)
            }
            None => false,
        }
    }
}

/// Read and segment a single file.
///
/// The whole content is read at once, split on newlines (one trailing empty
/// line from a terminating newline is dropped), and every line is segmented.
/// The result's name is `path` relative to `root` when possible.
pub fn scan_file(
    root: &Path,
    pattern: &Regex,
    invert: bool,
    path: &Path,
) -> Result<ScanResult, ScanFailure> {
    let bytes = fs::read(path).map_err(|source| ScanFailure::CannotOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|_| ScanFailure::CannotRead {
        path: path.to_path_buf(),
    })?;

    let mut raw: Vec<&str> = content.split('\n').collect();
    if raw.last() == Some(&"") {
        raw.pop();
    }

    let lines = raw
        .iter()
        .enumerate()
        .map(|(i, line)| LineResult::new(i + 1, segment(pattern, invert, line)))
        .collect();

    let name = path.strip_prefix(root).unwrap_or(path);
    Ok(ScanResult::new(name, lines))
}

/// Scan a root path, file or directory, into an ordered result sequence.
///
/// Directory walks are depth-first and single-threaded. Hidden entries are
/// skipped unless configured otherwise, files outside the extension
/// whitelist are skipped silently, and symbolic links are not followed.
/// A root that is itself a file is scanned unconditionally. Failed files
/// are recorded in `log` and left out of the result.
pub fn scan_path(
    config: &ScanConfig,
    pattern: &Regex,
    invert: bool,
    root: &Path,
    log: &mut FailureLog,
) -> Vec<ScanResult> {
    if root.is_file() {
        return match scan_file(root.parent().unwrap_or(root), pattern, invert, root) {
            Ok(result) => vec![result],
            Err(failure) => {
                log.record(&failure);
                Vec::new()
            }
        };
    }

    let mut walker = WalkBuilder::new(root);
    // Pure filesystem walk: no .gitignore, .ignore, or ancestor ignore
    // rules may filter what gets scanned.
    walker
        .hidden(!config.include_hidden)
        .ignore(false)
        .parents(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false);
    if !config.recursive {
        walker.max_depth(Some(1));
    }

    let mut results = Vec::new();
    for entry in walker.build() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                log.push(FailureKind::CannotOpen, err.to_string());
                continue;
            }
        };

        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file || !config.allows(entry.path()) {
            continue;
        }

        match scan_file(root, pattern, invert, entry.path()) {
            Ok(result) => results.push(result),
            Err(failure) => log.record(&failure),
        }
    }
    results
}
