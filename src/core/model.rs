//! Core data model
//!
//! Every scanned file is mapped to a ScanResult before any projector sees it.
//! A ScanResult is immutable after creation and owned by exactly one
//! projector per run.

use std::path::PathBuf;

/// A contiguous substring of a line, tagged as matching or not.
///
/// Concatenating the `text` of all spans of a line, in order, reproduces the
/// original line exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub is_match: bool,
}

impl Span {
    pub fn new(text: impl Into<String>, is_match: bool) -> Self {
        Self {
            text: text.into(),
            is_match,
        }
    }
}

/// One segmented line of a scanned file.
///
/// Span keys are the 1-based vector positions, assigned in left-to-right
/// discovery order; positions are contiguous by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineResult {
    /// 1-based line number within the file
    pub number: usize,
    pub spans: Vec<Span>,
}

impl LineResult {
    pub fn new(number: usize, spans: Vec<Span>) -> Self {
        Self { number, spans }
    }

    /// Texts of the match-flagged spans, in key order.
    pub fn match_texts(&self) -> Vec<&str> {
        self.spans
            .iter()
            .filter(|s| s.is_match)
            .map(|s| s.text.as_str())
            .collect()
    }
}

/// One successfully scanned file.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Path relative to the scan root
    pub name: PathBuf,
    pub lines: Vec<LineResult>,
}

impl ScanResult {
    pub fn new(name: impl Into<PathBuf>, lines: Vec<LineResult>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }
}

/// Why a single file could not be scanned.
///
/// Both variants are recovered locally: the file is skipped, the failure is
/// recorded in the [`FailureLog`](crate::scan::report::FailureLog), and the
/// overall scan continues.
#[derive(Debug, thiserror::Error)]
pub enum ScanFailure {
    #[error("cannot open {path}: {source}")]
    CannotOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read {path}: not valid UTF-8 text")]
    CannotRead { path: PathBuf },
}

impl ScanFailure {
    /// The aggregation category this failure counts toward.
    pub fn kind(&self) -> FailureKind {
        match self {
            ScanFailure::CannotOpen { .. } => FailureKind::CannotOpen,
            ScanFailure::CannotRead { .. } => FailureKind::CannotRead,
        }
    }
}

/// Failure categories tracked by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    CannotOpen,
    CannotRead,
}

impl FailureKind {
    /// Verb used in summarized failure reports.
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::CannotOpen => "opened",
            FailureKind::CannotRead => "read",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_texts_keeps_key_order() {
        let line = LineResult::new(
            1,
            vec![
                Span::new("b", false),
                Span::new("aa", true),
                Span::new("b", false),
                Span::new("a", true),
            ],
        );
        assert_eq!(line.match_texts(), vec!["aa", "a"]);
    }

    #[test]
    fn failure_kind_maps_variants() {
        let open = ScanFailure::CannotOpen {
            path: PathBuf::from("x"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(open.kind(), FailureKind::CannotOpen);

        let read = ScanFailure::CannotRead {
            path: PathBuf::from("x"),
        };
        assert_eq!(read.kind(), FailureKind::CannotRead);
    }
}
