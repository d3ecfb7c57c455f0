//! Deferred failure reporting
//!
//! Scan failures are accumulated per category during traversal and flushed
//! once at the end of the run, so a single unreadable file never aborts the
//! overall scan.

use crate::core::model::{FailureKind, ScanFailure};

/// Accumulated failures of one category.
///
/// The count of a record is the length of its message list; there is no
/// separate counter to drift out of sync.
#[derive(Debug, Default)]
pub struct FailureRecord {
    messages: Vec<String>,
}

impl FailureRecord {
    pub fn count(&self) -> usize {
        self.messages.len()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

/// Per-run failure aggregator, passed by mutable reference into the
/// traversal engine and read once by the reporting layer.
#[derive(Debug, Default)]
pub struct FailureLog {
    cannot_open: FailureRecord,
    cannot_read: FailureRecord,
}

impl FailureLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scan failure under its category.
    pub fn record(&mut self, failure: &ScanFailure) {
        self.push(failure.kind(), failure.to_string());
    }

    /// Record a pre-rendered message under a category. Used for walk-level
    /// errors that never produced a [`ScanFailure`].
    pub fn push(&mut self, kind: FailureKind, message: String) {
        self.entry(kind).messages.push(message);
    }

    pub fn get(&self, kind: FailureKind) -> &FailureRecord {
        match kind {
            FailureKind::CannotOpen => &self.cannot_open,
            FailureKind::CannotRead => &self.cannot_read,
        }
    }

    pub fn total(&self) -> usize {
        self.cannot_open.count() + self.cannot_read.count()
    }

    fn entry(&mut self, kind: FailureKind) -> &mut FailureRecord {
        match kind {
            FailureKind::CannotOpen => &mut self.cannot_open,
            FailureKind::CannotRead => &mut self.cannot_read,
        }
    }

    /// Render the end-of-run failure report.
    ///
    /// Per category: a single failure is shown verbatim; multiple failures
    /// collapse to one summary line unless verbose mode asks for every
    /// message. Quiet mode suppresses the report entirely (the counts are
    /// still there for anyone who asks).
    pub fn report(&self, quiet: bool, verbose: bool) -> Vec<String> {
        if quiet {
            return Vec::new();
        }

        let mut out = Vec::new();
        for kind in [FailureKind::CannotOpen, FailureKind::CannotRead] {
            let record = self.get(kind);
            match record.count() {
                0 => {}
                1 => out.push(record.messages()[0].clone()),
                _ if verbose => out.extend(record.messages().iter().cloned()),
                n => out.push(format!("{} files could not be {}", n, kind.label())),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn open_failure(name: &str) -> ScanFailure {
        ScanFailure::CannotOpen {
            path: PathBuf::from(name),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        }
    }

    fn read_failure(name: &str) -> ScanFailure {
        ScanFailure::CannotRead {
            path: PathBuf::from(name),
        }
    }

    #[test]
    fn count_equals_message_list_length() {
        let mut log = FailureLog::new();
        for i in 0..5 {
            log.record(&open_failure(&format!("f{i}")));
        }
        log.record(&read_failure("bin"));

        let open = log.get(FailureKind::CannotOpen);
        assert_eq!(open.count(), 5);
        assert_eq!(open.count(), open.messages().len());
        assert_eq!(log.get(FailureKind::CannotRead).count(), 1);
        assert_eq!(log.total(), 6);
    }

    #[test]
    fn single_failure_is_reported_verbatim() {
        let mut log = FailureLog::new();
        log.record(&open_failure("secret.txt"));

        let report = log.report(false, false);
        assert_eq!(report.len(), 1);
        assert!(report[0].contains("secret.txt"));
    }

    #[test]
    fn multiple_failures_summarize_unless_verbose() {
        let mut log = FailureLog::new();
        log.record(&open_failure("a"));
        log.record(&open_failure("b"));
        log.record(&open_failure("c"));

        let summary = log.report(false, false);
        assert_eq!(summary, vec!["3 files could not be opened".to_string()]);

        let verbose = log.report(false, true);
        assert_eq!(verbose.len(), 3);
        assert!(verbose[0].contains('a'));
    }

    #[test]
    fn quiet_mode_suppresses_output_but_keeps_counts() {
        let mut log = FailureLog::new();
        log.record(&read_failure("x"));
        log.record(&read_failure("y"));

        assert!(log.report(true, true).is_empty());
        assert_eq!(log.get(FailureKind::CannotRead).count(), 2);
    }

    #[test]
    fn empty_log_reports_nothing() {
        let log = FailureLog::new();
        assert!(log.report(false, true).is_empty());
        assert_eq!(log.total(), 0);
    }
}
