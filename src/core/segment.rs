//! Line segmentation
//!
//! Partitions a line into an ordered sequence of matched/unmatched spans.
//! The walk is leftmost-first and iterative, so a line with very many
//! matches costs no stack depth.

use regex::{Regex, RegexBuilder};

use crate::core::model::Span;

/// Compile a search pattern, with case sensitivity fixed at compile time.
pub fn compile_pattern(pattern: &str, ignore_case: bool) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(ignore_case).build()
}

/// Split `line` into spans around occurrences of `pattern`.
///
/// In normal mode (`invert == false`) occurrences are flagged as matches.
/// In delimiter mode (`invert == true`) the flags flip: occurrences mark
/// field boundaries and the text between them becomes the selectable
/// content. Span boundaries are identical either way.
pub fn segment(pattern: &Regex, invert: bool, line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    if line.is_empty() {
        return spans;
    }

    // `emitted` is how much of the line has been turned into spans;
    // `search` is where the next match search starts. They only diverge
    // after an empty-width match, where the search must skip one character
    // to make progress.
    let mut emitted = 0;
    let mut search = 0;

    while let Some(m) = pattern.find_at(line, search) {
        if m.start() > emitted {
            spans.push(Span::new(&line[emitted..m.start()], invert));
        }
        spans.push(Span::new(m.as_str(), !invert));
        emitted = m.end();

        if m.is_empty() {
            search = next_boundary(line, m.end());
            if search > line.len() {
                break;
            }
        } else {
            search = m.end();
        }
    }

    if emitted < line.len() {
        spans.push(Span::new(&line[emitted..], invert));
    }

    spans
}

/// Byte offset of the next character boundary after `at`, or past-the-end.
fn next_boundary(line: &str, at: usize) -> usize {
    if at >= line.len() {
        return line.len() + 1;
    }
    let mut next = at + 1;
    while next < line.len() && !line.is_char_boundary(next) {
        next += 1;
    }
    next
}
