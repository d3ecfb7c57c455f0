//! Projectors
//!
//! The three mutually exclusive renderers over a scanned file: inline
//! highlighting, literal substitution, and tabular field extraction.

use colored::{Color, Colorize};

use crate::core::fields::{parse_fields, FieldSpecError};
use crate::core::model::ScanResult;

/// The output projection for one run, picked once from the CLI flags.
#[derive(Debug, Clone)]
pub enum Projection {
    /// Strip matched text entirely
    Delete,
    /// Replace matched text with a literal
    Substitute(String),
    /// Extract selected fields into an aligned table
    Table { field_spec: String, separator: String },
    /// Wrap matched text in a terminal color
    Highlight(Color),
}

impl Projection {
    /// Pick the projector for a run. The priority order is a contract:
    /// delete > substitute > table > highlight, first applicable wins.
    pub fn select(
        delete: bool,
        substitute: Option<String>,
        fields: Option<String>,
        separator: String,
    ) -> Self {
        if delete {
            Projection::Delete
        } else if let Some(literal) = substitute {
            Projection::Substitute(literal)
        } else if let Some(field_spec) = fields {
            Projection::Table {
                field_spec,
                separator,
            }
        } else {
            Projection::Highlight(Color::Red)
        }
    }

    /// Render one scanned file under this projection.
    pub fn render(&self, result: &ScanResult) -> Result<String, FieldSpecError> {
        match self {
            Projection::Delete => Ok(substitute(result, "")),
            Projection::Substitute(literal) => Ok(substitute(result, literal)),
            Projection::Table {
                field_spec,
                separator,
            } => project_table(result, field_spec, separator),
            Projection::Highlight(color) => Ok(highlight(result, *color)),
        }
    }
}

/// Concatenate each line's spans, colorizing the matched ones.
pub fn highlight(result: &ScanResult, color: Color) -> String {
    let lines: Vec<String> = result
        .lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| {
                    if span.is_match {
                        span.text.color(color).to_string()
                    } else {
                        span.text.clone()
                    }
                })
                .collect()
        })
        .collect();
    lines.join("\n")
}

/// Concatenate each line's spans, replacing matched text with `literal`.
///
/// An empty literal deletes the matches.
pub fn substitute(result: &ScanResult, literal: &str) -> String {
    let lines: Vec<String> = result
        .lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| {
                    if span.is_match {
                        literal
                    } else {
                        span.text.as_str()
                    }
                })
                .collect()
        })
        .collect();
    lines.join("\n")
}

/// Extract the selected fields of every line into a left-aligned table.
///
/// Fields are the match-flagged spans, addressed by their 1-based position
/// within the line. Every row is padded to the widest row, each column to
/// its widest cell; the last field of a row is never right-padded.
pub fn project_table(
    result: &ScanResult,
    field_spec: &str,
    separator: &str,
) -> Result<String, FieldSpecError> {
    let end = result
        .lines
        .iter()
        .map(|line| line.spans.len())
        .max()
        .unwrap_or(0);
    let fields = parse_fields(field_spec, end)?;

    let mut rows: Vec<Vec<String>> = result
        .lines
        .iter()
        .map(|line| {
            line.match_texts()
                .into_iter()
                .enumerate()
                .filter(|(i, _)| fields.contains(&(i + 1)))
                .map(|(_, text)| text.to_string())
                .collect()
        })
        .collect();

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if width == 0 {
        return Ok(String::new());
    }
    for row in &mut rows {
        row.resize(width, String::new());
    }

    let col_widths: Vec<usize> = (0..width)
        .map(|col| rows.iter().map(|row| row[col].chars().count()).max().unwrap_or(0))
        .collect();

    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(col, cell)| {
                    if col + 1 == width {
                        cell.clone()
                    } else {
                        format!("{cell:<width$}", width = col_widths[col])
                    }
                })
                .collect::<Vec<_>>()
                .join(separator)
        })
        .collect();

    Ok(lines.join("\n"))
}
