//! Field range parsing
//!
//! Turns a compact range expression like `"1-3,5,7-"` into the concrete set
//! of field indices it denotes.

use std::collections::BTreeSet;

/// A field expression that could not be parsed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid field range {term:?}: {reason}")]
pub struct FieldSpecError {
    pub term: String,
    pub reason: String,
}

impl FieldSpecError {
    fn new(term: &str, reason: impl Into<String>) -> Self {
        Self {
            term: term.to_string(),
            reason: reason.into(),
        }
    }
}

/// Expand a comma-separated field expression into a sorted index set.
///
/// Each term is a single index `N`, or an inclusive range `A-B` where either
/// side may be omitted: a missing start defaults to 0 and a missing end to
/// `end`, the highest field index present in the data being projected.
/// Overlapping terms collapse; a BTreeSet keeps the result deterministic.
pub fn parse_fields(expr: &str, end: usize) -> Result<BTreeSet<usize>, FieldSpecError> {
    let mut fields = BTreeSet::new();

    for term in expr.split(',') {
        let term = term.trim();
        if term.is_empty() {
            return Err(FieldSpecError::new(term, "empty term"));
        }

        let (start, stop) = match term.split_once('-') {
            None => {
                let n = parse_index(term, term)?;
                (n, n)
            }
            Some((lo, hi)) => {
                let start = if lo.is_empty() {
                    0
                } else {
                    parse_index(term, lo)?
                };
                let stop = if hi.is_empty() {
                    end
                } else {
                    parse_index(term, hi)?
                };
                (start, stop)
            }
        };

        if start > stop {
            return Err(FieldSpecError::new(term, "range start exceeds end"));
        }
        fields.extend(start..=stop);
    }

    Ok(fields)
}

fn parse_index(term: &str, digits: &str) -> Result<usize, FieldSpecError> {
    digits
        .parse()
        .map_err(|_| FieldSpecError::new(term, format!("{digits:?} is not a field index")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(fields: &BTreeSet<usize>) -> Vec<usize> {
        fields.iter().copied().collect()
    }

    #[test]
    fn single_indices_and_ranges_union() {
        let fields = parse_fields("1-3,5", 10).unwrap();
        assert_eq!(sorted(&fields), vec![1, 2, 3, 5]);
    }

    #[test]
    fn open_start_defaults_to_zero() {
        let fields = parse_fields("-3", 10).unwrap();
        assert_eq!(sorted(&fields), vec![0, 1, 2, 3]);
    }

    #[test]
    fn open_end_extends_to_bound() {
        let fields = parse_fields("5-", 7).unwrap();
        assert_eq!(sorted(&fields), vec![5, 6, 7]);
    }

    #[test]
    fn overlapping_terms_collapse() {
        let fields = parse_fields("1-4,2,3-5", 10).unwrap();
        assert_eq!(sorted(&fields), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_fields("abc", 5).is_err());
        assert!(parse_fields("1,,3", 5).is_err());
        assert!(parse_fields("4-2", 5).is_err());
        assert!(parse_fields("", 5).is_err());
    }
}
