//! The compiled rule deciding whether a decoded string is flagged.

use regex::Regex;

use crate::error::{Error, Result};

/// Default predicate: any character outside the single-byte range.
pub const DEFAULT_INVALID_PATTERN: &str = r"[^\x00-\xff]";

/// Compiled once per run and shared read-only across all files.
#[derive(Debug, Clone)]
pub struct ValidityPredicate {
    re: Regex,
}

impl ValidityPredicate {
    /// Compile `pattern`; an empty pattern selects the default. Compilation
    /// failure aborts the run before any traversal starts.
    pub fn new(pattern: &str) -> Result<Self> {
        let effective = if pattern.is_empty() {
            DEFAULT_INVALID_PATTERN
        } else {
            pattern
        };
        let re = Regex::new(effective).map_err(|source| Error::Pattern {
            pattern: effective.to_string(),
            source,
        })?;
        Ok(Self { re })
    }

    /// True when `value` should be reported.
    pub fn is_invalid(&self, value: &str) -> bool {
        self.re.is_match(value)
    }
}
