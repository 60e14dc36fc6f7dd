//! Run-wide configuration.

use std::collections::HashSet;

use crate::category::Category;

/// Settings shared by every file visited during one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Skip files whose path matches this regular expression.
    pub skip_file: Option<String>,
    /// Skip `_test.go` files entirely.
    pub ignore_tests: bool,
    /// Syntactic slots whose literals are never reported.
    pub exclude_types: HashSet<Category>,
    /// Pattern flagging a decoded value; empty selects the non-ASCII default.
    pub invalid_pattern: String,
    /// Parser worker threads; `None` means one per CPU core.
    pub threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_file: None,
            ignore_tests: true,
            exclude_types: HashSet::new(),
            invalid_pattern: String::new(),
            threads: None,
        }
    }
}
