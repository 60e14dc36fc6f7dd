//! File selection and run orchestration.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use regex::Regex;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::category::Category;
use crate::error::{Error, Result};
use crate::findings::Issue;
use crate::options::Config;
use crate::parse::parse_go;
use crate::predicate::ValidityPredicate;
use crate::visitor::Classifier;

const TEST_SUFFIX: &str = "_test.go";
const RECURSIVE_SUFFIX: &str = "...";

/// A configured run. All patterns are compiled up front, so construction is
/// the only place configuration can fail; afterwards the checker is immutable
/// and shared read-only across parser workers.
pub struct Checker {
    predicate: ValidityPredicate,
    skip_file: Option<Regex>,
    ignore_tests: bool,
    exclude_types: HashSet<Category>,
    threads: Option<usize>,
}

impl Checker {
    pub fn new(cfg: &Config) -> Result<Self> {
        let predicate = ValidityPredicate::new(&cfg.invalid_pattern)?;
        let skip_file = match cfg.skip_file.as_deref() {
            Some(pattern) if !pattern.is_empty() => {
                Some(Regex::new(pattern).map_err(|source| Error::Pattern {
                    pattern: pattern.to_string(),
                    source,
                })?)
            }
            _ => None,
        };
        Ok(Self {
            predicate,
            skip_file,
            ignore_tests: cfg.ignore_tests,
            exclude_types: cfg.exclude_types.clone(),
            threads: cfg.threads,
        })
    }

    /// Check one path argument.
    ///
    /// A trailing `...` walks the whole directory tree and logs-and-skips
    /// files that fail to read or parse; without it only the named directory
    /// is read and the first such failure aborts the call. Issues come back
    /// in discovery order with positional indexes.
    pub fn check_path(&self, path: &str) -> Result<Vec<Issue>> {
        let mut issues = match path.strip_suffix(RECURSIVE_SUFFIX) {
            Some(root) => {
                let root = if root.is_empty() { "." } else { root };
                let files = self.collect_files(Path::new(root), true)?;
                self.check_files(&files, true)?
            }
            None => {
                let files = self.collect_files(Path::new(path), false)?;
                self.check_files(&files, false)?
            }
        };
        for (index, issue) in issues.iter_mut().enumerate() {
            issue.index = index;
        }
        Ok(issues)
    }

    /// Check a single in-memory buffer, e.g. from an editor integration or a
    /// test. The same file-name filters apply as for on-disk files.
    pub fn check_source(&self, file: &str, source: &str) -> Result<Vec<Issue>> {
        if !self.accepts(Path::new(file)) {
            return Ok(Vec::new());
        }
        let tree = parse_go(Path::new(file), source)?;
        let mut issues =
            Classifier::new(source, file, &self.predicate, &self.exclude_types).check(tree.root_node());
        for (index, issue) in issues.iter_mut().enumerate() {
            issue.index = index;
        }
        Ok(issues)
    }

    /// Eligible `.go` files under `dir`, siblings in stable name order.
    fn collect_files(&self, dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
        let mut walker = WalkDir::new(dir).min_depth(1).sort_by_file_name();
        if !recursive {
            walker = walker.max_depth(1);
        }
        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if recursive => {
                    warn!(%err, "skipping unreadable entry");
                    continue;
                }
                Err(err) => {
                    return Err(Error::Read {
                        path: dir.to_path_buf(),
                        source: std::io::Error::other(err),
                    });
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.into_path();
            if self.accepts(&path) {
                files.push(path);
            }
        }
        Ok(files)
    }

    /// File-name filter: Go sources only, honoring ignore-tests and skip-file.
    fn accepts(&self, path: &Path) -> bool {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if !name.ends_with(".go") {
            return false;
        }
        if self.ignore_tests && name.ends_with(TEST_SUFFIX) {
            return false;
        }
        if let Some(skip) = &self.skip_file {
            if skip.is_match(&path.to_string_lossy()) {
                return false;
            }
        }
        true
    }

    /// Parse and classify every file. Parsing may run on a worker pool, but
    /// per-file results are merged back in input order, so the issue sequence
    /// is identical to a sequential run.
    fn check_files(&self, files: &[PathBuf], lenient: bool) -> Result<Vec<Issue>> {
        let threads = self.threads.unwrap_or_else(num_cpus::get).max(1);
        let results: Vec<Result<Vec<Issue>>> = if threads > 1 && files.len() > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .expect("build rayon pool");
            pool.install(|| files.par_iter().map(|path| self.check_file(path)).collect())
        } else {
            files.iter().map(|path| self.check_file(path)).collect()
        };

        let mut issues = Vec::new();
        for (path, result) in files.iter().zip(results) {
            match result {
                Ok(mut found) => issues.append(&mut found),
                Err(err) if lenient => {
                    warn!(path = %path.display(), %err, "skipping file");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(issues)
    }

    fn check_file(&self, path: &Path) -> Result<Vec<Issue>> {
        let source = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let tree = parse_go(path, &source)?;
        let file = path.to_string_lossy();
        debug!(file = %file, "checking");
        Ok(Classifier::new(&source, &file, &self.predicate, &self.exclude_types)
            .check(tree.root_node()))
    }
}
