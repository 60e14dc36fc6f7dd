//! Core checking library.
//!
//! Finds string literals with invalid content (non-ASCII by default) in Go
//! source, classified by the syntactic slot each literal occupies: constant
//! initializer, assignment, `==`/`!=` comparison, case label, return value or
//! call argument. Comments and every other node kind are never checked.
//!
//! ```no_run
//! use strhunter_core::{Checker, Config};
//!
//! let checker = Checker::new(&Config::default())?;
//! for issue in checker.check_path("./...")? {
//!     println!("{}:{}:{} {}", issue.file, issue.line, issue.column, issue.value);
//! }
//! # Ok::<(), strhunter_core::Error>(())
//! ```

mod category;
mod config;
mod error;
mod findings;
mod options;
mod parse;
mod predicate;
mod report;
mod scan;
mod unquote;
mod visitor;

pub use category::Category;
pub use config::FileConfig;
pub use error::{Error, Result};
pub use findings::Issue;
pub use options::Config;
pub use predicate::{ValidityPredicate, DEFAULT_INVALID_PATTERN};
pub use report::{write_report, OutputFormat};
pub use scan::Checker;
