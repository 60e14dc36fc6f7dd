//! Rendering the issue list (text and JSON).

use std::io::Write;

use crate::error::{Error, Result};
use crate::findings::Issue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::Format(other.to_string())),
        }
    }
}

/// Write the report for one checked path.
pub fn write_report(out: &mut dyn Write, issues: &[Issue], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for issue in issues {
                writeln!(
                    out,
                    "{} {}:{}:{} has invalid string: \"{}\"",
                    issue.index, issue.file, issue.line, issue.column, issue.value
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, issues)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
