//! The syntactic slot a classified string literal occupies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of syntactic contexts a reported literal can occupy.
///
/// External names are stable kebab-case (`const-decl`, `assignment`,
/// `comparison`, `case-label`, `return`, `call-arg`), used both in the JSON
/// report and in the TOML config's `exclude-types` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    ConstDecl,
    Assignment,
    Comparison,
    CaseLabel,
    Return,
    CallArg,
}

impl Category {
    /// The stable kebab-case external name.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::ConstDecl => "const-decl",
            Category::Assignment => "assignment",
            Category::Comparison => "comparison",
            Category::CaseLabel => "case-label",
            Category::Return => "return",
            Category::CallArg => "call-arg",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the canonical kebab-case name plus the snake_case alias for
        // config ergonomics.
        match s {
            "const-decl" | "const_decl" => Ok(Category::ConstDecl),
            "assignment" => Ok(Category::Assignment),
            "comparison" => Ok(Category::Comparison),
            "case-label" | "case_label" => Ok(Category::CaseLabel),
            "return" => Ok(Category::Return),
            "call-arg" | "call_arg" => Ok(Category::CallArg),
            other => Err(format!("unknown category: {other}")),
        }
    }
}
