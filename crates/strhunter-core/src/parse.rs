//! Parsing Go source into syntax trees.

use std::path::Path;

use tree_sitter::{Node, Parser, Tree};

use crate::error::{Error, Result};

/// Parse one Go buffer. A tree containing error or missing nodes is rejected
/// so the caller can decide whether that is fatal (single directory) or
/// skippable (recursive walk).
pub(crate) fn parse_go(path: &Path, source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .expect("load Go grammar");
    let tree = parser.parse(source, None).ok_or_else(|| Error::Parse {
        path: path.to_path_buf(),
        line: 1,
    })?;
    let root = tree.root_node();
    if root.has_error() {
        return Err(Error::Parse {
            path: path.to_path_buf(),
            line: first_error_line(root),
        });
    }
    Ok(tree)
}

fn first_error_line(node: Node<'_>) -> usize {
    if node.is_error() || node.is_missing() {
        return node.start_position().row + 1;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            return first_error_line(child);
        }
    }
    node.start_position().row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_source_parses() {
        let src = "package demo\n\nfunc f() {}\n";
        assert!(parse_go(Path::new("demo.go"), src).is_ok());
    }

    #[test]
    fn broken_source_is_a_parse_error() {
        let src = "package demo\n\nfunc f( {\n";
        match parse_go(Path::new("demo.go"), src) {
            Err(Error::Parse { path, .. }) => assert_eq!(path, Path::new("demo.go")),
            other => panic!("expected parse error, got {:?}", other.map(|_| ())),
        }
    }
}
