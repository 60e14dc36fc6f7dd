//! The traversal-and-classification engine.
//!
//! Walks a parsed Go file pre-order in the tree's own child order, dispatches
//! on a closed set of node kinds, and funnels every classified bare literal
//! through decode -> exclusion -> predicate.

use std::collections::HashSet;

use tree_sitter::{Node, Point};

use crate::category::Category;
use crate::findings::Issue;
use crate::predicate::ValidityPredicate;
use crate::unquote::unquote;

/// Per-file classifier. Carries the package and file context captured when
/// the file's tree was opened, so every emitted issue names its origin.
pub(crate) struct Classifier<'a> {
    source: &'a [u8],
    file: &'a str,
    package: String,
    predicate: &'a ValidityPredicate,
    exclude: &'a HashSet<Category>,
    issues: Vec<Issue>,
}

impl<'a> Classifier<'a> {
    pub(crate) fn new(
        source: &'a str,
        file: &'a str,
        predicate: &'a ValidityPredicate,
        exclude: &'a HashSet<Category>,
    ) -> Self {
        Self {
            source: source.as_bytes(),
            file,
            package: String::new(),
            predicate,
            exclude,
            issues: Vec::new(),
        }
    }

    /// Walk the whole file; issues come back in tree order, `index` unset.
    pub(crate) fn check(mut self, root: Node<'_>) -> Vec<Issue> {
        self.package = package_name(root, self.source);
        self.visit(root);
        self.issues
    }

    fn visit(&mut self, node: Node<'_>) {
        match node.kind() {
            "const_declaration" => self.classify_const(node),
            "assignment_statement" | "short_var_declaration" => self.classify_assignment(node),
            "binary_expression" => self.classify_comparison(node),
            "expression_case" => self.classify_case_labels(node),
            "return_statement" => self.classify_return(node),
            "call_expression" => self.classify_call(node),
            _ => {}
        }
        // Dispatch never stops the walk: nested calls, cases and returns
        // classify independently.
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(child);
        }
    }

    // const A = "x" / const (A, B = "x", "y")
    fn classify_const(&mut self, node: Node<'_>) {
        let mut specs = node.walk();
        for spec in node.named_children(&mut specs) {
            if spec.kind() != "const_spec" {
                continue;
            }
            let mut names_cursor = spec.walk();
            let names: Vec<Node<'_>> = spec
                .children_by_field_name("name", &mut names_cursor)
                .collect();
            let Some(values) = spec.child_by_field_name("value") else {
                continue;
            };
            let mut values_cursor = values.walk();
            for (i, value) in values.named_children(&mut values_cursor).enumerate() {
                // report at the declared name, not at the literal
                let at = names
                    .get(i)
                    .or_else(|| names.first())
                    .map(|name| name.start_position());
                self.classify(value, Category::ConstDecl, at);
            }
        }
    }

    // s = "x" / s := "x"
    fn classify_assignment(&mut self, node: Node<'_>) {
        let Some(rhs) = node.child_by_field_name("right") else {
            return;
        };
        let mut cursor = rhs.walk();
        for expr in rhs.named_children(&mut cursor) {
            self.classify(expr, Category::Assignment, None);
        }
    }

    // s == "x" / s != "x"; other binary operators are not comparisons
    fn classify_comparison(&mut self, node: Node<'_>) {
        let Some(operator) = node.child_by_field_name("operator") else {
            return;
        };
        let op = node_text(operator, self.source);
        if op != "==" && op != "!=" {
            return;
        }
        if let Some(lhs) = node.child_by_field_name("left") {
            self.classify(lhs, Category::Comparison, None);
        }
        if let Some(rhs) = node.child_by_field_name("right") {
            self.classify(rhs, Category::Comparison, None);
        }
    }

    // case "x", "y":
    fn classify_case_labels(&mut self, node: Node<'_>) {
        let Some(labels) = node.child_by_field_name("value") else {
            return;
        };
        let mut cursor = labels.walk();
        for expr in labels.named_children(&mut cursor) {
            self.classify(expr, Category::CaseLabel, None);
        }
    }

    // return "x", "y"
    fn classify_return(&mut self, node: Node<'_>) {
        let mut cursor = node.walk();
        let Some(list) = node
            .named_children(&mut cursor)
            .find(|child| child.kind() == "expression_list")
        else {
            return;
        };
        let mut values = list.walk();
        for expr in list.named_children(&mut values) {
            self.classify(expr, Category::Return, None);
        }
    }

    // f("x")
    fn classify_call(&mut self, node: Node<'_>) {
        let Some(args) = node.child_by_field_name("arguments") else {
            return;
        };
        let mut cursor = args.walk();
        for expr in args.named_children(&mut cursor) {
            self.classify(expr, Category::CallArg, None);
        }
    }

    /// The funnel for every classified slot. Only bare literals pass;
    /// composite expressions are never unwrapped.
    fn classify(&mut self, node: Node<'_>, category: Category, at: Option<Point>) {
        if !matches!(
            node.kind(),
            "interpreted_string_literal" | "raw_string_literal"
        ) {
            return;
        }
        let Some(value) = unquote(node_text(node, self.source)) else {
            return;
        };
        if value.is_empty() || self.exclude.contains(&category) {
            return;
        }
        if !self.predicate.is_invalid(&value) {
            return;
        }
        let at = at.unwrap_or_else(|| node.start_position());
        self.issues.push(Issue {
            index: 0,
            file: self.file.to_string(),
            line: at.row + 1,
            column: at.column + 1,
            package: self.package.clone(),
            category,
            value,
        });
    }
}

fn package_name(root: Node<'_>, source: &[u8]) -> String {
    let mut cursor = root.walk();
    let Some(clause) = root
        .named_children(&mut cursor)
        .find(|child| child.kind() == "package_clause")
    else {
        return String::new();
    };
    let mut ids = clause.walk();
    let name = clause
        .named_children(&mut ids)
        .find(|child| child.kind() == "package_identifier")
        .map(|name| node_text(name, source).to_string())
        .unwrap_or_default();
    name
}

/// Text content of a node, sliced out of the file's source buffer.
fn node_text<'s>(node: Node<'_>, source: &'s [u8]) -> &'s str {
    std::str::from_utf8(&source[node.start_byte()..node.end_byte()]).unwrap_or("")
}
