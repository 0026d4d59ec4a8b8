//! Tree-sitter binding for component source
//!
//! This is the only place that knows which grammar produces the syntax tree.
//! Extraction consumes `(source, &Tree)` and never parses on its own.

use tree_sitter::{Node, Tree};

use crate::error::{DistillError, Result};
use crate::lang::Dialect;
use crate::utils::preview;

/// Parse component source with the TSX grammar.
///
/// Tree-sitter recovers from syntax errors; a tree containing any `ERROR`
/// or `MISSING` node is rejected here so callers never see a partial
/// descriptor built from a damaged tree.
pub fn parse_source(source: &str) -> Result<Tree> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&Dialect::Tsx.tree_sitter_language())
        .map_err(|e| DistillError::Parse {
            message: format!("failed to load grammar: {}", e),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| DistillError::Parse {
            message: "parser produced no syntax tree".to_string(),
        })?;

    let root = tree.root_node();
    if root.has_error() {
        return Err(DistillError::Parse {
            message: describe_first_error(&root, source),
        });
    }

    Ok(tree)
}

/// Human-readable location of the first damaged node in pre-order
fn describe_first_error(root: &Node, source: &str) -> String {
    let Some(node) = find_first_error(root) else {
        return "syntax error".to_string();
    };

    let pos = node.start_position();
    let location = format!("{}:{}", pos.row + 1, pos.column + 1);

    if node.is_missing() {
        return format!("missing `{}` at {}", node.kind(), location);
    }

    let text = source.get(node.start_byte()..node.end_byte()).unwrap_or("");
    format!("unexpected token at {} near \"{}\"", location, preview(text, 40))
}

fn find_first_error<'a>(node: &Node<'a>) -> Option<Node<'a>> {
    if node.is_error() || node.is_missing() {
        return Some(*node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = find_first_error(&child) {
            return Some(found);
        }
    }
    None
}

/// Indented outline of a syntax tree, one node per line.
///
/// Lines read `kind [first-last] "preview"` with 1-based line numbers;
/// anonymous tokens are marked with `~`.
pub fn render_tree(root: &Node, source: &str) -> String {
    let mut out = String::new();
    let mut cursor = root.walk();
    let mut depth = 0usize;

    loop {
        let node = cursor.node();
        let text = source.get(node.start_byte()..node.end_byte()).unwrap_or("");
        out.push_str(&format!(
            "{:indent$}{}{} [{}-{}] \"{}\"\n",
            "",
            if node.is_named() { "" } else { "~" },
            node.kind(),
            node.start_position().row + 1,
            node.end_position().row + 1,
            preview(text, 50),
            indent = depth * 2,
        ));

        if cursor.goto_first_child() {
            depth += 1;
            continue;
        }
        while !cursor.goto_next_sibling() {
            if depth == 0 || !cursor.goto_parent() {
                return out;
            }
            depth -= 1;
        }
    }
}
