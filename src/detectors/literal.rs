//! Literal interpretation of hook arguments
//!
//! Trivial values (scalars, `[]`, `{}`) are turned into native values so a
//! generator can re-emit them in another language. Anything else is kept as
//! a verbatim source snapshot.

use tree_sitter::Node;

use crate::detectors::common::{get_node_text, significant_children, unwrap_parens};
use crate::detectors::syntax::SyntaxKind;
use crate::schema::Literal;

/// Interpret a node as a literal value, falling back to its source text
pub fn interpret(node: &Node, source: &str) -> Literal {
    let node = unwrap_parens(*node);
    match SyntaxKind::of(&node) {
        SyntaxKind::StringLiteral => Literal::Str(string_value(&node, source)),
        SyntaxKind::NumberLiteral => {
            let text = get_node_text(&node, source);
            match number_value(&text) {
                Some(n) => Literal::Number(n),
                None => Literal::Code(text),
            }
        }
        SyntaxKind::True => Literal::Bool(true),
        SyntaxKind::False => Literal::Bool(false),
        SyntaxKind::Null => Literal::Null,
        SyntaxKind::ArrayLiteral if significant_children(&node).is_empty() => Literal::EmptyArray,
        SyntaxKind::ObjectLiteral if significant_children(&node).is_empty() => Literal::EmptyObject,
        _ => Literal::Code(get_node_text(&node, source)),
    }
}

/// Runtime category of an interpreted value, used as a fallback type tag.
///
/// A source snapshot is carried as text, so it always reads as `string`.
pub fn runtime_category(value: &Literal) -> &'static str {
    match value {
        Literal::Str(_) | Literal::Code(_) => "string",
        Literal::Number(_) => "number",
        Literal::Bool(_) => "boolean",
        Literal::Null => "any",
        Literal::EmptyArray => "array",
        Literal::EmptyObject => "object",
    }
}

/// Cooked value of a string literal node (quotes removed, escapes decoded)
pub fn string_value(node: &Node, source: &str) -> String {
    let mut value = String::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        let text = get_node_text(&child, source);
        match child.kind() {
            "escape_sequence" => value.push_str(&decode_escape(&text)),
            _ => value.push_str(&text),
        }
    }
    value
}

fn decode_escape(escape: &str) -> String {
    let body = escape.strip_prefix('\\').unwrap_or(escape);
    let mut chars = body.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str();

    let decoded = match first {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        'b' => '\u{8}',
        'f' => '\u{c}',
        'v' => '\u{b}',
        '0' if rest.is_empty() => '\0',
        '\n' | '\r' | '\u{2028}' | '\u{2029}' => return String::new(),
        'x' => return hex_char(rest).map(String::from).unwrap_or_else(|| escape.to_string()),
        'u' => {
            let digits = rest.trim_start_matches('{').trim_end_matches('}');
            return hex_char(digits)
                .map(String::from)
                .unwrap_or_else(|| escape.to_string());
        }
        other => other,
    };
    decoded.to_string()
}

fn hex_char(digits: &str) -> Option<char> {
    u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
}

/// JSON number for a numeric literal; integral values stay integral
pub fn number_value(text: &str) -> Option<serde_json::Number> {
    let cleaned: String = text.chars().filter(|c| *c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();

    // BigInt literals have no JSON counterpart
    if lower.ends_with('n') {
        return None;
    }

    let radix = match lower.get(..2) {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return i64::from_str_radix(&lower[2..], radix)
            .ok()
            .map(serde_json::Number::from);
    }

    let value: f64 = lower.parse().ok()?;
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        Some(serde_json::Number::from(value as i64))
    } else {
        serde_json::Number::from_f64(value)
    }
}
