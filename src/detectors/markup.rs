//! Markup tree builder
//!
//! Converts a JSX subtree into the normalized [`MarkupNode`] tree. Embedded
//! expressions are kept as source snapshots; `.map()` calls are handed to the
//! mapping recognizer.

use indexmap::IndexMap;
use tree_sitter::Node;

use crate::detectors::common::{first_significant_child, get_node_text, significant_children, unwrap_parens};
use crate::detectors::mapping::recognize_mapping;
use crate::detectors::syntax::SyntaxKind;
use crate::schema::{MarkupNode, PropValue};

/// Node kinds the builder knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkupSyntax {
    /// `<a>...</a>`, also `<>...</>` when the opening tag has no name
    Element,
    SelfClosingElement,
    Fragment,
    /// `{ ... }`
    ExpressionContainer,
    Text,
    /// `cond ? a : b`, kept verbatim
    Conditional,
    /// `cond && a`, kept verbatim
    Logical,
    Parenthesized,
    Unsupported,
}

impl MarkupSyntax {
    fn of(node: &Node) -> Self {
        match SyntaxKind::of(node) {
            SyntaxKind::JsxElement => Self::Element,
            SyntaxKind::JsxSelfClosingElement => Self::SelfClosingElement,
            SyntaxKind::JsxFragment => Self::Fragment,
            SyntaxKind::JsxExpression => Self::ExpressionContainer,
            SyntaxKind::JsxText | SyntaxKind::CharacterReference => Self::Text,
            SyntaxKind::Ternary => Self::Conditional,
            SyntaxKind::Logical => Self::Logical,
            SyntaxKind::Parenthesized => Self::Parenthesized,
            _ => Self::Unsupported,
        }
    }
}

/// Build the normalized tree rooted at `node`.
///
/// Returns `None` for kinds the builder does not render and for text that
/// is empty after trimming.
pub fn build_markup(node: &Node, source: &str) -> Option<MarkupNode> {
    match MarkupSyntax::of(node) {
        MarkupSyntax::Element => {
            let open_tag = node.child_by_field_name("open_tag");
            let name = open_tag.and_then(|tag| tag.child_by_field_name("name"));
            let children = build_children(node, source);
            match (open_tag, name) {
                (Some(open_tag), Some(name)) => Some(MarkupNode::Element {
                    tag: tag_name(&name, source),
                    props: build_attributes(&open_tag, source),
                    children,
                }),
                _ => Some(MarkupNode::Fragment { children }),
            }
        }
        MarkupSyntax::SelfClosingElement => {
            let name = node.child_by_field_name("name")?;
            Some(MarkupNode::Element {
                tag: tag_name(&name, source),
                props: build_attributes(node, source),
                children: Vec::new(),
            })
        }
        MarkupSyntax::Fragment => Some(MarkupNode::Fragment {
            children: build_children(node, source),
        }),
        MarkupSyntax::ExpressionContainer => container_child(node, source),
        MarkupSyntax::Text => text_node(&get_node_text(node, source)),
        MarkupSyntax::Conditional | MarkupSyntax::Logical => Some(MarkupNode::Expression {
            content: get_node_text(node, source),
        }),
        MarkupSyntax::Parenthesized => {
            let inner = first_significant_child(node)?;
            build_markup(&inner, source)
        }
        MarkupSyntax::Unsupported => {
            tracing::trace!(kind = node.kind(), "skipping unsupported markup node");
            None
        }
    }
}

/// Flatten an element name: `div`, `Foo.Bar`, `svg:path`
pub fn tag_name(name: &Node, source: &str) -> String {
    match SyntaxKind::of(name) {
        SyntaxKind::JsxNamespaceName => significant_children(name)
            .iter()
            .map(|part| get_node_text(part, source))
            .collect::<Vec<_>>()
            .join(":"),
        SyntaxKind::MemberExpression => get_node_text(name, source)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect(),
        _ => get_node_text(name, source),
    }
}

/// Text child from a raw run: character references decoded, then trimmed
fn text_node(raw: &str) -> Option<MarkupNode> {
    let decoded = html_escape::decode_html_entities(raw);
    let content = decoded.trim();
    (!content.is_empty()).then(|| MarkupNode::Text {
        content: content.to_string(),
    })
}

/// Children of an element or fragment, skipping the tags themselves.
///
/// Consecutive text and character references form one run, so `a &amp; b`
/// becomes the single text child `a & b`.
fn build_children(node: &Node, source: &str) -> Vec<MarkupNode> {
    let mut children = Vec::new();
    let mut text_run: Option<(usize, usize)> = None;

    for child in significant_children(node) {
        match SyntaxKind::of(&child) {
            SyntaxKind::JsxOpeningElement | SyntaxKind::JsxClosingElement => continue,
            SyntaxKind::JsxText | SyntaxKind::CharacterReference => {
                let start = text_run.map_or(child.start_byte(), |(start, _)| start);
                text_run = Some((start, child.end_byte()));
                continue;
            }
            _ => {}
        }

        flush_text(&mut text_run, source, &mut children);
        if let Some(built) = build_markup(&child, source) {
            children.push(built);
        }
    }
    flush_text(&mut text_run, source, &mut children);

    children
}

fn flush_text(run: &mut Option<(usize, usize)>, source: &str, children: &mut Vec<MarkupNode>) {
    if let Some((start, end)) = run.take() {
        if let Some(node) = source.get(start..end).and_then(text_node) {
            children.push(node);
        }
    }
}

/// Child produced by `{ ... }` inside an element
fn container_child(container: &Node, source: &str) -> Option<MarkupNode> {
    let expression = first_significant_child(container)?;

    if SyntaxKind::of(&expression) == SyntaxKind::SpreadElement {
        let argument = first_significant_child(&expression)?;
        return Some(MarkupNode::Spread {
            content: get_node_text(&argument, source),
        });
    }

    let inner = unwrap_parens(expression);
    if SyntaxKind::of(&inner) == SyntaxKind::CallExpression {
        if let Some(mapping) = recognize_mapping(&inner, source) {
            return Some(MarkupNode::Mapping(mapping));
        }
    }

    Some(MarkupNode::Expression {
        content: get_node_text(&expression, source),
    })
}

/// Attributes of an opening or self-closing tag, in source order
fn build_attributes(tag: &Node, source: &str) -> IndexMap<String, PropValue> {
    let mut props = IndexMap::new();

    for attribute in significant_children(tag) {
        match SyntaxKind::of(&attribute) {
            SyntaxKind::JsxAttribute => {
                let parts = significant_children(&attribute);
                let Some(name) = parts.first() else {
                    continue;
                };
                let value = match parts.get(1) {
                    Some(value) => attribute_value(value, source),
                    None => PropValue::Flag,
                };
                props.insert(tag_name(name, source), value);
            }
            // `{...rest}` in attribute position
            SyntaxKind::JsxExpression => {
                let Some(spread) = first_significant_child(&attribute)
                    .filter(|inner| SyntaxKind::of(inner) == SyntaxKind::SpreadElement)
                else {
                    continue;
                };
                let Some(argument) = first_significant_child(&spread) else {
                    continue;
                };
                props.insert(
                    format!("__spread__{}", argument.start_byte()),
                    PropValue::Spread(get_node_text(&argument, source)),
                );
            }
            _ => {}
        }
    }

    props
}

fn attribute_value(value: &Node, source: &str) -> PropValue {
    match SyntaxKind::of(value) {
        SyntaxKind::StringLiteral => {
            let text = get_node_text(value, source);
            let inner = text
                .get(1..text.len().saturating_sub(1))
                .unwrap_or_default();
            PropValue::Literal(html_escape::decode_html_entities(inner).into_owned())
        }
        SyntaxKind::JsxExpression => {
            let Some(expression) = first_significant_child(value) else {
                return PropValue::Null;
            };
            let inner = unwrap_parens(expression);
            if SyntaxKind::of(&inner) == SyntaxKind::CallExpression {
                if let Some(mapping) = recognize_mapping(&inner, source) {
                    return PropValue::Mapping(mapping);
                }
            }
            PropValue::Expression(get_node_text(&expression, source))
        }
        _ => match build_markup(value, source) {
            Some(node) => PropValue::Markup(Box::new(node)),
            None => PropValue::Expression(get_node_text(value, source)),
        },
    }
}
