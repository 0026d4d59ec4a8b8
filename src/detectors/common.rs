//! Node helpers shared by the detectors
//!
//! Includes the source snapshotter: every verbatim fragment in a descriptor
//! (bodies, expressions, iterables) comes out of [`get_node_text`].

use tree_sitter::Node;

use crate::detectors::syntax::SyntaxKind;

/// Exact source text spanned by a node
pub fn get_node_text(node: &Node, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or("").to_string()
}

/// Visit all nodes in pre-order
pub fn visit_all<'a, F>(node: &Node<'a>, mut visitor: F)
where
    F: FnMut(&Node<'a>),
{
    visit_all_recursive(node, &mut visitor);
}

fn visit_all_recursive<'a, F>(node: &Node<'a>, visitor: &mut F)
where
    F: FnMut(&Node<'a>),
{
    visitor(node);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit_all_recursive(&child, visitor);
    }
}

/// Named children without comments
pub fn significant_children<'a>(node: &Node<'a>) -> Vec<Node<'a>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| SyntaxKind::of(child) != SyntaxKind::Comment)
        .collect()
}

/// First named, non-comment child
pub fn first_significant_child<'a>(node: &Node<'a>) -> Option<Node<'a>> {
    significant_children(node).into_iter().next()
}

/// Whether an anonymous token such as `default` or `?` is a direct child
pub fn has_token(node: &Node, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == token);
    found
}

/// Strip `( ... )` around an expression
pub fn unwrap_parens<'a>(node: Node<'a>) -> Node<'a> {
    let mut current = node;
    while SyntaxKind::of(&current) == SyntaxKind::Parenthesized {
        match first_significant_child(&current) {
            Some(inner) => current = inner,
            None => break,
        }
    }
    current
}

/// Strip parentheses and type-only wrappers (`as`, `satisfies`, `!`)
pub fn unwrap_value<'a>(node: Node<'a>) -> Node<'a> {
    let mut current = node;
    loop {
        match SyntaxKind::of(&current) {
            SyntaxKind::Parenthesized | SyntaxKind::TypeWrapper => {
                match first_significant_child(&current) {
                    Some(inner) => current = inner,
                    None => return current,
                }
            }
            _ => return current,
        }
    }
}

/// Argument expressions of a call, in order
pub fn call_arguments<'a>(call: &Node<'a>) -> Vec<Node<'a>> {
    call.child_by_field_name("arguments")
        .map(|args| significant_children(&args))
        .unwrap_or_default()
}

/// Name of the identifier a call invokes, if the callee is a bare identifier
pub fn callee_identifier(call: &Node, source: &str) -> Option<String> {
    let callee = call.child_by_field_name("function")?;
    (SyntaxKind::of(&callee) == SyntaxKind::Identifier).then(|| get_node_text(&callee, source))
}

/// First `return` in a function body whose argument renders markup.
///
/// The walk is pre-order over the whole body, nested functions included,
/// and stops at the first qualifying return. Returns the argument with
/// parentheses removed.
pub fn first_markup_return<'a>(body: &Node<'a>) -> Option<Node<'a>> {
    if SyntaxKind::of(body) == SyntaxKind::ReturnStatement {
        if let Some(argument) = first_significant_child(body).map(unwrap_parens) {
            if SyntaxKind::of(&argument).is_markup_root() {
                return Some(argument);
            }
        }
    }
    let mut cursor = body.walk();
    let children: Vec<Node<'a>> = body.named_children(&mut cursor).collect();
    children.iter().find_map(first_markup_return)
}

/// One declared function parameter
#[derive(Debug, Clone, Copy)]
pub struct Param<'a> {
    /// Binding pattern: identifier, object/array pattern, rest pattern
    pub pattern: Node<'a>,
    /// `type_annotation` node, when annotated
    pub annotation: Option<Node<'a>>,
    /// Whether a default value is given (`x = 1`)
    pub has_default: bool,
}

/// Parameters of a function declaration, function expression or arrow
pub fn parameters<'a>(function: &Node<'a>) -> Vec<Param<'a>> {
    // `x => ...` has a single bare parameter
    if let Some(single) = function.child_by_field_name("parameter") {
        return vec![Param {
            pattern: single,
            annotation: None,
            has_default: false,
        }];
    }

    let Some(list) = function.child_by_field_name("parameters") else {
        return Vec::new();
    };

    significant_children(&list)
        .into_iter()
        .filter_map(|param| match SyntaxKind::of(&param) {
            SyntaxKind::RequiredParameter | SyntaxKind::OptionalParameter => Some(Param {
                pattern: param.child_by_field_name("pattern")?,
                annotation: param.child_by_field_name("type"),
                has_default: param.child_by_field_name("value").is_some(),
            }),
            SyntaxKind::AssignmentPattern => Some(Param {
                pattern: param.child_by_field_name("left")?,
                annotation: None,
                has_default: true,
            }),
            _ => Some(Param {
                pattern: param,
                annotation: None,
                has_default: false,
            }),
        })
        .collect()
}

impl Param<'_> {
    /// Name of a plain identifier parameter without default
    pub fn identifier_name(&self, source: &str) -> Option<String> {
        (!self.has_default && SyntaxKind::of(&self.pattern) == SyntaxKind::Identifier)
            .then(|| get_node_text(&self.pattern, source))
    }
}
