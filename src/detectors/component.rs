//! Component detection and prop extraction
//!
//! A function is a component when it renders markup: a block body with a
//! qualifying `return`, or an expression body that is itself markup.

use tree_sitter::Node;

use crate::detectors::common::{first_markup_return, get_node_text, parameters, significant_children, unwrap_parens, Param};
use crate::detectors::markup::build_markup;
use crate::detectors::syntax::SyntaxKind;
use crate::detectors::types::{reference_name, resolve_declared_props};
use crate::schema::{MarkupNode, PropDescriptor};

/// A declaration that qualifies as a component
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentCandidate {
    pub name: String,
    pub props: Vec<PropDescriptor>,
    pub markup: Option<MarkupNode>,
}

impl ComponentCandidate {
    /// `function Name(props) { ... }`
    pub fn from_function_declaration(node: &Node, root: &Node, source: &str) -> Option<Self> {
        let name = node.child_by_field_name("name")?;
        Self::from_function(get_node_text(&name, source), node, root, source)
    }

    /// `const Name = (props) => ...` or `const Name = function (props) { ... }`
    pub fn from_variable_declarator(node: &Node, root: &Node, source: &str) -> Option<Self> {
        let name = node.child_by_field_name("name")?;
        if SyntaxKind::of(&name) != SyntaxKind::Identifier {
            return None;
        }
        let value = unwrap_parens(node.child_by_field_name("value")?);
        if !SyntaxKind::of(&value).is_function_value() {
            return None;
        }
        Self::from_function(get_node_text(&name, source), &value, root, source)
    }

    fn from_function(name: String, function: &Node, root: &Node, source: &str) -> Option<Self> {
        let rendered = rendered_root(function)?;
        let props = extract_props(&name, function, root, source);
        Some(Self {
            markup: build_markup(&rendered, source),
            props,
            name,
        })
    }
}

/// The markup a function renders, if any
pub fn rendered_root<'a>(function: &Node<'a>) -> Option<Node<'a>> {
    let body = function.child_by_field_name("body")?;
    match SyntaxKind::of(&body) {
        SyntaxKind::StatementBlock => first_markup_return(&body),
        _ => {
            let expression = unwrap_parens(body);
            SyntaxKind::of(&expression).is_markup_root().then_some(expression)
        }
    }
}

/// Props declared by the first parameter
pub fn extract_props(component: &str, function: &Node, root: &Node, source: &str) -> Vec<PropDescriptor> {
    let Some(param) = parameters(function).into_iter().next() else {
        return Vec::new();
    };
    if param.has_default {
        return Vec::new();
    }

    match SyntaxKind::of(&param.pattern) {
        SyntaxKind::ObjectPattern => destructured_props(&param.pattern, source),
        SyntaxKind::Identifier => typed_props(component, &param, root, source),
        _ => Vec::new(),
    }
}

/// `{ label, size = 1, title: heading, ...rest }`
fn destructured_props(pattern: &Node, source: &str) -> Vec<PropDescriptor> {
    significant_children(pattern)
        .into_iter()
        .filter_map(|property| match SyntaxKind::of(&property) {
            SyntaxKind::ShorthandPropertyPattern => Some(PropDescriptor::new(
                get_node_text(&property, source),
                "any",
                true,
            )),
            SyntaxKind::PairPattern => {
                let key = property.child_by_field_name("key")?;
                (SyntaxKind::of(&key) == SyntaxKind::PropertyIdentifier)
                    .then(|| PropDescriptor::new(get_node_text(&key, source), "any", true))
            }
            SyntaxKind::ObjectAssignmentPattern => {
                let left = property.child_by_field_name("left")?;
                (SyntaxKind::of(&left) == SyntaxKind::ShorthandPropertyPattern)
                    .then(|| PropDescriptor::new(get_node_text(&left, source), "any", true))
            }
            SyntaxKind::RestPattern => {
                let argument = significant_children(&property).into_iter().next()?;
                (SyntaxKind::of(&argument) == SyntaxKind::Identifier)
                    .then(|| PropDescriptor::new(get_node_text(&argument, source), "object", false))
            }
            _ => None,
        })
        .collect()
}

/// `props: CardProps`, resolved against the program's type declarations
fn typed_props(component: &str, param: &Param, root: &Node, source: &str) -> Vec<PropDescriptor> {
    let param_name = get_node_text(&param.pattern, source);

    let type_name = param
        .annotation
        .and_then(|annotation| significant_children(&annotation).into_iter().next())
        .and_then(|ty| reference_name(&ty, source))
        .unwrap_or_else(|| format!("{}Props", component));

    match resolve_declared_props(root, &type_name, source) {
        Some(props) => props,
        None => {
            tracing::trace!(type_name = type_name.as_str(), "props type not declared in source");
            vec![PropDescriptor::new(param_name, "object", true)]
        }
    }
}
