//! Type resolution for component props
//!
//! Finds `interface X { ... }` / `type X = { ... }` declarations anywhere in
//! the program and reduces every member type to a short tag.

use tree_sitter::Node;

use crate::detectors::common::{first_significant_child, get_node_text, has_token, significant_children, visit_all};
use crate::detectors::syntax::SyntaxKind;
use crate::schema::PropDescriptor;

/// Type-position node kinds that produce a tag other than `any`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeSyntax {
    /// `string`, `number`, `any`, ...
    Predefined,
    /// `T[]`
    Array,
    /// `(a: A) => B`
    Function,
    /// `A | B`
    Union,
    /// `Props`
    Reference,
    /// `Props<T>`
    Generic,
    /// `(T)`
    Parenthesized,
    Other,
}

impl TypeSyntax {
    fn of(node: &Node) -> Self {
        match node.kind() {
            "predefined_type" => Self::Predefined,
            "array_type" => Self::Array,
            "function_type" => Self::Function,
            "union_type" => Self::Union,
            "type_identifier" => Self::Reference,
            "generic_type" => Self::Generic,
            "parenthesized_type" => Self::Parenthesized,
            _ => Self::Other,
        }
    }
}

/// Reduce a type node to its tag
pub fn type_tag(node: &Node, source: &str) -> String {
    match TypeSyntax::of(node) {
        TypeSyntax::Predefined => {
            let keyword = get_node_text(node, source);
            match keyword.as_str() {
                "string" | "number" | "boolean" | "object" => keyword,
                _ => "any".to_string(),
            }
        }
        TypeSyntax::Array => {
            let element = first_significant_child(node)
                .map(|element| type_tag(&element, source))
                .unwrap_or_else(|| "any".to_string());
            format!("Array<{}>", element)
        }
        TypeSyntax::Function => "function".to_string(),
        TypeSyntax::Union => "union".to_string(),
        TypeSyntax::Reference | TypeSyntax::Generic => {
            reference_name(node, source).unwrap_or_else(|| "any".to_string())
        }
        TypeSyntax::Parenthesized => first_significant_child(node)
            .map(|inner| type_tag(&inner, source))
            .unwrap_or_else(|| "any".to_string()),
        TypeSyntax::Other => "any".to_string(),
    }
}

/// Tag of the type inside a `type_annotation` node (`: T`)
pub fn annotation_tag(annotation: &Node, source: &str) -> String {
    first_significant_child(annotation)
        .map(|ty| type_tag(&ty, source))
        .unwrap_or_else(|| "any".to_string())
}

/// Plain identifier name of a type reference, generic arguments ignored.
///
/// Qualified names (`React.FC`) have no plain name.
pub fn reference_name(node: &Node, source: &str) -> Option<String> {
    match TypeSyntax::of(node) {
        TypeSyntax::Reference => Some(get_node_text(node, source)),
        TypeSyntax::Generic => {
            let name = node.child_by_field_name("name")?;
            (TypeSyntax::of(&name) == TypeSyntax::Reference).then(|| get_node_text(&name, source))
        }
        _ => None,
    }
}

/// Props declared by the type named `type_name`.
///
/// Returns `None` when no interface or type alias of that name exists. All
/// interfaces with the name contribute members in source order (declaration
/// merging). A type alias counts as found even when its value is not an
/// object type; it just contributes no members then.
pub fn resolve_declared_props(root: &Node, type_name: &str, source: &str) -> Option<Vec<PropDescriptor>> {
    let mut found = false;
    let mut props = Vec::new();

    visit_all(root, |node| {
        let body = match SyntaxKind::of(node) {
            SyntaxKind::InterfaceDeclaration => node.child_by_field_name("body"),
            SyntaxKind::TypeAliasDeclaration => node
                .child_by_field_name("value")
                .filter(|value| value.kind() == "object_type"),
            _ => return,
        };
        let declared = node
            .child_by_field_name("name")
            .map(|name| get_node_text(&name, source));
        if declared.as_deref() != Some(type_name) {
            return;
        }

        found = true;
        if let Some(body) = body {
            collect_members(&body, source, &mut props);
        }
    });

    found.then_some(props)
}

fn collect_members(body: &Node, source: &str, props: &mut Vec<PropDescriptor>) {
    for member in significant_children(body) {
        if member.kind() != "property_signature" {
            continue;
        }
        let Some(name) = member.child_by_field_name("name") else {
            continue;
        };
        if SyntaxKind::of(&name) != SyntaxKind::PropertyIdentifier {
            continue;
        }

        let prop_type = member
            .child_by_field_name("type")
            .map(|annotation| annotation_tag(&annotation, source))
            .unwrap_or_else(|| "any".to_string());

        props.push(PropDescriptor::new(
            get_node_text(&name, source),
            prop_type,
            !has_token(&member, "?"),
        ));
    }
}
