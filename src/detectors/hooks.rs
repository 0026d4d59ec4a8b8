//! Hook extractors: `useState`, `useEffect`, `useCallback`, `useRef`
//!
//! Recognition is by callee name only. A call whose binding shape does not
//! match is skipped, never reported.

use tree_sitter::Node;

use crate::detectors::common::{
    call_arguments, callee_identifier, first_significant_child, get_node_text, significant_children, unwrap_parens,
    unwrap_value,
};
use crate::detectors::literal::{interpret, runtime_category};
use crate::detectors::syntax::SyntaxKind;
use crate::detectors::types::type_tag;
use crate::schema::{CallbackDescriptor, EffectDescriptor, Literal, RefDescriptor, StateDescriptor};

/// Hooks the extractor understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    State,
    Effect,
    Callback,
    Ref,
}

impl HookKind {
    pub fn from_callee(name: &str) -> Option<Self> {
        match name {
            "useState" => Some(Self::State),
            "useEffect" => Some(Self::Effect),
            "useCallback" => Some(Self::Callback),
            "useRef" => Some(Self::Ref),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::State => "useState",
            Self::Effect => "useEffect",
            Self::Callback => "useCallback",
            Self::Ref => "useRef",
        }
    }
}

/// One recognized hook call
#[derive(Debug, Clone, PartialEq)]
pub enum HookEntry {
    State(StateDescriptor),
    Effect(EffectDescriptor),
    Callback(CallbackDescriptor),
    Ref(RefDescriptor),
}

/// Extract a hook from a call expression.
///
/// Returns `None` for calls that are not hooks and for hook calls bound in
/// an unsupported shape.
pub fn extract_hook(call: &Node, source: &str) -> Option<HookEntry> {
    let kind = HookKind::from_callee(&callee_identifier(call, source)?)?;

    let entry = match kind {
        HookKind::State => extract_state(call, source).map(HookEntry::State),
        HookKind::Effect => extract_effect(call, source).map(HookEntry::Effect),
        HookKind::Callback => extract_callback(call, source).map(HookEntry::Callback),
        HookKind::Ref => extract_ref(call, source).map(HookEntry::Ref),
    };

    if entry.is_none() {
        tracing::trace!(
            hook = kind.as_str(),
            line = call.start_position().row + 1,
            "skipping hook call with unsupported shape"
        );
    }
    entry
}

/// Declarator whose value is this call, ignoring parentheses and type casts
fn bound_declarator<'a>(call: &Node<'a>) -> Option<Node<'a>> {
    let mut parent = call.parent()?;
    while matches!(
        SyntaxKind::of(&parent),
        SyntaxKind::Parenthesized | SyntaxKind::TypeWrapper
    ) {
        parent = parent.parent()?;
    }

    if SyntaxKind::of(&parent) != SyntaxKind::VariableDeclarator {
        return None;
    }
    let value = unwrap_value(parent.child_by_field_name("value")?);
    (value.id() == call.id()).then_some(parent)
}

/// Name of a declarator binding a single identifier
fn bound_identifier(call: &Node, source: &str) -> Option<String> {
    let name = bound_declarator(call)?.child_by_field_name("name")?;
    (SyntaxKind::of(&name) == SyntaxKind::Identifier).then(|| get_node_text(&name, source))
}

fn extract_state(call: &Node, source: &str) -> Option<StateDescriptor> {
    let pattern = bound_declarator(call)?.child_by_field_name("name")?;
    if SyntaxKind::of(&pattern) != SyntaxKind::ArrayPattern {
        return None;
    }

    let elements = array_pattern_elements(&pattern);
    let [Some(name), Some(setter)] = elements.as_slice() else {
        return None;
    };
    if SyntaxKind::of(name) != SyntaxKind::Identifier || SyntaxKind::of(setter) != SyntaxKind::Identifier {
        return None;
    }

    let initial_value = call_arguments(call).first().map(|arg| interpret(arg, source));
    let state_type = match type_argument(call) {
        Some(ty) => type_tag(&ty, source),
        None => initial_value
            .as_ref()
            .map(runtime_category)
            .unwrap_or("any")
            .to_string(),
    };

    Some(StateDescriptor {
        name: get_node_text(name, source),
        setter: get_node_text(setter, source),
        state_type,
        initial_value,
    })
}

/// Elements of `[a, , b]` by position, holes as `None`.
///
/// A trailing comma does not add a slot.
fn array_pattern_elements<'a>(pattern: &Node<'a>) -> Vec<Option<Node<'a>>> {
    let mut elements = Vec::new();
    let mut slot = None;
    let mut cursor = pattern.walk();
    for child in pattern.children(&mut cursor) {
        if !child.is_named() {
            if child.kind() == "," {
                elements.push(slot.take());
            }
            continue;
        }
        if SyntaxKind::of(&child) != SyntaxKind::Comment {
            slot = Some(child);
        }
    }
    if slot.is_some() {
        elements.push(slot);
    }
    elements
}

/// First explicit type argument: `useState<T>(...)`
fn type_argument<'a>(call: &Node<'a>) -> Option<Node<'a>> {
    let arguments = call.child_by_field_name("type_arguments").or_else(|| {
        let mut cursor = call.walk();
        let found = call
            .named_children(&mut cursor)
            .find(|child| child.kind() == "type_arguments");
        found
    })?;
    first_significant_child(&arguments)
}

fn extract_effect(call: &Node, source: &str) -> Option<EffectDescriptor> {
    let arguments = call_arguments(call);
    let body = function_body(arguments.first()?, source)?;
    Some(EffectDescriptor {
        body,
        dependencies: dependencies(arguments.get(1), source),
    })
}

fn extract_callback(call: &Node, source: &str) -> Option<CallbackDescriptor> {
    let arguments = call_arguments(call);
    let name = bound_identifier(call, source)?;
    let body = function_body(arguments.first()?, source)?;
    Some(CallbackDescriptor {
        name,
        body,
        dependencies: dependencies(arguments.get(1), source),
    })
}

fn extract_ref(call: &Node, source: &str) -> Option<RefDescriptor> {
    let name = bound_identifier(call, source)?;
    let initial_value: Option<Literal> = call_arguments(call).first().map(|arg| interpret(arg, source));
    Some(RefDescriptor { name, initial_value })
}

/// Verbatim span of a function argument's body, block or expression
fn function_body(argument: &Node, source: &str) -> Option<String> {
    let function = unwrap_parens(*argument);
    if !SyntaxKind::of(&function).is_function_value() {
        return None;
    }
    let body = function.child_by_field_name("body")?;
    Some(get_node_text(&body, source))
}

/// Shallow scan of a dependency array.
///
/// Keeps bare identifiers and `object.property` members with an identifier
/// object; everything else is dropped.
fn dependencies(argument: Option<&Node>, source: &str) -> Vec<String> {
    let Some(array) = argument.map(|arg| unwrap_parens(*arg)) else {
        return Vec::new();
    };
    if SyntaxKind::of(&array) != SyntaxKind::ArrayLiteral {
        return Vec::new();
    }

    significant_children(&array)
        .into_iter()
        .filter_map(|element| match SyntaxKind::of(&element) {
            SyntaxKind::Identifier => Some(get_node_text(&element, source)),
            SyntaxKind::MemberExpression => dotted_member(&element, source),
            _ => None,
        })
        .collect()
}

fn dotted_member(member: &Node, source: &str) -> Option<String> {
    if member.child_by_field_name("optional_chain").is_some() {
        return None;
    }
    let object = member.child_by_field_name("object")?;
    let property = member.child_by_field_name("property")?;
    if SyntaxKind::of(&object) != SyntaxKind::Identifier || SyntaxKind::of(&property) != SyntaxKind::PropertyIdentifier {
        return None;
    }
    Some(format!(
        "{}.{}",
        get_node_text(&object, source),
        get_node_text(&property, source)
    ))
}
