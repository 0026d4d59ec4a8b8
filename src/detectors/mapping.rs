//! List-mapping recognizer for `iterable.map(item => <markup />)`

use tree_sitter::Node;

use crate::detectors::common::{call_arguments, first_markup_return, get_node_text, parameters, unwrap_parens};
use crate::detectors::markup::build_markup;
use crate::detectors::syntax::SyntaxKind;
use crate::schema::Mapping;

/// Recognize a `.map()` call rendering markup.
///
/// Only a property access named exactly `map` with a function argument
/// qualifies. A callback that renders nothing is not a mapping; the caller
/// then treats the call as an ordinary expression.
pub fn recognize_mapping(call: &Node, source: &str) -> Option<Mapping> {
    let callee = call.child_by_field_name("function")?;
    if SyntaxKind::of(&callee) != SyntaxKind::MemberExpression {
        return None;
    }
    let property = callee.child_by_field_name("property")?;
    if get_node_text(&property, source) != "map" {
        return None;
    }
    let object = callee.child_by_field_name("object")?;

    let callback = call_arguments(call).into_iter().next().map(unwrap_parens)?;
    if !SyntaxKind::of(&callback).is_function_value() {
        return None;
    }

    let params = parameters(&callback);
    let param_name = |i: usize| {
        params
            .get(i)
            .and_then(|param| param.identifier_name(source))
            .unwrap_or_default()
    };

    let body = callback.child_by_field_name("body")?;
    let template = match SyntaxKind::of(&body) {
        SyntaxKind::StatementBlock => first_markup_return(&body).and_then(|root| build_markup(&root, source)),
        _ => {
            // Conditional and logical bodies stay ordinary code
            let root = unwrap_parens(body);
            if !SyntaxKind::of(&root).is_markup_root() {
                return None;
            }
            build_markup(&root, source)
        }
    }?;

    Some(Mapping {
        iterable: get_node_text(&object, source),
        item: param_name(0),
        index: param_name(1),
        template: Box::new(template),
    })
}
