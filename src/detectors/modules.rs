//! Import and export surface of a module
//!
//! - `import` statements become one [`ImportDescriptor`] each
//! - `export` statements fill the exports map, `default` included

use indexmap::IndexMap;
use tree_sitter::Node;

use crate::detectors::common::{get_node_text, has_token, significant_children, unwrap_parens};
use crate::detectors::literal::string_value;
use crate::detectors::syntax::SyntaxKind;
use crate::schema::{ExportValue, ImportDescriptor};

/// Describe one import statement.
///
/// Named specifiers keep the imported name, not the local alias. Namespace
/// imports (`* as ns`) are not recorded.
pub fn import_descriptor(statement: &Node, source: &str) -> Option<ImportDescriptor> {
    let module = statement.child_by_field_name("source")?;
    let mut descriptor = ImportDescriptor {
        source: string_value(&module, source),
        default_binding: None,
        named: Vec::new(),
    };

    for clause in significant_children(statement) {
        if SyntaxKind::of(&clause) != SyntaxKind::ImportClause {
            continue;
        }
        for binding in significant_children(&clause) {
            match SyntaxKind::of(&binding) {
                SyntaxKind::Identifier => {
                    descriptor.default_binding = Some(get_node_text(&binding, source));
                }
                SyntaxKind::NamedImports => {
                    for specifier in significant_children(&binding) {
                        if SyntaxKind::of(&specifier) != SyntaxKind::ImportSpecifier {
                            continue;
                        }
                        if let Some(name) = specifier.child_by_field_name("name") {
                            descriptor.named.push(module_export_name(&name, source));
                        }
                    }
                }
                _ => {}
            }
        }
    }

    Some(descriptor)
}

/// Record the names an export statement contributes.
///
/// The map is created on the first export statement, even one that adds no
/// names (`export interface ...`). A bare `export * from '...'` leaves it
/// untouched.
pub fn record_exports(statement: &Node, source: &str, exports: &mut Option<IndexMap<String, ExportValue>>) {
    if has_token(statement, "*") {
        return;
    }
    let exports = exports.get_or_insert_with(IndexMap::new);

    if has_token(statement, "default") {
        let value = statement
            .child_by_field_name("value")
            .map(unwrap_parens)
            .filter(|value| SyntaxKind::of(value) == SyntaxKind::Identifier)
            .map_or(ExportValue::Flag, |value| ExportValue::Local(get_node_text(&value, source)));
        exports.insert("default".to_string(), value);
        return;
    }

    if let Some(declaration) = statement.child_by_field_name("declaration") {
        match SyntaxKind::of(&declaration) {
            SyntaxKind::LexicalDeclaration => {
                for declarator in significant_children(&declaration) {
                    if SyntaxKind::of(&declarator) != SyntaxKind::VariableDeclarator {
                        continue;
                    }
                    let Some(name) = declarator.child_by_field_name("name") else {
                        continue;
                    };
                    if SyntaxKind::of(&name) == SyntaxKind::Identifier {
                        exports.insert(get_node_text(&name, source), ExportValue::Flag);
                    }
                }
            }
            SyntaxKind::FunctionDeclaration => {
                if let Some(name) = declaration.child_by_field_name("name") {
                    exports.insert(get_node_text(&name, source), ExportValue::Flag);
                }
            }
            _ => {}
        }
    }

    for clause in significant_children(statement) {
        if SyntaxKind::of(&clause) != SyntaxKind::ExportClause {
            continue;
        }
        for specifier in significant_children(&clause) {
            if SyntaxKind::of(&specifier) != SyntaxKind::ExportSpecifier {
                continue;
            }
            let exported = specifier
                .child_by_field_name("alias")
                .or_else(|| specifier.child_by_field_name("name"));
            if let Some(exported) = exported {
                exports.insert(module_export_name(&exported, source), ExportValue::Flag);
            }
        }
    }
}

/// `foo` or `"string name"` in a specifier
fn module_export_name(node: &Node, source: &str) -> String {
    match SyntaxKind::of(node) {
        SyntaxKind::StringLiteral => string_value(node, source),
        _ => get_node_text(node, source),
    }
}
