//! Extraction orchestration
//!
//! One pre-order pass over the syntax tree feeds every detector and folds
//! their results into a single [`ComponentDescriptor`]. The pass carries
//! whether the current node sits at program level, which is where
//! component declarations are looked for.

use std::fs;
use std::path::Path;

use tree_sitter::{Node, Tree};

use crate::detectors::component::ComponentCandidate;
use crate::detectors::hooks::{extract_hook, HookEntry};
use crate::detectors::modules::{import_descriptor, record_exports};
use crate::detectors::syntax::SyntaxKind;
use crate::error::{DistillError, Result};
use crate::lang::Dialect;
use crate::parser::parse_source;
use crate::schema::ComponentDescriptor;

/// Build the descriptor for a parsed source file.
///
/// Pure: the same `(source, tree)` always yields the same descriptor.
/// Constructs no detector recognizes are left out of the result.
pub fn extract(source: &str, tree: &Tree) -> ComponentDescriptor {
    let root = tree.root_node();
    let mut extraction = Extraction {
        source,
        root,
        descriptor: ComponentDescriptor::default(),
    };
    extraction.visit(&root, false);
    extraction.descriptor
}

/// Parse and extract in one step
pub fn extract_source(source: &str) -> Result<ComponentDescriptor> {
    let tree = parse_source(source)?;
    Ok(extract(source, &tree))
}

/// Read a component file after checking that it exists and has a
/// supported extension
pub fn load_source(path: &Path) -> Result<(Dialect, String)> {
    if !path.exists() {
        return Err(DistillError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let dialect = Dialect::from_path(path)?;
    let source = fs::read_to_string(path)?;
    Ok((dialect, source))
}

/// Read, parse and extract a component file
pub fn extract_file(path: &Path) -> Result<ComponentDescriptor> {
    let (dialect, source) = load_source(path)?;
    tracing::debug!(
        path = %path.display(),
        dialect = dialect.name(),
        bytes = source.len(),
        "extracting component"
    );
    extract_source(&source)
}

/// Accumulator threaded through the traversal
struct Extraction<'a> {
    source: &'a str,
    root: Node<'a>,
    descriptor: ComponentDescriptor,
}

impl<'a> Extraction<'a> {
    fn visit(&mut self, node: &Node<'a>, top_level: bool) {
        let kind = SyntaxKind::of(node);

        match kind {
            SyntaxKind::ImportStatement => {
                if let Some(import) = import_descriptor(node, self.source) {
                    self.descriptor.imports.push(import);
                }
            }
            SyntaxKind::ExportStatement => {
                record_exports(node, self.source, &mut self.descriptor.exports);
            }
            SyntaxKind::FunctionDeclaration if top_level => {
                let candidate = ComponentCandidate::from_function_declaration(node, &self.root, self.source);
                self.accept(candidate);
            }
            SyntaxKind::VariableDeclarator if top_level => {
                let candidate = ComponentCandidate::from_variable_declarator(node, &self.root, self.source);
                self.accept(candidate);
            }
            SyntaxKind::CallExpression => {
                if let Some(entry) = extract_hook(node, self.source) {
                    self.record_hook(entry);
                }
            }
            _ => {}
        }

        // Program children, exported declarations and their declarators
        // stay at program level
        let children_top_level = match kind {
            SyntaxKind::Program => true,
            SyntaxKind::ExportStatement | SyntaxKind::LexicalDeclaration => top_level,
            _ => false,
        };

        let mut cursor = node.walk();
        let children: Vec<Node<'a>> = node.children(&mut cursor).collect();
        for child in &children {
            self.visit(child, children_top_level);
        }
    }

    /// The last component in source order wins
    fn accept(&mut self, candidate: Option<ComponentCandidate>) {
        let Some(candidate) = candidate else {
            return;
        };

        if !self.descriptor.name.is_empty() {
            tracing::debug!(
                previous = %self.descriptor.name,
                name = %candidate.name,
                "later component replaces earlier one"
            );
        }
        tracing::debug!(
            name = %candidate.name,
            props = candidate.props.len(),
            has_markup = candidate.markup.is_some(),
            "component detected"
        );

        self.descriptor.name = candidate.name;
        self.descriptor.props = candidate.props;
        self.descriptor.markup = candidate.markup;
    }

    fn record_hook(&mut self, entry: HookEntry) {
        match entry {
            HookEntry::State(state) => self.descriptor.state.push(state),
            HookEntry::Effect(effect) => self.descriptor.effects.push(effect),
            HookEntry::Callback(callback) => self.descriptor.callbacks.push(callback),
            HookEntry::Ref(reference) => self.descriptor.refs.push(reference),
        }
    }
}
