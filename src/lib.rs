//! jsx-distill: semantic extraction of JSX/TSX components
//!
//! This library reads the source of a single UI component and produces a
//! language-neutral [`ComponentDescriptor`]: name, typed props, state, effects,
//! callbacks, refs, imports/exports and a normalized markup tree. It uses
//! tree-sitter (TSX grammar) for parsing; the descriptor serializes to JSON
//! for a downstream code generator.
//!
//! # Example
//!
//! ```
//! use jsx_distill::{extract, parse_source};
//!
//! let source = r#"
//! export function Hello({ name }) {
//!     return <p>Hello, {name}</p>;
//! }
//! "#;
//!
//! let tree = parse_source(source)?;
//! let descriptor = extract(source, &tree);
//!
//! assert_eq!(descriptor.name, "Hello");
//! assert_eq!(descriptor.props[0].name, "name");
//! println!("{}", serde_json::to_string_pretty(&descriptor)?);
//! # Ok::<(), jsx_distill::DistillError>(())
//! ```

pub mod cli;
pub mod detectors;
pub mod error;
pub mod extract;
pub mod lang;
pub mod parser;
pub mod schema;
pub mod serve;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use error::{DistillError, Result};
pub use extract::{extract, extract_file, extract_source, load_source};
pub use lang::Dialect;
pub use parser::{parse_source, render_tree};
pub use schema::{
    CallbackDescriptor, ComponentDescriptor, EffectDescriptor, ExportValue, ImportDescriptor,
    Literal, Mapping, MarkupNode, PropDescriptor, PropValue, RefDescriptor, StateDescriptor,
};
pub use serve::{handle_request, serve, serve_stdio, ExtractRequest, ExtractResponse};
