//! Component detectors
//!
//! Each module recognizes one family of constructs in a TSX syntax tree and
//! returns plain descriptor values; the orchestrator in `extract` decides
//! where they go.
//!
//! # Layout
//!
//! Leaf helpers first:
//! - `syntax`: closed classification of tree-sitter node kinds
//! - `common`: source snapshots, traversal and parameter helpers
//! - `literal`: literal interpretation of hook arguments
//! - `types`: prop type resolution against interfaces and type aliases
//!
//! Then the detectors built on them:
//! - `markup`: normalized markup tree
//! - `mapping`: `.map()` list rendering
//! - `hooks`: `useState`, `useEffect`, `useCallback`, `useRef`
//! - `component`: component detection and prop extraction
//! - `modules`: import and export surface
//!
//! Anything a detector does not recognize yields `None` or an empty list,
//! never an error.

pub mod common;
pub mod component;
pub mod hooks;
pub mod literal;
pub mod mapping;
pub mod markup;
pub mod modules;
pub mod syntax;
pub mod types;
