//! Output Format Tests
//!
//! Verifies the JSON wire shape of descriptors: key names, node layout,
//! attribute value encodings and byte-for-byte determinism.

pub mod consistency_tests;
