//! Descriptor Property Tests
//!
//! End-to-end checks of the extraction rules on realistic components:
//! component detection, prop resolution, hooks, markup normalization and
//! list mapping.

pub mod descriptor_tests;
