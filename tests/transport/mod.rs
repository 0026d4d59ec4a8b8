//! Transport Tests
//!
//! Line-delimited request/response handling over in-memory streams.

pub mod serve_tests;
