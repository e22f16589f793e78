//! Common types and utilities for the tsvisit TypeScript front end.
//!
//! This crate provides foundational types used across all tsvisit crates:
//! - Diagnostic values and span clamping (`Diagnostic`, `DiagnosticMessage`)
//! - Comment ranges recovered from raw source text
//! - Path normalization and root detection
//! - Script kinds and file-extension helpers

// Diagnostic types - errors are reported as data, never thrown
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, create_detached_diagnostic,
    diagnostic_messages, format_message,
};

// Comment ranges (not attached to the tree, recomputed from text)
pub mod comments;
pub use comments::{CommentKind, CommentRange};

// Script kinds and file extensions
pub mod common;
pub use common::ScriptKind;

// Path normalization
pub mod path;
pub use path::{get_root_length, normalize_path};

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod diagnostics_tests;
#[cfg(test)]
#[path = "../tests/path_tests.rs"]
mod path_tests;
#[cfg(test)]
#[path = "../tests/common_tests.rs"]
mod common_tests;
