//! tsvisit: order-preserving child traversal and structural utilities for a
//! TypeScript syntax tree.
//!
//! The work is split across the workspace crates and re-exported here:
//! - `tsv_common` - diagnostics, comment ranges, paths, script kinds
//! - `tsv_scanner` - `SyntaxKind`, trivia skipping, comment scanning
//! - `tsv_parser` - the node arena, `for_each_child` and the `syntax` utilities

// Common types (diagnostics, comment ranges, paths)
pub use tsv_common as common;
pub use tsv_common::{
    CommentKind, CommentRange, Diagnostic, DiagnosticCategory, DiagnosticMessage, ScriptKind,
    create_detached_diagnostic, diagnostic_messages, get_root_length, normalize_path,
};

// Scanner - syntax kinds and trivia
pub use tsv_scanner as scanner;
pub use tsv_scanner::{
    SyntaxKind, get_leading_comment_ranges, get_trailing_comment_ranges, skip_trivia,
};

// Node model, traversal and structural utilities
pub use tsv_parser as parser;
pub use tsv_parser::syntax;
pub use tsv_parser::{
    Child, ExternalModuleIndicator, ModifierFlags, Node, NodeArena, NodeData, NodeFlags,
    NodeIndex, NodeList, for_each_child, for_each_child_optimized, for_each_child_with_lists,
    walk_children,
};

// Tracing configuration (text / tree / JSON output)
pub mod tracing_config;
