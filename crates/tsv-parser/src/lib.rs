//! Node model, child traversal and structural utilities for tsvisit.
//!
//! This crate provides:
//! - `NodeArena` / `NodeIndex` / `NodeList` - index-linked tree storage
//! - `NodeData` - one payload variant per child layout, plus capability traits
//! - `for_each_child` and friends - single-level, source-order child traversal
//! - `syntax` - parse-error aggregation, modifier flags, module detection,
//!   text and JSDoc comment extraction

pub mod parser;
pub mod syntax;

pub use parser::*;
pub use syntax::*;
pub use tsv_scanner::{SyntaxKind, is_assignment_operator, is_logical_operator, is_modifier_kind};

#[cfg(test)]
mod test_fixtures;

#[cfg(test)]
#[path = "../tests/node_tests.rs"]
mod node_tests;
#[cfg(test)]
#[path = "../tests/visitor_tests.rs"]
mod visitor_tests;
#[cfg(test)]
#[path = "../tests/parse_error_tests.rs"]
mod parse_error_tests;
#[cfg(test)]
#[path = "../tests/modifier_tests.rs"]
mod modifier_tests;
#[cfg(test)]
#[path = "../tests/module_indicator_tests.rs"]
mod module_indicator_tests;
#[cfg(test)]
#[path = "../tests/text_tests.rs"]
mod text_tests;
#[cfg(test)]
#[path = "../tests/classify_tests.rs"]
mod classify_tests;
