//! Syntax kinds and trivia scanning for the tsvisit front end.
//!
//! This crate provides the lexical vocabulary shared by the node model:
//! - `SyntaxKind` - Token and node kinds (the discriminant of every AST node)
//! - Token classification (modifier keywords, assignment and logical operators)
//! - `trivia` - Skipping whitespace/comments and recovering comment ranges

pub mod syntax_kind;
pub use syntax_kind::{
    SyntaxKind, is_assignment_operator, is_keyword, is_logical_operator, is_modifier_kind,
    is_punctuation, is_token_kind,
};

pub mod trivia;
pub use trivia::{
    get_leading_comment_ranges, get_trailing_comment_ranges, is_line_break,
    is_white_space_single_line, skip_trivia,
};

#[cfg(test)]
#[path = "../tests/syntax_kind_tests.rs"]
mod syntax_kind_tests;
#[cfg(test)]
#[path = "../tests/trivia_tests.rs"]
mod trivia_tests;
