//! Comment ranges.
//!
//! Comments are not part of the AST. Their ranges are recovered from the raw
//! source text on demand (see `tsv_scanner::trivia`) and never stored on nodes.

use serde::{Deserialize, Serialize};

/// Kind of comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentKind {
    SingleLine, // // comment
    MultiLine,  // /* comment */
}

/// A range representing a comment in the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRange {
    /// Start position (byte offset of the leading `/`)
    pub pos: u32,
    /// End position (byte offset just past the comment)
    pub end: u32,
    pub kind: CommentKind,
    /// Whether a line break follows the comment before the next token
    pub has_trailing_new_line: bool,
}

impl CommentRange {
    /// Create a new comment range.
    pub const fn new(pos: u32, end: u32, kind: CommentKind, has_trailing_new_line: bool) -> Self {
        CommentRange {
            pos,
            end,
            kind,
            has_trailing_new_line,
        }
    }

    #[inline]
    pub fn is_multi_line(&self) -> bool {
        self.kind == CommentKind::MultiLine
    }

    /// Get the comment text from source.
    pub fn get_text<'a>(&self, source: &'a str) -> &'a str {
        let start = self.pos as usize;
        let end = self.end as usize;
        if start < end {
            source.get(start..end).unwrap_or("")
        } else {
            ""
        }
    }

    /// Check if this comment opens a JSDoc block: `/**` followed by anything
    /// except the empty-body form `/**/`.
    pub fn is_jsdoc(&self, source: &str) -> bool {
        let bytes = source.as_bytes();
        let pos = self.pos as usize;
        bytes.get(pos + 1) == Some(&b'*')
            && bytes.get(pos + 2) == Some(&b'*')
            && bytes.get(pos + 3) != Some(&b'/')
    }
}
