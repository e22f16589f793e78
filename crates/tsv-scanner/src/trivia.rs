//! Trivia scanning over raw source text.
//!
//! Node positions include leading trivia (whitespace and comments). These
//! helpers find where the real token starts and recover the comment ranges
//! that sit around a position. All offsets are byte offsets into `text`.

use memchr::{memchr3, memmem};
use tsv_common::{CommentKind, CommentRange};

/// Check if a character is a line break.
#[inline]
pub fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Check if a character is whitespace (but not a line break).
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{00A0}'
            | '\u{0085}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200B}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// UTF-8 safe helper to get the character at a byte position.
/// Returns None if pos is out of bounds or not on a char boundary.
#[inline]
fn char_at(text: &str, pos: usize) -> Option<char> {
    text.get(pos..)?.chars().next()
}

/// Byte offset of the next line break at or after `from`, or `bytes.len()`.
fn find_line_break(bytes: &[u8], from: usize) -> usize {
    let mut pos = from;
    while pos < bytes.len() {
        // 0xE2 leads the UTF-8 encodings of U+2028 / U+2029
        let Some(offset) = memchr3(b'\n', b'\r', 0xE2, &bytes[pos..]) else {
            return bytes.len();
        };
        let at = pos + offset;
        let is_separator =
            bytes.get(at + 1) == Some(&0x80) && matches!(bytes.get(at + 2), Some(0xA8 | 0xA9));
        if bytes[at] != 0xE2 || is_separator {
            return at;
        }
        pos = at + 1;
    }
    bytes.len()
}

/// Byte offset just past the `*/` closing a block comment whose body starts
/// at `from`, or `bytes.len()` for an unterminated comment.
fn find_block_comment_end(bytes: &[u8], from: usize) -> usize {
    match bytes.get(from..).and_then(|rest| memmem::find(rest, b"*/")) {
        Some(offset) => from + offset + 2,
        None => bytes.len(),
    }
}

/// Length of a `#!` line at the very start of the file (0 if there is none).
fn shebang_length(text: &str) -> usize {
    if text.starts_with("#!") {
        find_line_break(text.as_bytes(), 2)
    } else {
        0
    }
}

/// Scan forward from `pos` past whitespace, line breaks and comments to the
/// first byte of the next token. A shebang line is skipped when `pos` is 0.
pub fn skip_trivia(text: &str, pos: usize) -> usize {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut pos = if pos == 0 { shebang_length(text) } else { pos };

    while pos < len {
        match bytes[pos] {
            b' ' | b'\t' | b'\r' | b'\n' | 0x0B | 0x0C => pos += 1,
            b'/' if bytes.get(pos + 1) == Some(&b'/') => {
                pos = find_line_break(bytes, pos + 2);
            }
            b'/' if bytes.get(pos + 1) == Some(&b'*') => {
                pos = find_block_comment_end(bytes, pos + 2);
            }
            b if b >= 0x80 => match char_at(text, pos) {
                Some(ch) if is_white_space_single_line(ch) || is_line_break(ch) => {
                    pos += ch.len_utf8();
                }
                _ => break,
            },
            _ => break,
        }
    }
    pos
}

/// Get leading comments starting at a position in the source text.
///
/// Comments on the same line as `pos` belong to the preceding token, so
/// collection only starts after the first line break (or immediately when
/// `pos` is the start of the file).
pub fn get_leading_comment_ranges(text: &str, pos: usize) -> Vec<CommentRange> {
    iterate_comment_ranges(text, pos, false)
}

/// Get trailing comments starting at a position in the source text.
///
/// Trailing comments are comments that appear on the same line after a token,
/// before a newline.
pub fn get_trailing_comment_ranges(text: &str, pos: usize) -> Vec<CommentRange> {
    iterate_comment_ranges(text, pos, true)
}

fn iterate_comment_ranges(text: &str, pos: usize, trailing: bool) -> Vec<CommentRange> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut comments = Vec::new();
    let mut collecting = trailing || pos == 0;
    let mut pending: Option<CommentRange> = None;
    let mut i = if pos == 0 { shebang_length(text) } else { pos };

    while i < len {
        let Some(ch) = char_at(text, i) else {
            break;
        };

        if is_line_break(ch) {
            i += ch.len_utf8();
            // Skip \r\n as a single newline
            if ch == '\r' && bytes.get(i) == Some(&b'\n') {
                i += 1;
            }
            if trailing {
                break;
            }
            collecting = true;
            if let Some(p) = pending.as_mut() {
                p.has_trailing_new_line = true;
            }
            continue;
        }

        if is_white_space_single_line(ch) {
            i += ch.len_utf8();
            continue;
        }

        // Check for comment start (/ is ASCII, safe to check byte directly)
        let kind = match (ch, bytes.get(i + 1)) {
            ('/', Some(b'/')) => CommentKind::SingleLine,
            ('/', Some(b'*')) => CommentKind::MultiLine,
            // Non-whitespace, non-comment - we're done
            _ => break,
        };

        let start = i;
        i = match kind {
            CommentKind::SingleLine => find_line_break(bytes, i + 2),
            CommentKind::MultiLine => find_block_comment_end(bytes, i + 2),
        };

        if collecting {
            if let Some(p) = pending.take() {
                comments.push(p);
            }
            pending = Some(CommentRange::new(start as u32, i as u32, kind, false));
        }
    }

    // Emit final pending comment
    if let Some(p) = pending {
        comments.push(p);
    }

    comments
}
