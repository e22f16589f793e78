//! Path normalization.
//!
//! Paths come from file-system enumeration and may be malformed; every
//! function here degrades to an empty root instead of failing.

const FILE_URI_PREFIX: &str = "file:///";
const URL_SCHEME_SEPARATOR: &str = "://";

/// Normalize a path: backslashes become `/`, `.` segments are dropped and
/// `..` segments are resolved against preceding components. The root prefix
/// is never consumed; a `..` with nothing left to pop is kept verbatim.
/// A trailing slash on the input is preserved.
///
/// ```
/// use tsv_common::normalize_path;
/// assert_eq!(normalize_path("/a/b/../c"), "/a/c");
/// assert_eq!(normalize_path("a\\.\\b\\"), "a/b/");
/// ```
pub fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    let root_length = get_root_length(&path);
    let root = &path[..root_length];
    let normalized = get_normalized_parts(&path, root_length);
    if normalized.is_empty() {
        return root.to_string();
    }

    let mut joined = String::with_capacity(path.len());
    joined.push_str(root);
    joined.push_str(&normalized.join("/"));
    if path.ends_with('/') {
        joined.push('/');
    }
    joined
}

/// Length of the root prefix of a `/`-separated path.
///
/// Recognized, in priority order:
/// - `//server/share/` (UNC-style, through the second component boundary)
/// - `/` (absolute)
/// - `C:` or `C:/` (drive letter)
/// - `file:///`
/// - `scheme://`
///
/// Relative paths (and the empty path) have root length 0.
pub fn get_root_length(path: &str) -> usize {
    let bytes = path.as_bytes();
    let Some(&first) = bytes.first() else {
        return 0;
    };

    if first == b'/' {
        if bytes.get(1) != Some(&b'/') {
            return 1;
        }
        let Some(p1) = find_slash(bytes, 2) else {
            return 2;
        };
        return match find_slash(bytes, p1 + 1) {
            Some(p2) => p2 + 1,
            None => p1 + 1,
        };
    }

    if first.is_ascii_alphabetic() && bytes.get(1) == Some(&b':') {
        return if bytes.get(2) == Some(&b'/') { 3 } else { 2 };
    }

    if path.starts_with(FILE_URI_PREFIX) {
        return FILE_URI_PREFIX.len();
    }

    match path.find(URL_SCHEME_SEPARATOR) {
        Some(idx) => idx + URL_SCHEME_SEPARATOR.len(),
        None => 0,
    }
}

fn find_slash(bytes: &[u8], from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&b| b == b'/')
        .map(|offset| from + offset)
}

fn get_normalized_parts(normalized_slashed_path: &str, root_length: usize) -> Vec<&str> {
    let mut normalized: Vec<&str> = Vec::new();
    for part in normalized_slashed_path[root_length..].split('/') {
        match part {
            "" | "." => {}
            ".." if normalized.last().is_some_and(|last| *last != "..") => {
                normalized.pop();
            }
            _ => normalized.push(part),
        }
    }
    normalized
}
