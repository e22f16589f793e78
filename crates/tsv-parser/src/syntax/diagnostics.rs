//! Diagnostics anchored to a source file node.

use crate::parser::{NodeArena, NodeIndex};
use tsv_common::{Diagnostic, DiagnosticMessage, diagnostics::clamp_span_length};

/// Create a diagnostic in `source_file`, clamping the span to `source_text`.
///
/// The file name is taken from the source file node; if `source_file` is not
/// a source file the diagnostic has no file.
#[must_use]
pub fn create_file_diagnostic(
    arena: &NodeArena,
    source_file: NodeIndex,
    source_text: &str,
    start: u32,
    length: u32,
    message: DiagnosticMessage,
    argument: Option<&str>,
) -> Diagnostic {
    let file = arena
        .get(source_file)
        .and_then(|node| arena.get_source_file(node))
        .map(|data| data.file_name.clone());
    Diagnostic {
        file,
        start,
        length: clamp_span_length(source_text.len(), start, length),
        message,
        argument: argument.map(str::to_string),
    }
}
