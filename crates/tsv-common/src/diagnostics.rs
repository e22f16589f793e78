//! Diagnostic types produced by the front end.
//!
//! Diagnostics are immutable values. This crate only owns their construction
//! contract: spans are clamped to the source text so a diagnostic never
//! references bytes past the end of the file.

use serde::Serialize;

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// Message templates raised by the parser-facing utilities.
pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage};

    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = DiagnosticMessage {
        code: 1002,
        category: DiagnosticCategory::Error,
        message: "Unterminated string literal.",
    };

    pub const IDENTIFIER_EXPECTED: DiagnosticMessage = DiagnosticMessage {
        code: 1003,
        category: DiagnosticCategory::Error,
        message: "Identifier expected.",
    };

    pub const _0_EXPECTED: DiagnosticMessage = DiagnosticMessage {
        code: 1005,
        category: DiagnosticCategory::Error,
        message: "'{0}' expected.",
    };

    pub const UNEXPECTED_TOKEN: DiagnosticMessage = DiagnosticMessage {
        code: 1012,
        category: DiagnosticCategory::Error,
        message: "Unexpected token.",
    };

    pub const DECLARATION_OR_STATEMENT_EXPECTED: DiagnosticMessage = DiagnosticMessage {
        code: 1128,
        category: DiagnosticCategory::Error,
        message: "Declaration or statement expected.",
    };
}

/// A diagnostic anchored to a span of source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// File the span belongs to (absent for global diagnostics)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub start: u32,
    pub length: u32,
    pub message: DiagnosticMessage,
    /// Substituted for `{0}` when the message text is rendered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,
}

impl Diagnostic {
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.message.code
    }

    #[must_use]
    pub const fn category(&self) -> DiagnosticCategory {
        self.message.category
    }

    /// Render the message template with the optional argument filled in.
    #[must_use]
    pub fn message_text(&self) -> String {
        match &self.argument {
            Some(arg) => format_message(self.message.message, &[arg.as_str()]),
            None => self.message.message.to_string(),
        }
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// Clamp `length` so that `start + length` never exceeds `text_len`.
///
/// A start past the end of the text yields a zero-length span.
#[must_use]
pub const fn clamp_span_length(text_len: usize, start: u32, length: u32) -> u32 {
    let start = start as usize;
    let length = length as usize;
    if start.saturating_add(length) > text_len {
        text_len.saturating_sub(start) as u32
    } else {
        length as u32
    }
}

/// Create a diagnostic for a file that has no tree attached (yet).
///
/// Over-long spans are clamped to the end of `source_text` rather than rejected.
#[must_use]
pub fn create_detached_diagnostic(
    file_name: &str,
    source_text: &str,
    start: u32,
    length: u32,
    message: DiagnosticMessage,
    argument: Option<&str>,
) -> Diagnostic {
    Diagnostic {
        file: Some(file_name.to_string()),
        start,
        length: clamp_span_length(source_text.len(), start, length),
        message,
        argument: argument.map(str::to_string),
    }
}
