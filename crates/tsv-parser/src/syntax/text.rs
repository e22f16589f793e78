//! Source text and comment extraction for nodes.
//!
//! Offsets are byte offsets into the text the tree was parsed from.

use crate::parser::Node;
use tsv_common::CommentRange;
use tsv_scanner::{SyntaxKind, get_leading_comment_ranges, get_trailing_comment_ranges, skip_trivia};

/// A node is missing if it is absent, or if the parser created it as a
/// zero-width placeholder during error recovery. The end-of-file token is
/// zero-width but never missing.
#[must_use]
pub fn node_is_missing(node: Option<&Node>) -> bool {
    let Some(node) = node else {
        return true;
    };
    match (node.pos, node.end) {
        (Some(pos), Some(end)) => pos == end && node.kind != SyntaxKind::EndOfFileToken,
        _ => false,
    }
}

/// Width of the node including leading trivia.
#[must_use]
pub fn get_full_width(node: &Node) -> u32 {
    node.end
        .unwrap_or(0)
        .saturating_sub(node.pos.unwrap_or(0))
}

/// The source text of a node with its leading trivia skipped.
///
/// Missing nodes yield `""`. A node with no end runs to the end of `text`.
#[must_use]
pub fn get_text_of_node_from_source_text<'a>(source_text: &'a str, node: &Node) -> &'a str {
    if node_is_missing(Some(node)) {
        return "";
    }
    let start = skip_trivia(source_text, node.pos.unwrap_or(0) as usize);
    let text = match node.end {
        Some(end) => source_text.get(start..end as usize),
        None => source_text.get(start..),
    };
    text.unwrap_or("")
}

#[must_use]
pub fn get_leading_comment_ranges_of_node_from_text(node: &Node, text: &str) -> Vec<CommentRange> {
    get_leading_comment_ranges(text, node.pos.unwrap_or(0) as usize)
}

/// JSDoc comments (`/** ... */`, but not `/**/`) attached to a node.
///
/// Parameters, type parameters, function expressions and arrow functions
/// may carry their doc comment on the same line as the preceding token,
/// so their trailing comments are considered first.
#[must_use]
pub fn get_jsdoc_comment_ranges(node: &Node, text: &str) -> Vec<CommentRange> {
    let pos = node.pos.unwrap_or(0) as usize;
    let candidates = match node.kind {
        SyntaxKind::Parameter
        | SyntaxKind::TypeParameter
        | SyntaxKind::FunctionExpression
        | SyntaxKind::ArrowFunction => {
            let mut ranges = get_trailing_comment_ranges(text, pos);
            ranges.extend(get_leading_comment_ranges(text, pos));
            ranges
        }
        _ => get_leading_comment_ranges_of_node_from_text(node, text),
    };
    candidates
        .into_iter()
        .filter(|comment| comment.is_jsdoc(text))
        .collect()
}

/// Kinds that a JSDoc comment can be attached to.
#[must_use]
pub const fn can_have_jsdoc(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::ArrowFunction
            | SyntaxKind::BinaryExpression
            | SyntaxKind::Block
            | SyntaxKind::BreakStatement
            | SyntaxKind::CallSignature
            | SyntaxKind::CaseClause
            | SyntaxKind::ClassDeclaration
            | SyntaxKind::ClassExpression
            | SyntaxKind::ClassStaticBlockDeclaration
            | SyntaxKind::Constructor
            | SyntaxKind::ConstructorType
            | SyntaxKind::ConstructSignature
            | SyntaxKind::ContinueStatement
            | SyntaxKind::DebuggerStatement
            | SyntaxKind::DoStatement
            | SyntaxKind::ElementAccessExpression
            | SyntaxKind::EmptyStatement
            | SyntaxKind::EndOfFileToken
            | SyntaxKind::EnumDeclaration
            | SyntaxKind::EnumMember
            | SyntaxKind::ExportAssignment
            | SyntaxKind::ExportDeclaration
            | SyntaxKind::ExportSpecifier
            | SyntaxKind::ExpressionStatement
            | SyntaxKind::ForInStatement
            | SyntaxKind::ForOfStatement
            | SyntaxKind::ForStatement
            | SyntaxKind::FunctionDeclaration
            | SyntaxKind::FunctionExpression
            | SyntaxKind::FunctionType
            | SyntaxKind::GetAccessor
            | SyntaxKind::Identifier
            | SyntaxKind::IfStatement
            | SyntaxKind::ImportDeclaration
            | SyntaxKind::ImportEqualsDeclaration
            | SyntaxKind::IndexSignature
            | SyntaxKind::InterfaceDeclaration
            | SyntaxKind::LabeledStatement
            | SyntaxKind::MethodDeclaration
            | SyntaxKind::MethodSignature
            | SyntaxKind::ModuleDeclaration
            | SyntaxKind::NamedTupleMember
            | SyntaxKind::NamespaceExportDeclaration
            | SyntaxKind::ObjectLiteralExpression
            | SyntaxKind::Parameter
            | SyntaxKind::ParenthesizedExpression
            | SyntaxKind::PropertyAccessExpression
            | SyntaxKind::PropertyAssignment
            | SyntaxKind::PropertyDeclaration
            | SyntaxKind::PropertySignature
            | SyntaxKind::ReturnStatement
            | SyntaxKind::SemicolonClassElement
            | SyntaxKind::SetAccessor
            | SyntaxKind::ShorthandPropertyAssignment
            | SyntaxKind::SpreadAssignment
            | SyntaxKind::SwitchStatement
            | SyntaxKind::ThrowStatement
            | SyntaxKind::TryStatement
            | SyntaxKind::TypeAliasDeclaration
            | SyntaxKind::TypeParameter
            | SyntaxKind::VariableDeclaration
            | SyntaxKind::VariableStatement
            | SyntaxKind::WhileStatement
            | SyntaxKind::WithStatement
    )
}
