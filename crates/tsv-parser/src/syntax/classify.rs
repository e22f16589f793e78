//! Node classification and upward navigation.

use crate::parser::{NodeArena, NodeIndex};
use tsv_scanner::SyntaxKind;

/// Kinds that can appear on the left of an assignment or call without
/// parentheses.
#[must_use]
pub const fn is_left_hand_side_expression_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::PropertyAccessExpression
            | SyntaxKind::ElementAccessExpression
            | SyntaxKind::NewExpression
            | SyntaxKind::CallExpression
            | SyntaxKind::JsxElement
            | SyntaxKind::JsxSelfClosingElement
            | SyntaxKind::TaggedTemplateExpression
            | SyntaxKind::ArrayLiteralExpression
            | SyntaxKind::ParenthesizedExpression
            | SyntaxKind::ObjectLiteralExpression
            | SyntaxKind::ClassExpression
            | SyntaxKind::FunctionExpression
            | SyntaxKind::Identifier
            | SyntaxKind::RegularExpressionLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TemplateExpression
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::ThisKeyword
            | SyntaxKind::TrueKeyword
            | SyntaxKind::SuperKeyword
            | SyntaxKind::NonNullExpression
            | SyntaxKind::MetaProperty
    )
}

#[must_use]
pub fn is_left_hand_side_expression(arena: &NodeArena, node_idx: NodeIndex) -> bool {
    is_left_hand_side_expression_kind(
        arena.kind(skip_partially_emitted_expressions(arena, node_idx)),
    )
}

/// Unwrap `PartiallyEmittedExpression` layers.
#[must_use]
pub fn skip_partially_emitted_expressions(arena: &NodeArena, node_idx: NodeIndex) -> NodeIndex {
    let mut current = node_idx;
    while let Some(node) = arena.get(current) {
        if node.kind != SyntaxKind::PartiallyEmittedExpression {
            break;
        }
        match arena.get_wrapped_expr(node) {
            Some(wrapped) if wrapped.expression.is_some() => current = wrapped.expression,
            _ => break,
        }
    }
    current
}

/// Walk out of nested binding elements to the declaration that owns the
/// whole binding pattern (a variable declaration or a parameter).
#[must_use]
pub fn get_root_declaration(arena: &NodeArena, node_idx: NodeIndex) -> NodeIndex {
    let mut current = node_idx;
    while arena.kind(current) == SyntaxKind::BindingElement {
        // binding element -> binding pattern -> owner
        let owner = arena.parent(arena.parent(current));
        if owner.is_none() {
            break;
        }
        current = owner;
    }
    current
}

#[must_use]
pub fn is_parameter_declaration(arena: &NodeArena, node_idx: NodeIndex) -> bool {
    arena.kind(get_root_declaration(arena, node_idx)) == SyntaxKind::Parameter
}

/// The `SourceFile` that contains `node_idx`, following parent links.
#[must_use]
pub fn get_source_file_of_node(arena: &NodeArena, node_idx: NodeIndex) -> Option<NodeIndex> {
    let mut current = node_idx;
    loop {
        let node = arena.get(current)?;
        if node.kind == SyntaxKind::SourceFile {
            return Some(current);
        }
        current = node.parent;
    }
}

/// Text of an identifier, or `""` for anything else.
#[must_use]
pub fn id_text(arena: &NodeArena, node_idx: NodeIndex) -> &str {
    arena.get_identifier_text(node_idx).unwrap_or("")
}
