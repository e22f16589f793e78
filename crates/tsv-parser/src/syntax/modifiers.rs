//! Modifier flag computation.

use crate::parser::{ModifierFlags, NodeArena, NodeData, NodeFlags, NodeIndex, NodeList};
use tsv_scanner::SyntaxKind;

/// Map a modifier keyword to its flag. Non-modifier kinds map to empty.
#[must_use]
pub const fn modifier_to_flag(kind: SyntaxKind) -> ModifierFlags {
    match kind {
        SyntaxKind::StaticKeyword => ModifierFlags::STATIC,
        SyntaxKind::PublicKeyword => ModifierFlags::PUBLIC,
        SyntaxKind::ProtectedKeyword => ModifierFlags::PROTECTED,
        SyntaxKind::PrivateKeyword => ModifierFlags::PRIVATE,
        SyntaxKind::AbstractKeyword => ModifierFlags::ABSTRACT,
        SyntaxKind::ExportKeyword => ModifierFlags::EXPORT,
        SyntaxKind::DeclareKeyword => ModifierFlags::AMBIENT,
        SyntaxKind::ConstKeyword => ModifierFlags::CONST,
        SyntaxKind::DefaultKeyword => ModifierFlags::DEFAULT,
        SyntaxKind::AsyncKeyword => ModifierFlags::ASYNC,
        SyntaxKind::ReadonlyKeyword => ModifierFlags::READONLY,
        _ => ModifierFlags::empty(),
    }
}

/// OR together the flags of a modifier sequence that may not be attached
/// to a node yet.
#[must_use]
pub fn modifiers_to_flags(arena: &NodeArena, modifiers: Option<&NodeList>) -> ModifierFlags {
    modifiers.map_or(ModifierFlags::empty(), |list| {
        list.iter()
            .fold(ModifierFlags::empty(), |flags, modifier| {
                flags | modifier_to_flag(arena.kind(modifier))
            })
    })
}

/// Syntactic modifier flags of a node.
///
/// Empty unless the node has a non-empty modifier list. Given one, members
/// of a nested namespace (`namespace a.b`) and identifiers on a JSDoc
/// namespace path also get `EXPORT`.
#[must_use]
pub fn get_modifier_flags(arena: &NodeArena, node_idx: NodeIndex) -> ModifierFlags {
    let Some(node) = arena.get(node_idx) else {
        return ModifierFlags::empty();
    };
    let Some(modifiers) = node.data.modifiers().filter(|list| !list.is_empty()) else {
        return ModifierFlags::empty();
    };

    let mut flags = modifiers_to_flags(arena, Some(modifiers));

    let in_jsdoc_namespace = matches!(
        &node.data,
        NodeData::Identifier(ident) if ident.is_in_jsdoc_namespace
    );
    if node.has_flags(NodeFlags::NESTED_NAMESPACE) || in_jsdoc_namespace {
        flags |= ModifierFlags::EXPORT;
    }
    flags
}

#[must_use]
pub fn has_modifier(arena: &NodeArena, node_idx: NodeIndex, flags: ModifierFlags) -> bool {
    get_modifier_flags(arena, node_idx).intersects(flags)
}

#[must_use]
pub fn has_modifiers(arena: &NodeArena, node_idx: NodeIndex) -> bool {
    !get_modifier_flags(arena, node_idx).is_empty()
}

/// Check whether the node's modifier list contains a token of `kind`.
#[must_use]
pub fn has_modifier_of_kind(arena: &NodeArena, node_idx: NodeIndex, kind: SyntaxKind) -> bool {
    arena
        .get(node_idx)
        .and_then(|node| node.data.modifiers())
        .is_some_and(|list| list.iter().any(|modifier| arena.kind(modifier) == kind))
}

/// Kinds whose grammar allows a modifier list.
#[must_use]
pub const fn can_have_modifiers(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::TypeParameter
            | SyntaxKind::Parameter
            | SyntaxKind::PropertySignature
            | SyntaxKind::PropertyDeclaration
            | SyntaxKind::MethodSignature
            | SyntaxKind::MethodDeclaration
            | SyntaxKind::Constructor
            | SyntaxKind::GetAccessor
            | SyntaxKind::SetAccessor
            | SyntaxKind::IndexSignature
            | SyntaxKind::ConstructorType
            | SyntaxKind::FunctionExpression
            | SyntaxKind::ArrowFunction
            | SyntaxKind::ClassExpression
            | SyntaxKind::VariableStatement
            | SyntaxKind::FunctionDeclaration
            | SyntaxKind::ClassDeclaration
            | SyntaxKind::InterfaceDeclaration
            | SyntaxKind::TypeAliasDeclaration
            | SyntaxKind::EnumDeclaration
            | SyntaxKind::ModuleDeclaration
            | SyntaxKind::ImportEqualsDeclaration
            | SyntaxKind::ImportDeclaration
            | SyntaxKind::ExportAssignment
            | SyntaxKind::ExportDeclaration
    )
}
