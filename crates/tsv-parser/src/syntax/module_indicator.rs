//! External module detection.
//!
//! A file is an ES module if a top-level statement imports or exports
//! something, or, failing that, if it uses `import.meta` anywhere.

use super::modifiers::{can_have_modifiers, has_modifier_of_kind};
use crate::parser::{
    ExternalModuleIndicator, NodeArena, NodeData, NodeFlags, NodeIndex, for_each_child,
};
use tracing::debug;
use tsv_scanner::SyntaxKind;

/// Check whether a top-level statement by itself makes the file a module.
#[must_use]
pub fn is_an_external_module_indicator_node(arena: &NodeArena, node_idx: NodeIndex) -> bool {
    let Some(node) = arena.get(node_idx) else {
        return false;
    };
    match node.kind {
        SyntaxKind::ImportDeclaration
        | SyntaxKind::ExportAssignment
        | SyntaxKind::ExportDeclaration => true,
        SyntaxKind::ImportEqualsDeclaration => arena
            .get_import_equals(node)
            .is_some_and(|decl| {
                arena.kind(decl.module_reference) == SyntaxKind::ExternalModuleReference
            }),
        kind => {
            can_have_modifiers(kind)
                && has_modifier_of_kind(arena, node_idx, SyntaxKind::ExportKeyword)
        }
    }
}

/// `import.meta`
#[must_use]
pub fn is_import_meta(arena: &NodeArena, node_idx: NodeIndex) -> bool {
    let Some(node) = arena.get(node_idx) else {
        return false;
    };
    let Some(meta) = arena.get_meta_property(node) else {
        return false;
    };
    meta.keyword_token == SyntaxKind::ImportKeyword
        && arena.get_identifier_text(meta.name) == Some("meta")
}

fn walk_tree_for_import_meta(arena: &NodeArena, node_idx: NodeIndex) -> Option<NodeIndex> {
    if is_import_meta(arena, node_idx) {
        Some(node_idx)
    } else {
        for_each_child(arena, node_idx, |child| walk_tree_for_import_meta(arena, child))
    }
}

/// Search the whole file for `import.meta`, but only when the parser saw
/// one might be there (`POSSIBLY_CONTAINS_IMPORT_META`).
#[must_use]
pub fn get_import_meta_if_necessary(arena: &NodeArena, source_file: NodeIndex) -> Option<NodeIndex> {
    if arena
        .flags(source_file)
        .contains(NodeFlags::POSSIBLY_CONTAINS_IMPORT_META)
    {
        walk_tree_for_import_meta(arena, source_file)
    } else {
        None
    }
}

/// Find the node proving that `source_file` is a module: the first top-level
/// import/export, else an `import.meta` anywhere in the file.
#[must_use]
pub fn is_file_probably_external_module(
    arena: &NodeArena,
    source_file: NodeIndex,
) -> Option<ExternalModuleIndicator> {
    let node = arena.get(source_file)?;
    let data = arena.get_source_file(node)?;

    data.statements
        .iter()
        .find(|&statement| is_an_external_module_indicator_node(arena, statement))
        .map(ExternalModuleIndicator::Statement)
        .or_else(|| {
            get_import_meta_if_necessary(arena, source_file).map(ExternalModuleIndicator::ImportMeta)
        })
}

/// Compute and store the external module indicator of a completed file.
#[tracing::instrument(level = "debug", skip(arena))]
pub fn set_external_module_indicator(arena: &mut NodeArena, source_file: NodeIndex) {
    let indicator = is_file_probably_external_module(arena, source_file);
    debug!(?indicator, "external module indicator");
    if let Some(data) = arena.get_source_file_mut(source_file) {
        data.external_module_indicator = indicator;
    }
}

#[must_use]
pub fn is_external_module(arena: &NodeArena, source_file: NodeIndex) -> bool {
    arena
        .get(source_file)
        .and_then(|node| match &node.data {
            NodeData::SourceFile(data) => data.external_module_indicator,
            _ => None,
        })
        .is_some()
}
