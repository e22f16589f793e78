//! Parse-error aggregation.
//!
//! The parser marks the node where it reported a syntax error with
//! `THIS_NODE_HAS_ERROR`. Aggregation propagates that fact upward into
//! `THIS_NODE_OR_ANY_SUB_NODES_HAS_ERROR`, memoized per node by
//! `HAS_AGGREGATED_CHILD_DATA`.

use crate::parser::{NodeArena, NodeFlags, NodeIndex, for_each_child};
use tracing::trace;

/// Compute the aggregated error flag of `node_idx` once.
///
/// Later calls see `HAS_AGGREGATED_CHILD_DATA` and return immediately.
/// Children are aggregated lazily and the walk stops at the first child
/// that contains an error, so siblings after it may stay unaggregated.
pub fn aggregate_child_data(arena: &NodeArena, node_idx: NodeIndex) {
    let Some(node) = arena.get(node_idx) else {
        return;
    };
    if node.has_flags(NodeFlags::HAS_AGGREGATED_CHILD_DATA) {
        return;
    }

    let has_error = node.has_flags(NodeFlags::THIS_NODE_HAS_ERROR)
        || for_each_child(arena, node_idx, |child| contains_parse_error(arena, child)).is_some();

    if has_error {
        trace!(node = node_idx.0, kind = ?node.kind, "subtree contains a parse error");
        node.add_flags(NodeFlags::THIS_NODE_OR_ANY_SUB_NODES_HAS_ERROR);
    }
    node.add_flags(NodeFlags::HAS_AGGREGATED_CHILD_DATA);
}

/// Return `node_idx` if it or any node below it has a parse error.
///
/// Suitable as a `for_each_child` callback: the first erroring child ends
/// the walk.
#[must_use]
pub fn contains_parse_error(arena: &NodeArena, node_idx: NodeIndex) -> Option<NodeIndex> {
    aggregate_child_data(arena, node_idx);
    if arena
        .flags(node_idx)
        .contains(NodeFlags::THIS_NODE_OR_ANY_SUB_NODES_HAS_ERROR)
    {
        Some(node_idx)
    } else {
        None
    }
}

/// Follow the first erroring child down from `node_idx` and return the
/// deepest node on that path (the node the parser flagged).
#[must_use]
pub fn find_first_parse_error(arena: &NodeArena, node_idx: NodeIndex) -> Option<NodeIndex> {
    let mut current = contains_parse_error(arena, node_idx)?;
    while let Some(child) = for_each_child(arena, current, |child| contains_parse_error(arena, child))
    {
        current = child;
    }
    Some(current)
}
