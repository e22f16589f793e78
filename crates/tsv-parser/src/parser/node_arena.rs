//! NodeArena creation methods (add_* methods).
//!
//! Trees are built bottom-up: every child must already be in the arena when
//! its parent is added. Adding a node points each of its children's `parent`
//! back at it.

use super::base::NodeIndex;
use super::flags::NodeFlags;
use super::node::*;
use super::visitor::for_each_child_of_node;
use tsv_scanner::SyntaxKind;

impl NodeArena {
    /// Maximum pre-allocation to avoid capacity overflow in huge files.
    const MAX_NODE_PREALLOC: usize = 5_000_000;

    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity.min(Self::MAX_NODE_PREALLOC)),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// All node indices, in creation order (children before parents).
    pub fn indices(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.nodes.len() as u32).map(NodeIndex)
    }

    // ============================================================================
    // Parent Mapping Helpers
    // ============================================================================

    /// Set the parent for a single child node.
    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
        }
    }

    // ============================================================================
    // Node Creation Methods
    // ============================================================================

    /// Append a node and link its children back to it.
    pub fn add_node(
        &mut self,
        kind: SyntaxKind,
        pos: Option<u32>,
        end: Option<u32>,
        data: NodeData,
    ) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        let node = Node::new(kind, pos, end, data);

        let mut children = Vec::new();
        for_each_child_of_node(&node, &mut |child| children.push(child));
        for child in children {
            self.set_parent(child, index);
        }

        self.nodes.push(node);
        index
    }

    /// Add a positioned node and set its initial flags.
    pub fn add_node_with_flags(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        flags: NodeFlags,
        data: NodeData,
    ) -> NodeIndex {
        let index = self.add_node(kind, Some(pos), Some(end), data);
        self.add_flags(index, flags);
        index
    }

    /// Add a token or keyword node (no children).
    pub fn add_token(&mut self, kind: SyntaxKind, pos: u32, end: u32) -> NodeIndex {
        self.add_node(kind, Some(pos), Some(end), NodeData::Token)
    }

    pub fn add_identifier(&mut self, text: &str, pos: u32, end: u32) -> NodeIndex {
        self.add_node(
            SyntaxKind::Identifier,
            Some(pos),
            Some(end),
            NodeData::Identifier(IdentifierData {
                escaped_text: text.to_string(),
                is_in_jsdoc_namespace: false,
            }),
        )
    }

    pub fn add_literal(&mut self, kind: SyntaxKind, text: &str, pos: u32, end: u32) -> NodeIndex {
        self.add_node(
            kind,
            Some(pos),
            Some(end),
            NodeData::Literal(LiteralData {
                text: text.to_string(),
            }),
        )
    }

    pub fn add_source_file(
        &mut self,
        file_name: &str,
        statements: Vec<NodeIndex>,
        end_of_file_token: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        self.add_node(
            SyntaxKind::SourceFile,
            Some(pos),
            Some(end),
            NodeData::SourceFile(SourceFileData {
                file_name: file_name.to_string(),
                statements: statements.into(),
                end_of_file_token,
                external_module_indicator: None,
            }),
        )
    }

    // ============================================================================
    // Flags
    // ============================================================================

    /// Flags of a node (empty for NONE or out-of-range indices).
    #[inline]
    pub fn flags(&self, index: NodeIndex) -> NodeFlags {
        self.get(index).map_or(NodeFlags::empty(), Node::flags)
    }

    /// OR `flags` into a node's flags through a shared borrow.
    #[inline]
    pub fn add_flags(&self, index: NodeIndex, flags: NodeFlags) {
        if let Some(node) = self.get(index) {
            node.add_flags(flags);
        }
    }

    #[inline]
    pub fn set_flags(&self, index: NodeIndex, flags: NodeFlags) {
        if let Some(node) = self.get(index) {
            node.flags.set(flags);
        }
    }
}
