//! NodeArena access methods.

use super::base::NodeIndex;
use super::node::*;
use tsv_scanner::SyntaxKind;

impl NodeArena {
    /// Get a node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get a mutable node by index
    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    /// Kind of the node at `index`, or `Unknown` if absent.
    #[inline]
    pub fn kind(&self, index: NodeIndex) -> SyntaxKind {
        self.get(index).map_or(SyntaxKind::Unknown, |node| node.kind)
    }

    /// Parent of the node at `index`, or NONE.
    #[inline]
    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |node| node.parent)
    }

    /// Get identifier data for a node.
    /// Returns None if node is not an identifier.
    #[inline]
    pub fn get_identifier<'a>(&self, node: &'a Node) -> Option<&'a IdentifierData> {
        match &node.data {
            NodeData::Identifier(data) => Some(data),
            _ => None,
        }
    }

    /// Get literal data for a node.
    #[inline]
    pub fn get_literal<'a>(&self, node: &'a Node) -> Option<&'a LiteralData> {
        match &node.data {
            NodeData::Literal(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    pub fn get_source_file<'a>(&self, node: &'a Node) -> Option<&'a SourceFileData> {
        match &node.data {
            NodeData::SourceFile(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    pub fn get_source_file_mut(&mut self, index: NodeIndex) -> Option<&mut SourceFileData> {
        match &mut self.get_mut(index)?.data {
            NodeData::SourceFile(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    pub fn get_wrapped_expr<'a>(&self, node: &'a Node) -> Option<&'a WrappedExprData> {
        match &node.data {
            NodeData::Wrapped(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    pub fn get_meta_property<'a>(&self, node: &'a Node) -> Option<&'a MetaPropertyData> {
        match &node.data {
            NodeData::MetaProperty(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    pub fn get_import_equals<'a>(&self, node: &'a Node) -> Option<&'a ImportEqualsData> {
        match &node.data {
            NodeData::ImportEquals(data) => Some(data),
            _ => None,
        }
    }

    /// Text of an identifier or private identifier at `index`.
    pub fn get_identifier_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        self.get_identifier(node)
            .map(|data| data.escaped_text.as_str())
    }

    /// The name child of a named declaration, or NONE.
    #[inline]
    pub fn get_name(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |node| node.data.name())
    }
}
