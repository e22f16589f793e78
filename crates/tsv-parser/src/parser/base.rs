//! Base types for the node arena: indices, lists and text ranges.

/// Index of a node in a [`NodeArena`](super::NodeArena).
///
/// `NodeIndex::NONE` marks an absent child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != u32::MAX
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        NodeIndex::NONE
    }
}

/// An ordered sequence of child nodes (statements, parameters, members...).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
}

impl NodeList {
    pub const fn new() -> NodeList {
        NodeList { nodes: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes.iter().copied()
    }
}

impl From<Vec<NodeIndex>> for NodeList {
    fn from(nodes: Vec<NodeIndex>) -> Self {
        NodeList { nodes }
    }
}

impl FromIterator<NodeIndex> for NodeList {
    fn from_iter<I: IntoIterator<Item = NodeIndex>>(iter: I) -> Self {
        NodeList {
            nodes: iter.into_iter().collect(),
        }
    }
}

/// Something with a (possibly unset) start and end offset into source text.
pub trait TextRange {
    fn pos(&self) -> Option<u32>;
    fn end(&self) -> Option<u32>;
    fn set_pos(&mut self, pos: Option<u32>);
    fn set_end(&mut self, end: Option<u32>);
}

pub fn set_text_range_pos_end<R: TextRange + ?Sized>(range: &mut R, pos: u32, end: u32) -> &mut R {
    range.set_pos(Some(pos));
    range.set_end(Some(end));
    range
}

pub fn set_text_range_pos_width<R: TextRange + ?Sized>(
    range: &mut R,
    pos: u32,
    width: u32,
) -> &mut R {
    set_text_range_pos_end(range, pos, pos.saturating_add(width))
}

/// Copy the span of `location` onto `range`. An unset end falls back to the
/// start, and an unset start to 0. `None` leaves `range` untouched.
pub fn set_text_range<'a, R, L>(range: &'a mut R, location: Option<&L>) -> &'a mut R
where
    R: TextRange + ?Sized,
    L: TextRange + ?Sized,
{
    match location {
        Some(loc) => {
            let pos = loc.pos().unwrap_or(0);
            let end = loc.end().or(loc.pos()).unwrap_or(0);
            set_text_range_pos_end(range, pos, end)
        }
        None => range,
    }
}
