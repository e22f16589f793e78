//! Node model and child traversal.

pub mod base;
pub mod capabilities;
pub mod flags;
pub mod node;
mod node_access;
mod node_arena;
pub mod visitor;

pub use base::{
    NodeIndex, NodeList, TextRange, set_text_range, set_text_range_pos_end,
    set_text_range_pos_width,
};
pub use capabilities::*;
pub use flags::{ModifierFlags, NodeFlags};
pub use node::*;
pub use visitor::{
    Child, for_each_child, for_each_child_optimized, for_each_child_with_lists, walk_children,
};
