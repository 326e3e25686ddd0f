//! Tree module - adapter capability and arena storage
//!
//! The query engine never owns a tree; it works through [`TreeAccess`],
//! the capability any tree representation can provide. [`ArenaTree`] is
//! the bundled implementation:
//! - Arena allocation for nodes, NodeId (u32) indices
//! - String interning for names and text
//! - Programmatic construction through [`TreeBuilder`]

pub mod arena;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod node;
pub mod strings;

pub use arena::{ArenaTree, ChildIter, TreeBuilder};
pub use node::{NodeId, NodeKind, TreeNode};
pub use strings::StringPool;

use crate::error::TreeError;

/// Capability required of any tree the query engine operates over
///
/// Implementations must return children in document order and must not
/// mutate the tree while a traversal borrows it. Node category is
/// reported explicitly through [`NodeKind`]; the engine never infers it
/// from name formatting.
pub trait TreeAccess {
    /// Category of a node
    fn node_kind(&self, id: NodeId) -> Result<NodeKind, TreeError>;

    /// Name of an element or processing instruction; empty for other kinds
    fn node_name(&self, id: NodeId) -> Result<&str, TreeError>;

    /// Content of a text or CDATA node; `None` for other kinds. Consumed
    /// by collaborators mapping nodes to values, not by the engine.
    fn text_content(&self, id: NodeId) -> Result<Option<&str>, TreeError>;

    /// Children of a node in document order
    fn children_vec(&self, id: NodeId) -> Result<Vec<NodeId>, TreeError>;

    /// Whether `id` refers to a node of this tree
    fn contains(&self, id: NodeId) -> bool {
        self.node_kind(id).is_ok()
    }
}

/// Concatenated text of a node: its own content for text and CDATA
/// nodes, otherwise every descendant text and CDATA node in order.
pub fn string_value<T: TreeAccess>(tree: &T, id: NodeId) -> Result<String, TreeError> {
    if let Some(text) = tree.text_content(id)? {
        return Ok(text.to_string());
    }
    let mut out = String::new();
    collect_text(tree, id, &mut out)?;
    Ok(out)
}

/// Recursively collect text content from descendants
fn collect_text<T: TreeAccess>(tree: &T, id: NodeId, out: &mut String) -> Result<(), TreeError> {
    for child in tree.children_vec(id)? {
        match tree.node_kind(child)? {
            NodeKind::Text | NodeKind::CData => {
                if let Some(text) = tree.text_content(child)? {
                    out.push_str(text);
                }
            }
            NodeKind::Element => collect_text(tree, child, out)?,
            _ => {}
        }
    }
    Ok(())
}
