//! Arena-based in-memory tree
//!
//! Efficient tree storage with:
//! - Arena allocation for nodes
//! - NodeId indices for traversal
//! - String interning for names and text
//!
//! Trees are built programmatically through [`TreeBuilder`]; turning raw
//! markup into a tree is the concern of whichever DOM provider feeds one
//! in, not of this crate.

use super::node::{NodeId, NodeKind, TreeNode};
use super::strings::StringPool;
use super::TreeAccess;
use crate::error::TreeError;

/// A tree stored in arena format
///
/// Node 0 is always the document root. Read-only once built.
pub struct ArenaTree {
    /// Arena of nodes
    nodes: Vec<TreeNode>,
    /// Interned strings
    strings: StringPool,
    /// Root element node id (not the document node)
    root_element: Option<NodeId>,
}

impl ArenaTree {
    /// Start building a tree
    pub fn builder() -> TreeBuilder {
        TreeBuilder::new()
    }

    /// Id of the document node
    pub fn document_id(&self) -> NodeId {
        0
    }

    /// Id of the root element, if any element was added at the top level
    pub fn root_element_id(&self) -> Option<NodeId> {
        self.root_element
    }

    /// Name of the root element
    pub fn root_name(&self) -> Option<&str> {
        let id = self.root_element?;
        let node = self.nodes.get(id as usize)?;
        self.strings.get(node.name_id)
    }

    /// Get a node by id
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id as usize)
    }

    /// Total number of nodes, document node included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over the children of a node in document order
    pub fn children(&self, id: NodeId) -> ChildIter<'_> {
        let first = self.get(id).and_then(|n| n.first_child);
        ChildIter { tree: self, next: first }
    }

    fn node(&self, id: NodeId) -> Result<&TreeNode, TreeError> {
        self.nodes
            .get(id as usize)
            .ok_or(TreeError::NodeNotFound(id))
    }
}

impl TreeAccess for ArenaTree {
    fn node_kind(&self, id: NodeId) -> Result<NodeKind, TreeError> {
        Ok(self.node(id)?.kind)
    }

    fn node_name(&self, id: NodeId) -> Result<&str, TreeError> {
        let node = self.node(id)?;
        match node.kind {
            NodeKind::Element | NodeKind::ProcessingInstruction => {
                Ok(self.strings.get(node.name_id).unwrap_or(""))
            }
            _ => Ok(""),
        }
    }

    fn text_content(&self, id: NodeId) -> Result<Option<&str>, TreeError> {
        let node = self.node(id)?;
        match node.kind {
            NodeKind::Text | NodeKind::CData => Ok(self.strings.get(node.name_id)),
            _ => Ok(None),
        }
    }

    fn children_vec(&self, id: NodeId) -> Result<Vec<NodeId>, TreeError> {
        self.node(id)?;
        Ok(self.children(id).collect())
    }
}

/// Iterator over child nodes
pub struct ChildIter<'a> {
    tree: &'a ArenaTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.get(current).and_then(|n| n.next_sibling);
        Some(current)
    }
}

/// Programmatic tree construction
///
/// Elements nest through `open`/`close`; `text`, `cdata`, `comment` and
/// `processing_instruction` add leaf nodes under the innermost open
/// element. Closing more elements than were opened is a no-op.
pub struct TreeBuilder {
    nodes: Vec<TreeNode>,
    strings: StringPool,
    /// Ancestors of the insertion point, innermost last
    open: Vec<NodeId>,
    root_element: Option<NodeId>,
}

impl TreeBuilder {
    /// Create a builder holding an empty document
    pub fn new() -> Self {
        TreeBuilder {
            nodes: vec![TreeNode::document()],
            strings: StringPool::new(),
            open: Vec::new(),
            root_element: None,
        }
    }

    /// Open an element; subsequent nodes become its children until `close`
    pub fn open(&mut self, name: &str) -> &mut Self {
        let name_id = self.strings.intern(name);
        let id = self.append(NodeKind::Element, name_id);
        if self.open.is_empty() && self.root_element.is_none() {
            self.root_element = Some(id);
        }
        self.open.push(id);
        self
    }

    /// Close the innermost open element
    pub fn close(&mut self) -> &mut Self {
        self.open.pop();
        self
    }

    /// Add an element containing a single text child
    pub fn element(&mut self, name: &str, text: &str) -> &mut Self {
        self.open(name);
        self.text(text);
        self.close()
    }

    /// Add a text node
    pub fn text(&mut self, content: &str) -> &mut Self {
        let content_id = self.strings.intern(content);
        self.append(NodeKind::Text, content_id);
        self
    }

    /// Add a CDATA section
    pub fn cdata(&mut self, content: &str) -> &mut Self {
        let content_id = self.strings.intern(content);
        self.append(NodeKind::CData, content_id);
        self
    }

    /// Add a comment node
    pub fn comment(&mut self, content: &str) -> &mut Self {
        let content_id = self.strings.intern(content);
        self.append(NodeKind::Comment, content_id);
        self
    }

    /// Add a processing instruction node
    pub fn processing_instruction(&mut self, target: &str) -> &mut Self {
        let name_id = self.strings.intern(target);
        self.append(NodeKind::ProcessingInstruction, name_id);
        self
    }

    /// Finish building; open elements are implicitly closed
    pub fn finish(self) -> ArenaTree {
        ArenaTree {
            nodes: self.nodes,
            strings: self.strings,
            root_element: self.root_element,
        }
    }

    /// Append a node under the innermost open element, maintaining
    /// sibling and child links
    fn append(&mut self, kind: NodeKind, name_id: u32) -> NodeId {
        let parent = self.open.last().copied().unwrap_or(0);
        let id = self.nodes.len() as NodeId;
        let depth = self.nodes[parent as usize].depth + 1;

        let mut node = TreeNode::new(kind, name_id, Some(parent), depth);
        node.prev_sibling = self.nodes[parent as usize].last_child;
        self.nodes.push(node);

        match self.nodes[parent as usize].last_child {
            Some(prev) => self.nodes[prev as usize].next_sibling = Some(id),
            None => self.nodes[parent as usize].first_child = Some(id),
        }
        self.nodes[parent as usize].last_child = Some(id);

        id
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
