//! Tree node representation
//!
//! Uses NodeId (u32) for compact, cache-friendly node references.

/// Compact node identifier (index into arena)
pub type NodeId = u32;

/// Category of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Document root
    Document,
    /// Element node
    Element,
    /// Text content
    Text,
    /// CDATA section
    CData,
    /// Comment
    Comment,
    /// Processing instruction
    ProcessingInstruction,
}

impl NodeKind {
    /// Check if this kind is an element
    #[inline]
    pub fn is_element(self) -> bool {
        self == NodeKind::Element
    }
}

/// A node in the arena
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Category of this node
    pub kind: NodeKind,
    /// Parent node (None for the document root)
    pub parent: Option<NodeId>,
    /// First child node
    pub first_child: Option<NodeId>,
    /// Last child node
    pub last_child: Option<NodeId>,
    /// Previous sibling
    pub prev_sibling: Option<NodeId>,
    /// Next sibling
    pub next_sibling: Option<NodeId>,
    /// String pool id for the name (elements, PIs) or the content
    /// (text, CDATA, comments)
    pub name_id: u32,
    /// Depth below the document root
    pub depth: u16,
}

impl TreeNode {
    /// Create the document root node
    pub fn document() -> Self {
        TreeNode::new(NodeKind::Document, 0, None, 0)
    }

    /// Create a node of the given kind
    pub fn new(kind: NodeKind, name_id: u32, parent: Option<NodeId>, depth: u16) -> Self {
        TreeNode {
            kind,
            parent,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            name_id,
            depth,
        }
    }

    /// Check if this is an element node
    #[inline]
    pub fn is_element(&self) -> bool {
        self.kind.is_element()
    }

    /// Check if this node has children
    #[inline]
    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }
}
