//! treepath - Lazy path queries over already-parsed trees
//!
//! Given a root node and an ordered sequence of name segments (literal
//! element names or the `*` wildcard), the engine produces every
//! descendant reachable by matching each segment against one level of
//! children, recursively, left to right, as a lazy consumer-pulled
//! sequence in depth-first document order.
//!
//! The engine is generic over [`TreeAccess`], so any tree representation
//! can be queried; [`ArenaTree`] is the bundled arena-backed one. The
//! engine only reads the tree and never mutates it.
//!
//! ```
//! use treepath::{ArenaTree, Path, query};
//!
//! let mut b = ArenaTree::builder();
//! b.open("note");
//! b.element("to", "Tove");
//! b.element("from", "Jani");
//! b.close();
//! let tree = b.finish();
//!
//! let path = Path::parse("note/*")?;
//! let fields = query(&tree, tree.document_id(), &path)?
//!     .collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(fields.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
pub mod path;
pub mod tree;

pub use error::{PathError, QueryError, Result, TreeError};
pub use path::{compile, evaluate, query, Matches, Path, Segment, WILDCARD};
pub use tree::{string_value, ArenaTree, NodeId, NodeKind, TreeAccess, TreeBuilder};
