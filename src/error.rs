//! Error types for tree access and path queries
//!
//! Two distinct families, per the engine's contract:
//! - `PathError`: contract violations, rejected at construction before
//!   any traversal can begin
//! - `TreeError`: adapter failures, passed through the lazy sequence
//!   unchanged at the position they occur

use thiserror::Error;

use crate::tree::NodeId;

pub type Result<T> = std::result::Result<T, QueryError>;

/// Failures raised by a tree adapter while resolving nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("node detached from tree: {0}")]
    Detached(NodeId),
}

/// Contract violations detected while constructing a `Path`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("empty path")]
    Empty,

    #[error("empty segment at position {0}")]
    EmptySegment(usize),

    #[error("segment contains a path separator: {0:?}")]
    Separator(String),
}

/// Either error family, for entry points that compile and traverse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Tree(#[from] TreeError),
}
