//! Path evaluation engine
//!
//! Walks one level of children per segment, left to right, and emits
//! matching nodes as a lazy, consumer-pulled sequence. Traversal state is
//! an explicit stack of per-node frames rather than call-stack recursion,
//! so pulling advances in O(1) call depth and dropping the sequence
//! releases everything at once.

use super::compiler;
use super::expr::Path;
use crate::error::{QueryError, TreeError};
use crate::tree::{NodeId, TreeAccess};

/// One suspended position: the fetched child list of a node, a cursor
/// into it, and the index of the segment its children are matched against
struct Frame {
    children: Vec<NodeId>,
    cursor: usize,
    segment: usize,
}

/// Lazy sequence of nodes matching a path, in depth-first document order
/// with sibling order preserved
///
/// Yields `Err` at most once, at the position where the tree adapter
/// failed; the iterator is fused afterwards. Dropping it mid-sequence
/// performs no further adapter calls.
pub struct Matches<'t, 'p, T: TreeAccess> {
    tree: &'t T,
    path: &'p Path,
    /// Query root, pending until the first pull
    root: Option<NodeId>,
    stack: Vec<Frame>,
    done: bool,
}

/// Start a query at `root`
///
/// Fails fast if `root` does not belong to `tree`; all other work is
/// deferred until the returned sequence is pulled. The sequence is a
/// pure function of its inputs: re-invoking over an unmutated tree
/// yields a positionally identical sequence.
pub fn query<'t, 'p, T: TreeAccess>(
    tree: &'t T,
    root: NodeId,
    path: &'p Path,
) -> Result<Matches<'t, 'p, T>, TreeError> {
    if !tree.contains(root) {
        return Err(TreeError::NodeNotFound(root));
    }
    tracing::debug!("query: root={root} path={path}");
    Ok(Matches {
        tree,
        path,
        root: Some(root),
        stack: Vec::new(),
        done: false,
    })
}

/// Compile `expr` and collect every match from `root`, in order
///
/// Stops at the first adapter failure and returns it, so the error
/// position matches the lazy form.
pub fn evaluate<T: TreeAccess>(
    tree: &T,
    root: NodeId,
    expr: &str,
) -> Result<Vec<NodeId>, QueryError> {
    let path = compiler::compile(expr)?;
    let mut out = Vec::new();
    for id in query(tree, root, &path)? {
        out.push(id?);
    }
    Ok(out)
}

impl<'t, 'p, T: TreeAccess> Matches<'t, 'p, T> {
    /// Fetch `node`'s children and suspend at their start. Children are
    /// fetched only here, at the moment the traversal reaches the node.
    fn push_frame(&mut self, node: NodeId, segment: usize) -> Result<(), TreeError> {
        let children = self.tree.children_vec(node)?;
        self.stack.push(Frame {
            children,
            cursor: 0,
            segment,
        });
        Ok(())
    }

    fn advance(&mut self) -> Result<Option<NodeId>, TreeError> {
        if let Some(root) = self.root.take() {
            self.push_frame(root, 0)?;
        }
        loop {
            let Some(frame) = self.stack.last_mut() else {
                return Ok(None);
            };
            match frame.children.get(frame.cursor).copied() {
                Some(child) => {
                    frame.cursor += 1;
                    let segment = frame.segment;
                    // A wildcard matches any element, never any node:
                    // non-element children are excluded before the
                    // segment test.
                    if !self.tree.node_kind(child)?.is_element() {
                        continue;
                    }
                    if !self.path.segments()[segment].matches(self.tree.node_name(child)?) {
                        continue;
                    }
                    if segment + 1 == self.path.depth() {
                        return Ok(Some(child));
                    }
                    self.push_frame(child, segment + 1)?;
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<'t, 'p, T: TreeAccess> Iterator for Matches<'t, 'p, T> {
    type Item = Result<NodeId, TreeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.advance() {
            Ok(Some(id)) => Some(Ok(id)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                self.stack.clear();
                Some(Err(e))
            }
        }
    }
}
