//! Parallel batch evaluation
//!
//! Evaluates many independent path expressions against one shared tree
//! using Rayon. Each query remains a single-threaded pull; parallelism is
//! across queries, which are independent over an unmutated tree.

use rayon::prelude::*;

use super::eval::evaluate;
use crate::error::QueryError;
use crate::tree::{NodeId, TreeAccess};

/// Evaluate multiple path expressions in parallel
pub fn evaluate_batch<T: TreeAccess + Sync>(
    tree: &T,
    root: NodeId,
    exprs: &[&str],
) -> Vec<Result<Vec<NodeId>, QueryError>> {
    exprs
        .par_iter()
        .map(|expr| evaluate(tree, root, expr))
        .collect()
}

/// Evaluate one expression and map the matched nodes in parallel
pub fn query_map<T, F, R>(
    tree: &T,
    root: NodeId,
    expr: &str,
    mapper: F,
) -> Result<Vec<R>, QueryError>
where
    T: TreeAccess + Sync,
    F: Fn(NodeId) -> R + Sync + Send,
    R: Send,
{
    let nodes = evaluate(tree, root, expr)?;
    Ok(nodes.par_iter().map(|&id| mapper(id)).collect())
}
