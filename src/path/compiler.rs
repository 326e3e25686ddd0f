//! Path expression compiler
//!
//! Parses expressions into [`Path`]s behind a process-wide LRU cache, so
//! hot expressions are split and validated once. Query results are never
//! cached: a cached `Path` evaluates exactly like a freshly parsed one.

use std::num::NonZeroUsize;
use std::sync::{Mutex, OnceLock};

use lru::LruCache;

use super::expr::Path;
use crate::error::PathError;

/// Capacity of the compiled-expression cache
const CACHE_CAPACITY: usize = 128;

fn cache() -> &'static Mutex<LruCache<String, Path>> {
    static CACHE: OnceLock<Mutex<LruCache<String, Path>>> = OnceLock::new();
    CACHE.get_or_init(|| {
        let capacity = NonZeroUsize::new(CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Mutex::new(LruCache::new(capacity))
    })
}

/// Compile a path expression, consulting the cache first
///
/// Failures are not cached; every call with an invalid expression
/// re-reports the same `PathError`.
pub fn compile(expr: &str) -> Result<Path, PathError> {
    let mut cache = match cache().lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if let Some(path) = cache.get(expr) {
        tracing::trace!("path cache hit: {expr}");
        return Ok(path.clone());
    }
    let path = Path::parse(expr)?;
    tracing::trace!("path cache miss: {expr}");
    cache.put(expr.to_string(), path.clone());
    Ok(path)
}
