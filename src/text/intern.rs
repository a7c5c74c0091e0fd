//! Canonicalization pool for immutable text
//!
//! Interning maps equal content to one shared `Arc<str>` instance, so
//! identity comparison ([`same_instance`]) can stand in for content
//! comparison on pooled text.
//!
//! Host runtimes that intern string literals do it implicitly at compile
//! time. That behavior is not portable, so this module models it as an
//! explicit registry: [`literal`] routes compile-time constants through the
//! pool (two equal literals therefore share one instance), while text built
//! at runtime stays un-pooled until it is passed to [`intern`].

use std::sync::Arc;

use hashbrown::HashSet;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// A content-keyed registry of shared string instances.
///
/// Interning the same content twice returns clones of one `Arc<str>`, so
/// `Arc::ptr_eq` holds between them. Entries live as long as the pool.
#[derive(Debug, Default)]
pub struct CanonicalPool {
    entries: RwLock<HashSet<Arc<str>>>,
}

impl CanonicalPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashSet::new()),
        }
    }

    /// Get the canonical instance for `text`, inserting it if absent.
    pub fn intern(
        &self,
        text: &str,
    ) -> Arc<str> {
        if let Some(existing) = self.entries.read().get(text) {
            return existing.clone();
        }

        let mut entries = self.entries.write();
        // Racing interners may have inserted between the read and the write
        // lock; re-check under the write lock.
        if let Some(existing) = entries.get(text) {
            return existing.clone();
        }
        let canonical: Arc<str> = Arc::from(text);
        entries.insert(canonical.clone());
        canonical
    }

    /// Look up the canonical instance for `text` without inserting.
    pub fn interned(
        &self,
        text: &str,
    ) -> Option<Arc<str>> {
        self.entries.read().get(text).cloned()
    }

    /// Whether `text` has a canonical instance in this pool.
    pub fn contains(
        &self,
        text: &str,
    ) -> bool {
        self.entries.read().contains(text)
    }

    /// Number of distinct pooled strings.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Process-global pool backing [`intern`] and [`literal`].
static GLOBAL_POOL: Lazy<CanonicalPool> = Lazy::new(CanonicalPool::new);

/// Force `text` into the global canonical pool.
///
/// After interning, the returned instance is identity-equal to every other
/// pooled instance with the same content, including [`literal`] results.
pub fn intern(text: &str) -> Arc<str> {
    GLOBAL_POOL.intern(text)
}

/// Canonical instance for a compile-time string constant.
///
/// Models literal interning: every literal goes through the pool, so two
/// literals with equal content resolve to one shared instance. Runtime-built
/// text does NOT pass through here and shares nothing until explicitly
/// interned.
pub fn literal(text: &'static str) -> Arc<str> {
    GLOBAL_POOL.intern(text)
}

/// Identity comparison: do `a` and `b` point at the same allocation?
///
/// This is pointer identity, not content equality. Two equal strings built
/// independently compare `false` here.
#[inline]
pub fn same_instance(
    a: &Arc<str>,
    b: &Arc<str>,
) -> bool {
    Arc::ptr_eq(a, b)
}
