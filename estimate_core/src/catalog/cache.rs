//! # Reference Cache
//!
//! TTL-bounded memo cache for catalog lookups. One calculation can resolve
//! the same panel or fastener code hundreds of times across generators;
//! within the TTL window the backing store is queried at most once per
//! distinct `(catalog, code)` pair.
//!
//! The cache is an injected value owned by the caller's process lifecycle,
//! not a singleton. It is the only mutable state the engine touches and is
//! safe to share between concurrent calculations; two threads racing on a
//! cold key may both hit the store once, which is acceptable.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use super::{Catalog, ReferenceProduct};

/// Default time-to-live for cached lookups: 24 hours
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone)]
struct CacheSlot {
    product: ReferenceProduct,
    cached_at: Instant,
}

/// Memoizing cache keyed by `(catalog, uppercase code)`.
///
/// Placeholder results for unknown codes are cached too; a draft code
/// that misses the store should not re-query it on every line item.
#[derive(Debug, Default)]
pub struct ReferenceCache {
    ttl: Option<Duration>,
    slots: Mutex<HashMap<(Catalog, String), CacheSlot>>,
}

impl ReferenceCache {
    /// Cache with the standard 24 h TTL.
    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_TTL)
    }

    /// Cache with a caller-chosen TTL.
    pub fn new(ttl: Duration) -> Self {
        ReferenceCache {
            ttl: Some(ttl),
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Get a cached product, evicting it first if its TTL has elapsed.
    pub fn get(&self, catalog: Catalog, code: &str) -> Option<ReferenceProduct> {
        let key = (catalog, code.to_uppercase());
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());

        match slots.get(&key) {
            Some(slot) => {
                if let Some(ttl) = self.ttl {
                    if slot.cached_at.elapsed() >= ttl {
                        slots.remove(&key);
                        return None;
                    }
                }
                Some(slot.product.clone())
            }
            None => None,
        }
    }

    /// Store a lookup result.
    pub fn put(&self, catalog: Catalog, code: &str, product: ReferenceProduct) {
        let key = (catalog, code.to_uppercase());
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.insert(
            key,
            CacheSlot {
                product,
                cached_at: Instant::now(),
            },
        );
    }

    /// Number of live entries (expired slots are counted until touched).
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry, forcing the next lookups back to the store.
    pub fn clear(&self) {
        self.slots
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}
