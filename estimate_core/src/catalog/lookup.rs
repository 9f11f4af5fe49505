//! # Lookup Service
//!
//! The single entry point generators use to resolve a product code. Wraps
//! the backing [`CatalogStore`] with the injected [`ReferenceCache`] and
//! guarantees that a lookup never fails: a missing code, or a failing
//! store, degrades to the zero-weight placeholder product.

use std::sync::Arc;

use super::{Catalog, CatalogStore, ReferenceCache, ReferenceProduct};

/// Catalog lookup with memoization and NotFound fallback.
#[derive(Clone)]
pub struct LookupService {
    store: Arc<dyn CatalogStore>,
    cache: Arc<ReferenceCache>,
}

impl LookupService {
    pub fn new(store: Arc<dyn CatalogStore>, cache: Arc<ReferenceCache>) -> Self {
        LookupService { store, cache }
    }

    /// Resolve a code to its catalog entry.
    ///
    /// Never errors. The resolution order is cache → store → placeholder;
    /// both found products and placeholders are memoized for the cache TTL,
    /// so the store sees at most one query per distinct `(catalog, code)`
    /// within the window. Store failures are logged and treated as misses
    /// (no retries; the caller treats placeholders as a data-quality
    /// signal, not an abort).
    pub fn get_by_code(&self, catalog: Catalog, code: &str) -> ReferenceProduct {
        if let Some(hit) = self.cache.get(catalog, code) {
            return hit;
        }

        let product = match self.store.fetch(catalog, code) {
            Ok(Some(product)) => product,
            Ok(None) => {
                tracing::debug!(catalog = ?catalog, code, "catalog miss, using placeholder");
                ReferenceProduct::placeholder(catalog, code)
            }
            Err(err) => {
                tracing::warn!(
                    catalog = ?catalog,
                    code,
                    error = %err,
                    "catalog store failed, degrading to placeholder"
                );
                ReferenceProduct::placeholder(catalog, code)
            }
        };

        self.cache.put(catalog, code, product.clone());
        product
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_reference_store;
    use crate::errors::{EstimateError, EstimateResult};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn service() -> LookupService {
        LookupService::new(
            Arc::new(builtin_reference_store()),
            Arc::new(ReferenceCache::with_default_ttl()),
        )
    }

    #[test]
    fn test_known_code_resolves() {
        let lookup = service();
        let panel = lookup.get_by_code(Catalog::General, "MS45-250");
        assert_eq!(panel.weight_per_unit, 4.5);
        assert_eq!(panel.sales_code, "PA");
    }

    #[test]
    fn test_unknown_code_never_fails() {
        let lookup = service();
        let p = lookup.get_by_code(Catalog::RawMaterial, "FUTURE-CODE");
        assert_eq!(p.description, "FUTURE-CODE");
        assert_eq!(p.weight_per_unit, 0.0);
        assert_eq!(p.rate, 0.0);
    }

    /// Store wrapper that counts fetches, to prove memoization.
    struct CountingStore {
        inner: crate::catalog::InMemoryStore,
        fetches: AtomicUsize,
    }

    impl CatalogStore for CountingStore {
        fn fetch(&self, catalog: Catalog, code: &str) -> EstimateResult<Option<ReferenceProduct>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch(catalog, code)
        }
    }

    #[test]
    fn test_store_queried_once_per_code() {
        let store = Arc::new(CountingStore {
            inner: builtin_reference_store(),
            fetches: AtomicUsize::new(0),
        });
        let lookup = LookupService::new(
            store.clone(),
            Arc::new(ReferenceCache::with_default_ttl()),
        );

        for _ in 0..50 {
            lookup.get_by_code(Catalog::General, "SCR-CS-25");
            lookup.get_by_code(Catalog::General, "UNKNOWN-1");
        }

        // One fetch per distinct code, misses included
        assert_eq!(store.fetches.load(Ordering::SeqCst), 2);
    }

    /// Store that always fails, to prove degradation.
    struct FailingStore;

    impl CatalogStore for FailingStore {
        fn fetch(&self, _: Catalog, _: &str) -> EstimateResult<Option<ReferenceProduct>> {
            Err(EstimateError::Internal {
                message: "backing store unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_store_failure_degrades_to_placeholder() {
        let lookup = LookupService::new(
            Arc::new(FailingStore),
            Arc::new(ReferenceCache::with_default_ttl()),
        );
        let p = lookup.get_by_code(Catalog::Structural, "Z-200");
        assert_eq!(p.description, "Z-200");
        assert_eq!(p.rate, 0.0);
    }
}
