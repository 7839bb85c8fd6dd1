// ABOUTME: In-memory report cache with LRU eviction behind a mutex
// ABOUTME: A poisoned lock degrades to a cache miss instead of an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

use super::CacheKey;
use crate::services::report::ProductReport;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// In-memory cache of generated reports
///
/// `None` store means caching is disabled (capacity zero).
pub struct AnalysisCache {
    store: Option<Mutex<LruCache<CacheKey, Arc<ProductReport>>>>,
}

impl AnalysisCache {
    /// Create a cache holding at most `capacity` reports; zero disables it
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            store: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }

    /// Cache that never stores anything
    #[must_use]
    pub const fn disabled() -> Self {
        Self { store: None }
    }

    /// Whether caching is enabled
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Look up a report, refreshing its recency
    pub fn get(&self, key: &CacheKey) -> Option<Arc<ProductReport>> {
        let store = self.store.as_ref()?;
        let Ok(mut guard) = store.lock() else {
            warn!("Report cache lock poisoned, treating lookup as a miss");
            return None;
        };
        let hit = guard.get(key).cloned();
        drop(guard);
        debug!(key = %key, hit = hit.is_some(), "Report cache lookup");
        hit
    }

    /// Store a report, evicting the least recently used entry when full
    pub fn insert(&self, key: CacheKey, report: Arc<ProductReport>) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        match store.lock() {
            Ok(mut guard) => {
                guard.push(key, report);
            }
            Err(_) => warn!("Report cache lock poisoned, skipping insert"),
        }
    }

    /// Number of cached reports
    #[must_use]
    pub fn len(&self) -> usize {
        self.store
            .as_ref()
            .and_then(|store| store.lock().ok().map(|guard| guard.len()))
            .unwrap_or(0)
    }

    /// Whether the cache holds no reports
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every cached report
    pub fn clear(&self) {
        if let Some(Ok(mut guard)) = self.store.as_ref().map(Mutex::lock) {
            guard.clear();
        }
    }
}
