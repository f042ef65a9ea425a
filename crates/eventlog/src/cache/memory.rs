//! In-memory event cache with a freshness window.
//!
//! Holds a single snapshot behind a tokio `RwLock`. Expiry is lazy: a stale
//! snapshot is only dropped by the next read that notices it.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use eventlog_core::cache::{EventCache, EventSet};

/// The cached snapshot and when it was fetched.
#[derive(Debug, Clone)]
struct CacheEntry {
    events: EventSet,
    fetched_at: Instant,
}

impl CacheEntry {
    fn new(events: EventSet) -> Self {
        Self {
            events,
            fetched_at: Instant::now(),
        }
    }

    /// Returns true while the entry is younger than `ttl`.
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// Process-wide, single-entry event cache.
///
/// Cloning shares the same underlying entry.
#[derive(Debug, Clone)]
pub struct MemoryEventCache {
    entry: Arc<RwLock<Option<CacheEntry>>>,
    ttl: Duration,
}

impl MemoryEventCache {
    /// Creates an empty cache whose snapshots stay fresh for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entry: Arc::new(RwLock::new(None)),
            ttl,
        }
    }
}

#[async_trait]
impl EventCache for MemoryEventCache {
    async fn get(&self) -> Option<EventSet> {
        {
            let entry = self.entry.read().await;
            match entry.as_ref() {
                Some(cached) if cached.is_fresh(self.ttl) => return Some(cached.events.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Stale. Re-check under the write lock, a fresh put may have landed.
        let mut entry = self.entry.write().await;
        match entry.as_ref() {
            Some(cached) if cached.is_fresh(self.ttl) => Some(cached.events.clone()),
            Some(cached) => {
                tracing::debug!(
                    age = ?cached.fetched_at.elapsed(),
                    "Dropping expired event cache"
                );
                *entry = None;
                None
            }
            None => None,
        }
    }

    async fn put(&self, events: EventSet) {
        let count = events.len();
        *self.entry.write().await = Some(CacheEntry::new(events));
        tracing::trace!(count, "Event cache populated");
    }

    async fn invalidate(&self) {
        self.entry.write().await.take();
    }
}
