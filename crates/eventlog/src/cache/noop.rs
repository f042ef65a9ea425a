use async_trait::async_trait;

use eventlog_core::cache::{EventCache, EventSet};

/// A cache that stores nothing.
///
/// Useful to force every read through to the row source.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventCache;

#[async_trait]
impl EventCache for NoopEventCache {
    async fn get(&self) -> Option<EventSet> {
        None
    }

    async fn put(&self, _events: EventSet) {}

    async fn invalidate(&self) {}
}
