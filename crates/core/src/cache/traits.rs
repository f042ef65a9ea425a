use std::sync::Arc;

use async_trait::async_trait;

use crate::event::Event;

/// An immutable, shareable snapshot of normalized events.
pub type EventSet = Arc<[Event]>;

/// Single-entry store for the sorted event listing.
///
/// Implementations hold at most one snapshot. None of the operations can
/// fail, and a reader never observes a partially written entry.
#[async_trait]
pub trait EventCache: Send + Sync {
    /// Returns the cached snapshot if it is still fresh.
    ///
    /// An expired snapshot is dropped and `None` is returned.
    async fn get(&self) -> Option<EventSet>;

    /// Replaces the cached snapshot and restarts its freshness window.
    async fn put(&self, events: EventSet);

    /// Drops the cached snapshot, if any.
    async fn invalidate(&self);
}
