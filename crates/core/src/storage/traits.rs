use async_trait::async_trait;

use crate::cache::EventSet;
use crate::event::{Event, RawRow};

use super::Result;

/// A remote tabular store of raw event rows.
///
/// Positions are 0-based and count data rows only; each implementation maps
/// them to its own addressing. Implementations are expected to bound their
/// own request time.
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Fetches every data row in source order, header excluded.
    async fn fetch_all_rows(&self) -> Result<Vec<RawRow>>;

    /// Fetches the data row at `position`, or `None` if there is no such row.
    async fn fetch_row(&self, position: usize) -> Result<Option<RawRow>>;
}

/// Read access to the event log.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Gets every event, most recent participation first. May be served from cache.
    async fn get_all_events(&self) -> Result<EventSet>;

    /// Gets every event in raw source order, bypassing any cache.
    async fn get_raw_events(&self) -> Result<Vec<Event>>;

    /// Gets the event whose `original_index` is `index`.
    ///
    /// Returns `None` when the index is past the last row or the row is empty.
    async fn get_event_by_index(&self, index: usize) -> Result<Option<Event>>;

    /// Drops any cached listing so the next read goes to the source.
    async fn invalidate_cache(&self);
}
