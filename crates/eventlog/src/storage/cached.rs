//! Cached event repository.
//!
//! Fronts a [`RowSource`] with an [`EventCache`]:
//!
//! - **Listing**: check the cache first; on a miss fetch every row, normalize,
//!   sort by participation date and store the snapshot
//! - **Raw listing**: always fetch fresh, keep source order
//! - **Single event**: resolved according to the configured [`LookupStrategy`]
//!
//! Concurrent misses may each reach the source; the cache only guarantees
//! that whole snapshots are swapped in.

use std::sync::Arc;

use async_trait::async_trait;

use eventlog_core::cache::{EventCache, EventSet};
use eventlog_core::event::{normalize, normalize_rows, Event};
use eventlog_core::query::sort_by_date_descending;
use eventlog_core::storage::{EventRepository, LookupStrategy, Result, RowSource};

/// Event repository backed by a row source and a cache.
///
/// # Type Parameters
///
/// * `S` - The row source implementation
/// * `C` - The cache implementation
pub struct CachedEventRepository<S, C>
where
    S: RowSource,
    C: EventCache,
{
    source: Arc<S>,
    cache: Arc<C>,
    lookup: LookupStrategy,
}

impl<S, C> CachedEventRepository<S, C>
where
    S: RowSource,
    C: EventCache,
{
    /// Creates a new cached event repository.
    ///
    /// # Arguments
    ///
    /// * `source` - Where raw rows come from
    /// * `cache` - The cache holding the sorted listing
    /// * `lookup` - How [`EventRepository::get_event_by_index`] resolves
    pub fn new(source: Arc<S>, cache: Arc<C>, lookup: LookupStrategy) -> Self {
        Self {
            source,
            cache,
            lookup,
        }
    }

    /// Fetches every row and normalizes it in raw order.
    async fn fetch_raw(&self) -> Result<Vec<Event>> {
        let rows = self.source.fetch_all_rows().await.inspect_err(|err| {
            tracing::warn!(error = %err, "Failed to fetch rows");
        })?;
        Ok(normalize_rows(rows))
    }

    /// Asks the source for exactly one row.
    async fn fetch_single(&self, index: usize) -> Result<Option<Event>> {
        let row = self.source.fetch_row(index).await.inspect_err(|err| {
            tracing::warn!(index, error = %err, "Failed to fetch row");
        })?;

        Ok(row
            .map(|row| normalize(row, index))
            .filter(|event| !event.is_blank()))
    }
}

/// Finds the event with the given identity, treating a blank row as missing.
fn find_by_index<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    index: usize,
) -> Option<&'a Event> {
    events
        .into_iter()
        .find(|event| event.original_index == index)
        .filter(|event| !event.is_blank())
}

#[async_trait]
impl<S, C> EventRepository for CachedEventRepository<S, C>
where
    S: RowSource + 'static,
    C: EventCache + 'static,
{
    async fn get_all_events(&self) -> Result<EventSet> {
        if let Some(events) = self.cache.get().await {
            tracing::trace!(count = events.len(), "Cache hit for events");
            return Ok(events);
        }

        tracing::debug!("Cache miss for events, fetching rows");
        let mut events = self.fetch_raw().await?;
        sort_by_date_descending(&mut events);

        let events: EventSet = events.into();
        self.cache.put(events.clone()).await;

        tracing::debug!(count = events.len(), "Event cache refreshed");
        Ok(events)
    }

    async fn get_raw_events(&self) -> Result<Vec<Event>> {
        self.fetch_raw().await
    }

    async fn get_event_by_index(&self, index: usize) -> Result<Option<Event>> {
        let event = match self.lookup {
            LookupStrategy::SingleRow => self.fetch_single(index).await?,
            LookupStrategy::RawScan => {
                let events = self.fetch_raw().await?;
                find_by_index(&events, index).cloned()
            }
            LookupStrategy::CachedScan => {
                let events = self.get_all_events().await?;
                find_by_index(events.iter(), index).cloned()
            }
        };

        tracing::trace!(index, found = event.is_some(), lookup = %self.lookup, "Event lookup");
        Ok(event)
    }

    async fn invalidate_cache(&self) {
        self.cache.invalidate().await;
        tracing::info!("Event cache cleared");
    }
}
