//! Event repository implementations.
//!
//! Provides the implementation of `eventlog_core::storage::EventRepository`
//! used by the server: a [`RowSource`](eventlog_core::storage::RowSource)
//! fronted by an [`EventCache`](eventlog_core::cache::EventCache).

mod cached;

pub use cached::CachedEventRepository;
