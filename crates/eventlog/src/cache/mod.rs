//! Cache store implementations.
//!
//! Concrete implementations of `eventlog_core::cache::EventCache`:
//!
//! - [`MemoryEventCache`]: process-wide snapshot with a freshness window
//! - [`NoopEventCache`]: never stores anything, every read is a miss

mod memory;
mod noop;

pub use memory::MemoryEventCache;
pub use noop::NoopEventCache;
