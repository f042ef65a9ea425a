//! Row source implementations.
//!
//! Concrete implementations of `eventlog_core::storage::RowSource`:
//!
//! - [`SheetsRowSource`]: Google Sheets values API over HTTP
//! - [`InMemoryRowSource`]: fixed rows held in memory (demo mode and tests)

mod inmemory;
mod sheets;

pub use inmemory::InMemoryRowSource;
pub use sheets::SheetsRowSource;
