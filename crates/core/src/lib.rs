//! Functional core for eventlog.
//!
//! Everything in this crate is pure: record types, normalization, the query
//! engine and the traits at the I/O seams. Concrete row sources, caches and
//! the cached repository live in the `eventlog` binary crate.

pub mod cache;
pub mod event;
pub mod query;
pub mod storage;
