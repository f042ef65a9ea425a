use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How a single event is resolved by its index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupStrategy {
    /// Request only the one row from the source, bypassing the cache.
    #[default]
    SingleRow,
    /// Fetch all rows fresh and scan them in raw order.
    RawScan,
    /// Scan the (possibly cached) sorted listing.
    CachedScan,
}

impl LookupStrategy {
    /// Returns the configuration name of this strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupStrategy::SingleRow => "row",
            LookupStrategy::RawScan => "raw-scan",
            LookupStrategy::CachedScan => "cached-scan",
        }
    }
}

impl fmt::Display for LookupStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown lookup strategy '{0}' (expected row, raw-scan or cached-scan)")]
pub struct ParseLookupStrategyError(pub String);

impl FromStr for LookupStrategy {
    type Err = ParseLookupStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "row" | "single-row" => Ok(LookupStrategy::SingleRow),
            "raw-scan" => Ok(LookupStrategy::RawScan),
            "cached-scan" => Ok(LookupStrategy::CachedScan),
            _ => Err(ParseLookupStrategyError(s.to_string())),
        }
    }
}
