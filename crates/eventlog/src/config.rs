use std::{env, time::Duration};

use eventlog_core::storage::LookupStrategy;

/// Default Google Sheets API endpoint.
pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds (default: 300). Zero disables caching.
    pub cache_ttl_seconds: u64,
    /// Spreadsheet ID. When unset the server runs on demo rows.
    pub sheet_id: Option<String>,
    /// API key for the Sheets API (required when `sheet_id` is set)
    pub sheets_api_key: Option<String>,
    /// Optional tab name, prefixed to every range.
    pub sheet_name: Option<String>,
    /// Base URL of the Sheets API (default: "https://sheets.googleapis.com")
    pub sheets_api_url: String,
    /// Timeout for each row source request in seconds (default: 10)
    pub source_timeout_seconds: u64,
    /// How single events are looked up (default: row)
    pub lookup_strategy: LookupStrategy,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds, 0 disables caching (default: 300)
    /// - `GOOGLE_SHEET_ID` - Spreadsheet ID (default: unset, demo rows)
    /// - `GOOGLE_SHEETS_API_KEY` - Sheets API key
    /// - `GOOGLE_SHEET_NAME` - Tab name (default: first tab)
    /// - `SHEETS_API_URL` - Sheets API base URL
    /// - `SOURCE_TIMEOUT_SECONDS` - Row source request timeout (default: 10)
    /// - `EVENT_LOOKUP` - `row`, `raw-scan` or `cached-scan` (default: row)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset. Unparseable values fall back to defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let lookup_strategy = match var("EVENT_LOOKUP").map(|v| v.parse::<LookupStrategy>()) {
            Some(Ok(strategy)) => strategy,
            Some(Err(err)) => {
                tracing::warn!(error = %err, "Falling back to default lookup strategy");
                LookupStrategy::default()
            }
            None => LookupStrategy::default(),
        };

        Self {
            cache_ttl_seconds: var("CACHE_TTL_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            sheet_id: var("GOOGLE_SHEET_ID"),
            sheets_api_key: var("GOOGLE_SHEETS_API_KEY"),
            sheet_name: var("GOOGLE_SHEET_NAME"),
            sheets_api_url: var("SHEETS_API_URL")
                .unwrap_or_else(|| DEFAULT_SHEETS_API_URL.to_string()),
            source_timeout_seconds: var("SOURCE_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            lookup_strategy,
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get the row source request timeout as a Duration.
    pub fn source_timeout(&self) -> Duration {
        Duration::from_secs(self.source_timeout_seconds)
    }
}
