//! Application state with repository-based storage.
//!
//! The state is cloned for each request handler. The row source backend and
//! the cache are chosen at startup from the configuration.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use url::Url;

use eventlog_core::storage::{EventRepository, RowSource};

use crate::cache::{MemoryEventCache, NoopEventCache};
use crate::config::Config;
use crate::source::{InMemoryRowSource, SheetsRowSource};
use crate::storage::CachedEventRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Event repository (cached, wraps the row source).
    pub events: Arc<dyn EventRepository>,
}

impl AppState {
    /// Creates the state described by the configuration.
    ///
    /// Uses the Sheets API when `GOOGLE_SHEET_ID` is set, the demo rows otherwise.
    pub fn new(config: &Config) -> Result<Self> {
        let Some(sheet_id) = config.sheet_id.as_deref() else {
            tracing::warn!("GOOGLE_SHEET_ID is not set, serving demo rows");
            return Ok(Self::with_source(
                Arc::new(InMemoryRowSource::with_demo_data()),
                config,
            ));
        };

        let Some(api_key) = config.sheets_api_key.as_deref() else {
            bail!("GOOGLE_SHEETS_API_KEY must be set when GOOGLE_SHEET_ID is set");
        };

        let base_url = Url::parse(&config.sheets_api_url)
            .with_context(|| format!("Invalid SHEETS_API_URL: {}", config.sheets_api_url))?;

        let mut source =
            SheetsRowSource::new(base_url, sheet_id, api_key, config.source_timeout())?;
        if let Some(sheet_name) = config.sheet_name.as_deref() {
            source = source.with_sheet_name(sheet_name);
        }

        tracing::info!(sheet_id, "Using Google Sheets row source");

        Ok(Self::with_source(Arc::new(source), config))
    }

    /// Wraps `source` in a cached repository.
    fn with_source<S: RowSource + 'static>(source: Arc<S>, config: &Config) -> Self {
        tracing::info!(
            cache_ttl_seconds = config.cache_ttl_seconds,
            lookup = %config.lookup_strategy,
            "Configuring event repository"
        );

        if config.cache_ttl_seconds == 0 {
            tracing::info!("Event caching disabled");
            return Self::with_repository(CachedEventRepository::new(
                source,
                Arc::new(NoopEventCache),
                config.lookup_strategy,
            ));
        }

        Self::with_repository(CachedEventRepository::new(
            source,
            Arc::new(MemoryEventCache::new(config.cache_ttl())),
            config.lookup_strategy,
        ))
    }

    /// Creates a state around an existing repository.
    pub fn with_repository(repository: impl EventRepository + 'static) -> Self {
        Self {
            events: Arc::new(repository),
        }
    }
}
