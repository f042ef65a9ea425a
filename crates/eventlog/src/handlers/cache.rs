use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ClearCacheResponse {
    pub message: String,
    /// RFC 3339 instant at which the cache was cleared.
    pub timestamp: String,
}

/// Drop the cached listing (POST /api/cache/clear).
///
/// The next read goes to the row source.
pub async fn clear_cache(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    state.events.invalidate_cache().await;

    Json(ClearCacheResponse {
        message: "Cache cleared".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
