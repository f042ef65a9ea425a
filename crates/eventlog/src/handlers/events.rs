//! Event listing and lookup handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use eventlog_core::event::Event;
use eventlog_core::query::{
    filter_events, paginate, unique_formats, EventFilter, Page, DEFAULT_PAGE_SIZE,
};

use crate::{
    handlers::{error::error_response, AppError},
    state::AppState,
};

/// Query parameters for listing events.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsQuery {
    #[serde(flatten)]
    pub filter: EventFilter,
    /// 1-based page number (default: 1)
    pub page: Option<String>,
}

impl ListEventsQuery {
    /// Returns the requested page, `None` when it is not a number.
    fn page(&self) -> Option<usize> {
        match self.page.as_deref().map(str::trim) {
            None | Some("") => Some(1),
            Some(page) => page.parse().ok(),
        }
    }
}

/// One page of the event listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListResponse<'a> {
    #[serde(flatten)]
    pub page: Page<&'a Event>,
    /// Distinct formats across every event, for building filter menus.
    pub unique_formats: Vec<String>,
}

/// List events (GET /api/events).
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Response, AppError> {
    let Some(page) = query.page() else {
        return Ok(error_response(
            StatusCode::BAD_REQUEST,
            "page must be a positive number",
        ));
    };

    let events = state.events.get_all_events().await?;
    let filtered = filter_events(&events, &query.filter);

    let response = EventListResponse {
        page: paginate(&filtered, page, DEFAULT_PAGE_SIZE),
        unique_formats: unique_formats(&events),
    };

    Ok(Json(response).into_response())
}

/// Get a single event by its original index (GET /api/events/{id}).
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Ok(id) = id.trim().parse::<usize>() else {
        return Ok(error_response(
            StatusCode::BAD_REQUEST,
            "id must be a non-negative number",
        ));
    };

    match state.events.get_event_by_index(id).await? {
        Some(event) => Ok(Json(event).into_response()),
        None => Ok(error_response(StatusCode::NOT_FOUND, "Event not found")),
    }
}
