use axum::{extract::State, Json};

use eventlog_core::query::{summarize_organizations, OrganizationSummary};

use crate::{handlers::AppError, state::AppState};

/// List organizations with their event counts (GET /api/organizations).
pub async fn list_organizations(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrganizationSummary>>, AppError> {
    let events = state.events.get_all_events().await?;
    Ok(Json(summarize_organizations(&events)))
}
