//! Handler for the event tag lookup.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::list::ListResponse;
use crate::api::dto::pages::TagQuery;
use crate::domain::entities::Page;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every event carrying a tag, drafts included, by id.
///
/// # Endpoint
///
/// `GET /api/events?tag=jazz`
///
/// Tags match exactly, case included.
///
/// # Errors
///
/// Returns 400 if `tag` is missing or empty.
pub async fn events_by_tag_handler(
    State(state): State<AppState>,
    Query(query): Query<TagQuery>,
) -> Result<Json<ListResponse<Page>>, AppError> {
    let tag = query
        .tag
        .ok_or_else(|| AppError::bad_request("Query parameter 'tag' is required", json!({})))?;

    let events = state.page_service.events_by_tag(&tag).await?;
    Ok(Json(events.into()))
}
