//! Handlers for snippet endpoints.
//!
//! The `{kind}` path segment is resolved through the snippet registry; kinds
//! that are not registered answer 404.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::api::dto::list::ListResponse;
use crate::api::dto::snippets::{SnippetItem, SnippetKindItem};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the registered snippet kinds.
///
/// # Endpoint
///
/// `GET /api/snippets`
pub async fn snippet_kinds_handler(State(state): State<AppState>) -> Json<ListResponse<SnippetKindItem>> {
    let items = state
        .snippet_service
        .registry()
        .entries()
        .iter()
        .map(SnippetKindItem::from)
        .collect();
    Json(ListResponse { items })
}

/// `GET /api/snippets/{kind}`
pub async fn list_snippets_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<ListResponse<SnippetItem>>, AppError> {
    let kind = state.snippet_service.resolve_kind(&kind)?.kind;
    let snippets = state.snippet_service.list_snippets(kind).await?;
    Ok(Json(ListResponse {
        items: snippets.into_iter().map(SnippetItem::from).collect(),
    }))
}

/// Creates a snippet.
///
/// # Endpoint
///
/// `POST /api/snippets/{kind}`
///
/// The body holds the fields of the kind, for example
/// `{"address": "curator@example.org"}` for `email`.
///
/// # Errors
///
/// Returns 400 if the body does not match the kind.
/// Returns 409 if the uniqueness key of the kind is taken.
pub async fn create_snippet_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<SnippetItem>), AppError> {
    let kind = state.snippet_service.resolve_kind(&kind)?.kind;
    let snippet = state.snippet_service.create_snippet(kind, payload).await?;
    Ok((StatusCode::CREATED, Json(snippet.into())))
}

/// `GET /api/snippets/{kind}/{id}`
pub async fn get_snippet_handler(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, i64)>,
) -> Result<Json<SnippetItem>, AppError> {
    let kind = state.snippet_service.resolve_kind(&kind)?.kind;
    let snippet = state.snippet_service.get_snippet(kind, id).await?;
    Ok(Json(snippet.into()))
}

/// Replaces every field of a snippet.
///
/// # Endpoint
///
/// `PUT /api/snippets/{kind}/{id}`
pub async fn update_snippet_handler(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, i64)>,
    Json(payload): Json<Value>,
) -> Result<Json<SnippetItem>, AppError> {
    let kind = state.snippet_service.resolve_kind(&kind)?.kind;
    let snippet = state
        .snippet_service
        .update_snippet(kind, id, payload)
        .await?;
    Ok(Json(snippet.into()))
}

/// Deletes a snippet and removes it from every record that referenced it.
///
/// # Endpoint
///
/// `DELETE /api/snippets/{kind}/{id}`
///
/// # Errors
///
/// Returns 409 for a source still cited by a record.
pub async fn delete_snippet_handler(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, i64)>,
) -> Result<StatusCode, AppError> {
    let kind = state.snippet_service.resolve_kind(&kind)?.kind;
    state.snippet_service.delete_snippet(kind, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
