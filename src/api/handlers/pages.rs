//! Handlers for page tree endpoints.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::list::ListResponse;
use crate::api::dto::pages::{
    CreatePageRequest, DeletePageResponse, MovePageRequest, PublishRequest, TagQuery,
    UpdatePageRequest,
};
use crate::domain::entities::Page;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every page of the tree ordered by url path.
///
/// # Endpoint
///
/// `GET /api/pages`
pub async fn list_pages_handler(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<Page>>, AppError> {
    let pages = state.page_service.list_pages().await?;
    Ok(Json(pages.into()))
}

/// Creates a container page (index or tag index).
///
/// # Endpoint
///
/// `POST /api/pages`
///
/// Content pages are created through `POST /api/records`.
///
/// # Errors
///
/// Returns 400 for invalid titles or slugs.
/// Returns 404 if the parent does not exist.
/// Returns 409 if the parent already has a child with the slug.
/// Returns 422 if the kind may not be placed under the parent.
pub async fn create_page_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePageRequest>,
) -> Result<(StatusCode, Json<Page>), AppError> {
    payload.validate()?;
    let page = state.page_service.create_page(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(page)))
}

/// `GET /api/pages/{id}`
pub async fn get_page_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Page>, AppError> {
    Ok(Json(state.page_service.get_page(id).await?))
}

/// Partially updates a page.
///
/// # Endpoint
///
/// `PATCH /api/pages/{id}`
///
/// `intro: null` clears the intro. Only index pages carry an intro.
pub async fn update_page_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePageRequest>,
) -> Result<Json<Page>, AppError> {
    payload.validate()?;
    let page = state.page_service.update_page(id, payload.into()).await?;
    Ok(Json(page))
}

/// Deletes a page with its whole subtree.
///
/// # Endpoint
///
/// `DELETE /api/pages/{id}`
///
/// # Errors
///
/// Returns 422 for the root page.
pub async fn delete_page_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeletePageResponse>, AppError> {
    let removed = state.page_service.delete_page(id).await?;
    Ok(Json(DeletePageResponse { id, removed }))
}

/// Lists the direct children of a page in tree order, drafts included.
///
/// # Endpoint
///
/// `GET /api/pages/{id}/children`
pub async fn children_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ListResponse<Page>>, AppError> {
    let children = state.page_service.children(id).await?;
    Ok(Json(children.into()))
}

/// Published entries of an index page, newest first.
///
/// # Endpoint
///
/// `GET /api/pages/{id}/listing?tag=jazz`
///
/// The `tag` parameter is only read by tag index pages. A tag index queried
/// without a tag, or with an empty one, returns no entries: untagged events
/// are never listed there.
///
/// # Errors
///
/// Returns 400 if the page is not an index page.
pub async fn listing_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<TagQuery>,
) -> Result<Json<ListResponse<Page>>, AppError> {
    let items = state
        .page_service
        .listing(id, query.tag.as_deref())
        .await?;
    Ok(Json(items.into()))
}

/// Publishes a page.
///
/// # Endpoint
///
/// `POST /api/pages/{id}/publish`
///
/// # Request Body
///
/// Optional. `{"at": "2024-05-01T12:00:00Z"}` backdates or schedules the
/// publication; an empty body publishes now.
pub async fn publish_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<Json<Page>, AppError> {
    let request: PublishRequest = if body.is_empty() {
        PublishRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            AppError::bad_request("Invalid publish request", json!({"reason": e.to_string()}))
        })?
    };

    let page = state.page_service.publish(id, request.at).await?;
    Ok(Json(page))
}

/// `POST /api/pages/{id}/unpublish`
pub async fn unpublish_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Page>, AppError> {
    Ok(Json(state.page_service.unpublish(id).await?))
}

/// Moves a page with its subtree under a new parent.
///
/// # Endpoint
///
/// `POST /api/pages/{id}/move`
///
/// # Errors
///
/// Returns 409 if the new parent already has a child with the slug.
/// Returns 422 if the move breaks a placement rule.
pub async fn move_page_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<MovePageRequest>,
) -> Result<Json<Page>, AppError> {
    let page = state.page_service.move_page(id, payload.parent_id).await?;
    Ok(Json(page))
}
