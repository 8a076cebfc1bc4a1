//! Handlers for image metadata endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::list::ListResponse;
use crate::domain::entities::{Image, NewImage};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/images`
pub async fn list_images_handler(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<Image>>, AppError> {
    Ok(Json(state.snippet_service.list_images().await?.into()))
}

/// Registers image metadata. The file itself is stored elsewhere.
///
/// # Endpoint
///
/// `POST /api/images`
pub async fn create_image_handler(
    State(state): State<AppState>,
    Json(payload): Json<NewImage>,
) -> Result<(StatusCode, Json<Image>), AppError> {
    let image = state.snippet_service.create_image(payload).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

/// Deletes an image.
///
/// # Endpoint
///
/// `DELETE /api/images/{id}`
///
/// Gallery entries showing the image are removed and category icons pointing
/// at it are cleared.
pub async fn delete_image_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.snippet_service.delete_image(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
