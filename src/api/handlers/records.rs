//! Handlers for content record endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;
use validator::Validate;

use crate::api::dto::list::ListResponse;
use crate::api::dto::records::{CreateRecordRequest, GalleryRequest, UpdateRecordRequest};
use crate::domain::entities::{ContentRecord, GalleryImage};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a person, organization, place or event page.
///
/// # Endpoint
///
/// `POST /api/records`
///
/// The page kind follows `details.type`.
///
/// # Errors
///
/// Returns 400 for invalid fields or unknown references.
/// Returns 404 if the parent does not exist.
/// Returns 409 on slug or coordinate collisions.
/// Returns 422 if the kind may not be placed under the parent.
pub async fn create_record_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRecordRequest>,
) -> Result<(StatusCode, Json<ContentRecord>), AppError> {
    payload.validate()?;
    let record = state.record_service.create_record(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /api/records/{id}`
pub async fn get_record_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ContentRecord>, AppError> {
    Ok(Json(state.record_service.get_record(id).await?))
}

/// Replaces the record data of a content page.
///
/// # Endpoint
///
/// `PUT /api/records/{id}`
///
/// # Errors
///
/// Returns 400 if `details.type` differs from the stored kind.
pub async fn update_record_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRecordRequest>,
) -> Result<Json<ContentRecord>, AppError> {
    payload.validate()?;
    let record = state
        .record_service
        .update_record(id, payload.into())
        .await?;
    Ok(Json(record))
}

/// Replaces the gallery of a record. Item order is display order.
///
/// # Endpoint
///
/// `PUT /api/records/{id}/gallery`
pub async fn replace_gallery_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<GalleryRequest>,
) -> Result<Json<ListResponse<GalleryImage>>, AppError> {
    payload.validate()?;
    let gallery = state
        .record_service
        .replace_gallery(id, payload.items)
        .await?;
    Ok(Json(gallery.into()))
}

/// JSON-LD description of a record.
///
/// # Endpoint
///
/// `GET /api/records/{id}/structured-data`
pub async fn structured_data_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(state.record_service.structured_data(id).await?))
}
