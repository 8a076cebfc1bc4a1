//! Handlers exposing the admin form schema.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use serde_json::json;

use crate::domain::entities::PageKind;
use crate::domain::panels::{FormLayout, page_layout};
use crate::domain::registry::SnippetRegistration;
use crate::error::AppError;
use crate::state::AppState;

/// Form schema of a page kind.
#[derive(Debug, Serialize)]
pub struct PageSchema {
    pub kind: PageKind,
    pub verbose_name: &'static str,
    pub verbose_name_plural: &'static str,
    pub schema: Option<&'static str>,
    pub allowed_parent_kinds: &'static [PageKind],
    pub layout: FormLayout,
}

/// `GET /api/schema/pages/{kind}`
pub async fn page_schema_handler(Path(kind): Path<String>) -> Result<Json<PageSchema>, AppError> {
    let kind: PageKind = kind
        .parse()
        .map_err(|_| AppError::not_found("Unknown page kind", json!({"kind": kind})))?;

    Ok(Json(PageSchema {
        kind,
        verbose_name: kind.verbose_name(),
        verbose_name_plural: kind.verbose_name_plural(),
        schema: kind.schema(),
        allowed_parent_kinds: kind.allowed_parent_kinds(),
        layout: page_layout(kind),
    }))
}

/// `GET /api/schema/snippets/{kind}`
pub async fn snippet_schema_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<SnippetRegistration>, AppError> {
    Ok(Json(*state.snippet_service.resolve_kind(&kind)?))
}
