//! Snippet and image management service.

use std::sync::Arc;

use metrics::counter;
use serde_json::{Value, json};
use validator::Validate;

use crate::domain::entities::{Image, NewImage, Snippet, SnippetData, SnippetKind};
use crate::domain::registry::{SnippetRegistration, SnippetRegistry};
use crate::domain::repositories::SnippetRepository;
use crate::error::AppError;
use crate::utils::web_url::check_web_url;

/// Service for reusable records and image metadata.
///
/// Only kinds present in the [`SnippetRegistry`] are served.
pub struct SnippetService {
    snippets: Arc<dyn SnippetRepository>,
    registry: Arc<SnippetRegistry>,
}

impl SnippetService {
    pub fn new(snippets: Arc<dyn SnippetRepository>, registry: Arc<SnippetRegistry>) -> Self {
        Self { snippets, registry }
    }

    pub fn registry(&self) -> &SnippetRegistry {
        &self.registry
    }

    /// Resolves an API path segment to a registered kind.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no registered kind uses the path.
    pub fn resolve_kind(&self, path: &str) -> Result<&SnippetRegistration, AppError> {
        self.registry.resolve(path).ok_or_else(|| {
            AppError::not_found("Unknown snippet kind", json!({"kind": path}))
        })
    }

    /// Decodes, validates and stores a new snippet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for invalid payloads or references.
    /// Returns [`AppError::Conflict`] if the uniqueness key is taken.
    pub async fn create_snippet(&self, kind: SnippetKind, payload: Value) -> Result<Snippet, AppError> {
        let data = SnippetData::from_json(kind, payload)?;
        self.validate_references(&data).await?;

        let snippet = self.snippets.insert_snippet(data).await?;

        counter!("snippet_writes_total", "kind" => kind.as_str(), "op" => "create").increment(1);
        tracing::info!(snippet_id = snippet.id, %kind, "snippet created");

        Ok(snippet)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no snippet of this kind has the ID.
    pub async fn get_snippet(&self, kind: SnippetKind, id: i64) -> Result<Snippet, AppError> {
        self.snippets
            .find_snippet(kind, id)
            .await?
            .ok_or_else(|| AppError::not_found("Snippet not found", json!({"kind": kind, "id": id})))
    }

    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_snippets(&self, kind: SnippetKind) -> Result<Vec<Snippet>, AppError> {
        self.snippets.list_snippets(kind).await
    }

    /// Replaces every field of a snippet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no snippet of this kind has the ID.
    /// Returns [`AppError::Validation`] for invalid payloads or references.
    /// Returns [`AppError::Conflict`] if the uniqueness key is taken.
    pub async fn update_snippet(
        &self,
        kind: SnippetKind,
        id: i64,
        payload: Value,
    ) -> Result<Snippet, AppError> {
        self.get_snippet(kind, id).await?;

        let data = SnippetData::from_json(kind, payload)?;
        self.validate_references(&data).await?;

        let snippet = self.snippets.update_snippet(id, data).await?;
        counter!("snippet_writes_total", "kind" => kind.as_str(), "op" => "update").increment(1);

        Ok(snippet)
    }

    /// Deletes a snippet, unlinking it from every record.
    ///
    /// Sources still cited by a record cannot be deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no snippet of this kind has the ID.
    /// Returns [`AppError::Conflict`] for a source still in use.
    pub async fn delete_snippet(&self, kind: SnippetKind, id: i64) -> Result<(), AppError> {
        self.get_snippet(kind, id).await?;

        if kind == SnippetKind::Source {
            let references = self.snippets.count_source_references(id).await?;
            if references > 0 {
                return Err(AppError::conflict(
                    "Source is still cited by records",
                    json!({"id": id, "references": references}),
                ));
            }
        }

        self.snippets.delete_snippet(kind, id).await?;

        counter!("snippet_writes_total", "kind" => kind.as_str(), "op" => "delete").increment(1);
        tracing::info!(snippet_id = id, %kind, "snippet deleted");

        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for invalid metadata.
    pub async fn create_image(&self, image: NewImage) -> Result<Image, AppError> {
        image.validate()?;
        let image = self.snippets.insert_image(image).await?;
        tracing::info!(image_id = image.id, file = %image.file, "image registered");
        Ok(image)
    }

    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_images(&self) -> Result<Vec<Image>, AppError> {
        self.snippets.list_images().await
    }

    /// Deletes an image. Category icons using it are cleared and gallery
    /// entries showing it are removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the image does not exist.
    pub async fn delete_image(&self, id: i64) -> Result<(), AppError> {
        if self.snippets.find_image(id).await?.is_none() {
            return Err(AppError::not_found("Image not found", json!({"id": id})));
        }
        self.snippets.delete_image(id).await?;
        tracing::info!(image_id = id, "image deleted");
        Ok(())
    }

    async fn validate_references(&self, data: &SnippetData) -> Result<(), AppError> {
        match data {
            SnippetData::Website(website) => {
                check_web_url(&website.url)
                    .map_err(|e| AppError::bad_request(e.to_string(), json!({"field": "url"})))?;
            }
            SnippetData::Source(source) if !source.same_as.is_empty() => {
                let existing = self
                    .snippets
                    .find_existing_snippets(SnippetKind::Website, source.same_as.clone())
                    .await?;
                let missing: Vec<i64> = source
                    .same_as
                    .iter()
                    .copied()
                    .filter(|id| !existing.contains(id))
                    .collect();
                if !missing.is_empty() {
                    return Err(AppError::bad_request(
                        "Unknown website references",
                        json!({"field": "same_as", "missing": missing}),
                    ));
                }
            }
            SnippetData::Category(category) => {
                if let Some(icon_id) = category.icon_id
                    && self.snippets.find_image(icon_id).await?.is_none()
                {
                    return Err(AppError::bad_request(
                        "Unknown icon image",
                        json!({"field": "icon_id", "image_id": icon_id}),
                    ));
                }
            }
            _ => {}
        }
        Ok(())
    }
}
