//! Repository trait for snippets and images.

use crate::domain::entities::{Image, NewImage, Snippet, SnippetData, SnippetKind};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for reusable records living outside the page tree.
///
/// Uniqueness keys (see [`SnippetData::unique_key`]) are enforced by every
/// implementation. Deleting a snippet removes it from every relationship set
/// that references it.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSnippetRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnippetRepository: Send + Sync {
    /// Stores a new snippet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the uniqueness key is taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert_snippet(&self, data: SnippetData) -> Result<Snippet, AppError>;

    /// Finds a snippet of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_snippet(&self, kind: SnippetKind, id: i64) -> Result<Option<Snippet>, AppError>;

    /// Lists snippets of one kind by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_snippets(&self, kind: SnippetKind) -> Result<Vec<Snippet>, AppError>;

    /// Returns those of `ids` that exist as snippets of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_existing_snippets(
        &self,
        kind: SnippetKind,
        ids: Vec<i64>,
    ) -> Result<Vec<i64>, AppError>;

    /// Overwrites a snippet. The kind is taken from `data`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no snippet of that kind has the ID.
    /// Returns [`AppError::Conflict`] if the uniqueness key is taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update_snippet(&self, id: i64, data: SnippetData) -> Result<Snippet, AppError>;

    /// Deletes a snippet and unlinks it everywhere.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no snippet of that kind has the ID.
    /// Returns [`AppError::Conflict`] if a record still cites the source.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete_snippet(&self, kind: SnippetKind, id: i64) -> Result<(), AppError>;

    /// Counts records citing a source.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count_source_references(&self, source_id: i64) -> Result<i64, AppError>;

    /// Registers image metadata.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert_image(&self, image: NewImage) -> Result<Image, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_image(&self, id: i64) -> Result<Option<Image>, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_images(&self) -> Result<Vec<Image>, AppError>;

    /// Deletes an image, clearing category icons and removing gallery rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the image does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete_image(&self, id: i64) -> Result<(), AppError>;
}
