//! Repository trait for content records.

use crate::domain::entities::{ContentRecord, GalleryImage, NewGalleryImage, NewPage, Page, RecordData};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for person, organization, place and event pages.
///
/// A record is written as one unit: page node, shared fields, agent profile,
/// kind details and every relationship set. Relationship sets are stored in the
/// order given and read back in that order.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecordRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Inserts the page node and its record data.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on slug or coordinate collisions.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert_record(&self, page: NewPage, data: RecordData)
    -> Result<ContentRecord, AppError>;

    /// Loads a record with its gallery.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_record(&self, id: i64) -> Result<Option<ContentRecord>, AppError>;

    /// Replaces the record data of an existing page, optionally renaming it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Conflict`] on coordinate collisions.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update_record(
        &self,
        id: i64,
        title: Option<String>,
        data: RecordData,
    ) -> Result<ContentRecord, AppError>;

    /// Replaces the gallery of a record, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn replace_gallery(
        &self,
        id: i64,
        items: Vec<NewGalleryImage>,
    ) -> Result<Vec<GalleryImage>, AppError>;

    /// Finds event pages whose tag set contains `tag` exactly.
    ///
    /// With `live_at` set, only events visible at that instant are returned,
    /// newest first publication first. Otherwise drafts are included, by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_events_by_tag(
        &self,
        tag: &str,
        live_at: Option<DateTime<Utc>>,
    ) -> Result<Vec<Page>, AppError>;
}
