//! Repository trait for the page tree.

use crate::domain::entities::{NewPage, Page, PageKind, PagePatch};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for page tree nodes.
///
/// Implementations keep `url_path`, `depth` and sibling `position` consistent
/// across inserts and moves. Placement rules are checked by
/// [`crate::application::services::PageService`], not here.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPageRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Returns the single root page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the root page is missing or on storage errors.
    async fn root_page(&self) -> Result<Page, AppError>;

    /// Finds a page by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_page(&self, id: i64) -> Result<Option<Page>, AppError>;

    /// Finds a direct child of `parent_id` by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_child_by_slug(&self, parent_id: i64, slug: &str)
    -> Result<Option<Page>, AppError>;

    /// Lists every page in tree order (by url path).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_pages(&self) -> Result<Vec<Page>, AppError>;

    /// Lists the direct children of a page by sibling position.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_children(&self, parent_id: i64) -> Result<Vec<Page>, AppError>;

    /// Lists the direct children visible at `now`, newest first publication first.
    ///
    /// Ties on `first_published_at` are broken by descending ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_live_children(
        &self,
        parent_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<Page>, AppError>;

    /// Resolves the kinds of the given page IDs. Unknown IDs are left out.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_page_kinds(&self, ids: Vec<i64>) -> Result<Vec<(i64, PageKind)>, AppError>;

    /// Inserts a page as the last child of its parent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the parent does not exist.
    /// Returns [`AppError::Conflict`] if a sibling already uses the slug.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert_page(&self, new_page: NewPage) -> Result<Page, AppError>;

    /// Applies a partial update to a page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the page does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update_page(&self, id: i64, patch: PagePatch) -> Result<Page, AppError>;

    /// Stores the publication state of a page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the page does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save_publication(
        &self,
        id: i64,
        live: bool,
        first_published_at: Option<DateTime<Utc>>,
        last_published_at: Option<DateTime<Utc>>,
    ) -> Result<Page, AppError>;

    /// Moves a page and its subtree to the end of `new_parent_id`'s children.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if either page does not exist.
    /// Returns [`AppError::Conflict`] if the new parent already has a child with the slug.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn move_page(&self, id: i64, new_parent_id: i64) -> Result<Page, AppError>;

    /// Deletes a page together with its subtree. Returns the number of pages removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the page does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete_page(&self, id: i64) -> Result<u64, AppError>;
}
