//! Page tree service: placement, publication, moves and listings.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use metrics::counter;
use serde_json::json;

use crate::domain::entities::{NewPage, Page, PageKind, PagePatch};
use crate::domain::repositories::{PageRepository, RecordRepository};
use crate::error::AppError;
use crate::utils::slug::{is_valid_slug, slugify};

/// Maximum page title length.
pub const MAX_TITLE_LEN: usize = 255;

/// Input for creating a container page.
#[derive(Debug, Clone)]
pub struct CreatePage {
    pub kind: PageKind,
    pub parent_id: i64,
    pub title: String,
    pub slug: Option<String>,
    pub intro: Option<String>,
}

/// Service for the page tree.
///
/// Enforces the placement rules between page kinds, keeps the root page
/// immovable and computes index listings on every call.
pub struct PageService {
    pages: Arc<dyn PageRepository>,
    records: Arc<dyn RecordRepository>,
}

impl PageService {
    pub fn new(pages: Arc<dyn PageRepository>, records: Arc<dyn RecordRepository>) -> Self {
        Self { pages, records }
    }

    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn root(&self) -> Result<Page, AppError> {
        self.pages.root_page().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the page does not exist.
    pub async fn get_page(&self, id: i64) -> Result<Page, AppError> {
        self.pages
            .find_page(id)
            .await?
            .ok_or_else(|| AppError::not_found("Page not found", json!({"id": id})))
    }

    /// Lists the whole tree by url path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_pages(&self) -> Result<Vec<Page>, AppError> {
        self.pages.list_pages().await
    }

    /// All direct children, published or not, by position.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the page does not exist.
    pub async fn children(&self, id: i64) -> Result<Vec<Page>, AppError> {
        let page = self.get_page(id).await?;
        self.pages.list_children(page.id).await
    }

    /// Creates a root-level or index page.
    ///
    /// Content kinds carry record data and are created through
    /// [`crate::application::services::RecordService::create_record`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for content kinds, bad titles or slugs.
    /// Returns [`AppError::Placement`] if the parent kind is not allowed.
    /// Returns [`AppError::NotFound`] if the parent does not exist.
    /// Returns [`AppError::Conflict`] if a sibling already uses the slug.
    pub async fn create_page(&self, input: CreatePage) -> Result<Page, AppError> {
        if input.kind.is_record() {
            return Err(AppError::bad_request(
                "Content pages must be created with their record data",
                json!({"kind": input.kind, "endpoint": "/api/records"}),
            ));
        }

        let parent = self.get_page(input.parent_id).await?;
        check_placement(input.kind, &parent)?;

        let title = validate_title(&input.title)?;
        let slug = resolve_slug(input.slug.as_deref(), &title)?;

        let page = self
            .pages
            .insert_page(NewPage {
                parent_id: parent.id,
                kind: input.kind,
                title,
                slug,
                intro: input.intro,
            })
            .await?;

        counter!("pages_created_total", "kind" => page.kind.as_str()).increment(1);
        tracing::info!(page_id = page.id, kind = %page.kind, url_path = %page.url_path, "page created");

        Ok(page)
    }

    /// Updates title and intro of a page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the page does not exist.
    /// Returns [`AppError::Validation`] for a bad title or an intro on a non-index page.
    pub async fn update_page(&self, id: i64, patch: PagePatch) -> Result<Page, AppError> {
        let page = self.get_page(id).await?;

        let title = patch.title.as_deref().map(validate_title).transpose()?;
        if patch.intro.is_some() && !page.kind.is_index() {
            return Err(AppError::bad_request(
                "Only index pages have an intro",
                json!({"kind": page.kind}),
            ));
        }

        self.pages
            .update_page(
                id,
                PagePatch {
                    title,
                    intro: patch.intro,
                },
            )
            .await
    }

    /// Publishes a page at `at`, or now.
    ///
    /// The first publication date is recorded once and never moves afterwards;
    /// the last publication date always follows the latest call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the page does not exist.
    pub async fn publish(&self, id: i64, at: Option<DateTime<Utc>>) -> Result<Page, AppError> {
        let page = self.get_page(id).await?;
        let at = at.unwrap_or_else(Utc::now);
        let first_published_at = page.first_published_at.or(Some(at));

        let page = self
            .pages
            .save_publication(id, true, first_published_at, Some(at))
            .await?;

        counter!("pages_published_total", "kind" => page.kind.as_str()).increment(1);
        tracing::info!(page_id = id, published_at = %at, "page published");

        Ok(page)
    }

    /// Takes a page offline, keeping its publication dates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the page does not exist.
    pub async fn unpublish(&self, id: i64) -> Result<Page, AppError> {
        let page = self.get_page(id).await?;
        let page = self
            .pages
            .save_publication(id, false, page.first_published_at, page.last_published_at)
            .await?;

        tracing::info!(page_id = id, "page unpublished");
        Ok(page)
    }

    /// Moves a page with its subtree under a new parent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Placement`] when moving the root, moving a page under
    /// itself or a descendant, or when the new parent kind is not allowed.
    /// Returns [`AppError::NotFound`] if either page does not exist.
    /// Returns [`AppError::Conflict`] if the new parent has a child with the slug.
    pub async fn move_page(&self, id: i64, new_parent_id: i64) -> Result<Page, AppError> {
        let page = self.get_page(id).await?;
        if page.is_root() {
            return Err(AppError::placement(
                "The root page cannot be moved",
                json!({"id": id}),
            ));
        }

        let parent = self.get_page(new_parent_id).await?;
        if parent.id == page.id || page.is_ancestor_of(&parent) {
            return Err(AppError::placement(
                "A page cannot be moved under itself or one of its descendants",
                json!({"id": id, "parent_id": new_parent_id}),
            ));
        }
        check_placement(page.kind, &parent)?;

        let moved = self.pages.move_page(id, parent.id).await?;
        tracing::info!(page_id = id, from = %page.url_path, to = %moved.url_path, "page moved");

        Ok(moved)
    }

    /// Deletes a page and everything below it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Placement`] for the root page.
    /// Returns [`AppError::NotFound`] if the page does not exist.
    pub async fn delete_page(&self, id: i64) -> Result<u64, AppError> {
        let page = self.get_page(id).await?;
        if page.is_root() {
            return Err(AppError::placement(
                "The root page cannot be deleted",
                json!({"id": id}),
            ));
        }

        let removed = self.pages.delete_page(id).await?;

        counter!("pages_deleted_total").increment(removed);
        tracing::info!(page_id = id, url_path = %page.url_path, removed, "page subtree deleted");

        Ok(removed)
    }

    /// Published entries of an index page, newest first.
    ///
    /// For the tag index the entries are the live events carrying `tag`; without
    /// a tag the listing is empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the page does not exist.
    /// Returns [`AppError::Validation`] if the page is not an index page.
    pub async fn listing(&self, id: i64, tag: Option<&str>) -> Result<Vec<Page>, AppError> {
        let page = self.get_page(id).await?;
        let now = Utc::now();

        match page.kind {
            PageKind::EventTagIndex => match tag.map(str::trim).filter(|t| !t.is_empty()) {
                Some(tag) => self.records.find_events_by_tag(tag, Some(now)).await,
                None => Ok(Vec::new()),
            },
            kind if kind.is_index() => self.pages.list_live_children(id, now).await,
            kind => Err(AppError::bad_request(
                "Only index pages have a listing",
                json!({"kind": kind}),
            )),
        }
    }

    /// Every event carrying `tag`, drafts included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn events_by_tag(&self, tag: &str) -> Result<Vec<Page>, AppError> {
        self.records.find_events_by_tag(tag, None).await
    }

    /// Resolves a public URL path to a visible page.
    ///
    /// Walks the slugs from the root; only the final page has to be visible.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve_path(&self, path: &str) -> Result<Option<Page>, AppError> {
        let mut current = self.pages.root_page().await?;

        for slug in path.split('/').filter(|s| !s.is_empty()) {
            match self.pages.find_child_by_slug(current.id, slug).await? {
                Some(child) => current = child,
                None => return Ok(None),
            }
        }

        Ok(current.is_visible_at(Utc::now()).then_some(current))
    }
}

/// Checks that a page of `kind` may sit under `parent`.
///
/// # Errors
///
/// Returns [`AppError::Placement`] naming the allowed parent kinds.
pub fn check_placement(kind: PageKind, parent: &Page) -> Result<(), AppError> {
    if kind.can_be_placed_under(parent.kind) {
        return Ok(());
    }
    Err(AppError::placement(
        format!(
            "A {} cannot be placed under a {}",
            kind.verbose_name(),
            parent.kind.verbose_name()
        ),
        json!({
            "kind": kind,
            "parent_id": parent.id,
            "parent_kind": parent.kind,
            "allowed_parent_kinds": kind.allowed_parent_kinds(),
        }),
    ))
}

/// Trims a title and checks its length.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for empty or overlong titles.
pub fn validate_title(title: &str) -> Result<String, AppError> {
    let title = title.trim();
    if title.is_empty() || title.chars().count() > MAX_TITLE_LEN {
        return Err(AppError::bad_request(
            "Invalid title length",
            json!({"min": 1, "max": MAX_TITLE_LEN}),
        ));
    }
    Ok(title.to_string())
}

/// Uses the given slug or derives one from the title.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the slug is malformed or none can be derived.
pub fn resolve_slug(slug: Option<&str>, title: &str) -> Result<String, AppError> {
    match slug.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) if is_valid_slug(slug) => Ok(slug.to_string()),
        Some(slug) => Err(AppError::bad_request(
            "Invalid slug",
            json!({"slug": slug, "allowed": "a-z, 0-9, hyphens, underscores"}),
        )),
        None => {
            let derived = slugify(title);
            if derived.is_empty() {
                return Err(AppError::bad_request(
                    "Cannot derive a slug from the title",
                    json!({"title": title}),
                ));
            }
            Ok(derived)
        }
    }
}
