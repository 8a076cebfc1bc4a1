//! In-process storage backend.
//!
//! [`MemoryStore`] implements every repository trait over plain collections
//! behind one `tokio::sync::RwLock`. It is selected with `STORAGE_BACKEND=memory`
//! and backs the integration tests. Data is lost when the process exits.

mod pages;
mod records;
mod snippets;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{
    GalleryImage, Image, NewPage, Page, PageKind, RecordData, RecordDetails, SnippetData,
};
use crate::error::AppError;

/// Title of the page created with every new store.
pub const ROOT_TITLE: &str = "Root";

/// Shared in-memory store. Clones share the same data.
#[derive(Clone)]
pub struct MemoryStore {
    state: Arc<RwLock<State>>,
}

struct State {
    next_page_id: i64,
    next_snippet_id: i64,
    next_image_id: i64,
    next_gallery_id: i64,
    pages: BTreeMap<i64, Page>,
    records: HashMap<i64, RecordData>,
    galleries: HashMap<i64, Vec<GalleryImage>>,
    snippets: BTreeMap<i64, SnippetData>,
    images: BTreeMap<i64, Image>,
}

impl MemoryStore {
    /// Creates a store holding only the live root page.
    pub fn new() -> Self {
        debug!("Using in-memory storage");

        let at = Utc::now();
        let root = Page {
            id: 1,
            parent_id: None,
            kind: PageKind::Root,
            title: ROOT_TITLE.to_string(),
            slug: "root".to_string(),
            url_path: "/".to_string(),
            depth: 0,
            position: 0,
            intro: None,
            live: true,
            first_published_at: Some(at),
            last_published_at: Some(at),
            created_at: at,
            updated_at: at,
        };

        let state = State {
            next_page_id: 2,
            next_snippet_id: 1,
            next_image_id: 1,
            next_gallery_id: 1,
            pages: BTreeMap::from([(root.id, root)]),
            records: HashMap::new(),
            galleries: HashMap::new(),
            snippets: BTreeMap::new(),
            images: BTreeMap::new(),
        };

        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    fn page(&self, id: i64) -> Result<&Page, AppError> {
        self.pages
            .get(&id)
            .ok_or_else(|| AppError::not_found("Page not found", json!({"id": id})))
    }

    fn sibling_with_slug(&self, parent_id: i64, slug: &str, except: Option<i64>) -> bool {
        self.pages.values().any(|p| {
            p.parent_id == Some(parent_id) && p.slug == slug && Some(p.id) != except
        })
    }

    fn next_position(&self, parent_id: i64) -> i32 {
        self.pages
            .values()
            .filter(|p| p.parent_id == Some(parent_id))
            .map(|p| p.position + 1)
            .max()
            .unwrap_or(0)
    }

    fn insert_page(&mut self, new_page: NewPage) -> Result<Page, AppError> {
        let parent = self.page(new_page.parent_id)?;
        let url_path = parent.child_url_path(&new_page.slug);
        let depth = parent.depth + 1;

        if self.sibling_with_slug(new_page.parent_id, &new_page.slug, None) {
            return Err(AppError::conflict(
                "Slug already in use under this parent",
                json!({"parent_id": new_page.parent_id, "slug": new_page.slug}),
            ));
        }

        let now = Utc::now();
        let page = Page {
            id: self.next_page_id,
            parent_id: Some(new_page.parent_id),
            kind: new_page.kind,
            title: new_page.title,
            slug: new_page.slug,
            url_path,
            depth,
            position: self.next_position(new_page.parent_id),
            intro: new_page.intro,
            live: false,
            first_published_at: None,
            last_published_at: None,
            created_at: now,
            updated_at: now,
        };

        self.next_page_id += 1;
        self.pages.insert(page.id, page.clone());
        Ok(page)
    }

    /// Fails if another place already sits at the same coordinates.
    fn check_place_unique(&self, data: &RecordData, except: Option<i64>) -> Result<(), AppError> {
        let RecordDetails::Place(place) = &data.details else {
            return Ok(());
        };
        let point = place.point();

        let taken = self.records.iter().any(|(id, other)| {
            Some(*id) != except
                && matches!(&other.details, RecordDetails::Place(p) if p.point() == point)
        });

        if taken {
            return Err(AppError::conflict(
                "Another place already has these coordinates",
                json!({
                    "latitude": place.latitude,
                    "longitude": place.longitude,
                    "altitude": place.altitude,
                }),
            ));
        }
        Ok(())
    }

    fn gallery(&self, page_id: i64) -> Vec<GalleryImage> {
        let mut gallery = self.galleries.get(&page_id).cloned().unwrap_or_default();
        gallery.sort_by_key(|g| (g.sort_order, g.id));
        gallery
    }
}
