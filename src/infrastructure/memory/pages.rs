use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;

use super::MemoryStore;
use crate::domain::entities::{NewPage, Page, PageKind, PagePatch};
use crate::domain::repositories::PageRepository;
use crate::error::AppError;

#[async_trait]
impl PageRepository for MemoryStore {
    async fn root_page(&self) -> Result<Page, AppError> {
        let state = self.state.read().await;
        state
            .pages
            .values()
            .find(|p| p.is_root())
            .cloned()
            .ok_or_else(|| AppError::internal("Root page is missing", json!({})))
    }

    async fn find_page(&self, id: i64) -> Result<Option<Page>, AppError> {
        Ok(self.state.read().await.pages.get(&id).cloned())
    }

    async fn find_child_by_slug(
        &self,
        parent_id: i64,
        slug: &str,
    ) -> Result<Option<Page>, AppError> {
        let state = self.state.read().await;
        Ok(state
            .pages
            .values()
            .find(|p| p.parent_id == Some(parent_id) && p.slug == slug)
            .cloned())
    }

    async fn list_pages(&self) -> Result<Vec<Page>, AppError> {
        let state = self.state.read().await;
        let mut pages: Vec<Page> = state.pages.values().cloned().collect();
        pages.sort_by(|a, b| a.url_path.cmp(&b.url_path));
        Ok(pages)
    }

    async fn list_children(&self, parent_id: i64) -> Result<Vec<Page>, AppError> {
        let state = self.state.read().await;
        let mut children: Vec<Page> = state
            .pages
            .values()
            .filter(|p| p.parent_id == Some(parent_id))
            .cloned()
            .collect();
        children.sort_by_key(|p| (p.position, p.id));
        Ok(children)
    }

    async fn list_live_children(
        &self,
        parent_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<Page>, AppError> {
        let state = self.state.read().await;
        let mut children: Vec<Page> = state
            .pages
            .values()
            .filter(|p| p.parent_id == Some(parent_id) && p.is_visible_at(now))
            .cloned()
            .collect();
        children.sort_by(|a, b| {
            b.first_published_at
                .cmp(&a.first_published_at)
                .then(b.id.cmp(&a.id))
        });
        Ok(children)
    }

    async fn find_page_kinds(&self, ids: Vec<i64>) -> Result<Vec<(i64, PageKind)>, AppError> {
        let state = self.state.read().await;
        Ok(ids
            .into_iter()
            .filter_map(|id| state.pages.get(&id).map(|p| (id, p.kind)))
            .collect())
    }

    async fn insert_page(&self, new_page: NewPage) -> Result<Page, AppError> {
        self.state.write().await.insert_page(new_page)
    }

    async fn update_page(&self, id: i64, patch: PagePatch) -> Result<Page, AppError> {
        let mut state = self.state.write().await;
        let page = state
            .pages
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Page not found", json!({"id": id})))?;

        if let Some(title) = patch.title {
            page.title = title;
        }
        if let Some(intro) = patch.intro {
            page.intro = intro;
        }
        page.updated_at = Utc::now();

        Ok(page.clone())
    }

    async fn save_publication(
        &self,
        id: i64,
        live: bool,
        first_published_at: Option<DateTime<Utc>>,
        last_published_at: Option<DateTime<Utc>>,
    ) -> Result<Page, AppError> {
        let mut state = self.state.write().await;
        let page = state
            .pages
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Page not found", json!({"id": id})))?;

        page.live = live;
        page.first_published_at = first_published_at;
        page.last_published_at = last_published_at;
        page.updated_at = Utc::now();

        Ok(page.clone())
    }

    async fn move_page(&self, id: i64, new_parent_id: i64) -> Result<Page, AppError> {
        let mut state = self.state.write().await;

        let page = state.page(id)?.clone();
        let parent = state.page(new_parent_id)?.clone();

        if state.sibling_with_slug(parent.id, &page.slug, Some(page.id)) {
            return Err(AppError::conflict(
                "Slug already in use under this parent",
                json!({"parent_id": parent.id, "slug": page.slug}),
            ));
        }

        let old_path = page.url_path.clone();
        let new_path = parent.child_url_path(&page.slug);
        let depth_shift = parent.depth + 1 - page.depth;
        let position = state.next_position(parent.id);
        let now = Utc::now();

        for node in state.pages.values_mut() {
            if let Some(rest) = node.url_path.strip_prefix(&old_path) {
                node.url_path = format!("{new_path}{rest}");
                node.depth += depth_shift;
            }
        }

        let moved = state
            .pages
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Page not found", json!({"id": id})))?;
        moved.parent_id = Some(parent.id);
        moved.position = position;
        moved.updated_at = now;

        Ok(moved.clone())
    }

    async fn delete_page(&self, id: i64) -> Result<u64, AppError> {
        let mut state = self.state.write().await;
        let prefix = state.page(id)?.url_path.clone();

        let doomed: Vec<i64> = state
            .pages
            .values()
            .filter(|p| p.url_path.starts_with(&prefix))
            .map(|p| p.id)
            .collect();

        for page_id in &doomed {
            state.pages.remove(page_id);
            state.records.remove(page_id);
            state.galleries.remove(page_id);
        }
        for record in state.records.values_mut() {
            for page_id in &doomed {
                record.details.forget_page(*page_id);
            }
        }

        Ok(doomed.len() as u64)
    }
}
