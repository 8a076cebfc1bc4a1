use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use super::{MemoryStore, State};
use crate::domain::entities::{Image, NewImage, Snippet, SnippetData, SnippetKind};
use crate::domain::repositories::SnippetRepository;
use crate::error::AppError;

fn snippet_not_found(kind: SnippetKind, id: i64) -> AppError {
    AppError::not_found("Snippet not found", json!({"kind": kind, "id": id}))
}

impl State {
    fn check_snippet_unique(&self, data: &SnippetData, except: Option<i64>) -> Result<(), AppError> {
        let Some(key) = data.unique_key() else {
            return Ok(());
        };
        let kind = data.kind();

        let taken = self.snippets.iter().any(|(id, other)| {
            Some(*id) != except && other.kind() == kind && other.unique_key().as_ref() == Some(&key)
        });

        if taken {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({"kind": kind, "key": key}),
            ));
        }
        Ok(())
    }

    fn source_references(&self, source_id: i64) -> i64 {
        self.records
            .values()
            .filter(|r| r.fields.source_id == Some(source_id))
            .count() as i64
    }

    /// Removes a deleted snippet from every set that can hold it.
    fn unlink_snippet(&mut self, kind: SnippetKind, id: i64) {
        match kind {
            SnippetKind::Email
            | SnippetKind::Phone
            | SnippetKind::SocialAccount
            | SnippetKind::ExtraName => {
                for record in self.records.values_mut() {
                    if let Some(agent) = record.agent.as_mut() {
                        agent.forget_snippet(id);
                    }
                }
            }
            SnippetKind::Website => {
                for data in self.snippets.values_mut() {
                    if let SnippetData::Source(source) = data {
                        source.same_as.retain(|w| *w != id);
                    }
                }
            }
            SnippetKind::Source => {}
            SnippetKind::PersonCategory
            | SnippetKind::OrganizationCategory
            | SnippetKind::PlaceCategory
            | SnippetKind::EventCategory => {
                for record in self.records.values_mut() {
                    if record.details.category_kind().snippet_kind() == kind {
                        record.details.forget_category(id);
                    }
                }
            }
        }
    }
}

#[async_trait]
impl SnippetRepository for MemoryStore {
    async fn insert_snippet(&self, data: SnippetData) -> Result<Snippet, AppError> {
        let mut state = self.state.write().await;
        state.check_snippet_unique(&data, None)?;

        let id = state.next_snippet_id;
        state.next_snippet_id += 1;
        state.snippets.insert(id, data.clone());

        Ok(Snippet { id, data })
    }

    async fn find_snippet(&self, kind: SnippetKind, id: i64) -> Result<Option<Snippet>, AppError> {
        let state = self.state.read().await;
        Ok(state
            .snippets
            .get(&id)
            .filter(|data| data.kind() == kind)
            .map(|data| Snippet {
                id,
                data: data.clone(),
            }))
    }

    async fn list_snippets(&self, kind: SnippetKind) -> Result<Vec<Snippet>, AppError> {
        let state = self.state.read().await;
        Ok(state
            .snippets
            .iter()
            .filter(|(_, data)| data.kind() == kind)
            .map(|(id, data)| Snippet {
                id: *id,
                data: data.clone(),
            })
            .collect())
    }

    async fn find_existing_snippets(
        &self,
        kind: SnippetKind,
        ids: Vec<i64>,
    ) -> Result<Vec<i64>, AppError> {
        let state = self.state.read().await;
        Ok(ids
            .into_iter()
            .filter(|id| state.snippets.get(id).is_some_and(|d| d.kind() == kind))
            .collect())
    }

    async fn update_snippet(&self, id: i64, data: SnippetData) -> Result<Snippet, AppError> {
        let mut state = self.state.write().await;
        let kind = data.kind();

        if !state.snippets.get(&id).is_some_and(|d| d.kind() == kind) {
            return Err(snippet_not_found(kind, id));
        }
        state.check_snippet_unique(&data, Some(id))?;
        state.snippets.insert(id, data.clone());

        Ok(Snippet { id, data })
    }

    async fn delete_snippet(&self, kind: SnippetKind, id: i64) -> Result<(), AppError> {
        let mut state = self.state.write().await;

        if !state.snippets.get(&id).is_some_and(|d| d.kind() == kind) {
            return Err(snippet_not_found(kind, id));
        }
        if kind == SnippetKind::Source && state.source_references(id) > 0 {
            return Err(AppError::conflict(
                "Source is still cited by records",
                json!({"id": id}),
            ));
        }

        state.snippets.remove(&id);
        state.unlink_snippet(kind, id);
        Ok(())
    }

    async fn count_source_references(&self, source_id: i64) -> Result<i64, AppError> {
        Ok(self.state.read().await.source_references(source_id))
    }

    async fn insert_image(&self, image: NewImage) -> Result<Image, AppError> {
        let mut state = self.state.write().await;
        let image = Image {
            id: state.next_image_id,
            title: image.title,
            file: image.file,
            width: image.width,
            height: image.height,
            created_at: Utc::now(),
        };
        state.next_image_id += 1;
        state.images.insert(image.id, image.clone());
        Ok(image)
    }

    async fn find_image(&self, id: i64) -> Result<Option<Image>, AppError> {
        Ok(self.state.read().await.images.get(&id).cloned())
    }

    async fn list_images(&self) -> Result<Vec<Image>, AppError> {
        Ok(self.state.read().await.images.values().cloned().collect())
    }

    async fn delete_image(&self, id: i64) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        if state.images.remove(&id).is_none() {
            return Err(AppError::not_found("Image not found", json!({"id": id})));
        }

        for data in state.snippets.values_mut() {
            if let SnippetData::Category(category) = data
                && category.icon_id == Some(id)
            {
                category.icon_id = None;
            }
        }
        for gallery in state.galleries.values_mut() {
            gallery.retain(|g| g.image_id != id);
        }

        Ok(())
    }
}
