use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;

use super::MemoryStore;
use crate::domain::entities::{
    ContentRecord, GalleryImage, NewGalleryImage, NewPage, Page, RecordData, RecordDetails,
};
use crate::domain::repositories::RecordRepository;
use crate::error::AppError;

fn record_not_found(id: i64) -> AppError {
    AppError::not_found("Record not found", json!({"id": id}))
}

#[async_trait]
impl RecordRepository for MemoryStore {
    async fn insert_record(
        &self,
        page: NewPage,
        data: RecordData,
    ) -> Result<ContentRecord, AppError> {
        let mut state = self.state.write().await;

        state.check_place_unique(&data, None)?;
        let page = state.insert_page(page)?;
        state.records.insert(page.id, data.clone());

        Ok(ContentRecord {
            page,
            fields: data.fields,
            agent: data.agent,
            details: data.details,
            gallery: Vec::new(),
        })
    }

    async fn find_record(&self, id: i64) -> Result<Option<ContentRecord>, AppError> {
        let state = self.state.read().await;
        let (Some(page), Some(data)) = (state.pages.get(&id), state.records.get(&id)) else {
            return Ok(None);
        };

        Ok(Some(ContentRecord {
            page: page.clone(),
            fields: data.fields.clone(),
            agent: data.agent.clone(),
            details: data.details.clone(),
            gallery: state.gallery(id),
        }))
    }

    async fn update_record(
        &self,
        id: i64,
        title: Option<String>,
        data: RecordData,
    ) -> Result<ContentRecord, AppError> {
        let mut state = self.state.write().await;
        if !state.records.contains_key(&id) {
            return Err(record_not_found(id));
        }
        state.check_place_unique(&data, Some(id))?;

        let page = state.pages.get_mut(&id).ok_or_else(|| record_not_found(id))?;
        if let Some(title) = title {
            page.title = title;
        }
        page.updated_at = Utc::now();
        let page = page.clone();

        state.records.insert(id, data.clone());

        Ok(ContentRecord {
            page,
            fields: data.fields,
            agent: data.agent,
            details: data.details,
            gallery: state.gallery(id),
        })
    }

    async fn replace_gallery(
        &self,
        id: i64,
        items: Vec<NewGalleryImage>,
    ) -> Result<Vec<GalleryImage>, AppError> {
        let mut state = self.state.write().await;
        if !state.records.contains_key(&id) {
            return Err(record_not_found(id));
        }

        let mut gallery = Vec::with_capacity(items.len());
        for (sort_order, item) in (0..).zip(items) {
            gallery.push(GalleryImage {
                id: state.next_gallery_id,
                image_id: item.image_id,
                caption: item.caption,
                sort_order,
            });
            state.next_gallery_id += 1;
        }

        state.galleries.insert(id, gallery.clone());
        Ok(gallery)
    }

    async fn find_events_by_tag(
        &self,
        tag: &str,
        live_at: Option<DateTime<Utc>>,
    ) -> Result<Vec<Page>, AppError> {
        let state = self.state.read().await;

        let mut events: Vec<Page> = state
            .records
            .iter()
            .filter(|(_, data)| {
                matches!(&data.details, RecordDetails::Event(e) if e.tags.iter().any(|t| t == tag))
            })
            .filter_map(|(id, _)| state.pages.get(id))
            .filter(|page| live_at.is_none_or(|now| page.is_visible_at(now)))
            .cloned()
            .collect();

        if live_at.is_some() {
            events.sort_by(|a, b| {
                b.first_published_at
                    .cmp(&a.first_published_at)
                    .then(b.id.cmp(&a.id))
            });
        } else {
            events.sort_by_key(|p| p.id);
        }

        Ok(events)
    }
}
