//! DTOs for record endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::application::services::{CreateRecord, UpdateRecord};
use crate::domain::entities::{
    AgentProfile, NewGalleryImage, RecordData, RecordDetails, RecordFields,
};

/// Request body for `POST /api/records`.
///
/// ```json
/// {
///   "parent_id": 4,
///   "title": "Ada Lovelace",
///   "fields": {"same_as": "https://example.org/ada"},
///   "agent": {"emails": [1]},
///   "details": {"type": "person", "gender": "f"}
/// }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRecordRequest {
    pub parent_id: i64,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub fields: RecordFields,

    #[serde(default)]
    pub agent: Option<AgentProfile>,

    pub details: RecordDetails,
}

impl From<CreateRecordRequest> for CreateRecord {
    fn from(req: CreateRecordRequest) -> Self {
        CreateRecord {
            parent_id: req.parent_id,
            title: req.title,
            slug: req.slug,
            data: RecordData {
                fields: req.fields,
                agent: req.agent,
                details: req.details,
            },
        }
    }
}

/// Request body for `PUT /api/records/{id}`. Replaces all record data.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRecordRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[serde(default)]
    pub fields: RecordFields,

    #[serde(default)]
    pub agent: Option<AgentProfile>,

    pub details: RecordDetails,
}

impl From<UpdateRecordRequest> for UpdateRecord {
    fn from(req: UpdateRecordRequest) -> Self {
        UpdateRecord {
            title: req.title,
            data: RecordData {
                fields: req.fields,
                agent: req.agent,
                details: req.details,
            },
        }
    }
}

/// Request body for `PUT /api/records/{id}/gallery`, in display order.
#[derive(Debug, Deserialize, Validate)]
pub struct GalleryRequest {
    #[validate(nested)]
    pub items: Vec<NewGalleryImage>,
}
