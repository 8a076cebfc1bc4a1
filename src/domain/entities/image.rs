//! Image metadata and ordered page galleries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An uploaded image. Only metadata is stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub id: i64,
    pub title: String,
    pub file: String,
    pub width: i32,
    pub height: i32,
    pub created_at: DateTime<Utc>,
}

/// Input data for registering a new image.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct NewImage {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 255))]
    pub file: String,
    #[validate(range(min = 0))]
    pub width: i32,
    #[validate(range(min = 0))]
    pub height: i32,
}

/// One entry of a page gallery, owned by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    pub id: i64,
    pub image_id: i64,
    pub caption: String,
    pub sort_order: i32,
}

/// Gallery entry as submitted; order of submission is display order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct NewGalleryImage {
    pub image_id: i64,
    #[serde(default)]
    #[validate(length(max = 250))]
    pub caption: String,
}
