//! DTOs for page tree endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::application::services::CreatePage;
use crate::domain::entities::{PageKind, PagePatch};

/// Request body for `POST /api/pages`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePageRequest {
    pub kind: PageKind,
    pub parent_id: i64,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    /// Derived from the title when absent.
    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub intro: Option<String>,
}

impl From<CreatePageRequest> for CreatePage {
    fn from(req: CreatePageRequest) -> Self {
        CreatePage {
            kind: req.kind,
            parent_id: req.parent_id,
            title: req.title,
            slug: req.slug,
            intro: req.intro,
        }
    }
}

/// Request body for `PATCH /api/pages/{id}`.
///
/// # `intro` semantics
///
/// - **Absent** → leave unchanged
/// - **`null`** → clear
/// - **String** → replace
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePageRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub intro: Option<Option<String>>,
}

impl From<UpdatePageRequest> for PagePatch {
    fn from(req: UpdatePageRequest) -> Self {
        PagePatch {
            title: req.title,
            intro: req.intro,
        }
    }
}

/// Request body for `POST /api/pages/{id}/publish`. An empty body publishes now.
#[derive(Debug, Default, Deserialize)]
pub struct PublishRequest {
    #[serde(default)]
    pub at: Option<DateTime<Utc>>,
}

/// Request body for `POST /api/pages/{id}/move`.
#[derive(Debug, Deserialize)]
pub struct MovePageRequest {
    pub parent_id: i64,
}

/// Query string of listing endpoints. `?tag=` counts as no tag.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct TagQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub tag: Option<String>,
}

/// Response of `DELETE /api/pages/{id}`.
#[derive(Debug, Serialize)]
pub struct DeletePageResponse {
    pub id: i64,
    pub removed: u64,
}
