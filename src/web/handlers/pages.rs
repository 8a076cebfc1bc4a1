//! Page rendering handlers.
//!
//! Index pages render their listing, tag index pages filter it by the `tag`
//! query parameter and content pages render their record together with a
//! JSON-LD block.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde_json::json;

use crate::api::dto::pages::TagQuery;
use crate::application::services::record_service::structured_data;
use crate::domain::entities::{
    ContentRecord, EventStatus, GalleryImage, Image, Page, PageKind, RecordDetails,
};
use crate::error::AppError;
use crate::state::AppState;

/// One linked entry of a listing.
pub struct Entry {
    pub title: String,
    pub url: String,
    pub published: String,
}

impl From<Page> for Entry {
    fn from(page: Page) -> Self {
        Self {
            published: page
                .first_published_at
                .map(format_date)
                .unwrap_or_default(),
            title: page.title,
            url: page.url_path,
        }
    }
}

fn format_date(at: DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// Template for the home page and the person, organization, place and event indexes.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub site_name: String,
    pub title: String,
    pub intro: Option<String>,
    pub entries: Vec<Entry>,
}

/// Template for event tag index pages.
#[derive(Template, WebTemplate)]
#[template(path = "tag_index.html")]
pub struct TagIndexTemplate {
    pub site_name: String,
    pub title: String,
    pub intro: Option<String>,
    pub tag: Option<String>,
    pub entries: Vec<Entry>,
}

/// One gallery image of a record page.
pub struct Figure {
    pub file: String,
    pub alt: String,
    pub caption: String,
}

impl Figure {
    fn new(item: &GalleryImage, image: &Image) -> Self {
        Self {
            file: image.file.clone(),
            alt: image.title.clone(),
            caption: item.caption.clone(),
        }
    }
}

/// Template for person, organization, place and event pages.
#[derive(Template, WebTemplate)]
#[template(path = "record.html")]
pub struct RecordTemplate {
    pub site_name: String,
    pub title: String,
    pub kind_name: &'static str,
    pub body: Option<String>,
    pub same_as: Option<String>,
    pub cpl_url: Option<&'static str>,
    pub address: Option<String>,
    pub starts: Option<String>,
    pub cancelled: bool,
    pub tags: Vec<String>,
    pub main_image: Option<Figure>,
    pub gallery: Vec<Figure>,
    pub structured_data: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub site_name: String,
    pub path: String,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(
    State(state): State<AppState>,
    query: Query<TagQuery>,
) -> Result<Response, AppError> {
    render_path(&state, "/", query.0.tag).await
}

/// Renders a published page by url path.
///
/// # Endpoint
///
/// `GET /{*path}`
///
/// Drafts, scheduled pages and unknown paths answer 404.
pub async fn page_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    query: Query<TagQuery>,
) -> Result<Response, AppError> {
    render_path(&state, &path, query.0.tag).await
}

async fn render_path(
    state: &AppState,
    path: &str,
    tag: Option<String>,
) -> Result<Response, AppError> {
    let site_name = state.site_name.to_string();

    let Some(page) = state.page_service.resolve_path(path).await? else {
        tracing::debug!(path = %path, "page not found");
        let template = NotFoundTemplate {
            site_name,
            path: format!("/{}", path.trim_start_matches('/')),
        };
        return Ok((StatusCode::NOT_FOUND, template).into_response());
    };

    match page.kind {
        PageKind::Root => {
            let now = Utc::now();
            let entries = state
                .page_service
                .children(page.id)
                .await?
                .into_iter()
                .filter(|child| child.is_visible_at(now))
                .map(Entry::from)
                .collect();

            Ok(IndexTemplate {
                site_name,
                title: page.title,
                intro: page.intro,
                entries,
            }
            .into_response())
        }
        PageKind::EventTagIndex => {
            let entries = state
                .page_service
                .listing(page.id, tag.as_deref())
                .await?
                .into_iter()
                .map(Entry::from)
                .collect();

            Ok(TagIndexTemplate {
                site_name,
                title: page.title,
                intro: page.intro,
                tag,
                entries,
            }
            .into_response())
        }
        kind if kind.is_index() => {
            let entries = state
                .page_service
                .listing(page.id, None)
                .await?
                .into_iter()
                .map(Entry::from)
                .collect();

            Ok(IndexTemplate {
                site_name,
                title: page.title,
                intro: page.intro,
                entries,
            }
            .into_response())
        }
        _ => {
            let record = state.record_service.get_record(page.id).await?;
            let images = state.snippet_service.list_images().await?;

            let main = record
                .main_image()
                .and_then(|item| find_image(&images, item).map(|image| (item, image)));
            let data = structured_data(&record, main.map(|(_, image)| image));
            let main_image = main.map(|(item, image)| Figure::new(item, image));
            let gallery = record
                .gallery
                .iter()
                .skip(1)
                .filter_map(|item| find_image(&images, item).map(|image| Figure::new(item, image)))
                .collect();
            let json_ld = serde_json::to_string(&data)
                .map_err(|e| {
                    AppError::internal(
                        "Failed to encode structured data",
                        json!({"reason": e.to_string()}),
                    )
                })?
                .replace("</", "<\\/");

            Ok(
                record_template(site_name, record, main_image, gallery, json_ld)
                    .into_response(),
            )
        }
    }
}

fn find_image<'a>(images: &'a [Image], item: &GalleryImage) -> Option<&'a Image> {
    images.iter().find(|image| image.id == item.image_id)
}

fn record_template(
    site_name: String,
    record: ContentRecord,
    main_image: Option<Figure>,
    gallery: Vec<Figure>,
    structured_data: String,
) -> RecordTemplate {
    let kind_name = record.kind().verbose_name();

    let (address, starts, cancelled, tags) = match &record.details {
        RecordDetails::Place(place) => (Some(place.to_string()), None, false, Vec::new()),
        RecordDetails::Event(event) => (
            None,
            Some(format_date(event.start_date)),
            matches!(event.status, Some(EventStatus::Cancelled)),
            event.tags.clone(),
        ),
        RecordDetails::Person(_) | RecordDetails::Organization(_) => {
            (None, None, false, Vec::new())
        }
    };

    RecordTemplate {
        site_name,
        title: record.page.title,
        kind_name,
        cpl_url: record.fields.cpl_url(),
        body: record.fields.body,
        same_as: record.fields.same_as,
        address,
        starts,
        cancelled,
        tags,
        main_image,
        gallery,
        structured_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(format_date(at), "March 7, 2024");
    }

    #[test]
    fn test_tag_index_escapes_tag() {
        let html = TagIndexTemplate {
            site_name: "Visualist".to_string(),
            title: "Tags".to_string(),
            intro: None,
            tag: Some("<b>jazz</b>".to_string()),
            entries: Vec::new(),
        }
        .render()
        .unwrap();

        assert!(html.contains("jazz"));
        assert!(!html.contains("<b>jazz"));
    }
}
