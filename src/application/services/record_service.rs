//! Content record service: people, organizations, places and events.

use std::sync::Arc;

use metrics::counter;
use serde_json::{Value, json};
use validator::Validate;

use super::page_service::{check_placement, resolve_slug, validate_title};
use crate::domain::entities::{
    ContentRecord, EventStatus, GalleryImage, Image, NewGalleryImage, NewPage, PageKind, RecordData,
    RecordDetails, SnippetKind,
};
use crate::domain::repositories::{PageRepository, RecordRepository, SnippetRepository};
use crate::domain::vocabularies::validate_address_codes;
use crate::error::AppError;
use crate::utils::web_url::check_web_url;

/// Maximum length of an event tag name.
pub const MAX_TAG_LEN: usize = 100;

/// Maximum length of the short address fields of a place.
pub const MAX_ADDRESS_FIELD_LEN: usize = 250;

/// Input for creating a content page with its record.
#[derive(Debug, Clone)]
pub struct CreateRecord {
    pub parent_id: i64,
    pub title: String,
    pub slug: Option<String>,
    pub data: RecordData,
}

/// Input for replacing the record data of a content page.
#[derive(Debug, Clone)]
pub struct UpdateRecord {
    pub title: Option<String>,
    pub data: RecordData,
}

/// Service for content records.
///
/// Every write is checked before it reaches storage:
/// - placement of the page under its parent
/// - field formats, coordinate ranges and address codes
/// - existence and kind of every referenced page, snippet and image
pub struct RecordService {
    pages: Arc<dyn PageRepository>,
    records: Arc<dyn RecordRepository>,
    snippets: Arc<dyn SnippetRepository>,
}

impl RecordService {
    pub fn new(
        pages: Arc<dyn PageRepository>,
        records: Arc<dyn RecordRepository>,
        snippets: Arc<dyn SnippetRepository>,
    ) -> Self {
        Self {
            pages,
            records,
            snippets,
        }
    }

    /// Creates a content page under `parent_id`. The page kind follows the details.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the parent does not exist.
    /// Returns [`AppError::Placement`] if the parent kind is not allowed.
    /// Returns [`AppError::Validation`] for invalid fields or references.
    /// Returns [`AppError::Conflict`] on slug or coordinate collisions.
    pub async fn create_record(&self, input: CreateRecord) -> Result<ContentRecord, AppError> {
        let data = input.data.normalized();
        let kind = data.details.kind();

        let parent = self
            .pages
            .find_page(input.parent_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Parent page not found", json!({"id": input.parent_id}))
            })?;
        check_placement(kind, &parent)?;

        let title = validate_title(&input.title)?;
        let slug = resolve_slug(input.slug.as_deref(), &title)?;

        self.validate_data(None, &data).await?;

        let record = self
            .records
            .insert_record(
                NewPage {
                    parent_id: parent.id,
                    kind,
                    title,
                    slug,
                    intro: None,
                },
                data,
            )
            .await?;

        counter!("pages_created_total", "kind" => kind.as_str()).increment(1);
        tracing::info!(page_id = record.page.id, %kind, url_path = %record.page.url_path, "record created");

        Ok(record)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no content page has this ID.
    pub async fn get_record(&self, id: i64) -> Result<ContentRecord, AppError> {
        self.records
            .find_record(id)
            .await?
            .ok_or_else(|| AppError::not_found("Record not found", json!({"id": id})))
    }

    /// Replaces the record data of a content page. The kind cannot change.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no content page has this ID.
    /// Returns [`AppError::Validation`] for a kind change, invalid fields or references.
    /// Returns [`AppError::Conflict`] on coordinate collisions.
    pub async fn update_record(
        &self,
        id: i64,
        input: UpdateRecord,
    ) -> Result<ContentRecord, AppError> {
        let existing = self.get_record(id).await?;
        let data = input.data.normalized();

        if data.details.kind() != existing.kind() {
            return Err(AppError::bad_request(
                "The kind of a record cannot change",
                json!({"kind": existing.kind(), "submitted": data.details.kind()}),
            ));
        }

        let title = input.title.as_deref().map(validate_title).transpose()?;
        self.validate_data(Some(id), &data).await?;

        self.records.update_record(id, title, data).await
    }

    /// Replaces the gallery of a record in the submitted order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no content page has this ID.
    /// Returns [`AppError::Validation`] for long captions or unknown images.
    pub async fn replace_gallery(
        &self,
        id: i64,
        items: Vec<NewGalleryImage>,
    ) -> Result<Vec<GalleryImage>, AppError> {
        self.get_record(id).await?;

        for item in &items {
            item.validate()?;
            if self.snippets.find_image(item.image_id).await?.is_none() {
                return Err(AppError::bad_request(
                    "Unknown image in gallery",
                    json!({"image_id": item.image_id}),
                ));
            }
        }

        self.records.replace_gallery(id, items).await
    }

    /// Describes a record as a JSON-LD object using its kind's schema type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no content page has this ID.
    pub async fn structured_data(&self, id: i64) -> Result<Value, AppError> {
        let record = self.get_record(id).await?;
        let image = self.main_image(&record).await?;
        Ok(structured_data(&record, image.as_ref()))
    }

    /// Loads the image of the first gallery entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn main_image(&self, record: &ContentRecord) -> Result<Option<Image>, AppError> {
        match record.main_image() {
            Some(item) => self.snippets.find_image(item.image_id).await,
            None => Ok(None),
        }
    }

    async fn validate_data(&self, self_id: Option<i64>, data: &RecordData) -> Result<(), AppError> {
        let kind = data.details.kind();

        data.fields.validate()?;
        if let Some(same_as) = &data.fields.same_as {
            check_web_url(same_as).map_err(|e| {
                AppError::bad_request(e.to_string(), json!({"field": "same_as"}))
            })?;
        }

        if data.agent.is_some() && !kind.is_agent() {
            return Err(AppError::bad_request(
                "Only people and organizations have an agent profile",
                json!({"kind": kind}),
            ));
        }

        match &data.details {
            RecordDetails::Person(person) => {
                if let Some(id) = self_id
                    && person.friends.contains(&id)
                {
                    return Err(AppError::bad_request(
                        "A person cannot be their own friend",
                        json!({"id": id}),
                    ));
                }
            }
            RecordDetails::Organization(_) => {}
            RecordDetails::Place(place) => {
                place
                    .point()
                    .validate()
                    .map_err(|e| AppError::bad_request(e, json!({"field": "coordinates"})))?;
                for (field, value) in [
                    ("locality", &place.locality),
                    ("region", &place.region),
                    ("postal_code", &place.postal_code),
                    ("country", &place.country),
                ] {
                    if value
                        .as_deref()
                        .is_some_and(|v| v.chars().count() > MAX_ADDRESS_FIELD_LEN)
                    {
                        return Err(AppError::bad_request(
                            "Address field too long",
                            json!({"field": field, "max": MAX_ADDRESS_FIELD_LEN}),
                        ));
                    }
                }
                validate_address_codes(place.country.as_deref(), place.region.as_deref())
                    .map_err(|e| AppError::bad_request(e, json!({"field": "region"})))?;
            }
            RecordDetails::Event(event) => {
                if event.duration < 0 || event.precision < 0 {
                    return Err(AppError::bad_request(
                        "Duration and precision cannot be negative",
                        json!({"duration": event.duration, "precision": event.precision}),
                    ));
                }
                if let Some(tag) = event.tags.iter().find(|t| t.chars().count() > MAX_TAG_LEN) {
                    return Err(AppError::bad_request(
                        "Tag name too long",
                        json!({"tag": tag, "max": MAX_TAG_LEN}),
                    ));
                }
            }
        }

        if let Some(source_id) = data.fields.source_id {
            self.ensure_snippets("source", SnippetKind::Source, &[source_id])
                .await?;
        }
        self.ensure_snippets(
            "categories",
            data.details.category_kind().snippet_kind(),
            data.details.categories(),
        )
        .await?;

        if let Some(agent) = &data.agent {
            self.ensure_snippets("emails", SnippetKind::Email, &agent.emails)
                .await?;
            self.ensure_snippets("phones", SnippetKind::Phone, &agent.phones)
                .await?;
            self.ensure_snippets(
                "social_accounts",
                SnippetKind::SocialAccount,
                &agent.social_accounts,
            )
            .await?;
            self.ensure_snippets("extra_names", SnippetKind::ExtraName, &agent.extra_names)
                .await?;
        }

        for (field, ids, allowed) in data.details.page_references() {
            self.ensure_pages(field, ids, allowed).await?;
        }

        Ok(())
    }

    async fn ensure_snippets(
        &self,
        field: &str,
        kind: SnippetKind,
        ids: &[i64],
    ) -> Result<(), AppError> {
        if ids.is_empty() {
            return Ok(());
        }

        let existing = self
            .snippets
            .find_existing_snippets(kind, ids.to_vec())
            .await?;
        let missing: Vec<i64> = ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::bad_request(
                format!("Unknown {} references", kind.as_str()),
                json!({"field": field, "missing": missing}),
            ))
        }
    }

    async fn ensure_pages(
        &self,
        field: &str,
        ids: &[i64],
        allowed: &[PageKind],
    ) -> Result<(), AppError> {
        if ids.is_empty() {
            return Ok(());
        }

        let found = self.pages.find_page_kinds(ids.to_vec()).await?;
        let invalid: Vec<i64> = ids
            .iter()
            .copied()
            .filter(|id| {
                !found
                    .iter()
                    .any(|(found_id, kind)| found_id == id && allowed.contains(kind))
            })
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(AppError::bad_request(
                "Referenced pages are missing or of the wrong kind",
                json!({"field": field, "invalid": invalid, "allowed_kinds": allowed}),
            ))
        }
    }
}

/// Builds the JSON-LD description of a record.
pub fn structured_data(record: &ContentRecord, main_image: Option<&Image>) -> Value {
    let page = &record.page;
    let mut doc = json!({
        "@context": "http://schema.org",
        "@type": record.kind().schema(),
        "@id": page.url_path,
        "name": page.title,
        "url": page.url_path,
    });

    if let Some(same_as) = &record.fields.same_as {
        doc["sameAs"] = json!(same_as);
    }
    if let Some(description) = &record.fields.body {
        doc["description"] = json!(description);
    }
    if let Some(image) = main_image {
        doc["image"] = json!(image.file);
    }

    match &record.details {
        RecordDetails::Person(person) => {
            if let Some(gender) = person.gender {
                doc["gender"] = json!(gender.label());
            }
        }
        RecordDetails::Organization(org) => {
            if !org.locations.is_empty() {
                doc["location"] = json!(org.locations);
            }
        }
        RecordDetails::Place(place) => {
            doc["geo"] = json!({
                "@type": "GeoCoordinates",
                "latitude": place.latitude,
                "longitude": place.longitude,
                "elevation": place.altitude,
            });
            doc["address"] = json!({
                "@type": "PostalAddress",
                "streetAddress": place.street,
                "addressLocality": place.locality,
                "addressRegion": place.region,
                "postalCode": place.postal_code,
                "addressCountry": place.country,
            });
        }
        RecordDetails::Event(event) => {
            doc["startDate"] = json!(event.start_date.to_rfc3339());
            if event.status == Some(EventStatus::Cancelled) {
                doc["eventStatus"] = json!("http://schema.org/EventCancelled");
            }
            if !event.tags.is_empty() {
                doc["keywords"] = json!(event.tags.join(","));
            }
        }
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        AgentProfile, EventDetails, Gender, Image, OrganizationDetails, Page, PersonDetails,
        PlaceDetails, RecordFields,
    };
    use crate::domain::repositories::{
        MockPageRepository, MockRecordRepository, MockSnippetRepository,
    };
    use chrono::Utc;

    fn page(id: i64, parent_id: Option<i64>, kind: PageKind, url_path: &str) -> Page {
        let now = Utc::now();
        Page {
            id,
            parent_id,
            kind,
            title: format!("Page {id}"),
            slug: format!("page-{id}"),
            url_path: url_path.to_string(),
            depth: 2,
            position: 0,
            intro: None,
            live: false,
            first_published_at: None,
            last_published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn person_data(friends: Vec<i64>) -> RecordData {
        RecordData {
            fields: RecordFields::default(),
            agent: None,
            details: RecordDetails::Person(PersonDetails {
                gender: Some(Gender::Other),
                categories: vec![],
                friends,
            }),
        }
    }

    fn place_details(region: &str) -> PlaceDetails {
        PlaceDetails {
            latitude: "41.8781136".parse().unwrap(),
            longitude: "-87.6297982".parse().unwrap(),
            altitude: None,
            street: Some("78 E Washington St".to_string()),
            locality: Some("Chicago".to_string()),
            region: Some(region.to_string()),
            postal_code: None,
            country: Some("USA".to_string()),
            categories: vec![],
        }
    }

    fn event_details(organizers: Vec<i64>, tags: Vec<String>) -> EventDetails {
        EventDetails {
            start_date: Utc::now(),
            duration: 90,
            precision: 0,
            status: None,
            categories: vec![],
            tags,
            organizers,
        }
    }

    fn record(page: Page, data: RecordData) -> ContentRecord {
        ContentRecord {
            page,
            fields: data.fields,
            agent: data.agent,
            details: data.details,
            gallery: vec![],
        }
    }

    fn service(
        pages: MockPageRepository,
        records: MockRecordRepository,
        snippets: MockSnippetRepository,
    ) -> RecordService {
        RecordService::new(Arc::new(pages), Arc::new(records), Arc::new(snippets))
    }

    fn expect_parent(pages: &mut MockPageRepository, parent: Page) {
        pages
            .expect_find_page()
            .returning(move |_| Ok(Some(parent.clone())));
    }

    #[tokio::test]
    async fn test_create_person_inside_organization() {
        let mut pages = MockPageRepository::new();
        expect_parent(&mut pages, page(4, Some(3), PageKind::Organization, "/orgs/acme/"));

        let mut records = MockRecordRepository::new();
        records
            .expect_insert_record()
            .withf(|new_page, data| {
                new_page.kind == PageKind::Person
                    && new_page.slug == "ada-lovelace"
                    && data.agent == Some(AgentProfile::default())
            })
            .times(1)
            .returning(|new_page, data| {
                Ok(record(
                    page(9, Some(new_page.parent_id), new_page.kind, "/orgs/acme/ada-lovelace/"),
                    data,
                ))
            });

        let created = service(pages, records, MockSnippetRepository::new())
            .create_record(CreateRecord {
                parent_id: 4,
                title: "Ada Lovelace".to_string(),
                slug: None,
                data: person_data(vec![]),
            })
            .await
            .unwrap();

        assert_eq!(created.kind(), PageKind::Person);
        assert!(created.agent.is_some());
    }

    #[tokio::test]
    async fn test_place_under_person_index_is_a_placement_error() {
        let mut pages = MockPageRepository::new();
        expect_parent(&mut pages, page(2, Some(1), PageKind::PersonIndex, "/people/"));

        let result = service(pages, MockRecordRepository::new(), MockSnippetRepository::new())
            .create_record(CreateRecord {
                parent_id: 2,
                title: "Cultural Center".to_string(),
                slug: None,
                data: RecordData {
                    fields: RecordFields::default(),
                    agent: None,
                    details: RecordDetails::Place(place_details("IL")),
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Placement { .. }));
    }

    #[tokio::test]
    async fn test_place_region_must_match_country() {
        let mut pages = MockPageRepository::new();
        expect_parent(&mut pages, page(6, Some(1), PageKind::PlaceIndex, "/places/"));

        let result = service(pages, MockRecordRepository::new(), MockSnippetRepository::new())
            .create_record(CreateRecord {
                parent_id: 6,
                title: "Cultural Center".to_string(),
                slug: None,
                data: RecordData {
                    fields: RecordFields::default(),
                    agent: None,
                    details: RecordDetails::Place(place_details("ON")),
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_place_cannot_carry_agent_profile() {
        let mut pages = MockPageRepository::new();
        expect_parent(&mut pages, page(6, Some(1), PageKind::PlaceIndex, "/places/"));

        let result = service(pages, MockRecordRepository::new(), MockSnippetRepository::new())
            .create_record(CreateRecord {
                parent_id: 6,
                title: "Cultural Center".to_string(),
                slug: None,
                data: RecordData {
                    fields: RecordFields::default(),
                    agent: Some(AgentProfile::default()),
                    details: RecordDetails::Place(place_details("IL")),
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_event_organizer_must_be_an_agent() {
        let mut pages = MockPageRepository::new();
        expect_parent(&mut pages, page(3, Some(1), PageKind::EventIndex, "/events/"));
        pages
            .expect_find_page_kinds()
            .withf(|ids| ids == &vec![6, 7])
            .times(1)
            .returning(|_| Ok(vec![(6, PageKind::Organization), (7, PageKind::Place)]));

        let result = service(pages, MockRecordRepository::new(), MockSnippetRepository::new())
            .create_record(CreateRecord {
                parent_id: 3,
                title: "Opening".to_string(),
                slug: None,
                data: RecordData {
                    fields: RecordFields::default(),
                    agent: None,
                    details: RecordDetails::Event(event_details(vec![6, 7, 6], vec![])),
                },
            })
            .await;

        match result.unwrap_err() {
            AppError::Validation { details, .. } => {
                assert_eq!(details["field"], "organizers");
                assert_eq!(details["invalid"], json!([7]));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_event_tag_length_is_limited() {
        let mut pages = MockPageRepository::new();
        expect_parent(&mut pages, page(3, Some(1), PageKind::EventIndex, "/events/"));

        let result = service(pages, MockRecordRepository::new(), MockSnippetRepository::new())
            .create_record(CreateRecord {
                parent_id: 3,
                title: "Opening".to_string(),
                slug: None,
                data: RecordData {
                    fields: RecordFields::default(),
                    agent: None,
                    details: RecordDetails::Event(event_details(vec![], vec!["x".repeat(101)])),
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_unknown_category_is_rejected() {
        let mut pages = MockPageRepository::new();
        expect_parent(&mut pages, page(5, Some(1), PageKind::OrganizationIndex, "/orgs/"));

        let mut snippets = MockSnippetRepository::new();
        snippets
            .expect_find_existing_snippets()
            .withf(|kind, ids| *kind == SnippetKind::OrganizationCategory && ids == &vec![1, 2])
            .times(1)
            .returning(|_, _| Ok(vec![1]));

        let result = service(pages, MockRecordRepository::new(), snippets)
            .create_record(CreateRecord {
                parent_id: 5,
                title: "Hyde Park Art Center".to_string(),
                slug: None,
                data: RecordData {
                    fields: RecordFields::default(),
                    agent: None,
                    details: RecordDetails::Organization(OrganizationDetails {
                        categories: vec![1, 2],
                        ..Default::default()
                    }),
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_same_as_rejects_non_http_links() {
        let mut pages = MockPageRepository::new();
        expect_parent(&mut pages, page(2, Some(1), PageKind::PersonIndex, "/people/"));

        let mut data = person_data(vec![]);
        data.fields.same_as = Some("ftp://example.com/ada".to_string());

        let result = service(pages, MockRecordRepository::new(), MockSnippetRepository::new())
            .create_record(CreateRecord {
                parent_id: 2,
                title: "Ada".to_string(),
                slug: None,
                data,
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_cannot_change_kind() {
        let existing = record(
            page(9, Some(2), PageKind::Person, "/people/ada/"),
            person_data(vec![]).normalized(),
        );
        let mut records = MockRecordRepository::new();
        records
            .expect_find_record()
            .returning(move |_| Ok(Some(existing.clone())));

        let result = service(MockPageRepository::new(), records, MockSnippetRepository::new())
            .update_record(
                9,
                UpdateRecord {
                    title: None,
                    data: RecordData {
                        fields: RecordFields::default(),
                        agent: None,
                        details: RecordDetails::Organization(OrganizationDetails::default()),
                    },
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_person_cannot_befriend_themselves() {
        let existing = record(
            page(9, Some(2), PageKind::Person, "/people/ada/"),
            person_data(vec![]).normalized(),
        );
        let mut records = MockRecordRepository::new();
        records
            .expect_find_record()
            .returning(move |_| Ok(Some(existing.clone())));

        let result = service(MockPageRepository::new(), records, MockSnippetRepository::new())
            .update_record(
                9,
                UpdateRecord {
                    title: None,
                    data: person_data(vec![9]),
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_gallery_requires_known_images() {
        let existing = record(
            page(9, Some(2), PageKind::Person, "/people/ada/"),
            person_data(vec![]).normalized(),
        );
        let mut records = MockRecordRepository::new();
        records
            .expect_find_record()
            .returning(move |_| Ok(Some(existing.clone())));

        let mut snippets = MockSnippetRepository::new();
        snippets.expect_find_image().returning(|id| {
            Ok((id == 1).then(|| Image {
                id,
                title: "Portrait".to_string(),
                file: "original_images/portrait.jpg".to_string(),
                width: 800,
                height: 600,
                created_at: Utc::now(),
            }))
        });

        let result = service(MockPageRepository::new(), records, snippets)
            .replace_gallery(
                9,
                vec![
                    NewGalleryImage {
                        image_id: 1,
                        caption: "Portrait".to_string(),
                    },
                    NewGalleryImage {
                        image_id: 2,
                        caption: String::new(),
                    },
                ],
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[test]
    fn test_structured_data_for_place() {
        let place = record(
            page(12, Some(6), PageKind::Place, "/places/cultural-center/"),
            RecordData {
                fields: RecordFields {
                    same_as: Some("https://en.wikipedia.org/wiki/Chicago_Cultural_Center".into()),
                    ..Default::default()
                },
                agent: None,
                details: RecordDetails::Place(place_details("IL")),
            },
        );

        let doc = structured_data(&place, None);

        assert_eq!(doc["@type"], "http://schema.org/Place");
        assert_eq!(doc["@id"], "/places/cultural-center/");
        assert_eq!(doc["geo"]["latitude"], "41.8781136");
        assert_eq!(doc["address"]["addressRegion"], "IL");
        assert_eq!(
            doc["sameAs"],
            "https://en.wikipedia.org/wiki/Chicago_Cultural_Center"
        );
    }

    #[test]
    fn test_structured_data_for_cancelled_event() {
        let mut details = event_details(vec![], vec!["jazz".into(), "live".into()]);
        details.status = Some(EventStatus::Cancelled);
        let event = record(
            page(20, Some(3), PageKind::Event, "/events/gig/"),
            RecordData {
                fields: RecordFields::default(),
                agent: None,
                details: RecordDetails::Event(details),
            },
        );

        let doc = structured_data(&event, None);

        assert_eq!(doc["@type"], "http://schema.org/Event");
        assert_eq!(doc["eventStatus"], "http://schema.org/EventCancelled");
        assert_eq!(doc["keywords"], "jazz,live");
    }

    #[test]
    fn test_structured_data_names_main_image() {
        let person = record(
            page(9, Some(2), PageKind::Person, "/people/ada/"),
            person_data(vec![]).normalized(),
        );
        let image = Image {
            id: 1,
            title: "Portrait".to_string(),
            file: "original_images/portrait.jpg".to_string(),
            width: 800,
            height: 600,
            created_at: Utc::now(),
        };

        assert!(structured_data(&person, None).get("image").is_none());
        assert_eq!(
            structured_data(&person, Some(&image))["image"],
            "original_images/portrait.jpg"
        );
    }
}
