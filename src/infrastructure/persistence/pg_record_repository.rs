//! PostgreSQL implementation of the record repository.
//!
//! A record is spread over one row per component (`records`, `agents` and the
//! kind table) plus one join table per relationship set. Join rows are read back
//! ordered by their serial id, which keeps the order the set was written in.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgConnection, PgPool};
use std::sync::Arc;

use super::constraint_error;
use super::pg_page_repository::{PAGE_COLUMNS, PageRow, fetch_page, insert_page_in, into_pages};
use crate::domain::entities::{
    AgentProfile, ContentRecord, EventDetails, EventStatus, GalleryImage, Gender, NewGalleryImage,
    NewPage, OrganizationDetails, Page, PageKind, PersonDetails, PlaceDetails, RecordData,
    RecordDetails, RecordFields,
};
use crate::domain::geo::Coordinate;
use crate::domain::repositories::RecordRepository;
use crate::error::AppError;

/// A relationship set stored as `(owner, member)` rows.
struct JoinTable {
    table: &'static str,
    owner: &'static str,
    member: &'static str,
}

const RECORD_CATEGORIES: JoinTable = JoinTable {
    table: "record_categories",
    owner: "page_id",
    member: "category_id",
};
const AGENT_EMAILS: JoinTable = JoinTable {
    table: "agent_emails",
    owner: "agent_id",
    member: "email_id",
};
const AGENT_PHONES: JoinTable = JoinTable {
    table: "agent_phones",
    owner: "agent_id",
    member: "phone_id",
};
const AGENT_SOCIAL_ACCOUNTS: JoinTable = JoinTable {
    table: "agent_social_accounts",
    owner: "agent_id",
    member: "social_account_id",
};
const AGENT_EXTRA_NAMES: JoinTable = JoinTable {
    table: "agent_extra_names",
    owner: "agent_id",
    member: "extra_name_id",
};
const PERSON_FRIENDS: JoinTable = JoinTable {
    table: "person_friends",
    owner: "person_id",
    member: "friend_id",
};
const ORGANIZATION_EMPLOYEES: JoinTable = JoinTable {
    table: "organization_employees",
    owner: "organization_id",
    member: "person_id",
};
const ORGANIZATION_MEMBERS: JoinTable = JoinTable {
    table: "organization_members",
    owner: "organization_id",
    member: "person_id",
};
const ORGANIZATION_LOCATIONS: JoinTable = JoinTable {
    table: "organization_locations",
    owner: "organization_id",
    member: "place_id",
};
const EVENT_ORGANIZERS: JoinTable = JoinTable {
    table: "event_organizers",
    owner: "event_id",
    member: "agent_id",
};
const EVENT_TAGS: JoinTable = JoinTable {
    table: "event_tags",
    owner: "event_id",
    member: "tag",
};

impl JoinTable {
    async fn load<T>(&self, conn: &mut PgConnection, owner_id: i64) -> Result<Vec<T>, AppError>
    where
        T: for<'r> sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres> + Send + Unpin,
    {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = $1 ORDER BY id",
            self.member, self.table, self.owner
        );
        Ok(sqlx::query_scalar(&sql)
            .bind(owner_id)
            .fetch_all(conn)
            .await?)
    }

    async fn replace<T>(
        &self,
        conn: &mut PgConnection,
        owner_id: i64,
        members: &[T],
    ) -> Result<(), AppError>
    where
        T: for<'q> sqlx::Encode<'q, sqlx::Postgres>
            + sqlx::Type<sqlx::Postgres>
            + Clone
            + Send
            + Sync
            + 'static,
        Vec<T>: for<'q> sqlx::Encode<'q, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
    {
        let delete = format!("DELETE FROM {} WHERE {} = $1", self.table, self.owner);
        sqlx::query(&delete)
            .bind(owner_id)
            .execute(&mut *conn)
            .await?;

        if members.is_empty() {
            return Ok(());
        }

        let insert = format!(
            "INSERT INTO {table} ({owner}, {member}) \
             SELECT $1, m FROM UNNEST($2) WITH ORDINALITY AS t(m, n) ORDER BY n",
            table = self.table,
            owner = self.owner,
            member = self.member,
        );
        sqlx::query(&insert)
            .bind(owner_id)
            .bind(members.to_vec())
            .execute(&mut *conn)
            .await
            .map_err(constraint_error)?;
        Ok(())
    }
}

#[derive(Debug, FromRow)]
struct FieldsRow {
    body: Option<String>,
    same_as: Option<String>,
    oclc_fast_id: Option<i32>,
    in_cpl_artistfiles: bool,
    source_id: Option<i64>,
}

#[derive(Debug, FromRow)]
struct PlaceRow {
    latitude: String,
    longitude: String,
    altitude: Option<String>,
    street: Option<String>,
    locality: Option<String>,
    region: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
}

#[derive(Debug, FromRow)]
struct EventRow {
    start_date: DateTime<Utc>,
    duration: i32,
    precision: i32,
    status: String,
}

#[derive(Debug, FromRow)]
struct GalleryRow {
    id: i64,
    image_id: i64,
    caption: String,
    sort_order: i32,
}

impl From<GalleryRow> for GalleryImage {
    fn from(row: GalleryRow) -> Self {
        GalleryImage {
            id: row.id,
            image_id: row.image_id,
            caption: row.caption,
            sort_order: row.sort_order,
        }
    }
}

fn record_not_found(id: i64) -> AppError {
    AppError::not_found("Record not found", json!({"id": id}))
}

fn corrupt(id: i64, reason: impl ToString) -> AppError {
    AppError::internal(
        "Corrupt record row",
        json!({"id": id, "reason": reason.to_string()}),
    )
}

fn coordinate(id: i64, value: &str) -> Result<Coordinate, AppError> {
    value.parse().map_err(|e| corrupt(id, e))
}

/// Writes every component of a record, replacing the relationship sets.
///
/// Component rows are upserted rather than deleted: removing an `agents` or
/// `persons` row would cascade into other records' sets that point at this page.
async fn write_record(conn: &mut PgConnection, id: i64, data: &RecordData) -> Result<(), AppError> {
    let fields = &data.fields;
    sqlx::query(
        "INSERT INTO records (page_id, body, same_as, oclc_fast_id, in_cpl_artistfiles, source_id) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         ON CONFLICT (page_id) DO UPDATE SET body = EXCLUDED.body, same_as = EXCLUDED.same_as, \
         oclc_fast_id = EXCLUDED.oclc_fast_id, in_cpl_artistfiles = EXCLUDED.in_cpl_artistfiles, \
         source_id = EXCLUDED.source_id",
    )
    .bind(id)
    .bind(&fields.body)
    .bind(&fields.same_as)
    .bind(fields.oclc_fast_id)
    .bind(fields.in_cpl_artistfiles)
    .bind(fields.source_id)
    .execute(&mut *conn)
    .await
    .map_err(constraint_error)?;

    RECORD_CATEGORIES
        .replace(conn, id, data.details.categories())
        .await?;

    if let Some(agent) = &data.agent {
        sqlx::query(
            "INSERT INTO agents (page_id, getty_ulan_id) VALUES ($1, $2) \
             ON CONFLICT (page_id) DO UPDATE SET getty_ulan_id = EXCLUDED.getty_ulan_id",
        )
        .bind(id)
        .bind(agent.getty_ulan_id)
        .execute(&mut *conn)
        .await?;

        AGENT_EMAILS.replace(conn, id, &agent.emails).await?;
        AGENT_PHONES.replace(conn, id, &agent.phones).await?;
        AGENT_SOCIAL_ACCOUNTS
            .replace(conn, id, &agent.social_accounts)
            .await?;
        AGENT_EXTRA_NAMES
            .replace(conn, id, &agent.extra_names)
            .await?;
    }

    match &data.details {
        RecordDetails::Person(person) => {
            sqlx::query(
                "INSERT INTO persons (page_id, gender) VALUES ($1, $2) \
                 ON CONFLICT (page_id) DO UPDATE SET gender = EXCLUDED.gender",
            )
            .bind(id)
            .bind(person.gender.map(|g| g.as_str()))
            .execute(&mut *conn)
            .await?;

            PERSON_FRIENDS.replace(conn, id, &person.friends).await?;
        }
        RecordDetails::Organization(org) => {
            sqlx::query(
                "INSERT INTO organizations (page_id, nonprofit) VALUES ($1, $2) \
                 ON CONFLICT (page_id) DO UPDATE SET nonprofit = EXCLUDED.nonprofit",
            )
            .bind(id)
            .bind(org.nonprofit)
            .execute(&mut *conn)
            .await?;

            ORGANIZATION_EMPLOYEES
                .replace(conn, id, &org.employees)
                .await?;
            ORGANIZATION_MEMBERS.replace(conn, id, &org.members).await?;
            ORGANIZATION_LOCATIONS
                .replace(conn, id, &org.locations)
                .await?;
        }
        RecordDetails::Place(place) => {
            sqlx::query(
                "INSERT INTO places (page_id, latitude, longitude, altitude, street, locality, \
                 region, postal_code, country) \
                 VALUES ($1, $2::NUMERIC(10, 7), $3::NUMERIC(10, 7), $4::NUMERIC(10, 7), \
                 $5, $6, $7, $8, $9) \
                 ON CONFLICT (page_id) DO UPDATE SET latitude = EXCLUDED.latitude, \
                 longitude = EXCLUDED.longitude, altitude = EXCLUDED.altitude, \
                 street = EXCLUDED.street, locality = EXCLUDED.locality, \
                 region = EXCLUDED.region, postal_code = EXCLUDED.postal_code, \
                 country = EXCLUDED.country",
            )
            .bind(id)
            .bind(place.latitude.to_string())
            .bind(place.longitude.to_string())
            .bind(place.altitude.map(|a| a.to_string()))
            .bind(&place.street)
            .bind(&place.locality)
            .bind(&place.region)
            .bind(&place.postal_code)
            .bind(&place.country)
            .execute(&mut *conn)
            .await
            .map_err(constraint_error)?;
        }
        RecordDetails::Event(event) => {
            sqlx::query(
                "INSERT INTO events (page_id, start_date, duration, \"precision\", status) \
                 VALUES ($1, $2, $3, $4, $5) \
                 ON CONFLICT (page_id) DO UPDATE SET start_date = EXCLUDED.start_date, \
                 duration = EXCLUDED.duration, \"precision\" = EXCLUDED.\"precision\", \
                 status = EXCLUDED.status",
            )
            .bind(id)
            .bind(event.start_date)
            .bind(event.duration)
            .bind(event.precision)
            .bind(event.status.map(|s| s.as_str()).unwrap_or_default())
            .execute(&mut *conn)
            .await?;

            EVENT_ORGANIZERS
                .replace(conn, id, &event.organizers)
                .await?;
            EVENT_TAGS.replace(conn, id, &event.tags).await?;
        }
    }

    Ok(())
}

async fn load_gallery(conn: &mut PgConnection, id: i64) -> Result<Vec<GalleryImage>, AppError> {
    let rows = sqlx::query_as::<_, GalleryRow>(
        "SELECT id, image_id, caption, sort_order FROM gallery_images \
         WHERE page_id = $1 ORDER BY sort_order, id",
    )
    .bind(id)
    .fetch_all(conn)
    .await?;
    Ok(rows.into_iter().map(GalleryImage::from).collect())
}

async fn load_agent(conn: &mut PgConnection, id: i64) -> Result<AgentProfile, AppError> {
    let getty_ulan_id: Option<i32> =
        sqlx::query_scalar("SELECT getty_ulan_id FROM agents WHERE page_id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .flatten();

    Ok(AgentProfile {
        getty_ulan_id,
        emails: AGENT_EMAILS.load(conn, id).await?,
        phones: AGENT_PHONES.load(conn, id).await?,
        social_accounts: AGENT_SOCIAL_ACCOUNTS.load(conn, id).await?,
        extra_names: AGENT_EXTRA_NAMES.load(conn, id).await?,
    })
}

async fn load_details(
    conn: &mut PgConnection,
    id: i64,
    kind: PageKind,
) -> Result<RecordDetails, AppError> {
    let categories: Vec<i64> = RECORD_CATEGORIES.load(conn, id).await?;

    let details = match kind {
        PageKind::Person => {
            let gender: Option<String> =
                sqlx::query_scalar("SELECT gender FROM persons WHERE page_id = $1")
                    .bind(id)
                    .fetch_optional(&mut *conn)
                    .await?
                    .flatten();
            RecordDetails::Person(PersonDetails {
                gender: gender.as_deref().and_then(Gender::from_code),
                categories,
                friends: PERSON_FRIENDS.load(conn, id).await?,
            })
        }
        PageKind::Organization => {
            let nonprofit: Option<bool> =
                sqlx::query_scalar("SELECT nonprofit FROM organizations WHERE page_id = $1")
                    .bind(id)
                    .fetch_optional(&mut *conn)
                    .await?;
            RecordDetails::Organization(OrganizationDetails {
                nonprofit: nonprofit.unwrap_or(true),
                categories,
                employees: ORGANIZATION_EMPLOYEES.load(conn, id).await?,
                members: ORGANIZATION_MEMBERS.load(conn, id).await?,
                locations: ORGANIZATION_LOCATIONS.load(conn, id).await?,
            })
        }
        PageKind::Place => {
            let row = sqlx::query_as::<_, PlaceRow>(
                "SELECT latitude::TEXT AS latitude, longitude::TEXT AS longitude, \
                 altitude::TEXT AS altitude, street, locality, region, postal_code, country \
                 FROM places WHERE page_id = $1",
            )
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| corrupt(id, "place row is missing"))?;

            RecordDetails::Place(PlaceDetails {
                latitude: coordinate(id, &row.latitude)?,
                longitude: coordinate(id, &row.longitude)?,
                altitude: row
                    .altitude
                    .as_deref()
                    .map(|a| coordinate(id, a))
                    .transpose()?,
                street: row.street,
                locality: row.locality,
                region: row.region,
                postal_code: row.postal_code,
                country: row.country,
                categories,
            })
        }
        PageKind::Event => {
            let row = sqlx::query_as::<_, EventRow>(
                "SELECT start_date, duration, \"precision\", status FROM events WHERE page_id = $1",
            )
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| corrupt(id, "event row is missing"))?;

            RecordDetails::Event(EventDetails {
                start_date: row.start_date,
                duration: row.duration,
                precision: row.precision,
                status: EventStatus::from_code(&row.status),
                categories,
                tags: EVENT_TAGS.load(conn, id).await?,
                organizers: EVENT_ORGANIZERS.load(conn, id).await?,
            })
        }
        other => return Err(corrupt(id, format!("{other} pages carry no record"))),
    };

    Ok(details)
}

/// Loads a full record, or `None` if the page is missing or carries no record.
async fn load_record(conn: &mut PgConnection, id: i64) -> Result<Option<ContentRecord>, AppError> {
    let Some(page) = fetch_page(conn, id).await? else {
        return Ok(None);
    };
    if !page.kind.is_record() {
        return Ok(None);
    }

    let Some(row) = sqlx::query_as::<_, FieldsRow>(
        "SELECT body, same_as, oclc_fast_id, in_cpl_artistfiles, source_id \
         FROM records WHERE page_id = $1",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    else {
        return Ok(None);
    };

    let agent = if page.kind.is_agent() {
        Some(load_agent(conn, id).await?)
    } else {
        None
    };
    let details = load_details(conn, id, page.kind).await?;
    let gallery = load_gallery(conn, id).await?;

    Ok(Some(ContentRecord {
        page,
        fields: RecordFields {
            body: row.body,
            same_as: row.same_as,
            oclc_fast_id: row.oclc_fast_id,
            in_cpl_artistfiles: row.in_cpl_artistfiles,
            source_id: row.source_id,
        },
        agent,
        details,
        gallery,
    }))
}

/// PostgreSQL repository for content records.
pub struct PgRecordRepository {
    pool: Arc<PgPool>,
}

impl PgRecordRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordRepository for PgRecordRepository {
    async fn insert_record(
        &self,
        page: NewPage,
        data: RecordData,
    ) -> Result<ContentRecord, AppError> {
        let mut tx = self.pool.begin().await?;

        let page = insert_page_in(&mut tx, page).await?;
        write_record(&mut tx, page.id, &data).await?;

        tx.commit().await?;

        Ok(ContentRecord {
            page,
            fields: data.fields,
            agent: data.agent,
            details: data.details,
            gallery: Vec::new(),
        })
    }

    async fn find_record(&self, id: i64) -> Result<Option<ContentRecord>, AppError> {
        let mut conn = self.pool.acquire().await?;
        load_record(&mut conn, id).await
    }

    async fn update_record(
        &self,
        id: i64,
        title: Option<String>,
        data: RecordData,
    ) -> Result<ContentRecord, AppError> {
        let mut tx = self.pool.begin().await?;

        let locked: Option<i64> =
            sqlx::query_scalar("SELECT page_id FROM records WHERE page_id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Err(record_not_found(id));
        }

        sqlx::query(
            "UPDATE pages SET title = COALESCE($2, title), updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(title)
        .execute(&mut *tx)
        .await?;

        write_record(&mut tx, id, &data).await?;
        let record = load_record(&mut tx, id)
            .await?
            .ok_or_else(|| record_not_found(id))?;

        tx.commit().await?;
        Ok(record)
    }

    async fn replace_gallery(
        &self,
        id: i64,
        items: Vec<NewGalleryImage>,
    ) -> Result<Vec<GalleryImage>, AppError> {
        let mut tx = self.pool.begin().await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM records WHERE page_id = $1)")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        if !exists {
            return Err(record_not_found(id));
        }

        sqlx::query("DELETE FROM gallery_images WHERE page_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let mut gallery = Vec::with_capacity(items.len());
        for (sort_order, item) in (0..).zip(items) {
            let row = sqlx::query_as::<_, GalleryRow>(
                "INSERT INTO gallery_images (page_id, image_id, caption, sort_order) \
                 VALUES ($1, $2, $3, $4) RETURNING id, image_id, caption, sort_order",
            )
            .bind(id)
            .bind(item.image_id)
            .bind(&item.caption)
            .bind(sort_order)
            .fetch_one(&mut *tx)
            .await?;
            gallery.push(row.into());
        }

        tx.commit().await?;
        Ok(gallery)
    }

    async fn find_events_by_tag(
        &self,
        tag: &str,
        live_at: Option<DateTime<Utc>>,
    ) -> Result<Vec<Page>, AppError> {
        let filter = "id IN (SELECT event_id FROM event_tags WHERE tag = $1)";

        let rows = match live_at {
            Some(now) => {
                let sql = format!(
                    "SELECT {PAGE_COLUMNS} FROM pages \
                     WHERE {filter} AND live AND first_published_at <= $2 \
                     ORDER BY first_published_at DESC, id DESC"
                );
                sqlx::query_as::<_, PageRow>(&sql)
                    .bind(tag)
                    .bind(now)
                    .fetch_all(self.pool.as_ref())
                    .await?
            }
            None => {
                let sql = format!("SELECT {PAGE_COLUMNS} FROM pages WHERE {filter} ORDER BY id");
                sqlx::query_as::<_, PageRow>(&sql)
                    .bind(tag)
                    .fetch_all(self.pool.as_ref())
                    .await?
            }
        };

        into_pages(rows)
    }
}
