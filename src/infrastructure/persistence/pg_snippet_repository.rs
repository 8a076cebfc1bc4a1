//! PostgreSQL implementation of snippet and image storage.
//!
//! Every snippet kind has its own table, except the four category kinds which
//! share `categories` and are told apart by its `kind` column.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{FromRow, PgConnection, PgPool, Postgres, Row};
use std::str::FromStr;
use std::sync::Arc;

use super::constraint_error;
use crate::domain::entities::{
    CategoryData, EmailData, ExtraNameData, Image, NewImage, PhoneData, Snippet, SnippetData,
    SnippetKind, SocialAccountData, SourceData, WebsiteData,
};
use crate::domain::repositories::SnippetRepository;
use crate::error::AppError;

type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

fn table(kind: SnippetKind) -> &'static str {
    match kind {
        SnippetKind::Email => "emails",
        SnippetKind::Phone => "phones",
        SnippetKind::SocialAccount => "social_accounts",
        SnippetKind::Website => "websites",
        SnippetKind::Source => "sources",
        SnippetKind::ExtraName => "extra_names",
        SnippetKind::PersonCategory
        | SnippetKind::OrganizationCategory
        | SnippetKind::PlaceCategory
        | SnippetKind::EventCategory => "categories",
    }
}

fn select(kind: SnippetKind) -> &'static str {
    match kind {
        SnippetKind::Email => "SELECT id, label, address, description FROM emails",
        SnippetKind::Phone => {
            "SELECT id, label, country, area_code, exchange_code, number, extension, description \
             FROM phones"
        }
        SnippetKind::SocialAccount => {
            "SELECT id, service, account, description FROM social_accounts"
        }
        SnippetKind::Website => "SELECT id, url, description FROM websites",
        SnippetKind::Source => {
            "SELECT id, title, authors, editors, translators, identifiers, archive, edition, \
             pages, volume, series, category, \
             ARRAY(SELECT w.website_id FROM source_websites w \
                   WHERE w.source_id = sources.id ORDER BY w.id) AS same_as \
             FROM sources"
        }
        SnippetKind::ExtraName => "SELECT id, name, description FROM extra_names",
        SnippetKind::PersonCategory
        | SnippetKind::OrganizationCategory
        | SnippetKind::PlaceCategory
        | SnippetKind::EventCategory => "SELECT id, kind, name, icon_id FROM categories",
    }
}

/// Extra filter restricting the shared category table to one kind.
fn kind_filter(kind: SnippetKind) -> Option<&'static str> {
    kind.category_kind().map(|c| c.as_str())
}

fn columns(kind: SnippetKind) -> &'static [&'static str] {
    match kind {
        SnippetKind::Email => &["label", "address", "description"],
        SnippetKind::Phone => &[
            "label",
            "country",
            "area_code",
            "exchange_code",
            "number",
            "extension",
            "description",
        ],
        SnippetKind::SocialAccount => &["service", "account", "description"],
        SnippetKind::Website => &["url", "description"],
        SnippetKind::Source => &[
            "title",
            "authors",
            "editors",
            "translators",
            "identifiers",
            "archive",
            "edition",
            "pages",
            "volume",
            "series",
            "category",
        ],
        SnippetKind::ExtraName => &["name", "description"],
        SnippetKind::PersonCategory
        | SnippetKind::OrganizationCategory
        | SnippetKind::PlaceCategory
        | SnippetKind::EventCategory => &["kind", "name", "icon_id"],
    }
}

/// Binds the values of [`columns`] in the same order.
fn bind_fields<'q>(query: PgQuery<'q>, data: &'q SnippetData) -> PgQuery<'q> {
    match data {
        SnippetData::Email(d) => query
            .bind(d.label.as_str())
            .bind(&d.address)
            .bind(&d.description),
        SnippetData::Phone(d) => query
            .bind(d.label.as_str())
            .bind(d.country)
            .bind(d.area_code)
            .bind(d.exchange_code)
            .bind(d.number)
            .bind(&d.extension)
            .bind(&d.description),
        SnippetData::SocialAccount(d) => query
            .bind(d.service.as_str())
            .bind(&d.account)
            .bind(&d.description),
        SnippetData::Website(d) => query.bind(&d.url).bind(&d.description),
        SnippetData::Source(d) => query
            .bind(&d.title)
            .bind(&d.authors)
            .bind(&d.editors)
            .bind(&d.translators)
            .bind(&d.identifiers)
            .bind(&d.archive)
            .bind(&d.edition)
            .bind(&d.pages)
            .bind(&d.volume)
            .bind(&d.series)
            .bind(d.category.map(|c| c.as_str())),
        SnippetData::ExtraName(d) => query.bind(&d.name).bind(&d.description),
        SnippetData::Category(d) => query
            .bind(d.kind.as_str())
            .bind(&d.name)
            .bind(d.icon_id),
    }
}

fn corrupt(kind: SnippetKind, reason: impl ToString) -> AppError {
    AppError::internal(
        "Corrupt snippet row",
        json!({"kind": kind, "reason": reason.to_string()}),
    )
}

fn parse_column<T>(kind: SnippetKind, row: &PgRow, column: &str) -> Result<T, AppError>
where
    T: FromStr<Err = String>,
{
    let raw: String = row.try_get(column)?;
    raw.parse().map_err(|e| corrupt(kind, e))
}

fn decode(kind: SnippetKind, row: &PgRow) -> Result<Snippet, AppError> {
    let data = match kind {
        SnippetKind::Email => SnippetData::Email(EmailData {
            label: parse_column(kind, row, "label")?,
            address: row.try_get("address")?,
            description: row.try_get("description")?,
        }),
        SnippetKind::Phone => SnippetData::Phone(PhoneData {
            label: parse_column(kind, row, "label")?,
            country: row.try_get("country")?,
            area_code: row.try_get("area_code")?,
            exchange_code: row.try_get("exchange_code")?,
            number: row.try_get("number")?,
            extension: row.try_get("extension")?,
            description: row.try_get("description")?,
        }),
        SnippetKind::SocialAccount => SnippetData::SocialAccount(SocialAccountData {
            service: parse_column(kind, row, "service")?,
            account: row.try_get("account")?,
            description: row.try_get("description")?,
        }),
        SnippetKind::Website => SnippetData::Website(WebsiteData {
            url: row.try_get("url")?,
            description: row.try_get("description")?,
        }),
        SnippetKind::Source => {
            let category: Option<String> = row.try_get("category")?;
            SnippetData::Source(SourceData {
                title: row.try_get("title")?,
                authors: row.try_get("authors")?,
                editors: row.try_get("editors")?,
                translators: row.try_get("translators")?,
                identifiers: row.try_get("identifiers")?,
                archive: row.try_get("archive")?,
                edition: row.try_get("edition")?,
                pages: row.try_get("pages")?,
                volume: row.try_get("volume")?,
                series: row.try_get("series")?,
                category: category
                    .as_deref()
                    .map(str::parse)
                    .transpose()
                    .map_err(|e| corrupt(kind, e))?,
                same_as: row.try_get("same_as")?,
            })
        }
        SnippetKind::ExtraName => SnippetData::ExtraName(ExtraNameData {
            name: row.try_get("name")?,
            description: row.try_get("description")?,
        }),
        SnippetKind::PersonCategory
        | SnippetKind::OrganizationCategory
        | SnippetKind::PlaceCategory
        | SnippetKind::EventCategory => SnippetData::Category(CategoryData {
            kind: parse_column(kind, row, "kind")?,
            name: row.try_get("name")?,
            icon_id: row.try_get("icon_id")?,
        }),
    };

    Ok(Snippet {
        id: row.try_get("id")?,
        data,
    })
}

async fn fetch_snippet(
    conn: &mut PgConnection,
    kind: SnippetKind,
    id: i64,
) -> Result<Option<Snippet>, AppError> {
    let mut sql = format!("{} WHERE id = $1", select(kind));
    if kind_filter(kind).is_some() {
        sql.push_str(" AND kind = $2");
    }

    let mut query = sqlx::query(&sql).bind(id);
    if let Some(category) = kind_filter(kind) {
        query = query.bind(category);
    }

    query
        .fetch_optional(conn)
        .await?
        .map(|row| decode(kind, &row))
        .transpose()
}

async fn replace_source_websites(
    conn: &mut PgConnection,
    source_id: i64,
    websites: &[i64],
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM source_websites WHERE source_id = $1")
        .bind(source_id)
        .execute(&mut *conn)
        .await?;

    if !websites.is_empty() {
        sqlx::query(
            "INSERT INTO source_websites (source_id, website_id) \
             SELECT $1, w FROM UNNEST($2::BIGINT[]) WITH ORDINALITY AS t(w, n) ORDER BY n",
        )
        .bind(source_id)
        .bind(websites)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

fn snippet_not_found(kind: SnippetKind, id: i64) -> AppError {
    AppError::not_found("Snippet not found", json!({"kind": kind, "id": id}))
}

#[derive(Debug, FromRow)]
struct ImageRow {
    id: i64,
    title: String,
    file: String,
    width: i32,
    height: i32,
    created_at: DateTime<Utc>,
}

impl From<ImageRow> for Image {
    fn from(row: ImageRow) -> Self {
        Image {
            id: row.id,
            title: row.title,
            file: row.file,
            width: row.width,
            height: row.height,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for snippets and image metadata.
///
/// Deleting a snippet relies on foreign keys: join rows cascade away and a
/// source still cited by a record is protected by `ON DELETE RESTRICT`.
pub struct PgSnippetRepository {
    pool: Arc<PgPool>,
}

impl PgSnippetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnippetRepository for PgSnippetRepository {
    async fn insert_snippet(&self, data: SnippetData) -> Result<Snippet, AppError> {
        let kind = data.kind();
        let cols = columns(kind);
        let placeholders: Vec<String> = (1..=cols.len()).map(|n| format!("${n}")).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING id",
            table(kind),
            cols.join(", "),
            placeholders.join(", ")
        );

        let mut tx = self.pool.begin().await?;

        let row = bind_fields(sqlx::query(&sql), &data)
            .fetch_one(&mut *tx)
            .await
            .map_err(constraint_error)?;
        let id: i64 = row.try_get("id")?;

        if let SnippetData::Source(source) = &data {
            replace_source_websites(&mut tx, id, &source.same_as).await?;
        }

        tx.commit().await?;
        Ok(Snippet { id, data })
    }

    async fn find_snippet(&self, kind: SnippetKind, id: i64) -> Result<Option<Snippet>, AppError> {
        let mut conn = self.pool.acquire().await?;
        fetch_snippet(&mut conn, kind, id).await
    }

    async fn list_snippets(&self, kind: SnippetKind) -> Result<Vec<Snippet>, AppError> {
        let rows = match kind_filter(kind) {
            Some(category) => {
                let sql = format!("{} WHERE kind = $1 ORDER BY id", select(kind));
                sqlx::query(&sql)
                    .bind(category)
                    .fetch_all(self.pool.as_ref())
                    .await?
            }
            None => {
                let sql = format!("{} ORDER BY id", select(kind));
                sqlx::query(&sql).fetch_all(self.pool.as_ref()).await?
            }
        };

        rows.iter().map(|row| decode(kind, row)).collect()
    }

    async fn find_existing_snippets(
        &self,
        kind: SnippetKind,
        ids: Vec<i64>,
    ) -> Result<Vec<i64>, AppError> {
        let ids = match kind_filter(kind) {
            Some(category) => {
                sqlx::query_scalar(
                    "SELECT id FROM categories WHERE id = ANY($1) AND kind = $2 ORDER BY id",
                )
                .bind(ids)
                .bind(category)
                .fetch_all(self.pool.as_ref())
                .await?
            }
            None => {
                let sql = format!("SELECT id FROM {} WHERE id = ANY($1) ORDER BY id", table(kind));
                sqlx::query_scalar(&sql)
                    .bind(ids)
                    .fetch_all(self.pool.as_ref())
                    .await?
            }
        };
        Ok(ids)
    }

    async fn update_snippet(&self, id: i64, data: SnippetData) -> Result<Snippet, AppError> {
        let kind = data.kind();
        let cols = columns(kind);
        let assignments: Vec<String> = cols
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{col} = ${}", i + 1))
            .collect();
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ${}",
            table(kind),
            assignments.join(", "),
            cols.len() + 1
        );

        let mut tx = self.pool.begin().await?;

        if fetch_snippet(&mut tx, kind, id).await?.is_none() {
            return Err(snippet_not_found(kind, id));
        }

        bind_fields(sqlx::query(&sql), &data)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(constraint_error)?;

        if let SnippetData::Source(source) = &data {
            replace_source_websites(&mut tx, id, &source.same_as).await?;
        }

        tx.commit().await?;
        Ok(Snippet { id, data })
    }

    async fn delete_snippet(&self, kind: SnippetKind, id: i64) -> Result<(), AppError> {
        let result = match kind_filter(kind) {
            Some(category) => {
                sqlx::query("DELETE FROM categories WHERE id = $1 AND kind = $2")
                    .bind(id)
                    .bind(category)
                    .execute(self.pool.as_ref())
                    .await
            }
            None => {
                let sql = format!("DELETE FROM {} WHERE id = $1", table(kind));
                sqlx::query(&sql).bind(id).execute(self.pool.as_ref()).await
            }
        }
        .map_err(constraint_error)?;

        if result.rows_affected() == 0 {
            return Err(snippet_not_found(kind, id));
        }
        Ok(())
    }

    async fn count_source_references(&self, source_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM records WHERE source_id = $1")
            .bind(source_id)
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(count)
    }

    async fn insert_image(&self, image: NewImage) -> Result<Image, AppError> {
        let row = sqlx::query_as::<_, ImageRow>(
            "INSERT INTO images (title, file, width, height) VALUES ($1, $2, $3, $4) \
             RETURNING id, title, file, width, height, created_at",
        )
        .bind(&image.title)
        .bind(&image.file)
        .bind(image.width)
        .bind(image.height)
        .fetch_one(self.pool.as_ref())
        .await?;
        Ok(row.into())
    }

    async fn find_image(&self, id: i64) -> Result<Option<Image>, AppError> {
        let row = sqlx::query_as::<_, ImageRow>(
            "SELECT id, title, file, width, height, created_at FROM images WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;
        Ok(row.map(Image::from))
    }

    async fn list_images(&self) -> Result<Vec<Image>, AppError> {
        let rows = sqlx::query_as::<_, ImageRow>(
            "SELECT id, title, file, width, height, created_at FROM images ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;
        Ok(rows.into_iter().map(Image::from).collect())
    }

    async fn delete_image(&self, id: i64) -> Result<(), AppError> {
        // Gallery rows cascade; category icons are set to NULL.
        let result = sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Image not found", json!({"id": id})));
        }
        Ok(())
    }
}
