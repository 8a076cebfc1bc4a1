//! PostgreSQL implementation of the page tree repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgConnection, PgPool};
use std::sync::Arc;

use super::constraint_error;
use crate::domain::entities::{NewPage, Page, PageKind, PagePatch};
use crate::domain::repositories::PageRepository;
use crate::error::AppError;

pub(crate) const PAGE_COLUMNS: &str = "id, parent_id, kind, title, slug, url_path, depth, position, \
     intro, live, first_published_at, last_published_at, created_at, updated_at";

#[derive(Debug, FromRow)]
pub(crate) struct PageRow {
    id: i64,
    parent_id: Option<i64>,
    kind: String,
    title: String,
    slug: String,
    url_path: String,
    depth: i32,
    position: i32,
    intro: Option<String>,
    live: bool,
    first_published_at: Option<DateTime<Utc>>,
    last_published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PageRow> for Page {
    type Error = AppError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        let kind: PageKind = row
            .kind
            .parse()
            .map_err(|e: String| AppError::internal("Corrupt page row", json!({"reason": e})))?;

        Ok(Page {
            id: row.id,
            parent_id: row.parent_id,
            kind,
            title: row.title,
            slug: row.slug,
            url_path: row.url_path,
            depth: row.depth,
            position: row.position,
            intro: row.intro,
            live: row.live,
            first_published_at: row.first_published_at,
            last_published_at: row.last_published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

pub(crate) fn into_pages(rows: Vec<PageRow>) -> Result<Vec<Page>, AppError> {
    rows.into_iter().map(Page::try_from).collect()
}

fn page_not_found(id: i64) -> AppError {
    AppError::not_found("Page not found", json!({"id": id}))
}

pub(crate) async fn fetch_page(conn: &mut PgConnection, id: i64) -> Result<Option<Page>, AppError> {
    let sql = format!("SELECT {PAGE_COLUMNS} FROM pages WHERE id = $1");
    sqlx::query_as::<_, PageRow>(&sql)
        .bind(id)
        .fetch_optional(conn)
        .await?
        .map(Page::try_from)
        .transpose()
}

/// Inserts a page below its parent, computing path, depth and position.
///
/// Must run inside a transaction: the parent row is locked so concurrent
/// inserts under the same parent get distinct positions.
pub(crate) async fn insert_page_in(
    conn: &mut PgConnection,
    new_page: NewPage,
) -> Result<Page, AppError> {
    let parent: Option<(String, i32)> =
        sqlx::query_as("SELECT url_path, depth FROM pages WHERE id = $1 FOR UPDATE")
            .bind(new_page.parent_id)
            .fetch_optional(&mut *conn)
            .await?;
    let (parent_path, parent_depth) = parent.ok_or_else(|| page_not_found(new_page.parent_id))?;

    let position: i32 = sqlx::query_scalar(
        "SELECT COALESCE(MAX(position) + 1, 0) FROM pages WHERE parent_id = $1",
    )
    .bind(new_page.parent_id)
    .fetch_one(&mut *conn)
    .await?;

    let sql = format!(
        "INSERT INTO pages (parent_id, kind, title, slug, url_path, depth, position, intro) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
         RETURNING {PAGE_COLUMNS}"
    );
    let row = sqlx::query_as::<_, PageRow>(&sql)
        .bind(new_page.parent_id)
        .bind(new_page.kind.as_str())
        .bind(&new_page.title)
        .bind(&new_page.slug)
        .bind(format!("{parent_path}{}/", new_page.slug))
        .bind(parent_depth + 1)
        .bind(position)
        .bind(&new_page.intro)
        .fetch_one(&mut *conn)
        .await
        .map_err(constraint_error)?;

    row.try_into()
}

/// PostgreSQL repository for the page tree.
///
/// Subtrees are addressed by `url_path` prefix, so moves and deletes touch every
/// descendant with a single statement.
pub struct PgPageRepository {
    pool: Arc<PgPool>,
}

impl PgPageRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageRepository for PgPageRepository {
    async fn root_page(&self) -> Result<Page, AppError> {
        let sql = format!("SELECT {PAGE_COLUMNS} FROM pages WHERE parent_id IS NULL");
        sqlx::query_as::<_, PageRow>(&sql)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| {
                AppError::internal(
                    "Root page is missing",
                    json!({"hint": "Run migrations to create the root page"}),
                )
            })?
            .try_into()
    }

    async fn find_page(&self, id: i64) -> Result<Option<Page>, AppError> {
        let mut conn = self.pool.acquire().await?;
        fetch_page(&mut conn, id).await
    }

    async fn find_child_by_slug(
        &self,
        parent_id: i64,
        slug: &str,
    ) -> Result<Option<Page>, AppError> {
        let sql = format!("SELECT {PAGE_COLUMNS} FROM pages WHERE parent_id = $1 AND slug = $2");
        sqlx::query_as::<_, PageRow>(&sql)
            .bind(parent_id)
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?
            .map(Page::try_from)
            .transpose()
    }

    async fn list_pages(&self) -> Result<Vec<Page>, AppError> {
        let sql = format!("SELECT {PAGE_COLUMNS} FROM pages ORDER BY url_path");
        let rows = sqlx::query_as::<_, PageRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;
        into_pages(rows)
    }

    async fn list_children(&self, parent_id: i64) -> Result<Vec<Page>, AppError> {
        let sql = format!(
            "SELECT {PAGE_COLUMNS} FROM pages WHERE parent_id = $1 ORDER BY position, id"
        );
        let rows = sqlx::query_as::<_, PageRow>(&sql)
            .bind(parent_id)
            .fetch_all(self.pool.as_ref())
            .await?;
        into_pages(rows)
    }

    async fn list_live_children(
        &self,
        parent_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<Page>, AppError> {
        let sql = format!(
            "SELECT {PAGE_COLUMNS} FROM pages \
             WHERE parent_id = $1 AND live AND first_published_at <= $2 \
             ORDER BY first_published_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, PageRow>(&sql)
            .bind(parent_id)
            .bind(now)
            .fetch_all(self.pool.as_ref())
            .await?;
        into_pages(rows)
    }

    async fn find_page_kinds(&self, ids: Vec<i64>) -> Result<Vec<(i64, PageKind)>, AppError> {
        let rows: Vec<(i64, String)> =
            sqlx::query_as("SELECT id, kind FROM pages WHERE id = ANY($1) ORDER BY id")
                .bind(ids)
                .fetch_all(self.pool.as_ref())
                .await?;

        rows.into_iter()
            .map(|(id, kind)| {
                kind.parse()
                    .map(|kind| (id, kind))
                    .map_err(|e: String| AppError::internal("Corrupt page row", json!({"reason": e})))
            })
            .collect()
    }

    async fn insert_page(&self, new_page: NewPage) -> Result<Page, AppError> {
        let mut tx = self.pool.begin().await?;
        let page = insert_page_in(&mut tx, new_page).await?;
        tx.commit().await?;
        Ok(page)
    }

    async fn update_page(&self, id: i64, patch: PagePatch) -> Result<Page, AppError> {
        let sql = format!(
            "UPDATE pages SET title = COALESCE($2, title), \
             intro = CASE WHEN $3 THEN $4 ELSE intro END, \
             updated_at = NOW() WHERE id = $1 RETURNING {PAGE_COLUMNS}"
        );
        sqlx::query_as::<_, PageRow>(&sql)
            .bind(id)
            .bind(patch.title)
            .bind(patch.intro.is_some())
            .bind(patch.intro.flatten())
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| page_not_found(id))?
            .try_into()
    }

    async fn save_publication(
        &self,
        id: i64,
        live: bool,
        first_published_at: Option<DateTime<Utc>>,
        last_published_at: Option<DateTime<Utc>>,
    ) -> Result<Page, AppError> {
        let sql = format!(
            "UPDATE pages SET live = $2, first_published_at = $3, last_published_at = $4, \
             updated_at = NOW() WHERE id = $1 RETURNING {PAGE_COLUMNS}"
        );
        sqlx::query_as::<_, PageRow>(&sql)
            .bind(id)
            .bind(live)
            .bind(first_published_at)
            .bind(last_published_at)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| page_not_found(id))?
            .try_into()
    }

    async fn move_page(&self, id: i64, new_parent_id: i64) -> Result<Page, AppError> {
        let mut tx = self.pool.begin().await?;

        let page = fetch_page(&mut tx, id).await?.ok_or_else(|| page_not_found(id))?;
        let parent = fetch_page(&mut tx, new_parent_id)
            .await?
            .ok_or_else(|| page_not_found(new_parent_id))?;

        let taken: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM pages WHERE parent_id = $1 AND slug = $2 AND id <> $3)",
        )
        .bind(parent.id)
        .bind(&page.slug)
        .bind(page.id)
        .fetch_one(&mut *tx)
        .await?;
        if taken {
            return Err(AppError::conflict(
                "Slug already in use under this parent",
                json!({"parent_id": parent.id, "slug": page.slug}),
            ));
        }

        let position: i32 = sqlx::query_scalar(
            "SELECT COALESCE(MAX(position) + 1, 0) FROM pages WHERE parent_id = $1",
        )
        .bind(parent.id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE pages SET url_path = $2 || substr(url_path, length($1) + 1), \
             depth = depth + $3, updated_at = NOW() \
             WHERE left(url_path, length($1)) = $1",
        )
        .bind(&page.url_path)
        .bind(parent.child_url_path(&page.slug))
        .bind(parent.depth + 1 - page.depth)
        .execute(&mut *tx)
        .await
        .map_err(constraint_error)?;

        let sql = format!(
            "UPDATE pages SET parent_id = $2, position = $3 WHERE id = $1 RETURNING {PAGE_COLUMNS}"
        );
        let moved: Page = sqlx::query_as::<_, PageRow>(&sql)
            .bind(id)
            .bind(parent.id)
            .bind(position)
            .fetch_one(&mut *tx)
            .await
            .map_err(constraint_error)?
            .try_into()?;

        tx.commit().await?;
        Ok(moved)
    }

    async fn delete_page(&self, id: i64) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let page = fetch_page(&mut tx, id).await?.ok_or_else(|| page_not_found(id))?;

        // Join rows pointing into the subtree go with it through ON DELETE CASCADE.
        let removed = sqlx::query("DELETE FROM pages WHERE left(url_path, length($1)) = $1")
            .bind(&page.url_path)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        Ok(removed)
    }
}
