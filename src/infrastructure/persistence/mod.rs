//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx runtime
//! queries. Multi-statement writes run inside one transaction.
//!
//! # Repositories
//!
//! - [`PgPageRepository`] - Page tree storage and publication state
//! - [`PgRecordRepository`] - Record components, relationship sets and galleries
//! - [`PgSnippetRepository`] - Snippets and images

pub mod pg_page_repository;
pub mod pg_record_repository;
pub mod pg_snippet_repository;

pub use pg_page_repository::PgPageRepository;
pub use pg_record_repository::PgRecordRepository;
pub use pg_snippet_repository::PgSnippetRepository;

use serde_json::json;

use crate::error::AppError;

/// Maps the constraints with a domain meaning to the errors the memory backend
/// raises for the same situations. Anything else goes through `From<sqlx::Error>`.
pub(crate) fn constraint_error(e: sqlx::Error) -> AppError {
    let constraint = e
        .as_database_error()
        .and_then(|db| db.constraint())
        .map(str::to_string);

    match constraint.as_deref() {
        Some("pages_parent_slug_key") => AppError::conflict(
            "Slug already in use under this parent",
            json!({"constraint": "pages_parent_slug_key"}),
        ),
        Some("places_coordinates_key") => AppError::conflict(
            "Another place already has these coordinates",
            json!({"constraint": "places_coordinates_key"}),
        ),
        Some("records_source_id_fkey") => AppError::conflict(
            "Source is still cited by records",
            json!({"constraint": "records_source_id_fkey"}),
        ),
        _ => e.into(),
    }
}
