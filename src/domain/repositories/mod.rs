//! Repository traits abstracting storage of the content model.
//!
//! Every trait is implemented twice:
//!
//! - [`crate::infrastructure::persistence`] - PostgreSQL through sqlx
//! - [`crate::infrastructure::memory::MemoryStore`] - in-process store
//!
//! Mocks generated by mockall are available under `cfg(test)`.

pub mod page_repository;
pub mod record_repository;
pub mod snippet_repository;

pub use page_repository::PageRepository;
pub use record_repository::RecordRepository;
pub use snippet_repository::SnippetRepository;

#[cfg(test)]
pub use page_repository::MockPageRepository;
#[cfg(test)]
pub use record_repository::MockRecordRepository;
#[cfg(test)]
pub use snippet_repository::MockSnippetRepository;
