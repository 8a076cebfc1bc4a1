//! Business logic services for the application layer.

pub mod page_service;
pub mod record_service;
pub mod snippet_service;

pub use page_service::{CreatePage, PageService};
pub use record_service::{CreateRecord, RecordService, UpdateRecord};
pub use snippet_service::SnippetService;
