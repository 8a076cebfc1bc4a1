//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod events;
pub mod health;
pub mod images;
pub mod pages;
pub mod records;
pub mod schema;
pub mod snippets;

pub use events::events_by_tag_handler;
pub use health::health_handler;
pub use images::{create_image_handler, delete_image_handler, list_images_handler};
pub use pages::{
    children_handler, create_page_handler, delete_page_handler, get_page_handler,
    list_pages_handler, listing_handler, move_page_handler, publish_handler, unpublish_handler,
    update_page_handler,
};
pub use records::{
    create_record_handler, get_record_handler, replace_gallery_handler,
    structured_data_handler, update_record_handler,
};
pub use schema::{page_schema_handler, snippet_schema_handler};
pub use snippets::{
    create_snippet_handler, delete_snippet_handler, get_snippet_handler, list_snippets_handler,
    snippet_kinds_handler, update_snippet_handler,
};
