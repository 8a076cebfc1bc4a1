//! HTML template rendering handlers for the public site.

mod pages;

pub use pages::{home_handler, page_handler};
