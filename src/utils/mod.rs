//! Helpers shared by the service and API layers.
//!
//! - [`slug`] - Slug derivation and checks for page URLs
//! - [`web_url`] - Checks for external links

pub mod slug;
pub mod web_url;
