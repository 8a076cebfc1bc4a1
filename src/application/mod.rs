//! Application layer services implementing the content rules.
//!
//! Services consume repository traits and provide the API used by the HTTP
//! handlers, the public site and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::PageService`] - Page tree, publication and listings
//! - [`services::RecordService`] - Person, organization, place and event records
//! - [`services::SnippetService`] - Snippets and image metadata

pub mod services;
