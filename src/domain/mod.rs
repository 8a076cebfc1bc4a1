//! Domain layer containing the content model and its rules.
//!
//! # Architecture
//!
//! - [`entities`] - Pages, records, snippets and images
//! - [`repositories`] - Data access trait definitions
//! - [`geo`] - Fixed-precision coordinates
//! - [`vocabularies`] - Country and subdivision code tables
//! - [`panels`] - Static admin form layout per page and snippet kind
//! - [`registry`] - Snippet kinds exposed to the API
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Repository traits define contracts implemented by [`crate::infrastructure`].

pub mod entities;
pub mod geo;
pub mod panels;
pub mod registry;
pub mod repositories;
pub mod vocabularies;
