//! Public site layer.
//!
//! Renders published pages as HTML by walking the page tree from the root.
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Public site route configuration

pub mod handlers;
pub mod routes;
