//! Public site route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, page_handler};
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Home page
/// - `GET /{*path}` - Any published page by url path
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/{*path}", get(page_handler))
}
