//! API route configuration.

use crate::api::handlers::{
    children_handler, create_image_handler, create_page_handler, create_record_handler,
    create_snippet_handler, delete_image_handler, delete_page_handler, delete_snippet_handler,
    events_by_tag_handler, get_page_handler, get_record_handler, get_snippet_handler,
    list_images_handler, list_pages_handler, list_snippets_handler, listing_handler,
    move_page_handler, page_schema_handler, publish_handler, replace_gallery_handler,
    snippet_kinds_handler, snippet_schema_handler, structured_data_handler, unpublish_handler,
    update_page_handler, update_record_handler, update_snippet_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /pages`                        - Whole page tree by url path
/// - `POST   /pages`                        - Create an index or tag index page
/// - `GET    /pages/{id}`                   - Single page
/// - `PATCH  /pages/{id}`                   - Update title or intro
/// - `DELETE /pages/{id}`                   - Delete a page and its subtree
/// - `GET    /pages/{id}/children`          - Direct children in tree order
/// - `GET    /pages/{id}/listing`           - Published entries of an index page
/// - `POST   /pages/{id}/publish`           - Publish now or at a given time
/// - `POST   /pages/{id}/unpublish`         - Take a page offline
/// - `POST   /pages/{id}/move`              - Move under another parent
/// - `POST   /records`                      - Create a person, organization, place or event
/// - `GET    /records/{id}`                 - Record with its relations
/// - `PUT    /records/{id}`                 - Replace record data
/// - `PUT    /records/{id}/gallery`         - Replace the image gallery
/// - `GET    /records/{id}/structured-data` - JSON-LD description
/// - `GET    /events?tag=`                  - Events carrying a tag
/// - `GET    /snippets`                     - Registered snippet kinds
/// - `GET    /snippets/{kind}`              - Snippets of a kind
/// - `POST   /snippets/{kind}`              - Create a snippet
/// - `GET    /snippets/{kind}/{id}`         - Single snippet
/// - `PUT    /snippets/{kind}/{id}`         - Replace a snippet
/// - `DELETE /snippets/{kind}/{id}`         - Delete a snippet
/// - `GET    /images`                       - Image metadata
/// - `POST   /images`                       - Register an image
/// - `DELETE /images/{id}`                  - Delete an image
/// - `GET    /schema/pages/{kind}`          - Admin form schema of a page kind
/// - `GET    /schema/snippets/{kind}`       - Admin form schema of a snippet kind
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/pages", get(list_pages_handler).post(create_page_handler))
        .route(
            "/pages/{id}",
            get(get_page_handler)
                .patch(update_page_handler)
                .delete(delete_page_handler),
        )
        .route("/pages/{id}/children", get(children_handler))
        .route("/pages/{id}/listing", get(listing_handler))
        .route("/pages/{id}/publish", post(publish_handler))
        .route("/pages/{id}/unpublish", post(unpublish_handler))
        .route("/pages/{id}/move", post(move_page_handler))
        .route("/records", post(create_record_handler))
        .route(
            "/records/{id}",
            get(get_record_handler).put(update_record_handler),
        )
        .route("/records/{id}/gallery", put(replace_gallery_handler))
        .route("/records/{id}/structured-data", get(structured_data_handler))
        .route("/events", get(events_by_tag_handler))
        .route("/snippets", get(snippet_kinds_handler))
        .route(
            "/snippets/{kind}",
            get(list_snippets_handler).post(create_snippet_handler),
        )
        .route(
            "/snippets/{kind}/{id}",
            get(get_snippet_handler)
                .put(update_snippet_handler)
                .delete(delete_snippet_handler),
        )
        .route(
            "/images",
            get(list_images_handler).post(create_image_handler),
        )
        .route("/images/{id}", delete(delete_image_handler))
        .route("/schema/pages/{kind}", get(page_schema_handler))
        .route("/schema/snippets/{kind}", get(snippet_schema_handler))
}
