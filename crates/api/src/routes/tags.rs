//! Route definitions for tags.
//!
//! ```text
//! GET    /tags/        -> list_tags
//! POST   /tags/        -> create_tag
//! GET    /tags/{id}    -> get_tag
//! PUT    /tags/{id}    -> update_tag
//! DELETE /tags/{id}    -> delete_tag
//! ```
//!
//! The published collection paths carry a trailing slash; both forms are
//! registered so `/tags` and `/tags/` behave identically.

use axum::routing::get;
use axum::Router;

use crate::handlers::tags;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    let collection = get(tags::list_tags).post(tags::create_tag);

    Router::new()
        .route("/tags", collection.clone())
        .route("/tags/", collection)
        .route(
            "/tags/{id}",
            get(tags::get_tag).put(tags::update_tag).delete(tags::delete_tag),
        )
}
