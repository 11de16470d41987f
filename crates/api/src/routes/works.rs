//! Route definitions for works.
//!
//! ```text
//! GET    /works/                 -> list_works
//! POST   /works/                 -> create_work
//! GET    /works/stats/overview   -> get_stats
//! GET    /works/{id}             -> get_work
//! PUT    /works/{id}             -> update_work
//! DELETE /works/{id}             -> delete_work
//! ```
//!
//! The published collection paths carry a trailing slash; both forms are
//! registered so `/works` and `/works/` behave identically.

use axum::routing::get;
use axum::Router;

use crate::handlers::works;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    let collection = get(works::list_works).post(works::create_work);

    Router::new()
        .route("/works", collection.clone())
        .route("/works/", collection)
        .route("/works/stats/overview", get(works::get_stats))
        .route(
            "/works/{id}",
            get(works::get_work)
                .put(works::update_work)
                .delete(works::delete_work),
        )
}
