//! Route definitions for search.
//!
//! ```text
//! GET /anime?query=        -> search_anime (AniList)
//! GET /suggestions?query=  -> get_suggestions (local)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/anime", get(search::search_anime))
        .route("/suggestions", get(search::get_suggestions))
}
