//! Handlers for anime search and local suggestions.
//!
//! The AniList integration degrades gracefully: any transport failure or
//! non-200 response is logged and yields an empty result list instead of
//! failing the request.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use watchedit_db::repositories::WorkRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Maximum number of suggestions returned.
const MAX_SUGGESTIONS: usize = 10;

/// Static genre keywords mixed into suggestions.
const DEFAULT_KEYWORDS: &[&str] = &[
    "Adventure",
    "Fantasy",
    "Sci-Fi",
    "Romance",
    "Comedy",
    "Action",
    "Mystery",
    "Horror",
    "Slice of Life",
    "School",
    "Workplace",
    "Music",
    "Sports",
    "War",
    "History",
    "Detective",
];

/// Query parameters for the search endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

/// GET /search/anime?query=
///
/// Search the AniList anime database.
pub async fn search_anime(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let results = match state.anilist.search(&params.query).await {
        Ok(results) => results,
        Err(err) => {
            tracing::warn!(error = %err, query = %params.query, "AniList search failed");
            Vec::new()
        }
    };

    Ok(Json(results))
}

/// GET /search/suggestions?query=
///
/// Suggestions from local work titles plus a static keyword list, capped
/// at ten entries.
pub async fn get_suggestions(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let mut suggestions =
        WorkRepo::title_suggestions(&state.pool, &params.query, MAX_SUGGESTIONS as i64).await?;

    let query = params.query.to_lowercase();
    for keyword in DEFAULT_KEYWORDS {
        if keyword.to_lowercase().contains(&query) && !suggestions.iter().any(|s| s == keyword) {
            suggestions.push(keyword.to_string());
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    Ok(Json(suggestions))
}
