//! HTTP client for the AniList GraphQL endpoint.
//!
//! Sends a fixed query template (page 1, ten results, anime only) and maps
//! each media item to [`AnimeResult`], preferring the English title and
//! falling back to romaji, then native.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Public AniList GraphQL endpoint.
pub const ANILIST_URL: &str = "https://graphql.anilist.co";

/// Outbound request timeout. The search endpoint degrades to an empty
/// result set on failure, so a short timeout keeps requests snappy.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fixed GraphQL query template for anime search.
const SEARCH_QUERY: &str = "\
query ($search: String) {
  Page (page: 1, perPage: 10) {
    media (search: $search, type: ANIME) {
      id
      title { romaji english native }
      type
      format
      episodes
      duration
      season
      seasonYear
      status
      description
      coverImage { large medium }
      genres
      averageScore
    }
  }
}";

/// Errors from the AniList API layer.
#[derive(Debug, thiserror::Error)]
pub enum AniListError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// AniList returned a non-2xx status code.
    #[error("AniList API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// A search hit mapped to the local result shape.
#[derive(Debug, Clone, Serialize)]
pub struct AnimeResult {
    pub id: i64,
    pub title: Option<String>,
    /// Always the local `animation` work type.
    #[serde(rename = "type")]
    pub work_type: &'static str,
    pub year: Option<i64>,
    pub episodes: Option<i64>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub genres: Vec<String>,
    /// AniList average score (0-100).
    pub rating: Option<i64>,
    /// Always `"AniList"`.
    pub source: &'static str,
}

// ---------------------------------------------------------------------------
// Wire types (AniList response schema, deserialization only)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Option<SearchData>,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    #[serde(rename = "Page")]
    page: Option<MediaPage>,
}

#[derive(Debug, Deserialize)]
struct MediaPage {
    #[serde(default)]
    media: Vec<Media>,
}

#[derive(Debug, Deserialize)]
struct Media {
    id: i64,
    title: MediaTitle,
    #[serde(rename = "seasonYear")]
    season_year: Option<i64>,
    episodes: Option<i64>,
    status: Option<String>,
    description: Option<String>,
    #[serde(rename = "coverImage")]
    cover_image: Option<CoverImage>,
    #[serde(default)]
    genres: Vec<String>,
    #[serde(rename = "averageScore")]
    average_score: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct MediaTitle {
    romaji: Option<String>,
    english: Option<String>,
    native: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CoverImage {
    large: Option<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for the AniList GraphQL API.
pub struct AniListClient {
    client: reqwest::Client,
    api_url: String,
}

impl Default for AniListClient {
    fn default() -> Self {
        Self::new(ANILIST_URL.to_string())
    }
}

impl AniListClient {
    /// Create a client for the given endpoint URL.
    pub fn new(api_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client, api_url }
    }

    /// Search anime by keyword.
    ///
    /// Returns up to ten mapped results. Callers that want graceful
    /// degradation (the search endpoint does) log the error and fall back
    /// to an empty list.
    pub async fn search(&self, query: &str) -> Result<Vec<AnimeResult>, AniListError> {
        let body = serde_json::json!({
            "query": SEARCH_QUERY,
            "variables": { "search": query },
        });

        let response = self.client.post(&self.api_url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AniListError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SearchResponse = response.json().await?;
        Ok(map_response(parsed))
    }
}

/// Map an AniList response to the local result shape.
fn map_response(response: SearchResponse) -> Vec<AnimeResult> {
    response
        .data
        .and_then(|d| d.page)
        .map(|p| p.media)
        .unwrap_or_default()
        .into_iter()
        .map(map_media)
        .collect()
}

fn map_media(media: Media) -> AnimeResult {
    // Title preference: English, then romaji, then native.
    let title = media
        .title
        .english
        .or(media.title.romaji)
        .or(media.title.native);

    AnimeResult {
        id: media.id,
        title,
        work_type: "animation",
        year: media.season_year,
        episodes: media.episodes,
        status: media.status,
        description: media.description,
        cover_image: media.cover_image.and_then(|c| c.large),
        genres: media.genres,
        rating: media.average_score,
        source: "AniList",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: serde_json::Value) -> Vec<AnimeResult> {
        map_response(serde_json::from_value(json).unwrap())
    }

    #[test]
    fn maps_media_fields_to_local_shape() {
        let results = parse(serde_json::json!({
            "data": { "Page": { "media": [{
                "id": 101,
                "title": { "romaji": "Mononoke Hime", "english": "Princess Mononoke", "native": "もののけ姫" },
                "seasonYear": 1997,
                "episodes": 1,
                "status": "FINISHED",
                "description": "A prince is cursed.",
                "coverImage": { "large": "https://img/large.png", "medium": "https://img/medium.png" },
                "genres": ["Adventure", "Fantasy"],
                "averageScore": 86
            }]}}
        }));

        assert_eq!(results.len(), 1);
        let hit = &results[0];
        assert_eq!(hit.id, 101);
        assert_eq!(hit.title.as_deref(), Some("Princess Mononoke"));
        assert_eq!(hit.work_type, "animation");
        assert_eq!(hit.year, Some(1997));
        assert_eq!(hit.cover_image.as_deref(), Some("https://img/large.png"));
        assert_eq!(hit.genres, vec!["Adventure", "Fantasy"]);
        assert_eq!(hit.rating, Some(86));
        assert_eq!(hit.source, "AniList");
    }

    #[test]
    fn title_falls_back_romaji_then_native() {
        let results = parse(serde_json::json!({
            "data": { "Page": { "media": [
                { "id": 1, "title": { "romaji": "Yuru Camp", "english": null, "native": "ゆるキャン" } },
                { "id": 2, "title": { "romaji": null, "english": null, "native": "氷菓" } }
            ]}}
        }));

        assert_eq!(results[0].title.as_deref(), Some("Yuru Camp"));
        assert_eq!(results[1].title.as_deref(), Some("氷菓"));
    }

    #[test]
    fn missing_page_yields_empty_results() {
        assert!(parse(serde_json::json!({ "data": null })).is_empty());
        assert!(parse(serde_json::json!({ "data": { "Page": null } })).is_empty());
        assert!(parse(serde_json::json!({ "data": { "Page": { "media": [] } } })).is_empty());
    }
}
