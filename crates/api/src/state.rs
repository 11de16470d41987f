use std::sync::Arc;

use watchedit_anilist::AniListClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: watchedit_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// AniList search client (shared connection pool).
    pub anilist: Arc<AniListClient>,
}
