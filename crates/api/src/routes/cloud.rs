//! Route definitions for cloud backup storage.
//!
//! ```text
//! POST   /backup   -> upload_backup (upsert by device id)
//! GET    /backup   -> download_backup
//! DELETE /backup   -> delete_backup
//! GET    /backups  -> list_backups
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::cloud;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/backup",
            get(cloud::download_backup)
                .post(cloud::upload_backup)
                .delete(cloud::delete_backup),
        )
        .route("/backups", get(cloud::list_backups))
}
