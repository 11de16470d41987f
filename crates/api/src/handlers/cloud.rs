//! Handlers for device-keyed cloud backup storage.
//!
//! Uploads upsert by device id, downloads return an empty placeholder
//! rather than an error when nothing is stored, and deletes report a
//! found/not-found outcome in the body.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use watchedit_db::models::cloud_backup::{BackupInfo, BackupSnapshot, UploadBackup};
use watchedit_db::repositories::CloudBackupRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for download (device id optional).
#[derive(Debug, Deserialize)]
pub struct DownloadParams {
    pub device_id: Option<String>,
}

/// Query parameters for delete (device id required).
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub device_id: String,
}

/// Upload response: outcome plus an echo of the stored snapshot.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: &'static str,
    pub works: serde_json::Value,
    pub tags: serde_json::Value,
}

/// Delete response carrying a found/not-found outcome.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Listing response wrapper.
#[derive(Debug, Serialize)]
pub struct BackupListResponse {
    pub backups: Vec<BackupInfo>,
}

/// POST /cloud/backup
///
/// Store a backup snapshot, replacing any previous one for the device.
pub async fn upload_backup(
    State(state): State<AppState>,
    Json(input): Json<UploadBackup>,
) -> AppResult<impl IntoResponse> {
    let stored = CloudBackupRepo::upsert(&state.pool, &input).await?;

    tracing::info!(device_id = %stored.device_id, version = %stored.version, "Backup stored");

    Ok(Json(UploadResponse {
        success: true,
        message: "Backup uploaded",
        works: stored.works,
        tags: stored.tags,
    }))
}

/// GET /cloud/backup?device_id=
///
/// Return the stored snapshot for a device, or an empty placeholder when
/// no device id is given or nothing is stored. Never an error.
pub async fn download_backup(
    State(state): State<AppState>,
    Query(params): Query<DownloadParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(device_id) = &params.device_id {
        if let Some(backup) = CloudBackupRepo::find_by_device(&state.pool, device_id).await? {
            return Ok(Json(BackupSnapshot {
                works: backup.works,
                tags: backup.tags,
                backup_date: backup.backup_date,
                version: backup.version,
                last_updated: backup.last_updated,
            }));
        }
    }

    let now = Utc::now();
    Ok(Json(BackupSnapshot {
        works: serde_json::json!([]),
        tags: serde_json::json!([]),
        backup_date: now,
        version: "1.0.0".to_string(),
        last_updated: now,
    }))
}

/// GET /cloud/backups
///
/// List metadata for all stored backups.
pub async fn list_backups(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let backups = CloudBackupRepo::list_all(&state.pool).await?;
    Ok(Json(BackupListResponse { backups }))
}

/// DELETE /cloud/backup?device_id=
///
/// Remove the backup for a device. The outcome is reported in the body
/// rather than as an error status.
pub async fn delete_backup(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> AppResult<impl IntoResponse> {
    let deleted = CloudBackupRepo::delete(&state.pool, &params.device_id).await?;

    if deleted {
        tracing::info!(device_id = %params.device_id, "Backup deleted");
    }

    Ok(Json(DeleteResponse {
        success: deleted,
        message: if deleted {
            "Backup deleted"
        } else {
            "No backup found for this device"
        },
    }))
}
