//! Cloud backup models and DTOs.
//!
//! The upload/download wire format uses camelCase keys (`backupDate`,
//! `deviceId`, `lastUpdated`) to match the client snapshot format; the
//! metadata listing uses snake_case like the rest of the API.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use watchedit_core::types::Timestamp;

/// A row from the `cloud_backups` table. One row per device.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CloudBackup {
    pub id: String,
    pub device_id: String,
    pub works: serde_json::Value,
    pub tags: serde_json::Value,
    pub backup_date: Timestamp,
    pub version: String,
    pub last_updated: Timestamp,
}

/// DTO for uploading a backup snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadBackup {
    pub works: serde_json::Value,
    pub tags: serde_json::Value,
    #[serde(rename = "backupDate")]
    pub backup_date: Timestamp,
    pub version: String,
    #[serde(rename = "deviceId")]
    pub device_id: String,
}

/// Snapshot returned on download. When no backup exists for the device
/// this carries empty arrays and current timestamps, never an error.
#[derive(Debug, Serialize)]
pub struct BackupSnapshot {
    pub works: serde_json::Value,
    pub tags: serde_json::Value,
    #[serde(rename = "backupDate")]
    pub backup_date: Timestamp,
    pub version: String,
    #[serde(rename = "lastUpdated")]
    pub last_updated: Timestamp,
}

/// Metadata row for the backup listing endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BackupInfo {
    pub device_id: String,
    pub backup_date: Timestamp,
    pub version: String,
    pub last_updated: Timestamp,
}
