//! Repository for the `cloud_backups` table.
//!
//! One row per device id with upsert semantics: an upload for an existing
//! device overwrites its snapshot instead of creating a second row.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::cloud_backup::{BackupInfo, CloudBackup, UploadBackup};

/// Column list for `cloud_backups` queries.
const BACKUP_COLUMNS: &str = "id, device_id, works, tags, backup_date, version, last_updated";

/// Provides upsert-by-device-id backup storage.
pub struct CloudBackupRepo;

impl CloudBackupRepo {
    /// Insert or replace the backup row for a device.
    pub async fn upsert(
        pool: &SqlitePool,
        input: &UploadBackup,
    ) -> Result<CloudBackup, sqlx::Error> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();

        let query = format!(
            "INSERT INTO cloud_backups \
                 (id, device_id, works, tags, backup_date, version, last_updated) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (device_id) DO UPDATE SET \
                 works = excluded.works, \
                 tags = excluded.tags, \
                 backup_date = excluded.backup_date, \
                 version = excluded.version, \
                 last_updated = excluded.last_updated \
             RETURNING {BACKUP_COLUMNS}"
        );
        sqlx::query_as::<_, CloudBackup>(&query)
            .bind(&id)
            .bind(&input.device_id)
            .bind(&input.works)
            .bind(&input.tags)
            .bind(input.backup_date)
            .bind(&input.version)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find the backup for a device, if any.
    pub async fn find_by_device(
        pool: &SqlitePool,
        device_id: &str,
    ) -> Result<Option<CloudBackup>, sqlx::Error> {
        let query = format!("SELECT {BACKUP_COLUMNS} FROM cloud_backups WHERE device_id = $1");
        sqlx::query_as::<_, CloudBackup>(&query)
            .bind(device_id)
            .fetch_optional(pool)
            .await
    }

    /// List metadata for all stored backups, most recent first.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<BackupInfo>, sqlx::Error> {
        sqlx::query_as::<_, BackupInfo>(
            "SELECT device_id, backup_date, version, last_updated \
             FROM cloud_backups \
             ORDER BY last_updated DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Delete the backup for a device.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, device_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cloud_backups WHERE device_id = $1")
            .bind(device_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
