//! Integration tests for the cloud backup repository: upsert-by-device-id
//! semantics, listing, and deletion.

use chrono::Utc;
use sqlx::SqlitePool;
use watchedit_db::models::cloud_backup::UploadBackup;
use watchedit_db::repositories::CloudBackupRepo;

fn snapshot(device_id: &str, works: serde_json::Value) -> UploadBackup {
    UploadBackup {
        works,
        tags: serde_json::json!([]),
        backup_date: Utc::now(),
        version: "1.0.0".to_string(),
        device_id: device_id.to_string(),
    }
}

#[sqlx::test]
async fn upload_twice_overwrites_instead_of_duplicating(pool: SqlitePool) {
    let first = snapshot("device-a", serde_json::json!([{ "title": "Mushishi" }]));
    CloudBackupRepo::upsert(&pool, &first).await.unwrap();

    let second = snapshot("device-a", serde_json::json!([{ "title": "Monster" }]));
    CloudBackupRepo::upsert(&pool, &second).await.unwrap();

    let backups = CloudBackupRepo::list_all(&pool).await.unwrap();
    assert_eq!(backups.len(), 1);

    let stored = CloudBackupRepo::find_by_device(&pool, "device-a")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.works, serde_json::json!([{ "title": "Monster" }]));
}

#[sqlx::test]
async fn backups_are_isolated_per_device(pool: SqlitePool) {
    CloudBackupRepo::upsert(&pool, &snapshot("device-a", serde_json::json!([])))
        .await
        .unwrap();
    CloudBackupRepo::upsert(&pool, &snapshot("device-b", serde_json::json!([])))
        .await
        .unwrap();

    let backups = CloudBackupRepo::list_all(&pool).await.unwrap();
    assert_eq!(backups.len(), 2);
}

#[sqlx::test]
async fn find_unknown_device_returns_none(pool: SqlitePool) {
    let found = CloudBackupRepo::find_by_device(&pool, "nowhere").await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn delete_reports_found_and_not_found(pool: SqlitePool) {
    CloudBackupRepo::upsert(&pool, &snapshot("device-a", serde_json::json!([])))
        .await
        .unwrap();

    assert!(CloudBackupRepo::delete(&pool, "device-a").await.unwrap());
    assert!(!CloudBackupRepo::delete(&pool, "device-a").await.unwrap());
}
