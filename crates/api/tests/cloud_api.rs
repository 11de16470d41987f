//! Integration tests for the cloud backup endpoints: upsert semantics,
//! placeholder downloads, listing, and deletion outcomes.

mod common;

use axum::http::StatusCode;
use common::{body_json, expect_status, get, post};
use serde_json::json;
use sqlx::SqlitePool;

fn snapshot(device_id: &str, works: serde_json::Value) -> serde_json::Value {
    json!({
        "works": works,
        "tags": [],
        "backupDate": "2026-08-01T12:00:00Z",
        "version": "1.0.0",
        "deviceId": device_id,
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_echoes_snapshot(pool: SqlitePool) {
    let response = post(
        common::build_test_app(pool),
        "/cloud/backup",
        snapshot("device-a", json!([{ "title": "Mushishi" }])),
    )
    .await;
    let json = expect_status(response, StatusCode::OK).await;

    assert_eq!(json["success"], true);
    assert_eq!(json["works"][0]["title"], "Mushishi");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_twice_overwrites_for_same_device(pool: SqlitePool) {
    post(
        common::build_test_app(pool.clone()),
        "/cloud/backup",
        snapshot("device-a", json!([{ "title": "Mushishi" }])),
    )
    .await;
    post(
        common::build_test_app(pool.clone()),
        "/cloud/backup",
        snapshot("device-a", json!([{ "title": "Monster" }])),
    )
    .await;

    let listing = get(common::build_test_app(pool.clone()), "/cloud/backups").await;
    let json = expect_status(listing, StatusCode::OK).await;
    assert_eq!(json["backups"].as_array().unwrap().len(), 1);

    let download = get(
        common::build_test_app(pool),
        "/cloud/backup?device_id=device-a",
    )
    .await;
    let json = body_json(download).await;
    assert_eq!(json["works"][0]["title"], "Monster");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn download_unknown_device_returns_empty_placeholder(pool: SqlitePool) {
    let response = get(
        common::build_test_app(pool),
        "/cloud/backup?device_id=nowhere",
    )
    .await;
    let json = expect_status(response, StatusCode::OK).await;

    assert_eq!(json["works"], json!([]));
    assert_eq!(json["tags"], json!([]));
    assert_eq!(json["version"], "1.0.0");
    assert!(json["backupDate"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn download_without_device_id_returns_empty_placeholder(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/cloud/backup").await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["works"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_reports_metadata_for_all_devices(pool: SqlitePool) {
    post(
        common::build_test_app(pool.clone()),
        "/cloud/backup",
        snapshot("device-a", json!([])),
    )
    .await;
    post(
        common::build_test_app(pool.clone()),
        "/cloud/backup",
        snapshot("device-b", json!([])),
    )
    .await;

    let response = get(common::build_test_app(pool), "/cloud/backups").await;
    let json = expect_status(response, StatusCode::OK).await;

    let backups = json["backups"].as_array().unwrap();
    assert_eq!(backups.len(), 2);
    assert!(backups[0]["device_id"].is_string());
    assert!(backups[0]["backup_date"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_reports_outcome_in_body(pool: SqlitePool) {
    post(
        common::build_test_app(pool.clone()),
        "/cloud/backup",
        snapshot("device-a", json!([])),
    )
    .await;

    let response = common::delete(
        common::build_test_app(pool.clone()),
        "/cloud/backup?device_id=device-a",
    )
    .await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["success"], true);

    let response = common::delete(
        common::build_test_app(pool),
        "/cloud/backup?device_id=device-a",
    )
    .await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["success"], false);
}
