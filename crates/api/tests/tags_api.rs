//! Integration tests for the tag endpoints, including the duplicate-name
//! conflict.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, expect_status, get, post, put};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_echoes_fields_with_generated_id(pool: SqlitePool) {
    let response = post(
        common::build_test_app(pool),
        "/tags/",
        json!({ "name": "Comedy", "color": "#ff0000" }),
    )
    .await;
    let json = expect_status(response, StatusCode::CREATED).await;

    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["name"], "Comedy");
    assert_eq!(json["color"], "#ff0000");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_applies_default_color(pool: SqlitePool) {
    let response = post(
        common::build_test_app(pool),
        "/tags/",
        json!({ "name": "Adventure" }),
    )
    .await;
    let json = expect_status(response, StatusCode::CREATED).await;
    assert_eq!(json["color"], "#3b82f6");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_name_returns_conflict(pool: SqlitePool) {
    let first = post(
        common::build_test_app(pool.clone()),
        "/tags/",
        json!({ "name": "Comedy", "color": "#ff0000" }),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post(
        common::build_test_app(pool),
        "/tags/",
        json!({ "name": "Comedy", "color": "#00ff00" }),
    )
    .await;
    let json = expect_status(second, StatusCode::CONFLICT).await;
    assert!(json["detail"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_name_and_bad_color_are_rejected(pool: SqlitePool) {
    let response = post(
        common::build_test_app(pool.clone()),
        "/tags/",
        json!({ "name": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post(
        common::build_test_app(pool),
        "/tags/",
        json!({ "name": "Drama", "color": "blue" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_tag_returns_404(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/tags/42").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_returns_tags_ordered_by_name(pool: SqlitePool) {
    for name in ["Thriller", "Adventure", "Mystery"] {
        let response = post(
            common::build_test_app(pool.clone()),
            "/tags/",
            json!({ "name": name }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(common::build_test_app(pool), "/tags/").await;
    let json = expect_status(response, StatusCode::OK).await;

    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Adventure", "Mystery", "Thriller"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn collection_routes_accept_both_slash_forms(pool: SqlitePool) {
    for uri in ["/tags", "/tags/"] {
        let response = get(common::build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }

    let response = post(
        common::build_test_app(pool),
        "/tags",
        json!({ "name": "Mecha" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_applies_only_supplied_fields(pool: SqlitePool) {
    let created = post(
        common::build_test_app(pool.clone()),
        "/tags/",
        json!({ "name": "Romance", "color": "#ff69b4" }),
    )
    .await;
    let id = body_json(created).await["id"].as_i64().unwrap();

    let response = put(
        common::build_test_app(pool),
        &format!("/tags/{id}"),
        json!({ "color": "#ffffff" }),
    )
    .await;
    let json = expect_status(response, StatusCode::OK).await;

    assert_eq!(json["name"], "Romance");
    assert_eq!(json["color"], "#ffffff");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_then_404_on_second_delete(pool: SqlitePool) {
    let created = post(
        common::build_test_app(pool.clone()),
        "/tags/",
        json!({ "name": "War" }),
    )
    .await;
    let id = body_json(created).await["id"].as_i64().unwrap();

    let response = delete(common::build_test_app(pool.clone()), &format!("/tags/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(common::build_test_app(pool), &format!("/tags/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
