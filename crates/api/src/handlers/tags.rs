//! Handlers for tag CRUD.
//!
//! Name uniqueness is enforced by the database; a duplicate create
//! surfaces as 409 Conflict via the sqlx error classification.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use watchedit_core::error::CoreError;
use watchedit_core::tag;
use watchedit_core::types::DbId;
use watchedit_db::models::tag::{CreateTag, UpdateTag};
use watchedit_db::repositories::TagRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /tags/
///
/// Create a new tag. The color defaults to the standard blue when omitted.
pub async fn create_tag(
    State(state): State<AppState>,
    Json(input): Json<CreateTag>,
) -> AppResult<impl IntoResponse> {
    let name = tag::validate_name(&input.name)?;
    let color = input.color.as_deref().unwrap_or(tag::DEFAULT_COLOR);
    tag::validate_color(color)?;

    let created = TagRepo::create(&state.pool, &name, color).await?;

    tracing::info!(id = created.id, name = %created.name, "Tag created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /tags/
///
/// List all tags ordered by name.
pub async fn list_tags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tags = TagRepo::list_all(&state.pool).await?;
    Ok(Json(tags))
}

/// GET /tags/{id}
///
/// Fetch a single tag by id.
pub async fn get_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = TagRepo::find_by_id(&state.pool, tag_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tag", tag_id)))?;
    Ok(Json(found))
}

/// PUT /tags/{id}
///
/// Update a tag's name and/or color.
pub async fn update_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<DbId>,
    Json(input): Json<UpdateTag>,
) -> AppResult<impl IntoResponse> {
    let name = input.name.as_deref().map(tag::validate_name).transpose()?;
    if let Some(color) = &input.color {
        tag::validate_color(color)?;
    }

    let updated = TagRepo::update(&state.pool, tag_id, name.as_deref(), input.color.as_deref())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tag", tag_id)))?;

    tracing::info!(id = tag_id, "Tag updated");

    Ok(Json(updated))
}

/// DELETE /tags/{id}
///
/// Delete a tag and its work associations.
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TagRepo::delete(&state.pool, tag_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Tag", tag_id)));
    }

    tracing::info!(id = tag_id, "Tag deleted");

    Ok(Json(MessageResponse {
        message: "Tag deleted",
    }))
}
