//! Handlers for the work collection.
//!
//! Provides endpoints for work CRUD, filtered/paginated listing, and the
//! collection statistics overview. Field constraints are validated here,
//! before anything reaches the repository layer.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::Query;
use chrono::Utc;
use serde::Deserialize;

use watchedit_core::error::CoreError;
use watchedit_core::types::DbId;
use watchedit_core::work::{self, MAX_SOURCE_LEN, MAX_TEXT_LEN};
use watchedit_db::models::work::{CreateWork, UpdateWork, Work, WorkFilter, WorkList, WorkWithTags};
use watchedit_db::repositories::WorkRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Default page size for work listing.
const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size for work listing.
const MAX_PAGE_SIZE: i64 = 100;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for `GET /works/`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    /// Case-insensitive title substring.
    pub title: Option<String>,
    /// Exact work type.
    #[serde(rename = "type")]
    pub work_type: Option<String>,
    /// Exact status.
    pub status: Option<String>,
    /// Exact year.
    pub year: Option<i64>,
    /// Tag ids, as repeated keys (`?tag_ids=1&tag_ids=2`) or
    /// comma-separated (`?tag_ids=1,2`).
    #[serde(default)]
    pub tag_ids: Vec<String>,
}

/// Parse tag id entries, splitting each on commas.
fn parse_tag_ids(raw: &[String]) -> AppResult<Vec<DbId>> {
    raw.iter()
        .flat_map(|entry| entry.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<DbId>()
                .map_err(|_| AppError::BadRequest(format!("Invalid tag id: '{s}'")))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a create payload. Returns the trimmed title.
fn validate_create(input: &CreateWork) -> Result<String, CoreError> {
    let title = work::validate_title(&input.title)?;
    work::validate_work_type(&input.work_type)?;
    work::validate_status(&input.status)?;
    if let Some(year) = input.year {
        work::validate_year(year)?;
    }
    if let Some(rating) = input.rating {
        work::validate_rating(rating)?;
    }
    if let Some(review) = &input.review {
        work::validate_text_len("Review", review, MAX_TEXT_LEN)?;
    }
    if let Some(note) = &input.note {
        work::validate_text_len("Note", note, MAX_TEXT_LEN)?;
    }
    if let Some(source) = &input.source {
        work::validate_text_len("Source", source, MAX_SOURCE_LEN)?;
    }
    work::validate_reminder(input.reminder_enabled, input.reminder_frequency.as_deref())?;
    Ok(title)
}

/// Validate the supplied fields of an update payload against the current
/// row. Returns the trimmed title when one was supplied.
fn validate_update(current: &Work, input: &UpdateWork) -> Result<Option<String>, CoreError> {
    let title = input
        .title
        .as_deref()
        .map(work::validate_title)
        .transpose()?;
    if let Some(work_type) = &input.work_type {
        work::validate_work_type(work_type)?;
    }
    if let Some(status) = &input.status {
        work::validate_status(status)?;
    }
    if let Some(year) = input.year {
        work::validate_year(year)?;
    }
    if let Some(rating) = input.rating {
        work::validate_rating(rating)?;
    }
    if let Some(review) = &input.review {
        work::validate_text_len("Review", review, MAX_TEXT_LEN)?;
    }
    if let Some(note) = &input.note {
        work::validate_text_len("Note", note, MAX_TEXT_LEN)?;
    }
    if let Some(source) = &input.source {
        work::validate_text_len("Source", source, MAX_SOURCE_LEN)?;
    }

    // The reminder rule holds for the row as it will be after the merge.
    let enabled = input.reminder_enabled.unwrap_or(current.reminder_enabled);
    let frequency = input
        .reminder_frequency
        .as_deref()
        .or(current.reminder_frequency.as_deref());
    work::validate_reminder(enabled, frequency)?;

    Ok(title)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Attach a work's resolved tags.
async fn with_tags(pool: &watchedit_db::DbPool, work: Work) -> AppResult<WorkWithTags> {
    let tags = WorkRepo::tags_for_work(pool, &work.id).await?;
    Ok(WorkWithTags { work, tags })
}

// ---------------------------------------------------------------------------
// POST /works/
// ---------------------------------------------------------------------------

/// Create a new work with optional tag associations. Unknown tag ids are
/// skipped with a warning rather than failing the request.
pub async fn create_work(
    State(state): State<AppState>,
    Json(input): Json<CreateWork>,
) -> AppResult<impl IntoResponse> {
    let title = validate_create(&input)?;

    let work = Work {
        id: uuid::Uuid::new_v4().to_string(),
        title,
        work_type: input.work_type,
        status: input.status,
        year: input.year,
        progress: input.progress,
        rating: input.rating,
        review: input.review,
        note: input.note,
        source: input.source,
        reminder_enabled: input.reminder_enabled,
        reminder_frequency: input.reminder_frequency,
        date_added: Utc::now(),
        date_updated: None,
    };

    WorkRepo::create(&state.pool, &work).await?;

    if let Some(tag_ids) = &input.tag_ids {
        WorkRepo::replace_tags(&state.pool, &work.id, tag_ids).await?;
    }

    tracing::info!(id = %work.id, title = %work.title, "Work created");

    let response = with_tags(&state.pool, work).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

// ---------------------------------------------------------------------------
// GET /works/
// ---------------------------------------------------------------------------

/// List works with optional filters and pagination. Out-of-range `page`
/// and `size` values are rejected rather than silently clamped.
pub async fn list_works(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let page = params.page.unwrap_or(1);
    if page < 1 {
        return Err(AppError::BadRequest("page must be at least 1".into()));
    }
    let size = params.size.unwrap_or(DEFAULT_PAGE_SIZE);
    if !(1..=MAX_PAGE_SIZE).contains(&size) {
        return Err(AppError::BadRequest(format!(
            "size must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }

    let tag_ids = if params.tag_ids.is_empty() {
        None
    } else {
        Some(parse_tag_ids(&params.tag_ids)?)
    };

    let filter = WorkFilter {
        title: params.title,
        work_type: params.work_type,
        status: params.status,
        year: params.year,
        tag_ids,
    };

    let (rows, total) = WorkRepo::list(&state.pool, &filter, page, size).await?;

    let mut works = Vec::with_capacity(rows.len());
    for row in rows {
        works.push(with_tags(&state.pool, row).await?);
    }

    Ok(Json(WorkList {
        works,
        total,
        page,
        size,
    }))
}

// ---------------------------------------------------------------------------
// GET /works/{id}
// ---------------------------------------------------------------------------

/// Fetch a single work by id.
pub async fn get_work(
    State(state): State<AppState>,
    Path(work_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let work = WorkRepo::find_by_id(&state.pool, &work_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Work", &work_id)))?;

    let response = with_tags(&state.pool, work).await?;
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// PUT /works/{id}
// ---------------------------------------------------------------------------

/// Apply a partial update. Only supplied fields change; a supplied
/// `tag_ids` replaces the full tag set.
pub async fn update_work(
    State(state): State<AppState>,
    Path(work_id): Path<String>,
    Json(input): Json<UpdateWork>,
) -> AppResult<impl IntoResponse> {
    let current = WorkRepo::find_by_id(&state.pool, &work_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Work", &work_id)))?;

    let title = validate_update(&current, &input)?;

    let updated = WorkRepo::update(
        &state.pool,
        &work_id,
        title.as_deref(),
        input.work_type.as_deref(),
        input.status.as_deref(),
        input.year,
        input.progress.as_ref(),
        input.rating,
        input.review.as_deref(),
        input.note.as_deref(),
        input.source.as_deref(),
        input.reminder_enabled,
        input.reminder_frequency.as_deref(),
        Utc::now(),
    )
    .await?
    .ok_or_else(|| AppError::Core(CoreError::not_found("Work", &work_id)))?;

    if let Some(tag_ids) = &input.tag_ids {
        WorkRepo::replace_tags(&state.pool, &work_id, tag_ids).await?;
    }

    tracing::info!(id = %work_id, "Work updated");

    let response = with_tags(&state.pool, updated).await?;
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// DELETE /works/{id}
// ---------------------------------------------------------------------------

/// Delete a work and its tag associations.
pub async fn delete_work(
    State(state): State<AppState>,
    Path(work_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = WorkRepo::delete(&state.pool, &work_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Work", &work_id)));
    }

    tracing::info!(id = %work_id, "Work deleted");

    Ok(Json(MessageResponse {
        message: "Work deleted",
    }))
}

// ---------------------------------------------------------------------------
// GET /works/stats/overview
// ---------------------------------------------------------------------------

/// Collection statistics: counts grouped by type, status, and year.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = WorkRepo::stats(&state.pool).await?;
    Ok(Json(stats))
}
