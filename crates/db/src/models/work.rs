//! Work models and DTOs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use watchedit_core::types::{DbId, Timestamp};

use crate::models::tag::Tag;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `works` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Work {
    pub id: String,
    pub title: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub work_type: String,
    pub status: String,
    pub year: Option<i64>,
    pub progress: Option<serde_json::Value>,
    pub rating: Option<i64>,
    pub review: Option<String>,
    pub note: Option<String>,
    pub source: Option<String>,
    pub reminder_enabled: bool,
    pub reminder_frequency: Option<String>,
    pub date_added: Timestamp,
    pub date_updated: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a new work.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWork {
    pub title: String,
    #[serde(rename = "type")]
    pub work_type: String,
    pub status: String,
    pub year: Option<i64>,
    pub progress: Option<serde_json::Value>,
    pub rating: Option<i64>,
    pub review: Option<String>,
    pub note: Option<String>,
    pub source: Option<String>,
    #[serde(default)]
    pub reminder_enabled: bool,
    pub reminder_frequency: Option<String>,
    /// Optional tag associations. Unknown ids are skipped with a warning.
    pub tag_ids: Option<Vec<DbId>>,
}

/// DTO for updating an existing work. Only supplied fields change; a
/// supplied `tag_ids` replaces the full tag set.
///
/// An explicit JSON `null` is indistinguishable from an absent field, so
/// nullable fields (year, rating, review, note, source,
/// reminder_frequency) cannot be cleared back to null through this
/// payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWork {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub work_type: Option<String>,
    pub status: Option<String>,
    pub year: Option<i64>,
    pub progress: Option<serde_json::Value>,
    pub rating: Option<i64>,
    pub review: Option<String>,
    pub note: Option<String>,
    pub source: Option<String>,
    pub reminder_enabled: Option<bool>,
    pub reminder_frequency: Option<String>,
    pub tag_ids: Option<Vec<DbId>>,
}

/// Optional filters for listing works. All filters combine with AND.
#[derive(Debug, Clone, Default)]
pub struct WorkFilter {
    /// Case-insensitive title substring.
    pub title: Option<String>,
    /// Exact work type.
    pub work_type: Option<String>,
    /// Exact status.
    pub status: Option<String>,
    /// Exact year.
    pub year: Option<i64>,
    /// Works carrying any of these tags.
    pub tag_ids: Option<Vec<DbId>>,
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// A work together with its resolved tags.
#[derive(Debug, Clone, Serialize)]
pub struct WorkWithTags {
    #[serde(flatten)]
    pub work: Work,
    pub tags: Vec<Tag>,
}

/// Paginated listing response.
#[derive(Debug, Serialize)]
pub struct WorkList {
    pub works: Vec<WorkWithTags>,
    /// Total row count after filtering (not just this page).
    pub total: i64,
    pub page: i64,
    pub size: i64,
}

/// Collection overview: counts grouped by type, status, and year.
///
/// Works without a year are excluded from `year_stats` (a JSON object
/// cannot key on null).
#[derive(Debug, Serialize)]
pub struct WorkStats {
    pub total_works: i64,
    pub type_stats: BTreeMap<String, i64>,
    pub status_stats: BTreeMap<String, i64>,
    pub year_stats: BTreeMap<String, i64>,
}
