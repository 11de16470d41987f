//! Tag and work-tag models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use watchedit_core::types::DbId;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub color: String,
}

/// A row from the `work_tags` junction table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkTag {
    pub work_id: String,
    pub tag_id: DbId,
}

/// DTO for creating a new tag. The color defaults to the standard blue
/// when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTag {
    pub name: String,
    pub color: Option<String>,
}

/// DTO for updating an existing tag. Only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTag {
    pub name: Option<String>,
    pub color: Option<String>,
}
