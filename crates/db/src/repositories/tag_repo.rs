//! Repository for the `tags` table.
//!
//! Name uniqueness is enforced by the `uq_tags_name` index; a duplicate
//! insert surfaces as a sqlx database error which the API layer maps to
//! 409 Conflict.

use sqlx::SqlitePool;
use watchedit_core::types::DbId;

use crate::models::tag::Tag;

/// Provides CRUD operations for tags.
pub struct TagRepo;

impl TagRepo {
    /// Insert a new tag and return the stored row with its generated id.
    pub async fn create(pool: &SqlitePool, name: &str, color: &str) -> Result<Tag, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            "INSERT INTO tags (name, color) VALUES ($1, $2) RETURNING id, name, color",
        )
        .bind(name)
        .bind(color)
        .fetch_one(pool)
        .await
    }

    /// List all tags ordered by name.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>("SELECT id, name, color FROM tags ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Find a tag by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>("SELECT id, name, color FROM tags WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a tag's name and/or color.
    ///
    /// Returns `None` if no tag with the given id exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        name: Option<&str>,
        color: Option<&str>,
    ) -> Result<Option<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            "UPDATE tags SET \
                 name = COALESCE($2, name), \
                 color = COALESCE($3, color) \
             WHERE id = $1 \
             RETURNING id, name, color",
        )
        .bind(id)
        .bind(name)
        .bind(color)
        .fetch_optional(pool)
        .await
    }

    /// Delete a tag by id. Cascade removes its work associations.
    ///
    /// Returns `true` if a tag was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
