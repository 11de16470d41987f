//! Repository for the `works` and `work_tags` tables.
//!
//! Provides work CRUD, filtered/paginated listing, tag-set replacement,
//! and collection statistics.

use std::collections::BTreeMap;

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use watchedit_core::types::DbId;

use crate::models::tag::Tag;
use crate::models::work::{Work, WorkFilter, WorkStats};

/// Column list for `works` queries.
const WORK_COLUMNS: &str = "\
    id, title, type, status, year, progress, rating, review, note, source, \
    reminder_enabled, reminder_frequency, date_added, date_updated";

/// Provides CRUD operations for works and their tag associations.
pub struct WorkRepo;

impl WorkRepo {
    // -----------------------------------------------------------------------
    // Work CRUD
    // -----------------------------------------------------------------------

    /// Insert a fully-formed work row. The caller is responsible for
    /// validation, id generation, and timestamps.
    pub async fn create(pool: &SqlitePool, work: &Work) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO works \
                 (id, title, type, status, year, progress, rating, review, note, source, \
                  reminder_enabled, reminder_frequency, date_added, date_updated) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)",
        )
        .bind(&work.id)
        .bind(&work.title)
        .bind(&work.work_type)
        .bind(&work.status)
        .bind(work.year)
        .bind(&work.progress)
        .bind(work.rating)
        .bind(&work.review)
        .bind(&work.note)
        .bind(&work.source)
        .bind(work.reminder_enabled)
        .bind(&work.reminder_frequency)
        .bind(work.date_added)
        .bind(work.date_updated)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Find a work by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Work>, sqlx::Error> {
        let query = format!("SELECT {WORK_COLUMNS} FROM works WHERE id = $1");
        sqlx::query_as::<_, Work>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List works matching the filter, paginated.
    ///
    /// Returns the page of rows plus the total filtered count. `page` is
    /// 1-based; callers clamp `page` and `size` before calling.
    pub async fn list(
        pool: &SqlitePool,
        filter: &WorkFilter,
        page: i64,
        size: i64,
    ) -> Result<(Vec<Work>, i64), sqlx::Error> {
        let mut count_qb = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM works");
        push_filters(&mut count_qb, filter);
        let total: i64 = count_qb.build_query_scalar().fetch_one(pool).await?;

        let mut qb =
            QueryBuilder::<Sqlite>::new(format!("SELECT {WORK_COLUMNS} FROM works"));
        push_filters(&mut qb, filter);
        qb.push(" ORDER BY date_added DESC, id LIMIT ");
        qb.push_bind(size);
        qb.push(" OFFSET ");
        // Saturate so an absurd page number yields an empty page instead
        // of overflowing.
        qb.push_bind(page.saturating_sub(1).saturating_mul(size));

        let works = qb.build_query_as::<Work>().fetch_all(pool).await?;
        Ok((works, total))
    }

    /// Apply a partial update. Unsupplied fields keep their current value.
    /// A `None` argument means "leave unchanged", so nullable columns
    /// cannot be cleared back to null here.
    ///
    /// Returns `None` if no work with the given id exists.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        title: Option<&str>,
        work_type: Option<&str>,
        status: Option<&str>,
        year: Option<i64>,
        progress: Option<&serde_json::Value>,
        rating: Option<i64>,
        review: Option<&str>,
        note: Option<&str>,
        source: Option<&str>,
        reminder_enabled: Option<bool>,
        reminder_frequency: Option<&str>,
        date_updated: chrono::DateTime<chrono::Utc>,
    ) -> Result<Option<Work>, sqlx::Error> {
        let query = format!(
            "UPDATE works SET \
                 title = COALESCE($2, title), \
                 type = COALESCE($3, type), \
                 status = COALESCE($4, status), \
                 year = COALESCE($5, year), \
                 progress = COALESCE($6, progress), \
                 rating = COALESCE($7, rating), \
                 review = COALESCE($8, review), \
                 note = COALESCE($9, note), \
                 source = COALESCE($10, source), \
                 reminder_enabled = COALESCE($11, reminder_enabled), \
                 reminder_frequency = COALESCE($12, reminder_frequency), \
                 date_updated = $13 \
             WHERE id = $1 \
             RETURNING {WORK_COLUMNS}"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(id)
            .bind(title)
            .bind(work_type)
            .bind(status)
            .bind(year)
            .bind(progress)
            .bind(rating)
            .bind(review)
            .bind(note)
            .bind(source)
            .bind(reminder_enabled)
            .bind(reminder_frequency)
            .bind(date_updated)
            .fetch_optional(pool)
            .await
    }

    /// Delete a work and its tag associations.
    ///
    /// Returns `true` if a work was deleted.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM work_tags WHERE work_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM works WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Tag associations
    // -----------------------------------------------------------------------

    /// Replace a work's full tag set.
    ///
    /// Unknown tag ids are skipped with a warning rather than failing the
    /// operation. Returns the ids that were actually associated.
    pub async fn replace_tags(
        pool: &SqlitePool,
        work_id: &str,
        tag_ids: &[DbId],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM work_tags WHERE work_id = $1")
            .bind(work_id)
            .execute(&mut *tx)
            .await?;

        let mut applied = Vec::new();
        for &tag_id in tag_ids {
            let exists: Option<DbId> = sqlx::query_scalar("SELECT id FROM tags WHERE id = $1")
                .bind(tag_id)
                .fetch_optional(&mut *tx)
                .await?;
            if exists.is_none() {
                tracing::warn!(work_id, tag_id, "Tag not found, skipping association");
                continue;
            }

            sqlx::query(
                "INSERT INTO work_tags (work_id, tag_id) VALUES ($1, $2) \
                 ON CONFLICT (work_id, tag_id) DO NOTHING",
            )
            .bind(work_id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await?;
            applied.push(tag_id);
        }

        tx.commit().await?;
        Ok(applied)
    }

    /// List the tags associated with a work, ordered by name.
    pub async fn tags_for_work(
        pool: &SqlitePool,
        work_id: &str,
    ) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            "SELECT t.id, t.name, t.color \
             FROM tags t \
             JOIN work_tags wt ON wt.tag_id = t.id \
             WHERE wt.work_id = $1 \
             ORDER BY t.name",
        )
        .bind(work_id)
        .fetch_all(pool)
        .await
    }

    /// Titles matching a case-insensitive substring, for search
    /// suggestions.
    pub async fn title_suggestions(
        pool: &SqlitePool,
        query: &str,
        limit: i64,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT title FROM works WHERE LOWER(title) LIKE $1 ORDER BY title LIMIT $2",
        )
        .bind(format!("%{}%", query.to_lowercase()))
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Collection overview: total count plus counts grouped by type,
    /// status, and year. Works without a year are left out of the year map.
    pub async fn stats(pool: &SqlitePool) -> Result<WorkStats, sqlx::Error> {
        let total_works: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM works")
            .fetch_one(pool)
            .await?;

        let type_rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT type, COUNT(*) FROM works GROUP BY type")
                .fetch_all(pool)
                .await?;

        let status_rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM works GROUP BY status")
                .fetch_all(pool)
                .await?;

        let year_rows: Vec<(i64, i64)> = sqlx::query_as(
            "SELECT year, COUNT(*) FROM works WHERE year IS NOT NULL GROUP BY year",
        )
        .fetch_all(pool)
        .await?;

        Ok(WorkStats {
            total_works,
            type_stats: type_rows.into_iter().collect(),
            status_stats: status_rows.into_iter().collect(),
            year_stats: year_rows
                .into_iter()
                .map(|(year, count)| (year.to_string(), count))
                .collect::<BTreeMap<_, _>>(),
        })
    }
}

/// Append the filter's WHERE clauses to a query builder.
///
/// Shared by the count and page queries so both always agree.
fn push_filters(qb: &mut QueryBuilder<'_, Sqlite>, filter: &WorkFilter) {
    qb.push(" WHERE 1 = 1");

    if let Some(title) = &filter.title {
        // SQLite LIKE is only case-insensitive for ASCII; lowering both
        // sides keeps the behaviour predictable.
        qb.push(" AND LOWER(title) LIKE ");
        qb.push_bind(format!("%{}%", title.to_lowercase()));
    }
    if let Some(work_type) = &filter.work_type {
        qb.push(" AND type = ");
        qb.push_bind(work_type.clone());
    }
    if let Some(status) = &filter.status {
        qb.push(" AND status = ");
        qb.push_bind(status.clone());
    }
    if let Some(year) = filter.year {
        qb.push(" AND year = ");
        qb.push_bind(year);
    }
    if let Some(tag_ids) = &filter.tag_ids {
        if !tag_ids.is_empty() {
            qb.push(" AND id IN (SELECT work_id FROM work_tags WHERE tag_id IN (");
            let mut separated = qb.separated(", ");
            for &tag_id in tag_ids {
                separated.push_bind(tag_id);
            }
            qb.push("))");
        }
    }
}
