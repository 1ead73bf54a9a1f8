//! Repository for the `videos` table.

use sqlx::SqlitePool;

use crate::models::video::{CreateVideo, Video};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, path, format, frame_rate, resolution, description, \
                       bit_depth, created_at, last_updated_by";

/// Provides CRUD operations for video metadata rows.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new metadata row, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (id, title, path, format, frame_rate, resolution,
                                 description, bit_depth, created_at, last_updated_by)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.id)
            .bind(&input.title)
            .bind(&input.path)
            .bind(&input.format)
            .bind(input.frame_rate)
            .bind(&input.resolution)
            .bind(&input.description)
            .bind(input.bit_depth)
            .bind(input.created_at)
            .bind(&input.last_updated_by)
            .fetch_one(pool)
            .await
    }

    /// Find a metadata row by id.
    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = ?");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all metadata rows, most recently uploaded first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos ORDER BY created_at DESC");
        sqlx::query_as::<_, Video>(&query).fetch_all(pool).await
    }

    /// Delete a metadata row by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
