//! Video asset metadata model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use vportal_core::types::Timestamp;

/// Metadata row from the `videos` table.
///
/// Serialized field names are camelCase to preserve the portal's wire
/// format (`frameRate`, `bitDepth`, ...).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// UUID v4, assigned once at upload and never changed.
    pub id: String,
    pub title: String,
    /// Storage directory shared by all assets; the file itself is at
    /// `<path>/<title>_<id>.<format>`.
    pub path: String,
    pub format: String,
    pub frame_rate: i64,
    pub resolution: String,
    pub description: String,
    pub bit_depth: i64,
    pub created_at: Timestamp,
    pub last_updated_by: String,
}

/// DTO for inserting a metadata row. All fields are pre-validated by the
/// caller; `created_at` is captured fresh per upload.
#[derive(Debug)]
pub struct CreateVideo {
    pub id: String,
    pub title: String,
    pub path: String,
    pub format: String,
    pub frame_rate: i64,
    pub resolution: String,
    pub description: String,
    pub bit_depth: i64,
    pub created_at: Timestamp,
    pub last_updated_by: String,
}
