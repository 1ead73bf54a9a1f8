//! Handlers for the `/videos` resource.
//!
//! Upload accepts raw video bytes plus metadata as multipart form data,
//! validates the parameters, persists the metadata row, then writes the
//! file. Download streams the stored file back with a client-facing
//! filename that omits the internal id.

use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use tokio_util::io::ReaderStream;
use uuid::Uuid;
use vportal_core::error::CoreError;
use vportal_core::video::{
    content_type_for_format, download_filename, stored_filename, validate_bit_depth,
    validate_format, validate_resolution,
};
use vportal_db::models::video::{CreateVideo, Video};
use vportal_db::repositories::VideoRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Multipart form parsing
// ---------------------------------------------------------------------------

/// Upload parameters collected from the multipart form.
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<Vec<u8>>,
    title: Option<String>,
    format: Option<String>,
    frame_rate: Option<i64>,
    resolution: Option<String>,
    description: Option<String>,
    bit_depth: Option<i64>,
}

impl UploadForm {
    /// Drain the multipart stream into an [`UploadForm`]. Unknown fields
    /// are ignored; integer fields fail with 400 when unparsable.
    async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "file" => {
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    form.file = Some(data.to_vec());
                }
                "title" => form.title = Some(text_field(field).await?),
                "format" => form.format = Some(text_field(field).await?),
                "frameRate" => form.frame_rate = Some(int_field(field, "frameRate").await?),
                "resolution" => form.resolution = Some(text_field(field).await?),
                "description" => form.description = Some(text_field(field).await?),
                "bitDepth" => form.bit_depth = Some(int_field(field, "bitDepth").await?),
                _ => {} // ignore unknown fields
            }
        }

        Ok(form)
    }

    fn require<T>(value: Option<T>, name: &str) -> AppResult<T> {
        value.ok_or_else(|| AppError::BadRequest(format!("Missing required field '{name}'")))
    }
}

async fn text_field(field: axum::extract::multipart::Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

async fn int_field(field: axum::extract::multipart::Field<'_>, name: &str) -> AppResult<i64> {
    let text = text_field(field).await?;
    text.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Field '{name}' must be an integer")))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/videos
///
/// Upload a new raw video (admin only). Multipart fields: `file`, `title`,
/// `format`, `frameRate`, `resolution`, `description` (optional),
/// `bitDepth`.
///
/// The metadata row is committed before the file is written; a failed file
/// write therefore leaves an orphaned row, which is logged for manual
/// reconciliation.
pub async fn upload(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Video>)> {
    let form = UploadForm::from_multipart(multipart).await?;

    let file = UploadForm::require(form.file, "file")?;
    let title = UploadForm::require(form.title, "title")?;
    let format = UploadForm::require(form.format, "format")?;
    let frame_rate = UploadForm::require(form.frame_rate, "frameRate")?;
    let resolution = UploadForm::require(form.resolution, "resolution")?;
    let bit_depth = UploadForm::require(form.bit_depth, "bitDepth")?;
    let description = form.description.unwrap_or_default();

    validate_bit_depth(bit_depth)?;
    validate_format(&format)?;
    validate_resolution(&resolution)?;

    let id = Uuid::new_v4().to_string();

    let input = CreateVideo {
        id: id.clone(),
        title,
        path: state.storage.root().display().to_string(),
        format,
        frame_rate,
        resolution,
        description,
        bit_depth,
        created_at: Utc::now(),
        last_updated_by: user.username,
    };
    let video = VideoRepo::create(&state.pool, &input).await?;

    let filename = stored_filename(&video.title, &video.id, &video.format);
    if let Err(e) = state.storage.store(&filename, &file).await {
        // The row is already committed; surface the orphan loudly.
        tracing::error!(video_id = %video.id, %filename, error = %e,
            "File write failed after metadata commit; row is orphaned");
        return Err(AppError::InternalError(format!(
            "Failed to store video file: {e}"
        )));
    }

    tracing::info!(video_id = %video.id, %filename, "Video uploaded");
    Ok((StatusCode::CREATED, Json(video)))
}

/// GET /api/v1/videos
///
/// List all video metadata records, most recently uploaded first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Video>>> {
    let videos = VideoRepo::list(&state.pool).await?;
    Ok(Json(videos))
}

/// GET /api/v1/videos/{id}
///
/// Stream a stored video back. The download filename is `{title}.{format}`
/// (the internal id stays server-side). A metadata row whose file is
/// missing on disk is reported as 404, same as an unknown id.
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let video = VideoRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Video", &id)))?;

    let filename = stored_filename(&video.title, &video.id, &video.format);
    let path = state.storage.path_for(&filename);

    if !state.storage.exists(&filename).await {
        tracing::warn!(video_id = %video.id, %filename,
            "Metadata row exists but the backing file is missing");
        return Err(AppError::Core(CoreError::not_found("VideoFile", &id)));
    }

    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    let file_size = file
        .metadata()
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?
        .len();
    let stream = ReaderStream::new(file);

    let disposition = format!(
        "attachment; filename=\"{}\"",
        download_filename(&video.title, &video.format)
    );

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type_for_format(&video.format))
        .header(header::CONTENT_LENGTH, file_size.to_string())
        .header(header::CONTENT_DISPOSITION, disposition)
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::InternalError(e.to_string()))
}

/// DELETE /api/v1/videos/{id}
///
/// Delete a video's file and metadata row (admin only). The file goes
/// first; an already-missing file is logged and tolerated so the row is
/// still removed.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let video = VideoRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Video", &id)))?;

    let filename = stored_filename(&video.title, &video.id, &video.format);
    match state.storage.delete(&filename).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(video_id = %video.id, %filename,
                "Backing file already missing at delete time");
        }
        Err(e) => {
            return Err(AppError::InternalError(format!(
                "Failed to delete video file: {e}"
            )));
        }
    }

    VideoRepo::delete(&state.pool, &id).await?;

    tracing::info!(video_id = %id, "Video deleted");
    Ok(Json(json!({ "message": "Video deleted" })))
}
