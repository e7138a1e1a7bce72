use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::api::{ErrorDto, UploadDto},
    server::{
        error::Error,
        image::{transcode, TranscodeOptions},
        model::app::AppState,
    },
};

pub static UPLOAD_TAG: &str = "uploads";

/// Upload a photo
///
/// The raw body is transcoded to a bounded JPEG before storage; the original
/// bytes are never persisted. The response carries the public URL to embed
/// in a later submission.
#[utoipa::path(
    post,
    path = "/api/uploads/{bucket}",
    tag = UPLOAD_TAG,
    params(("bucket" = String, Path, description = "Target bucket, e.g. laptop-images")),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "Photo stored", body = UploadDto),
        (status = 422, description = "Image too large or undecodable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    Path(bucket): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let jpeg = transcode(&body, &TranscodeOptions::default())?;

    let name = format!("{}.jpg", Uuid::new_v4());
    let url = state.storage.upload(&bucket, &name, &jpeg).await?;

    tracing::info!(bucket = %bucket, name = %name, bytes = jpeg.len(), "photo stored");

    Ok((StatusCode::CREATED, Json(UploadDto { url })))
}
