use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Errors from the image transcoding pipeline.
///
/// Only oversized and undecodable inputs are fatal to the caller; failure to
/// hit the size target degrades gracefully inside the transcoder and never
/// surfaces here.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Input image is {size} bytes which exceeds the {limit} byte ceiling")]
    OversizedInput { size: usize, limit: usize },
    #[error("Failed to decode input image: {0}")]
    Decode(String),
    #[error("Failed to encode image: {0}")]
    Encode(String),
}

impl IntoResponse for ImageError {
    fn into_response(self) -> Response {
        match self {
            Self::OversizedInput { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    Json(ErrorDto {
                        error: "Image is too large, the limit is 10 MB".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Decode(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorDto {
                        error: "The uploaded file is not a readable image".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Encode(_) => InternalServerError(self).into_response(),
        }
    }
}
