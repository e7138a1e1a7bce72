use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Application {0} not found")]
    NotFound(Uuid),
    #[error("Application {0} has already been decided")]
    AlreadyDecided(Uuid),
    #[error("Rejecting an application requires a non-empty reason")]
    RejectionReasonRequired,
    #[error("Invalid submission: {0}")]
    Validation(String),
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(_) => {
                tracing::debug!("{}", self);
                (StatusCode::NOT_FOUND, "Application not found".to_string())
            }
            Self::AlreadyDecided(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::CONFLICT,
                    "This application has already been reviewed".to_string(),
                )
            }
            Self::RejectionReasonRequired => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "A rejection reason is required".to_string(),
            ),
            Self::Validation(message) => (StatusCode::UNPROCESSABLE_ENTITY, message.clone()),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
