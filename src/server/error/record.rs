use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Donor {0} not found")]
    DonorNotFound(Uuid),
    #[error("Student {0} not found")]
    StudentNotFound(Uuid),
    #[error("Area {0} not found")]
    AreaNotFound(Uuid),
    #[error("Inventory item {0} not found")]
    ItemNotFound(Uuid),
    #[error("Area {0} is still referenced by applications, donors, or students")]
    AreaInUse(Uuid),
}

impl RecordError {
    fn not_found(message: &str) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for RecordError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::DonorNotFound(_) => Self::not_found("Donor not found"),
            Self::StudentNotFound(_) => Self::not_found("Student not found"),
            Self::AreaNotFound(_) => Self::not_found("Area not found"),
            Self::ItemNotFound(_) => Self::not_found("Inventory item not found"),
            Self::AreaInUse(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Area is still in use and cannot be deleted".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
