//! Error types for the givebridge server.
//!
//! Domain-specific error enums (application review, record management, image
//! processing, configuration) are aggregated into a single [`Error`] type.
//! All errors implement `IntoResponse` for Axum and use `thiserror` for
//! ergonomic definitions.

pub mod application;
pub mod config;
pub mod image;
pub mod record;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        application::ApplicationError, config::ConfigError, image::ImageError, record::RecordError,
    },
};

/// Main error type for the givebridge server.
///
/// Aggregates the domain error enums and external library errors into one
/// unified type so handlers can use `?` throughout. The `IntoResponse`
/// implementation maps each variant to an HTTP response; store-level errors
/// propagate here unchanged without retries.
#[derive(Error, Debug)]
pub enum Error {
    /// Application intake/review error (validation, missing, already decided).
    #[error(transparent)]
    ApplicationError(#[from] ApplicationError),
    /// Donor/student/inventory/area record error.
    #[error(transparent)]
    RecordError(#[from] RecordError),
    /// Image transcoding error (oversized or undecodable input).
    #[error(transparent)]
    ImageError(#[from] ImageError),
    /// Configuration error (missing environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Object storage I/O error.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ApplicationError(err) => err.into_response(),
            Self::RecordError(err) => err.into_response(),
            Self::ImageError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error for debugging and returns a generic message to the
/// client so internals are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
