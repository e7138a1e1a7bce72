use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// One-line confirmation returned by mutating endpoints
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Body for activate/deactivate toggles
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SetActiveDto {
    pub is_active: bool,
}

/// Public URL of a stored upload
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UploadDto {
    pub url: String,
}
