use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        application::{
            DonorApplicationDto, NewDonorApplicationDto, NewStudentApplicationDto,
            StudentApplicationDto,
        },
        student::RegisterSupportDto,
    },
    server::{error::Error, model::app::AppState, service::intake::IntakeService},
};

pub static PUBLIC_TAG: &str = "public";

/// Submit a donor application
#[utoipa::path(
    post,
    path = "/api/public/applications/donor",
    tag = PUBLIC_TAG,
    request_body = NewDonorApplicationDto,
    responses(
        (status = 201, description = "Application filed", body = DonorApplicationDto),
        (status = 422, description = "Invalid submission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_donor_application(
    State(state): State<AppState>,
    Json(new): Json<NewDonorApplicationDto>,
) -> Result<impl IntoResponse, Error> {
    let application = IntakeService::new(&state.db)
        .submit_donor_application(new)
        .await?;

    state.events.publish("donor_applications", Some(application.id));

    Ok((
        StatusCode::CREATED,
        Json(DonorApplicationDto::from(application)),
    ))
}

/// Submit a student application
#[utoipa::path(
    post,
    path = "/api/public/applications/student",
    tag = PUBLIC_TAG,
    request_body = NewStudentApplicationDto,
    responses(
        (status = 201, description = "Application filed", body = StudentApplicationDto),
        (status = 422, description = "Invalid submission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_student_application(
    State(state): State<AppState>,
    Json(new): Json<NewStudentApplicationDto>,
) -> Result<impl IntoResponse, Error> {
    let application = IntakeService::new(&state.db)
        .submit_student_application(new)
        .await?;

    state
        .events
        .publish("student_applications", Some(application.id));

    Ok((
        StatusCode::CREATED,
        Json(StudentApplicationDto::from(application)),
    ))
}

/// Offer support for a specific student
///
/// Files a pre-filled donor application whose support types mirror the
/// student's outstanding needs.
#[utoipa::path(
    post,
    path = "/api/public/students/{id}/support",
    tag = PUBLIC_TAG,
    params(("id" = Uuid, Path, description = "Student ID")),
    request_body = RegisterSupportDto,
    responses(
        (status = 201, description = "Support offer filed", body = DonorApplicationDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 422, description = "Invalid submission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_student_support(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(contact): Json<RegisterSupportDto>,
) -> Result<impl IntoResponse, Error> {
    let application = IntakeService::new(&state.db)
        .register_student_support(id, contact)
        .await?;

    state.events.publish("donor_applications", Some(application.id));

    Ok((
        StatusCode::CREATED,
        Json(DonorApplicationDto::from(application)),
    ))
}
