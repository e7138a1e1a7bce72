use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        application::{
            ApplicationFilterParams, DecisionAction, DecisionDto, DonorApplicationDto,
            StudentApplicationDto,
        },
    },
    server::{
        data::application::{
            donor::DonorApplicationRepository, student::StudentApplicationRepository,
            ApplicationFilter,
        },
        error::{application::ApplicationError, Error},
        model::app::AppState,
        service::approval::{ApprovalService, Decision},
    },
};

pub static APPLICATION_TAG: &str = "applications";

impl From<DecisionDto> for Decision {
    fn from(dto: DecisionDto) -> Self {
        match dto.action {
            DecisionAction::Approve => Decision::Approve,
            DecisionAction::Reject => Decision::Reject {
                reason: dto.rejection_reason.unwrap_or_default(),
            },
        }
    }
}

impl From<&ApplicationFilterParams> for ApplicationFilter {
    fn from(params: &ApplicationFilterParams) -> Self {
        ApplicationFilter {
            search: params.search.clone(),
            status: params.status,
        }
    }
}

/// List donor applications
#[utoipa::path(
    get,
    path = "/api/applications/donor",
    tag = APPLICATION_TAG,
    params(ApplicationFilterParams),
    responses(
        (status = 200, description = "Donor applications", body = Vec<DonorApplicationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_donor_applications(
    State(state): State<AppState>,
    Query(params): Query<ApplicationFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let applications = DonorApplicationRepository::new(&state.db)
        .list(&ApplicationFilter::from(&params))
        .await?;

    let dtos: Vec<DonorApplicationDto> = applications
        .into_iter()
        .map(DonorApplicationDto::from)
        .collect();

    Ok(Json(dtos))
}

/// Get a donor application
#[utoipa::path(
    get,
    path = "/api/applications/donor/{id}",
    tag = APPLICATION_TAG,
    params(("id" = Uuid, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Donor application", body = DonorApplicationDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_donor_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let application = DonorApplicationRepository::new(&state.db)
        .get(id)
        .await?
        .ok_or(ApplicationError::NotFound(id))?;

    Ok(Json(DonorApplicationDto::from(application)))
}

/// Decide a donor application
///
/// Approval promotes the application into a donor record; a repeated
/// approval returns the existing record instead of creating another.
#[utoipa::path(
    post,
    path = "/api/applications/donor/{id}/decision",
    tag = APPLICATION_TAG,
    params(("id" = Uuid, Path, description = "Application ID")),
    request_body = DecisionDto,
    responses(
        (status = 200, description = "Decision recorded", body = MessageDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Application already decided", body = ErrorDto),
        (status = 422, description = "Rejection reason missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decide_donor_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(decision): Json<DecisionDto>,
) -> Result<impl IntoResponse, Error> {
    let reviewed_by = decision.reviewed_by.clone();
    let promoted = ApprovalService::new(&state.db)
        .decide_donor(id, decision.into(), &reviewed_by)
        .await?;

    state.events.publish("donor_applications", Some(id));

    let message = match promoted {
        Some(donor) => {
            state.events.publish("donors", Some(donor.id));
            "Application approved and donor record created".to_string()
        }
        None => "Application rejected".to_string(),
    };

    Ok((StatusCode::OK, Json(MessageDto { message })))
}

/// List student applications
#[utoipa::path(
    get,
    path = "/api/applications/student",
    tag = APPLICATION_TAG,
    params(ApplicationFilterParams),
    responses(
        (status = 200, description = "Student applications", body = Vec<StudentApplicationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_student_applications(
    State(state): State<AppState>,
    Query(params): Query<ApplicationFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let applications = StudentApplicationRepository::new(&state.db)
        .list(&ApplicationFilter::from(&params))
        .await?;

    let dtos: Vec<StudentApplicationDto> = applications
        .into_iter()
        .map(StudentApplicationDto::from)
        .collect();

    Ok(Json(dtos))
}

/// Get a student application
#[utoipa::path(
    get,
    path = "/api/applications/student/{id}",
    tag = APPLICATION_TAG,
    params(("id" = Uuid, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Student application", body = StudentApplicationDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let application = StudentApplicationRepository::new(&state.db)
        .get(id)
        .await?
        .ok_or(ApplicationError::NotFound(id))?;

    Ok(Json(StudentApplicationDto::from(application)))
}

/// Decide a student application
#[utoipa::path(
    post,
    path = "/api/applications/student/{id}/decision",
    tag = APPLICATION_TAG,
    params(("id" = Uuid, Path, description = "Application ID")),
    request_body = DecisionDto,
    responses(
        (status = 200, description = "Decision recorded", body = MessageDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Application already decided", body = ErrorDto),
        (status = 422, description = "Rejection reason missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decide_student_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(decision): Json<DecisionDto>,
) -> Result<impl IntoResponse, Error> {
    let reviewed_by = decision.reviewed_by.clone();
    let promoted = ApprovalService::new(&state.db)
        .decide_student(id, decision.into(), &reviewed_by)
        .await?;

    state.events.publish("student_applications", Some(id));

    let message = match promoted {
        Some(student) => {
            state.events.publish("students", Some(student.id));
            "Application approved and student record created".to_string()
        }
        None => "Application rejected".to_string(),
    };

    Ok((StatusCode::OK, Json(MessageDto { message })))
}
