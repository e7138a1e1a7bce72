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
        student::{
            MarkReceivedDto, NewStudentDto, StudentDto, StudentFilterParams, UpdateStudentDto,
        },
    },
    server::{
        data::people::student::{StudentFilter, StudentRepository},
        error::{record::RecordError, Error},
        model::app::AppState,
    },
};

pub static STUDENT_TAG: &str = "students";

/// List students
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    params(StudentFilterParams),
    responses(
        (status = 200, description = "Students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_students(
    State(state): State<AppState>,
    Query(params): Query<StudentFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let filter = StudentFilter {
        search: params.search,
        academic_year: params.academic_year,
        need: params.need,
        received: params.received,
    };
    let students = StudentRepository::new(&state.db).list(&filter).await?;

    let dtos: Vec<StudentDto> = students.into_iter().map(StudentDto::from).collect();

    Ok(Json(dtos))
}

/// Get a student
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let student = StudentRepository::new(&state.db)
        .get(id)
        .await?
        .ok_or(RecordError::StudentNotFound(id))?;

    Ok(Json(StudentDto::from(student)))
}

/// Create a student entered by staff
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = NewStudentDto,
    responses(
        (status = 201, description = "Student created", body = StudentDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(new): Json<NewStudentDto>,
) -> Result<impl IntoResponse, Error> {
    let student = StudentRepository::new(&state.db).create(&new).await?;

    state.events.publish("students", Some(student.id));

    Ok((StatusCode::CREATED, Json(StudentDto::from(student))))
}

/// Update a student
#[utoipa::path(
    patch,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = Uuid, Path, description = "Student ID")),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, Error> {
    let student = StudentRepository::new(&state.db).update(id, changes).await?;

    state.events.publish("students", Some(student.id));

    Ok(Json(StudentDto::from(student)))
}

/// Set or clear a received flag for one support category
#[utoipa::path(
    post,
    path = "/api/students/{id}/received",
    tag = STUDENT_TAG,
    params(("id" = Uuid, Path, description = "Student ID")),
    request_body = MarkReceivedDto,
    responses(
        (status = 200, description = "Student updated", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_student_received(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<MarkReceivedDto>,
) -> Result<impl IntoResponse, Error> {
    let student = StudentRepository::new(&state.db)
        .mark_received(id, body.support_type, body.received)
        .await?;

    state.events.publish("students", Some(student.id));

    Ok(Json(StudentDto::from(student)))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student deleted", body = MessageDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let result = StudentRepository::new(&state.db).delete(id).await?;

    if result.rows_affected == 0 {
        return Err(RecordError::StudentNotFound(id).into());
    }

    state.events.publish("students", Some(id));

    Ok(Json(MessageDto {
        message: "Student deleted".to_string(),
    }))
}
