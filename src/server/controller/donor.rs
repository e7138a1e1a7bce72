use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, SetActiveDto},
        donor::{
            DonorDto, DonorFilterParams, DonorMatchDto, DonorMatchParams, NewDonorDto,
            UpdateDonorDto,
        },
    },
    server::{
        data::people::donor::{DonorFilter, DonorRepository},
        error::{record::RecordError, Error},
        model::app::AppState,
        service::{donor_match::DonorMatchService, intake::IntakeService},
    },
};

pub static DONOR_TAG: &str = "donors";

/// List donors
#[utoipa::path(
    get,
    path = "/api/donors",
    tag = DONOR_TAG,
    params(DonorFilterParams),
    responses(
        (status = 200, description = "Donors", body = Vec<DonorDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_donors(
    State(state): State<AppState>,
    Query(params): Query<DonorFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let filter = DonorFilter {
        search: params.search,
        support_type: params.support_type,
        support_frequency: params.support_frequency,
        is_active: params.is_active,
    };
    let donors = DonorRepository::new(&state.db).list(&filter).await?;

    let dtos: Vec<DonorDto> = donors.into_iter().map(DonorDto::from).collect();

    Ok(Json(dtos))
}

/// Find an existing donor by contact keys
///
/// Used by the public donor form to offer "welcome back" prefills. The
/// match is advisory and never blocks a new submission.
#[utoipa::path(
    get,
    path = "/api/donors/find",
    tag = DONOR_TAG,
    params(DonorMatchParams),
    responses(
        (status = 200, description = "Match result, null when no donor matches", body = Option<DonorMatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_donor(
    State(state): State<AppState>,
    Query(params): Query<DonorMatchParams>,
) -> Result<impl IntoResponse, Error> {
    let matched = DonorMatchService::new(&state.db)
        .find(
            params.phone.as_deref(),
            params.facebook_link.as_deref(),
            params.support_type,
        )
        .await?;

    let dto = matched.map(|m| DonorMatchDto {
        donor: DonorDto::from(m.donor),
        supports_requested: m.supports_requested,
    });

    Ok(Json(dto))
}

/// Get a donor
#[utoipa::path(
    get,
    path = "/api/donors/{id}",
    tag = DONOR_TAG,
    params(("id" = Uuid, Path, description = "Donor ID")),
    responses(
        (status = 200, description = "Donor", body = DonorDto),
        (status = 404, description = "Donor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_donor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let donor = DonorRepository::new(&state.db)
        .get(id)
        .await?
        .ok_or(RecordError::DonorNotFound(id))?;

    Ok(Json(DonorDto::from(donor)))
}

/// Create a donor with their pledged inventory
#[utoipa::path(
    post,
    path = "/api/donors",
    tag = DONOR_TAG,
    request_body = NewDonorDto,
    responses(
        (status = 201, description = "Donor created", body = DonorDto),
        (status = 422, description = "Invalid donor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_donor(
    State(state): State<AppState>,
    Json(new): Json<NewDonorDto>,
) -> Result<impl IntoResponse, Error> {
    let donor = IntakeService::new(&state.db).create_donor(new).await?;

    state.events.publish("donors", Some(donor.id));
    state.events.publish("laptops", None);
    state.events.publish("motorbikes", None);
    state.events.publish("components", None);
    state.events.publish("tuition_support", None);

    Ok((StatusCode::CREATED, Json(DonorDto::from(donor))))
}

/// Update a donor
#[utoipa::path(
    patch,
    path = "/api/donors/{id}",
    tag = DONOR_TAG,
    params(("id" = Uuid, Path, description = "Donor ID")),
    request_body = UpdateDonorDto,
    responses(
        (status = 200, description = "Donor updated", body = DonorDto),
        (status = 404, description = "Donor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_donor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<UpdateDonorDto>,
) -> Result<impl IntoResponse, Error> {
    let donor = DonorRepository::new(&state.db).update(id, changes).await?;

    state.events.publish("donors", Some(donor.id));

    Ok(Json(DonorDto::from(donor)))
}

/// Activate or deactivate a donor
#[utoipa::path(
    post,
    path = "/api/donors/{id}/active",
    tag = DONOR_TAG,
    params(("id" = Uuid, Path, description = "Donor ID")),
    request_body = SetActiveDto,
    responses(
        (status = 200, description = "Donor updated", body = DonorDto),
        (status = 404, description = "Donor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_donor_active(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SetActiveDto>,
) -> Result<impl IntoResponse, Error> {
    let donor = DonorRepository::new(&state.db)
        .set_active(id, body.is_active)
        .await?;

    state.events.publish("donors", Some(donor.id));

    Ok(Json(DonorDto::from(donor)))
}

/// Delete a donor
#[utoipa::path(
    delete,
    path = "/api/donors/{id}",
    tag = DONOR_TAG,
    params(("id" = Uuid, Path, description = "Donor ID")),
    responses(
        (status = 200, description = "Donor deleted", body = MessageDto),
        (status = 404, description = "Donor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_donor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let result = DonorRepository::new(&state.db).delete(id).await?;

    if result.rows_affected == 0 {
        return Err(RecordError::DonorNotFound(id).into());
    }

    state.events.publish("donors", Some(id));

    Ok(Json(MessageDto {
        message: "Donor deleted".to_string(),
    }))
}
