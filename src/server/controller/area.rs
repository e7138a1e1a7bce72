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
        area::{AreaDto, AreaFilterParams, NewAreaDto, UpdateAreaDto},
    },
    server::{
        data::area::{AreaFilter, AreaRepository},
        error::{record::RecordError, Error},
        model::app::AppState,
    },
};

pub static AREA_TAG: &str = "areas";

/// List areas
#[utoipa::path(
    get,
    path = "/api/areas",
    tag = AREA_TAG,
    params(AreaFilterParams),
    responses(
        (status = 200, description = "Areas", body = Vec<AreaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_areas(
    State(state): State<AppState>,
    Query(params): Query<AreaFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let filter = AreaFilter {
        search: params.search,
        is_active: params.is_active,
    };
    let areas = AreaRepository::new(&state.db).list(&filter).await?;

    let dtos: Vec<AreaDto> = areas.into_iter().map(AreaDto::from).collect();

    Ok(Json(dtos))
}

/// Get an area
#[utoipa::path(
    get,
    path = "/api/areas/{id}",
    tag = AREA_TAG,
    params(("id" = Uuid, Path, description = "Area ID")),
    responses(
        (status = 200, description = "Area", body = AreaDto),
        (status = 404, description = "Area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_area(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let area = AreaRepository::new(&state.db)
        .get(id)
        .await?
        .ok_or(RecordError::AreaNotFound(id))?;

    Ok(Json(AreaDto::from(area)))
}

/// Create an area
#[utoipa::path(
    post,
    path = "/api/areas",
    tag = AREA_TAG,
    request_body = NewAreaDto,
    responses(
        (status = 201, description = "Area created", body = AreaDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_area(
    State(state): State<AppState>,
    Json(new): Json<NewAreaDto>,
) -> Result<impl IntoResponse, Error> {
    let area = AreaRepository::new(&state.db).create(new).await?;

    state.events.publish("areas", Some(area.id));

    Ok((StatusCode::CREATED, Json(AreaDto::from(area))))
}

/// Update an area
#[utoipa::path(
    patch,
    path = "/api/areas/{id}",
    tag = AREA_TAG,
    params(("id" = Uuid, Path, description = "Area ID")),
    request_body = UpdateAreaDto,
    responses(
        (status = 200, description = "Area updated", body = AreaDto),
        (status = 404, description = "Area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_area(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<UpdateAreaDto>,
) -> Result<impl IntoResponse, Error> {
    let area = AreaRepository::new(&state.db).update(id, changes).await?;

    state.events.publish("areas", Some(area.id));

    Ok(Json(AreaDto::from(area)))
}

/// Activate or deactivate an area
#[utoipa::path(
    post,
    path = "/api/areas/{id}/active",
    tag = AREA_TAG,
    params(("id" = Uuid, Path, description = "Area ID")),
    request_body = SetActiveDto,
    responses(
        (status = 200, description = "Area updated", body = AreaDto),
        (status = 404, description = "Area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_area_active(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SetActiveDto>,
) -> Result<impl IntoResponse, Error> {
    let area = AreaRepository::new(&state.db)
        .set_active(id, body.is_active)
        .await?;

    state.events.publish("areas", Some(area.id));

    Ok(Json(AreaDto::from(area)))
}

/// Delete an area
///
/// Fails with a conflict while any application or record still points at
/// the area.
#[utoipa::path(
    delete,
    path = "/api/areas/{id}",
    tag = AREA_TAG,
    params(("id" = Uuid, Path, description = "Area ID")),
    responses(
        (status = 200, description = "Area deleted", body = MessageDto),
        (status = 404, description = "Area not found", body = ErrorDto),
        (status = 409, description = "Area still referenced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_area(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    AreaRepository::new(&state.db).delete(id).await?;

    state.events.publish("areas", Some(id));

    Ok(Json(MessageDto {
        message: "Area deleted".to_string(),
    }))
}
