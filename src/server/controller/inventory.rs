use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        inventory::{
            AssignDto, ComponentDto, ItemFilterParams, LaptopDto, MotorbikeDto,
            TuitionFilterParams, TuitionSupportDto, UpdateItemDto, UpdateTuitionDto,
        },
    },
    server::{
        data::{
            inventory::{
                component::ComponentRepository, laptop::LaptopRepository,
                motorbike::MotorbikeRepository,
                tuition::{TuitionFilter, TuitionRepository},
                ItemFilter,
            },
            people::student::StudentRepository,
        },
        error::{record::RecordError, Error},
        model::app::AppState,
    },
};

pub static INVENTORY_TAG: &str = "inventory";

impl From<&ItemFilterParams> for ItemFilter {
    fn from(params: &ItemFilterParams) -> Self {
        ItemFilter {
            status: params.status,
            donor_id: params.donor_id,
            student_id: params.student_id,
        }
    }
}

/// Assignments must point at a live student row.
async fn ensure_student_exists(db: &DatabaseConnection, student_id: Uuid) -> Result<(), Error> {
    StudentRepository::new(db)
        .get(student_id)
        .await?
        .ok_or(RecordError::StudentNotFound(student_id))?;

    Ok(())
}

/// List laptops
#[utoipa::path(
    get,
    path = "/api/laptops",
    tag = INVENTORY_TAG,
    params(ItemFilterParams),
    responses(
        (status = 200, description = "Laptops", body = Vec<LaptopDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_laptops(
    State(state): State<AppState>,
    Query(params): Query<ItemFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let laptops = LaptopRepository::new(&state.db)
        .list(&ItemFilter::from(&params))
        .await?;

    let dtos: Vec<LaptopDto> = laptops.into_iter().map(LaptopDto::from).collect();

    Ok(Json(dtos))
}

/// Update a laptop
#[utoipa::path(
    patch,
    path = "/api/laptops/{id}",
    tag = INVENTORY_TAG,
    params(("id" = Uuid, Path, description = "Laptop ID")),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Laptop updated", body = LaptopDto),
        (status = 404, description = "Laptop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_laptop(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<UpdateItemDto>,
) -> Result<impl IntoResponse, Error> {
    let laptop = LaptopRepository::new(&state.db).update(id, changes).await?;

    state.events.publish("laptops", Some(laptop.id));

    Ok(Json(LaptopDto::from(laptop)))
}

/// Assign a laptop to a student
#[utoipa::path(
    post,
    path = "/api/laptops/{id}/assign",
    tag = INVENTORY_TAG,
    params(("id" = Uuid, Path, description = "Laptop ID")),
    request_body = AssignDto,
    responses(
        (status = 200, description = "Laptop assigned", body = LaptopDto),
        (status = 404, description = "Laptop or student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_laptop(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AssignDto>,
) -> Result<impl IntoResponse, Error> {
    ensure_student_exists(&state.db, body.student_id).await?;

    let laptop = LaptopRepository::new(&state.db)
        .assign_to_student(id, body.student_id)
        .await?;

    state.events.publish("laptops", Some(laptop.id));

    Ok(Json(LaptopDto::from(laptop)))
}

/// Mark a laptop delivered
#[utoipa::path(
    post,
    path = "/api/laptops/{id}/delivered",
    tag = INVENTORY_TAG,
    params(("id" = Uuid, Path, description = "Laptop ID")),
    responses(
        (status = 200, description = "Laptop delivered", body = LaptopDto),
        (status = 404, description = "Laptop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deliver_laptop(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let laptop = LaptopRepository::new(&state.db).mark_delivered(id).await?;

    state.events.publish("laptops", Some(laptop.id));

    Ok(Json(LaptopDto::from(laptop)))
}

/// Delete a laptop
#[utoipa::path(
    delete,
    path = "/api/laptops/{id}",
    tag = INVENTORY_TAG,
    params(("id" = Uuid, Path, description = "Laptop ID")),
    responses(
        (status = 200, description = "Laptop deleted", body = MessageDto),
        (status = 404, description = "Laptop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_laptop(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let result = LaptopRepository::new(&state.db).delete(id).await?;

    if result.rows_affected == 0 {
        return Err(RecordError::ItemNotFound(id).into());
    }

    state.events.publish("laptops", Some(id));

    Ok(Json(MessageDto {
        message: "Laptop deleted".to_string(),
    }))
}

/// List motorbikes
#[utoipa::path(
    get,
    path = "/api/motorbikes",
    tag = INVENTORY_TAG,
    params(ItemFilterParams),
    responses(
        (status = 200, description = "Motorbikes", body = Vec<MotorbikeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_motorbikes(
    State(state): State<AppState>,
    Query(params): Query<ItemFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let motorbikes = MotorbikeRepository::new(&state.db)
        .list(&ItemFilter::from(&params))
        .await?;

    let dtos: Vec<MotorbikeDto> = motorbikes.into_iter().map(MotorbikeDto::from).collect();

    Ok(Json(dtos))
}

/// Update a motorbike
#[utoipa::path(
    patch,
    path = "/api/motorbikes/{id}",
    tag = INVENTORY_TAG,
    params(("id" = Uuid, Path, description = "Motorbike ID")),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Motorbike updated", body = MotorbikeDto),
        (status = 404, description = "Motorbike not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_motorbike(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<UpdateItemDto>,
) -> Result<impl IntoResponse, Error> {
    let motorbike = MotorbikeRepository::new(&state.db)
        .update(id, changes)
        .await?;

    state.events.publish("motorbikes", Some(motorbike.id));

    Ok(Json(MotorbikeDto::from(motorbike)))
}

/// Assign a motorbike to a student
#[utoipa::path(
    post,
    path = "/api/motorbikes/{id}/assign",
    tag = INVENTORY_TAG,
    params(("id" = Uuid, Path, description = "Motorbike ID")),
    request_body = AssignDto,
    responses(
        (status = 200, description = "Motorbike assigned", body = MotorbikeDto),
        (status = 404, description = "Motorbike or student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_motorbike(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AssignDto>,
) -> Result<impl IntoResponse, Error> {
    ensure_student_exists(&state.db, body.student_id).await?;

    let motorbike = MotorbikeRepository::new(&state.db)
        .assign_to_student(id, body.student_id)
        .await?;

    state.events.publish("motorbikes", Some(motorbike.id));

    Ok(Json(MotorbikeDto::from(motorbike)))
}

/// Mark a motorbike delivered
#[utoipa::path(
    post,
    path = "/api/motorbikes/{id}/delivered",
    tag = INVENTORY_TAG,
    params(("id" = Uuid, Path, description = "Motorbike ID")),
    responses(
        (status = 200, description = "Motorbike delivered", body = MotorbikeDto),
        (status = 404, description = "Motorbike not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deliver_motorbike(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let motorbike = MotorbikeRepository::new(&state.db).mark_delivered(id).await?;

    state.events.publish("motorbikes", Some(motorbike.id));

    Ok(Json(MotorbikeDto::from(motorbike)))
}

/// Delete a motorbike
#[utoipa::path(
    delete,
    path = "/api/motorbikes/{id}",
    tag = INVENTORY_TAG,
    params(("id" = Uuid, Path, description = "Motorbike ID")),
    responses(
        (status = 200, description = "Motorbike deleted", body = MessageDto),
        (status = 404, description = "Motorbike not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_motorbike(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let result = MotorbikeRepository::new(&state.db).delete(id).await?;

    if result.rows_affected == 0 {
        return Err(RecordError::ItemNotFound(id).into());
    }

    state.events.publish("motorbikes", Some(id));

    Ok(Json(MessageDto {
        message: "Motorbike deleted".to_string(),
    }))
}

/// List components
#[utoipa::path(
    get,
    path = "/api/components",
    tag = INVENTORY_TAG,
    params(ItemFilterParams),
    responses(
        (status = 200, description = "Components", body = Vec<ComponentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_components(
    State(state): State<AppState>,
    Query(params): Query<ItemFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let components = ComponentRepository::new(&state.db)
        .list(&ItemFilter::from(&params))
        .await?;

    let dtos: Vec<ComponentDto> = components.into_iter().map(ComponentDto::from).collect();

    Ok(Json(dtos))
}

/// Update a component
#[utoipa::path(
    patch,
    path = "/api/components/{id}",
    tag = INVENTORY_TAG,
    params(("id" = Uuid, Path, description = "Component ID")),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Component updated", body = ComponentDto),
        (status = 404, description = "Component not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_component(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<UpdateItemDto>,
) -> Result<impl IntoResponse, Error> {
    let component = ComponentRepository::new(&state.db)
        .update(id, changes)
        .await?;

    state.events.publish("components", Some(component.id));

    Ok(Json(ComponentDto::from(component)))
}

/// Assign a component to a student
#[utoipa::path(
    post,
    path = "/api/components/{id}/assign",
    tag = INVENTORY_TAG,
    params(("id" = Uuid, Path, description = "Component ID")),
    request_body = AssignDto,
    responses(
        (status = 200, description = "Component assigned", body = ComponentDto),
        (status = 404, description = "Component or student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_component(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AssignDto>,
) -> Result<impl IntoResponse, Error> {
    ensure_student_exists(&state.db, body.student_id).await?;

    let component = ComponentRepository::new(&state.db)
        .assign_to_student(id, body.student_id)
        .await?;

    state.events.publish("components", Some(component.id));

    Ok(Json(ComponentDto::from(component)))
}

/// Mark a component delivered
#[utoipa::path(
    post,
    path = "/api/components/{id}/delivered",
    tag = INVENTORY_TAG,
    params(("id" = Uuid, Path, description = "Component ID")),
    responses(
        (status = 200, description = "Component delivered", body = ComponentDto),
        (status = 404, description = "Component not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deliver_component(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let component = ComponentRepository::new(&state.db).mark_delivered(id).await?;

    state.events.publish("components", Some(component.id));

    Ok(Json(ComponentDto::from(component)))
}

/// Delete a component
#[utoipa::path(
    delete,
    path = "/api/components/{id}",
    tag = INVENTORY_TAG,
    params(("id" = Uuid, Path, description = "Component ID")),
    responses(
        (status = 200, description = "Component deleted", body = MessageDto),
        (status = 404, description = "Component not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_component(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let result = ComponentRepository::new(&state.db).delete(id).await?;

    if result.rows_affected == 0 {
        return Err(RecordError::ItemNotFound(id).into());
    }

    state.events.publish("components", Some(id));

    Ok(Json(MessageDto {
        message: "Component deleted".to_string(),
    }))
}

/// List tuition pledges
#[utoipa::path(
    get,
    path = "/api/tuition",
    tag = INVENTORY_TAG,
    params(TuitionFilterParams),
    responses(
        (status = 200, description = "Tuition pledges", body = Vec<TuitionSupportDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tuition(
    State(state): State<AppState>,
    Query(params): Query<TuitionFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let filter = TuitionFilter {
        status: params.status,
        donor_id: params.donor_id,
        student_id: params.student_id,
    };
    let pledges = TuitionRepository::new(&state.db).list(&filter).await?;

    let dtos: Vec<TuitionSupportDto> = pledges.into_iter().map(TuitionSupportDto::from).collect();

    Ok(Json(dtos))
}

/// Update a tuition pledge
#[utoipa::path(
    patch,
    path = "/api/tuition/{id}",
    tag = INVENTORY_TAG,
    params(("id" = Uuid, Path, description = "Tuition pledge ID")),
    request_body = UpdateTuitionDto,
    responses(
        (status = 200, description = "Tuition pledge updated", body = TuitionSupportDto),
        (status = 404, description = "Tuition pledge not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tuition(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<UpdateTuitionDto>,
) -> Result<impl IntoResponse, Error> {
    let pledge = TuitionRepository::new(&state.db).update(id, changes).await?;

    state.events.publish("tuition_support", Some(pledge.id));

    Ok(Json(TuitionSupportDto::from(pledge)))
}

/// Assign a tuition pledge to a student
#[utoipa::path(
    post,
    path = "/api/tuition/{id}/assign",
    tag = INVENTORY_TAG,
    params(("id" = Uuid, Path, description = "Tuition pledge ID")),
    request_body = AssignDto,
    responses(
        (status = 200, description = "Tuition pledge assigned", body = TuitionSupportDto),
        (status = 404, description = "Tuition pledge or student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_tuition(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AssignDto>,
) -> Result<impl IntoResponse, Error> {
    ensure_student_exists(&state.db, body.student_id).await?;

    let pledge = TuitionRepository::new(&state.db)
        .assign_to_student(id, body.student_id)
        .await?;

    state.events.publish("tuition_support", Some(pledge.id));

    Ok(Json(TuitionSupportDto::from(pledge)))
}

/// Mark a tuition pledge paid
#[utoipa::path(
    post,
    path = "/api/tuition/{id}/paid",
    tag = INVENTORY_TAG,
    params(("id" = Uuid, Path, description = "Tuition pledge ID")),
    responses(
        (status = 200, description = "Tuition pledge paid", body = TuitionSupportDto),
        (status = 404, description = "Tuition pledge not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pay_tuition(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let pledge = TuitionRepository::new(&state.db).mark_paid(id).await?;

    state.events.publish("tuition_support", Some(pledge.id));

    Ok(Json(TuitionSupportDto::from(pledge)))
}

/// Delete a tuition pledge
#[utoipa::path(
    delete,
    path = "/api/tuition/{id}",
    tag = INVENTORY_TAG,
    params(("id" = Uuid, Path, description = "Tuition pledge ID")),
    responses(
        (status = 200, description = "Tuition pledge deleted", body = MessageDto),
        (status = 404, description = "Tuition pledge not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tuition(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let result = TuitionRepository::new(&state.db).delete(id).await?;

    if result.rows_affected == 0 {
        return Err(RecordError::ItemNotFound(id).into());
    }

    state.events.publish("tuition_support", Some(id));

    Ok(Json(MessageDto {
        message: "Tuition pledge deleted".to_string(),
    }))
}
