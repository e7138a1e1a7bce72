use chrono::NaiveDateTime;
use entity::enums::{ItemStatus, SupportFrequency, TuitionStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct LaptopDto {
    pub id: Uuid,
    pub donor_id: Option<Uuid>,
    pub student_id: Option<Uuid>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub specifications: Option<String>,
    pub condition: Option<String>,
    pub image_url: Option<String>,
    pub notes: Option<String>,
    #[schema(value_type = String)]
    pub status: ItemStatus,
    pub received_date: NaiveDateTime,
    pub assigned_date: Option<NaiveDateTime>,
    pub delivered_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::laptop::Model> for LaptopDto {
    fn from(model: entity::laptop::Model) -> Self {
        Self {
            id: model.id,
            donor_id: model.donor_id,
            student_id: model.student_id,
            brand: model.brand,
            model: model.model,
            specifications: model.specifications,
            condition: model.condition,
            image_url: model.image_url,
            notes: model.notes,
            status: model.status,
            received_date: model.received_date,
            assigned_date: model.assigned_date,
            delivered_date: model.delivered_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct MotorbikeDto {
    pub id: Uuid,
    pub donor_id: Option<Uuid>,
    pub student_id: Option<Uuid>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub license_plate: Option<String>,
    pub condition: Option<String>,
    pub image_url: Option<String>,
    pub notes: Option<String>,
    #[schema(value_type = String)]
    pub status: ItemStatus,
    pub received_date: NaiveDateTime,
    pub assigned_date: Option<NaiveDateTime>,
    pub delivered_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::motorbike::Model> for MotorbikeDto {
    fn from(model: entity::motorbike::Model) -> Self {
        Self {
            id: model.id,
            donor_id: model.donor_id,
            student_id: model.student_id,
            brand: model.brand,
            model: model.model,
            year: model.year,
            license_plate: model.license_plate,
            condition: model.condition,
            image_url: model.image_url,
            notes: model.notes,
            status: model.status,
            received_date: model.received_date,
            assigned_date: model.assigned_date,
            delivered_date: model.delivered_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ComponentDto {
    pub id: Uuid,
    pub donor_id: Option<Uuid>,
    pub student_id: Option<Uuid>,
    pub component_type: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub specifications: Option<String>,
    pub condition: Option<String>,
    pub image_url: Option<String>,
    pub notes: Option<String>,
    #[schema(value_type = String)]
    pub status: ItemStatus,
    pub received_date: NaiveDateTime,
    pub assigned_date: Option<NaiveDateTime>,
    pub delivered_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::component::Model> for ComponentDto {
    fn from(model: entity::component::Model) -> Self {
        Self {
            id: model.id,
            donor_id: model.donor_id,
            student_id: model.student_id,
            component_type: model.component_type,
            brand: model.brand,
            model: model.model,
            specifications: model.specifications,
            condition: model.condition,
            image_url: model.image_url,
            notes: model.notes,
            status: model.status,
            received_date: model.received_date,
            assigned_date: model.assigned_date,
            delivered_date: model.delivered_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct TuitionSupportDto {
    pub id: Uuid,
    pub donor_id: Option<Uuid>,
    pub student_id: Option<Uuid>,
    pub amount: i64,
    #[schema(value_type = String)]
    pub frequency: SupportFrequency,
    pub academic_year: Option<String>,
    pub semester: Option<i32>,
    pub notes: Option<String>,
    #[schema(value_type = String)]
    pub status: TuitionStatus,
    pub pledged_date: NaiveDateTime,
    pub paid_date: Option<NaiveDateTime>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::tuition_support::Model> for TuitionSupportDto {
    fn from(model: entity::tuition_support::Model) -> Self {
        Self {
            id: model.id,
            donor_id: model.donor_id,
            student_id: model.student_id,
            amount: model.amount,
            frequency: model.frequency,
            academic_year: model.academic_year,
            semester: model.semester,
            notes: model.notes,
            status: model.status,
            pledged_date: model.pledged_date,
            paid_date: model.paid_date,
            start_date: model.start_date,
            end_date: model.end_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Edits to a physical inventory item (laptop, motorbike, or component).
/// Fields not present are left unchanged.
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateItemDto {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub specifications: Option<String>,
    pub condition: Option<String>,
    pub year: Option<i32>,
    pub license_plate: Option<String>,
    pub component_type: Option<String>,
    pub image_url: Option<String>,
    pub notes: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignDto {
    pub student_id: Uuid,
}

#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTuitionDto {
    pub amount: Option<i64>,
    #[schema(value_type = Option<String>)]
    pub frequency: Option<SupportFrequency>,
    pub academic_year: Option<String>,
    pub semester: Option<i32>,
    pub notes: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<TuitionStatus>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

#[derive(Deserialize, IntoParams)]
pub struct ItemFilterParams {
    #[param(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
    pub donor_id: Option<Uuid>,
    pub student_id: Option<Uuid>,
}

#[derive(Deserialize, IntoParams)]
pub struct TuitionFilterParams {
    #[param(value_type = Option<String>)]
    pub status: Option<TuitionStatus>,
    pub donor_id: Option<Uuid>,
    pub student_id: Option<Uuid>,
}
