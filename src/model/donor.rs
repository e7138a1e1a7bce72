use chrono::NaiveDateTime;
use entity::enums::{SupportFrequency, SupportType};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct DonorDto {
    pub id: Uuid,
    pub application_id: Option<Uuid>,
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub facebook_link: Option<String>,
    pub area_id: Option<Uuid>,
    #[schema(value_type = Vec<String>)]
    pub support_types: Vec<SupportType>,
    #[schema(value_type = String)]
    pub support_frequency: SupportFrequency,
    pub support_details: Option<String>,
    pub laptop_quantity: Option<i32>,
    pub motorbike_quantity: Option<i32>,
    pub components_quantity: Option<i32>,
    pub tuition_amount: Option<i64>,
    #[schema(value_type = Option<String>)]
    pub tuition_frequency: Option<SupportFrequency>,
    pub support_end_date: Option<NaiveDateTime>,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::donor::Model> for DonorDto {
    fn from(model: entity::donor::Model) -> Self {
        Self {
            id: model.id,
            application_id: model.application_id,
            full_name: model.full_name,
            phone: model.phone,
            address: model.address,
            facebook_link: model.facebook_link,
            area_id: model.area_id,
            support_types: model.support_types.0,
            support_frequency: model.support_frequency,
            support_details: model.support_details,
            laptop_quantity: model.laptop_quantity,
            motorbike_quantity: model.motorbike_quantity,
            components_quantity: model.components_quantity,
            tuition_amount: model.tuition_amount,
            tuition_frequency: model.tuition_frequency,
            support_end_date: model.support_end_date,
            is_active: model.is_active,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Admin-entered donor. Creates the donor row plus one inventory row per
/// pledged unit and a tuition pledge when an amount is given.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct NewDonorDto {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub facebook_link: Option<String>,
    pub area_id: Option<Uuid>,
    #[schema(value_type = Vec<String>)]
    pub support_types: Vec<SupportType>,
    #[schema(value_type = String)]
    pub support_frequency: SupportFrequency,
    pub support_details: Option<String>,
    pub laptop_quantity: Option<i32>,
    pub motorbike_quantity: Option<i32>,
    pub components_quantity: Option<i32>,
    pub tuition_amount: Option<i64>,
    #[schema(value_type = Option<String>)]
    pub tuition_frequency: Option<SupportFrequency>,
    pub support_end_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
    /// Item photo URLs, distributed round-robin across the created rows
    #[serde(default)]
    pub image_urls: Vec<String>,
}

#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateDonorDto {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub facebook_link: Option<String>,
    pub area_id: Option<Uuid>,
    #[schema(value_type = Option<Vec<String>>)]
    pub support_types: Option<Vec<SupportType>>,
    #[schema(value_type = Option<String>)]
    pub support_frequency: Option<SupportFrequency>,
    pub support_details: Option<String>,
    pub laptop_quantity: Option<i32>,
    pub motorbike_quantity: Option<i32>,
    pub components_quantity: Option<i32>,
    pub tuition_amount: Option<i64>,
    #[schema(value_type = Option<String>)]
    pub tuition_frequency: Option<SupportFrequency>,
    pub support_end_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct DonorFilterParams {
    /// Substring match against name, phone, or facebook link
    pub search: Option<String>,
    #[param(value_type = Option<String>)]
    pub support_type: Option<SupportType>,
    #[param(value_type = Option<String>)]
    pub support_frequency: Option<SupportFrequency>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize, IntoParams)]
pub struct DonorMatchParams {
    pub phone: Option<String>,
    pub facebook_link: Option<String>,
    /// When set, the response reports whether the matched donor already
    /// covers this category
    #[param(value_type = Option<String>)]
    pub support_type: Option<SupportType>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct DonorMatchDto {
    pub donor: DonorDto,
    /// Whether the donor's support types include the requested category.
    /// `None` when no category was requested. Advisory only.
    pub supports_requested: Option<bool>,
}
