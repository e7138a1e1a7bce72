use chrono::NaiveDateTime;
use entity::enums::{SupportFrequency, SupportType};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub id: Uuid,
    pub application_id: Option<Uuid>,
    pub full_name: String,
    pub birth_year: i32,
    pub phone: String,
    pub address: String,
    pub facebook_link: Option<String>,
    pub area_id: Option<Uuid>,
    pub academic_year: String,
    pub difficult_situation: String,
    pub need_laptop: bool,
    pub laptop_received: bool,
    pub laptop_received_date: Option<NaiveDateTime>,
    pub need_motorbike: bool,
    pub motorbike_received: bool,
    pub motorbike_received_date: Option<NaiveDateTime>,
    pub need_tuition: bool,
    pub tuition_supported: bool,
    pub tuition_support_start_date: Option<NaiveDateTime>,
    pub need_components: bool,
    pub components_details: Option<String>,
    pub components_received: bool,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::student::Model> for StudentDto {
    fn from(model: entity::student::Model) -> Self {
        Self {
            id: model.id,
            application_id: model.application_id,
            full_name: model.full_name,
            birth_year: model.birth_year,
            phone: model.phone,
            address: model.address,
            facebook_link: model.facebook_link,
            area_id: model.area_id,
            academic_year: model.academic_year,
            difficult_situation: model.difficult_situation,
            need_laptop: model.need_laptop,
            laptop_received: model.laptop_received,
            laptop_received_date: model.laptop_received_date,
            need_motorbike: model.need_motorbike,
            motorbike_received: model.motorbike_received,
            motorbike_received_date: model.motorbike_received_date,
            need_tuition: model.need_tuition,
            tuition_supported: model.tuition_supported,
            tuition_support_start_date: model.tuition_support_start_date,
            need_components: model.need_components,
            components_details: model.components_details,
            components_received: model.components_received,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Staff-entered student. Received flags always start false.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct NewStudentDto {
    pub full_name: String,
    pub birth_year: i32,
    pub phone: String,
    pub address: String,
    pub facebook_link: Option<String>,
    pub area_id: Option<Uuid>,
    pub academic_year: String,
    pub difficult_situation: String,
    pub need_laptop: bool,
    pub need_motorbike: bool,
    pub need_tuition: bool,
    pub need_components: bool,
    pub components_details: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateStudentDto {
    pub full_name: Option<String>,
    pub birth_year: Option<i32>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub facebook_link: Option<String>,
    pub area_id: Option<Uuid>,
    pub academic_year: Option<String>,
    pub difficult_situation: Option<String>,
    pub need_laptop: Option<bool>,
    pub need_motorbike: Option<bool>,
    pub need_tuition: Option<bool>,
    pub need_components: Option<bool>,
    pub components_details: Option<String>,
    pub notes: Option<String>,
}

/// Marks one support category received (or clears it on `received = false`)
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct MarkReceivedDto {
    #[schema(value_type = String)]
    pub support_type: SupportType,
    pub received: bool,
}

#[derive(Deserialize, IntoParams)]
pub struct StudentFilterParams {
    /// Substring match against name, phone, or facebook link
    pub search: Option<String>,
    pub academic_year: Option<String>,
    /// Only students who declared a need for this category
    #[param(value_type = Option<String>)]
    pub need: Option<SupportType>,
    /// `true`: all declared needs satisfied; `false`: something outstanding
    pub received: Option<bool>,
}

/// Public offer to support a specific student. Files a pre-filled donor
/// application whose support types mirror the student's outstanding needs.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterSupportDto {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub facebook_link: Option<String>,
    #[schema(value_type = Option<String>)]
    pub support_frequency: Option<SupportFrequency>,
    pub notes: Option<String>,
}
