use chrono::NaiveDateTime;
use entity::enums::{ApplicationStatus, SupportFrequency, SupportType};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct DonorApplicationDto {
    pub id: Uuid,
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
    #[schema(value_type = String)]
    pub status: ApplicationStatus,
    pub rejection_reason: Option<String>,
    pub notes: Option<String>,
    pub reviewed_at: Option<NaiveDateTime>,
    pub reviewed_by: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::donor_application::Model> for DonorApplicationDto {
    fn from(model: entity::donor_application::Model) -> Self {
        Self {
            id: model.id,
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
            status: model.status,
            rejection_reason: model.rejection_reason,
            notes: model.notes,
            reviewed_at: model.reviewed_at,
            reviewed_by: model.reviewed_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentApplicationDto {
    pub id: Uuid,
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
    #[schema(value_type = String)]
    pub status: ApplicationStatus,
    pub rejection_reason: Option<String>,
    pub verification_notes: Option<String>,
    pub notes: Option<String>,
    pub reviewed_at: Option<NaiveDateTime>,
    pub reviewed_by: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::student_application::Model> for StudentApplicationDto {
    fn from(model: entity::student_application::Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            birth_year: model.birth_year,
            phone: model.phone,
            address: model.address,
            facebook_link: model.facebook_link,
            area_id: model.area_id,
            academic_year: model.academic_year,
            difficult_situation: model.difficult_situation,
            need_laptop: model.need_laptop,
            need_motorbike: model.need_motorbike,
            need_tuition: model.need_tuition,
            need_components: model.need_components,
            components_details: model.components_details,
            status: model.status,
            rejection_reason: model.rejection_reason,
            verification_notes: model.verification_notes,
            notes: model.notes,
            reviewed_at: model.reviewed_at,
            reviewed_by: model.reviewed_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Public donor application submission
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct NewDonorApplicationDto {
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
    pub notes: Option<String>,
}

/// Public student application submission
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct NewStudentApplicationDto {
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

#[derive(Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DecisionAction {
    Approve,
    Reject,
}

/// Staff decision on a pending application
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct DecisionDto {
    pub action: DecisionAction,
    /// Required when `action` is `reject`
    pub rejection_reason: Option<String>,
    pub reviewed_by: String,
}

#[derive(Deserialize, IntoParams)]
pub struct ApplicationFilterParams {
    /// Substring match against name, phone, or facebook link
    pub search: Option<String>,
    #[param(value_type = Option<String>)]
    pub status: Option<ApplicationStatus>,
}
