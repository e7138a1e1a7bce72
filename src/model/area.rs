use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct AreaDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::area::Model> for AreaDto {
    fn from(model: entity::area::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct NewAreaDto {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateAreaDto {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct AreaFilterParams {
    /// Substring match against the area name
    pub search: Option<String>,
    pub is_active: Option<bool>,
}
