use sea_orm::entity::prelude::*;

use crate::enums::ApplicationStatus;

/// Public submission from a student asking for support.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_applications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
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
    pub status: ApplicationStatus,
    pub rejection_reason: Option<String>,
    pub verification_notes: Option<String>,
    pub notes: Option<String>,
    pub reviewed_at: Option<DateTime>,
    pub reviewed_by: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::area::Entity",
        from = "Column::AreaId",
        to = "super::area::Column::Id"
    )]
    Area,
}

impl Related<super::area::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Area.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
