use sea_orm::entity::prelude::*;

use crate::enums::{SupportFrequency, SupportTypeList};

/// Live donor record.
///
/// `application_id` is set when the row was promoted from an approved donor
/// application and null when staff entered the donor directly. At most one
/// donor references a given application.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "donors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub application_id: Option<Uuid>,
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub facebook_link: Option<String>,
    pub area_id: Option<Uuid>,
    #[sea_orm(column_type = "Json")]
    pub support_types: SupportTypeList,
    pub support_frequency: SupportFrequency,
    pub support_details: Option<String>,
    pub laptop_quantity: Option<i32>,
    pub motorbike_quantity: Option<i32>,
    pub components_quantity: Option<i32>,
    pub tuition_amount: Option<i64>,
    pub tuition_frequency: Option<SupportFrequency>,
    pub support_end_date: Option<DateTime>,
    pub is_active: bool,
    pub notes: Option<String>,
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
