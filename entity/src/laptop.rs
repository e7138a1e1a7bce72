use sea_orm::entity::prelude::*;

use crate::enums::ItemStatus;

/// One donated laptop. Rows are created one per unit when a donor pledges a
/// laptop quantity.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "laptops")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub donor_id: Option<Uuid>,
    pub student_id: Option<Uuid>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub specifications: Option<String>,
    pub condition: Option<String>,
    pub image_url: Option<String>,
    pub notes: Option<String>,
    pub status: ItemStatus,
    pub received_date: DateTime,
    pub assigned_date: Option<DateTime>,
    pub delivered_date: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::donor::Entity",
        from = "Column::DonorId",
        to = "super::donor::Column::Id"
    )]
    Donor,
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
}

impl ActiveModelBehavior for ActiveModel {}
