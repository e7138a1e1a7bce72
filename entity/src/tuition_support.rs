use sea_orm::entity::prelude::*;

use crate::enums::{SupportFrequency, TuitionStatus};

/// A tuition pledge from a donor, optionally assigned to a student.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tuition_support")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub donor_id: Option<Uuid>,
    pub student_id: Option<Uuid>,
    pub amount: i64,
    pub frequency: SupportFrequency,
    pub academic_year: Option<String>,
    pub semester: Option<i32>,
    pub notes: Option<String>,
    pub status: TuitionStatus,
    pub pledged_date: DateTime,
    pub paid_date: Option<DateTime>,
    pub start_date: Option<DateTime>,
    pub end_date: Option<DateTime>,
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
