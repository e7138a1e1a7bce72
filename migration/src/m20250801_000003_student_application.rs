use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250801_000001_area::Area;

static IDX_STUDENT_APPLICATION_STATUS: &str = "idx-student_applications-status";
static FK_STUDENT_APPLICATION_AREA_ID: &str = "fk-student_applications-area_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentApplication::Table)
                    .if_not_exists()
                    .col(pk_uuid(StudentApplication::Id))
                    .col(string(StudentApplication::FullName))
                    .col(integer(StudentApplication::BirthYear))
                    .col(string(StudentApplication::Phone))
                    .col(string(StudentApplication::Address))
                    .col(string_null(StudentApplication::FacebookLink))
                    .col(uuid_null(StudentApplication::AreaId))
                    .col(string(StudentApplication::AcademicYear))
                    .col(string(StudentApplication::DifficultSituation))
                    .col(boolean(StudentApplication::NeedLaptop))
                    .col(boolean(StudentApplication::NeedMotorbike))
                    .col(boolean(StudentApplication::NeedTuition))
                    .col(boolean(StudentApplication::NeedComponents))
                    .col(string_null(StudentApplication::ComponentsDetails))
                    .col(string(StudentApplication::Status))
                    .col(string_null(StudentApplication::RejectionReason))
                    .col(string_null(StudentApplication::VerificationNotes))
                    .col(string_null(StudentApplication::Notes))
                    .col(timestamp_null(StudentApplication::ReviewedAt))
                    .col(string_null(StudentApplication::ReviewedBy))
                    .col(timestamp(StudentApplication::CreatedAt))
                    .col(timestamp(StudentApplication::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STUDENT_APPLICATION_STATUS)
                    .table(StudentApplication::Table)
                    .col(StudentApplication::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_APPLICATION_AREA_ID)
                    .from_tbl(StudentApplication::Table)
                    .from_col(StudentApplication::AreaId)
                    .to_tbl(Area::Table)
                    .to_col(Area::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STUDENT_APPLICATION_AREA_ID)
                    .table(StudentApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STUDENT_APPLICATION_STATUS)
                    .table(StudentApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StudentApplication::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StudentApplication {
    #[sea_orm(iden = "student_applications")]
    Table,
    Id,
    FullName,
    BirthYear,
    Phone,
    Address,
    FacebookLink,
    AreaId,
    AcademicYear,
    DifficultSituation,
    NeedLaptop,
    NeedMotorbike,
    NeedTuition,
    NeedComponents,
    ComponentsDetails,
    Status,
    RejectionReason,
    VerificationNotes,
    Notes,
    ReviewedAt,
    ReviewedBy,
    CreatedAt,
    UpdatedAt,
}
