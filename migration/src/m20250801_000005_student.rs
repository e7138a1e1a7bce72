use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250801_000001_area::Area, m20250801_000003_student_application::StudentApplication,
};

static IDX_STUDENT_APPLICATION_ID: &str = "idx-students-application_id";
static FK_STUDENT_APPLICATION_ID: &str = "fk-students-application_id";
static FK_STUDENT_AREA_ID: &str = "fk-students-area_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_uuid(Student::Id))
                    .col(uuid_null(Student::ApplicationId))
                    .col(string(Student::FullName))
                    .col(integer(Student::BirthYear))
                    .col(string(Student::Phone))
                    .col(string(Student::Address))
                    .col(string_null(Student::FacebookLink))
                    .col(uuid_null(Student::AreaId))
                    .col(string(Student::AcademicYear))
                    .col(string(Student::DifficultSituation))
                    .col(boolean(Student::NeedLaptop))
                    .col(boolean(Student::LaptopReceived))
                    .col(timestamp_null(Student::LaptopReceivedDate))
                    .col(boolean(Student::NeedMotorbike))
                    .col(boolean(Student::MotorbikeReceived))
                    .col(timestamp_null(Student::MotorbikeReceivedDate))
                    .col(boolean(Student::NeedTuition))
                    .col(boolean(Student::TuitionSupported))
                    .col(timestamp_null(Student::TuitionSupportStartDate))
                    .col(boolean(Student::NeedComponents))
                    .col(string_null(Student::ComponentsDetails))
                    .col(boolean(Student::ComponentsReceived))
                    .col(string_null(Student::Notes))
                    .col(timestamp(Student::CreatedAt))
                    .col(timestamp(Student::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STUDENT_APPLICATION_ID)
                    .table(Student::Table)
                    .col(Student::ApplicationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_APPLICATION_ID)
                    .from_tbl(Student::Table)
                    .from_col(Student::ApplicationId)
                    .to_tbl(StudentApplication::Table)
                    .to_col(StudentApplication::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_AREA_ID)
                    .from_tbl(Student::Table)
                    .from_col(Student::AreaId)
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
                    .name(FK_STUDENT_AREA_ID)
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STUDENT_APPLICATION_ID)
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STUDENT_APPLICATION_ID)
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Student {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    ApplicationId,
    FullName,
    BirthYear,
    Phone,
    Address,
    FacebookLink,
    AreaId,
    AcademicYear,
    DifficultSituation,
    NeedLaptop,
    LaptopReceived,
    LaptopReceivedDate,
    NeedMotorbike,
    MotorbikeReceived,
    MotorbikeReceivedDate,
    NeedTuition,
    TuitionSupported,
    TuitionSupportStartDate,
    NeedComponents,
    ComponentsDetails,
    ComponentsReceived,
    Notes,
    CreatedAt,
    UpdatedAt,
}
