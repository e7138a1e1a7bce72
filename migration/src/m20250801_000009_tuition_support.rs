use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250801_000004_donor::Donor, m20250801_000005_student::Student};

static IDX_TUITION_DONOR_ID: &str = "idx-tuition_support-donor_id";
static FK_TUITION_DONOR_ID: &str = "fk-tuition_support-donor_id";
static FK_TUITION_STUDENT_ID: &str = "fk-tuition_support-student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TuitionSupport::Table)
                    .if_not_exists()
                    .col(pk_uuid(TuitionSupport::Id))
                    .col(uuid_null(TuitionSupport::DonorId))
                    .col(uuid_null(TuitionSupport::StudentId))
                    .col(big_integer(TuitionSupport::Amount))
                    .col(string(TuitionSupport::Frequency))
                    .col(string_null(TuitionSupport::AcademicYear))
                    .col(integer_null(TuitionSupport::Semester))
                    .col(string_null(TuitionSupport::Notes))
                    .col(string(TuitionSupport::Status))
                    .col(timestamp(TuitionSupport::PledgedDate))
                    .col(timestamp_null(TuitionSupport::PaidDate))
                    .col(timestamp_null(TuitionSupport::StartDate))
                    .col(timestamp_null(TuitionSupport::EndDate))
                    .col(timestamp(TuitionSupport::CreatedAt))
                    .col(timestamp(TuitionSupport::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TUITION_DONOR_ID)
                    .table(TuitionSupport::Table)
                    .col(TuitionSupport::DonorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TUITION_DONOR_ID)
                    .from_tbl(TuitionSupport::Table)
                    .from_col(TuitionSupport::DonorId)
                    .to_tbl(Donor::Table)
                    .to_col(Donor::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TUITION_STUDENT_ID)
                    .from_tbl(TuitionSupport::Table)
                    .from_col(TuitionSupport::StudentId)
                    .to_tbl(Student::Table)
                    .to_col(Student::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TUITION_STUDENT_ID)
                    .table(TuitionSupport::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TUITION_DONOR_ID)
                    .table(TuitionSupport::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TUITION_DONOR_ID)
                    .table(TuitionSupport::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TuitionSupport::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TuitionSupport {
    #[sea_orm(iden = "tuition_support")]
    Table,
    Id,
    DonorId,
    StudentId,
    Amount,
    Frequency,
    AcademicYear,
    Semester,
    Notes,
    Status,
    PledgedDate,
    PaidDate,
    StartDate,
    EndDate,
    CreatedAt,
    UpdatedAt,
}
