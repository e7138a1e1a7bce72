use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250801_000004_donor::Donor, m20250801_000005_student::Student};

static IDX_MOTORBIKE_DONOR_ID: &str = "idx-motorbikes-donor_id";
static FK_MOTORBIKE_DONOR_ID: &str = "fk-motorbikes-donor_id";
static FK_MOTORBIKE_STUDENT_ID: &str = "fk-motorbikes-student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Motorbike::Table)
                    .if_not_exists()
                    .col(pk_uuid(Motorbike::Id))
                    .col(uuid_null(Motorbike::DonorId))
                    .col(uuid_null(Motorbike::StudentId))
                    .col(string_null(Motorbike::Brand))
                    .col(string_null(Motorbike::Model))
                    .col(integer_null(Motorbike::Year))
                    .col(string_null(Motorbike::LicensePlate))
                    .col(string_null(Motorbike::Condition))
                    .col(string_null(Motorbike::ImageUrl))
                    .col(string_null(Motorbike::Notes))
                    .col(string(Motorbike::Status))
                    .col(timestamp(Motorbike::ReceivedDate))
                    .col(timestamp_null(Motorbike::AssignedDate))
                    .col(timestamp_null(Motorbike::DeliveredDate))
                    .col(timestamp(Motorbike::CreatedAt))
                    .col(timestamp(Motorbike::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MOTORBIKE_DONOR_ID)
                    .table(Motorbike::Table)
                    .col(Motorbike::DonorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MOTORBIKE_DONOR_ID)
                    .from_tbl(Motorbike::Table)
                    .from_col(Motorbike::DonorId)
                    .to_tbl(Donor::Table)
                    .to_col(Donor::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MOTORBIKE_STUDENT_ID)
                    .from_tbl(Motorbike::Table)
                    .from_col(Motorbike::StudentId)
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
                    .name(FK_MOTORBIKE_STUDENT_ID)
                    .table(Motorbike::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MOTORBIKE_DONOR_ID)
                    .table(Motorbike::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MOTORBIKE_DONOR_ID)
                    .table(Motorbike::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Motorbike::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Motorbike {
    #[sea_orm(iden = "motorbikes")]
    Table,
    Id,
    DonorId,
    StudentId,
    Brand,
    Model,
    Year,
    LicensePlate,
    Condition,
    ImageUrl,
    Notes,
    Status,
    ReceivedDate,
    AssignedDate,
    DeliveredDate,
    CreatedAt,
    UpdatedAt,
}
