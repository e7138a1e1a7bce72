use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250801_000004_donor::Donor, m20250801_000005_student::Student};

static IDX_LAPTOP_DONOR_ID: &str = "idx-laptops-donor_id";
static FK_LAPTOP_DONOR_ID: &str = "fk-laptops-donor_id";
static FK_LAPTOP_STUDENT_ID: &str = "fk-laptops-student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Laptop::Table)
                    .if_not_exists()
                    .col(pk_uuid(Laptop::Id))
                    .col(uuid_null(Laptop::DonorId))
                    .col(uuid_null(Laptop::StudentId))
                    .col(string_null(Laptop::Brand))
                    .col(string_null(Laptop::Model))
                    .col(string_null(Laptop::Specifications))
                    .col(string_null(Laptop::Condition))
                    .col(string_null(Laptop::ImageUrl))
                    .col(string_null(Laptop::Notes))
                    .col(string(Laptop::Status))
                    .col(timestamp(Laptop::ReceivedDate))
                    .col(timestamp_null(Laptop::AssignedDate))
                    .col(timestamp_null(Laptop::DeliveredDate))
                    .col(timestamp(Laptop::CreatedAt))
                    .col(timestamp(Laptop::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LAPTOP_DONOR_ID)
                    .table(Laptop::Table)
                    .col(Laptop::DonorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LAPTOP_DONOR_ID)
                    .from_tbl(Laptop::Table)
                    .from_col(Laptop::DonorId)
                    .to_tbl(Donor::Table)
                    .to_col(Donor::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LAPTOP_STUDENT_ID)
                    .from_tbl(Laptop::Table)
                    .from_col(Laptop::StudentId)
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
                    .name(FK_LAPTOP_STUDENT_ID)
                    .table(Laptop::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LAPTOP_DONOR_ID)
                    .table(Laptop::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LAPTOP_DONOR_ID)
                    .table(Laptop::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Laptop::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Laptop {
    #[sea_orm(iden = "laptops")]
    Table,
    Id,
    DonorId,
    StudentId,
    Brand,
    Model,
    Specifications,
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
