use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250801_000001_area::Area;

static IDX_DONOR_APPLICATION_STATUS: &str = "idx-donor_applications-status";
static FK_DONOR_APPLICATION_AREA_ID: &str = "fk-donor_applications-area_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DonorApplication::Table)
                    .if_not_exists()
                    .col(pk_uuid(DonorApplication::Id))
                    .col(string(DonorApplication::FullName))
                    .col(string(DonorApplication::Phone))
                    .col(string(DonorApplication::Address))
                    .col(string_null(DonorApplication::FacebookLink))
                    .col(uuid_null(DonorApplication::AreaId))
                    .col(json(DonorApplication::SupportTypes))
                    .col(string(DonorApplication::SupportFrequency))
                    .col(string_null(DonorApplication::SupportDetails))
                    .col(integer_null(DonorApplication::LaptopQuantity))
                    .col(integer_null(DonorApplication::MotorbikeQuantity))
                    .col(integer_null(DonorApplication::ComponentsQuantity))
                    .col(big_integer_null(DonorApplication::TuitionAmount))
                    .col(string_null(DonorApplication::TuitionFrequency))
                    .col(string(DonorApplication::Status))
                    .col(string_null(DonorApplication::RejectionReason))
                    .col(string_null(DonorApplication::Notes))
                    .col(timestamp_null(DonorApplication::ReviewedAt))
                    .col(string_null(DonorApplication::ReviewedBy))
                    .col(timestamp(DonorApplication::CreatedAt))
                    .col(timestamp(DonorApplication::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DONOR_APPLICATION_STATUS)
                    .table(DonorApplication::Table)
                    .col(DonorApplication::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DONOR_APPLICATION_AREA_ID)
                    .from_tbl(DonorApplication::Table)
                    .from_col(DonorApplication::AreaId)
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
                    .name(FK_DONOR_APPLICATION_AREA_ID)
                    .table(DonorApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DONOR_APPLICATION_STATUS)
                    .table(DonorApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DonorApplication::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DonorApplication {
    #[sea_orm(iden = "donor_applications")]
    Table,
    Id,
    FullName,
    Phone,
    Address,
    FacebookLink,
    AreaId,
    SupportTypes,
    SupportFrequency,
    SupportDetails,
    LaptopQuantity,
    MotorbikeQuantity,
    ComponentsQuantity,
    TuitionAmount,
    TuitionFrequency,
    Status,
    RejectionReason,
    Notes,
    ReviewedAt,
    ReviewedBy,
    CreatedAt,
    UpdatedAt,
}
