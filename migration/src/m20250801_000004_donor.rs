use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250801_000001_area::Area, m20250801_000002_donor_application::DonorApplication,
};

static IDX_DONOR_APPLICATION_ID: &str = "idx-donors-application_id";
static IDX_DONOR_PHONE: &str = "idx-donors-phone";
static FK_DONOR_APPLICATION_ID: &str = "fk-donors-application_id";
static FK_DONOR_AREA_ID: &str = "fk-donors-area_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donor::Table)
                    .if_not_exists()
                    .col(pk_uuid(Donor::Id))
                    .col(uuid_null(Donor::ApplicationId))
                    .col(string(Donor::FullName))
                    .col(string(Donor::Phone))
                    .col(string(Donor::Address))
                    .col(string_null(Donor::FacebookLink))
                    .col(uuid_null(Donor::AreaId))
                    .col(json(Donor::SupportTypes))
                    .col(string(Donor::SupportFrequency))
                    .col(string_null(Donor::SupportDetails))
                    .col(integer_null(Donor::LaptopQuantity))
                    .col(integer_null(Donor::MotorbikeQuantity))
                    .col(integer_null(Donor::ComponentsQuantity))
                    .col(big_integer_null(Donor::TuitionAmount))
                    .col(string_null(Donor::TuitionFrequency))
                    .col(timestamp_null(Donor::SupportEndDate))
                    .col(boolean(Donor::IsActive))
                    .col(string_null(Donor::Notes))
                    .col(timestamp(Donor::CreatedAt))
                    .col(timestamp(Donor::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DONOR_APPLICATION_ID)
                    .table(Donor::Table)
                    .col(Donor::ApplicationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DONOR_PHONE)
                    .table(Donor::Table)
                    .col(Donor::Phone)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DONOR_APPLICATION_ID)
                    .from_tbl(Donor::Table)
                    .from_col(Donor::ApplicationId)
                    .to_tbl(DonorApplication::Table)
                    .to_col(DonorApplication::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DONOR_AREA_ID)
                    .from_tbl(Donor::Table)
                    .from_col(Donor::AreaId)
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
                    .name(FK_DONOR_AREA_ID)
                    .table(Donor::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DONOR_APPLICATION_ID)
                    .table(Donor::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DONOR_PHONE)
                    .table(Donor::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DONOR_APPLICATION_ID)
                    .table(Donor::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Donor::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Donor {
    #[sea_orm(iden = "donors")]
    Table,
    Id,
    ApplicationId,
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
    SupportEndDate,
    IsActive,
    Notes,
    CreatedAt,
    UpdatedAt,
}
