use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250801_000004_donor::Donor, m20250801_000005_student::Student};

static IDX_COMPONENT_DONOR_ID: &str = "idx-components-donor_id";
static FK_COMPONENT_DONOR_ID: &str = "fk-components-donor_id";
static FK_COMPONENT_STUDENT_ID: &str = "fk-components-student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Component::Table)
                    .if_not_exists()
                    .col(pk_uuid(Component::Id))
                    .col(uuid_null(Component::DonorId))
                    .col(uuid_null(Component::StudentId))
                    .col(string(Component::ComponentType))
                    .col(string_null(Component::Brand))
                    .col(string_null(Component::Model))
                    .col(string_null(Component::Specifications))
                    .col(string_null(Component::Condition))
                    .col(string_null(Component::ImageUrl))
                    .col(string_null(Component::Notes))
                    .col(string(Component::Status))
                    .col(timestamp(Component::ReceivedDate))
                    .col(timestamp_null(Component::AssignedDate))
                    .col(timestamp_null(Component::DeliveredDate))
                    .col(timestamp(Component::CreatedAt))
                    .col(timestamp(Component::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMPONENT_DONOR_ID)
                    .table(Component::Table)
                    .col(Component::DonorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMPONENT_DONOR_ID)
                    .from_tbl(Component::Table)
                    .from_col(Component::DonorId)
                    .to_tbl(Donor::Table)
                    .to_col(Donor::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMPONENT_STUDENT_ID)
                    .from_tbl(Component::Table)
                    .from_col(Component::StudentId)
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
                    .name(FK_COMPONENT_STUDENT_ID)
                    .table(Component::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COMPONENT_DONOR_ID)
                    .table(Component::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMPONENT_DONOR_ID)
                    .table(Component::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Component::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Component {
    #[sea_orm(iden = "components")]
    Table,
    Id,
    DonorId,
    StudentId,
    ComponentType,
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
