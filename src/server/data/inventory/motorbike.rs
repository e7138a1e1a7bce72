use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    model::inventory::UpdateItemDto,
    server::{
        data::inventory::{image_for_row, ItemFilter},
        error::{record::RecordError, Error},
    },
};

use entity::enums::ItemStatus;

pub struct MotorbikeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MotorbikeRepository<'a> {
    /// Creates a new instance of [`MotorbikeRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates one `available` row per pledged unit with round-robin photos.
    pub async fn create_batch(
        &self,
        donor_id: Option<Uuid>,
        quantity: u32,
        images: &[String],
        notes: Option<&str>,
    ) -> Result<Vec<entity::motorbike::Model>, DbErr> {
        let now = Utc::now().naive_utc();
        let mut created = Vec::with_capacity(quantity as usize);

        for index in 0..quantity as usize {
            let motorbike = entity::motorbike::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                donor_id: ActiveValue::Set(donor_id),
                student_id: ActiveValue::Set(None),
                brand: ActiveValue::Set(None),
                model: ActiveValue::Set(None),
                year: ActiveValue::Set(None),
                license_plate: ActiveValue::Set(None),
                condition: ActiveValue::Set(None),
                image_url: ActiveValue::Set(image_for_row(images, index)),
                notes: ActiveValue::Set(notes.map(str::to_string)),
                status: ActiveValue::Set(ItemStatus::Available),
                received_date: ActiveValue::Set(now),
                assigned_date: ActiveValue::Set(None),
                delivered_date: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            };

            created.push(motorbike.insert(self.db).await?);
        }

        Ok(created)
    }

    pub async fn list(
        &self,
        filter: &ItemFilter,
    ) -> Result<Vec<entity::motorbike::Model>, DbErr> {
        let mut query = entity::prelude::Motorbike::find()
            .order_by_desc(entity::motorbike::Column::CreatedAt);

        if let Some(status) = filter.status {
            query = query.filter(entity::motorbike::Column::Status.eq(status));
        }
        if let Some(donor_id) = filter.donor_id {
            query = query.filter(entity::motorbike::Column::DonorId.eq(donor_id));
        }
        if let Some(student_id) = filter.student_id {
            query = query.filter(entity::motorbike::Column::StudentId.eq(student_id));
        }

        query.all(self.db).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<entity::motorbike::Model>, DbErr> {
        entity::prelude::Motorbike::find_by_id(id).one(self.db).await
    }

    /// Applies the provided fields to an existing motorbike. Absent fields
    /// are left unchanged.
    pub async fn update(
        &self,
        id: Uuid,
        changes: UpdateItemDto,
    ) -> Result<entity::motorbike::Model, Error> {
        let motorbike = self.get(id).await?.ok_or(RecordError::ItemNotFound(id))?;

        let mut motorbike = motorbike.into_active_model();

        if let Some(brand) = changes.brand {
            motorbike.brand = ActiveValue::Set(Some(brand));
        }
        if let Some(model) = changes.model {
            motorbike.model = ActiveValue::Set(Some(model));
        }
        if let Some(year) = changes.year {
            motorbike.year = ActiveValue::Set(Some(year));
        }
        if let Some(license_plate) = changes.license_plate {
            motorbike.license_plate = ActiveValue::Set(Some(license_plate));
        }
        if let Some(condition) = changes.condition {
            motorbike.condition = ActiveValue::Set(Some(condition));
        }
        if let Some(image_url) = changes.image_url {
            motorbike.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(notes) = changes.notes {
            motorbike.notes = ActiveValue::Set(Some(notes));
        }
        if let Some(status) = changes.status {
            motorbike.status = ActiveValue::Set(status);
        }
        motorbike.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(motorbike.update(self.db).await?)
    }

    /// Assigns the motorbike to a student and stamps the assignment date.
    pub async fn assign_to_student(
        &self,
        id: Uuid,
        student_id: Uuid,
    ) -> Result<entity::motorbike::Model, Error> {
        let motorbike = self.get(id).await?.ok_or(RecordError::ItemNotFound(id))?;

        let mut motorbike = motorbike.into_active_model();
        let now = Utc::now().naive_utc();
        motorbike.student_id = ActiveValue::Set(Some(student_id));
        motorbike.status = ActiveValue::Set(ItemStatus::Assigned);
        motorbike.assigned_date = ActiveValue::Set(Some(now));
        motorbike.updated_at = ActiveValue::Set(now);

        Ok(motorbike.update(self.db).await?)
    }

    /// Marks the motorbike delivered and stamps the delivery date.
    pub async fn mark_delivered(&self, id: Uuid) -> Result<entity::motorbike::Model, Error> {
        let motorbike = self.get(id).await?.ok_or(RecordError::ItemNotFound(id))?;

        let mut motorbike = motorbike.into_active_model();
        let now = Utc::now().naive_utc();
        motorbike.status = ActiveValue::Set(ItemStatus::Delivered);
        motorbike.delivered_date = ActiveValue::Set(Some(now));
        motorbike.updated_at = ActiveValue::Set(now);

        Ok(motorbike.update(self.db).await?)
    }

    /// Deletes a motorbike
    ///
    /// Returns OK regardless of the motorbike existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Motorbike::delete_by_id(id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use entity::enums::ItemStatus;
    use givebridge_test_utils::{TestBuilder, TestContext, TestError};

    use crate::server::data::inventory::{motorbike::MotorbikeRepository, ItemFilter};

    async fn setup() -> Result<TestContext, TestError> {
        TestBuilder::new()
            .with_table(entity::prelude::Motorbike)
            .build()
            .await
    }

    #[tokio::test]
    async fn delivery_stamps_date_and_status() {
        let test = setup().await.unwrap();
        let repository = MotorbikeRepository::new(&test.db);

        let created = repository.create_batch(None, 1, &[], None).await.unwrap();
        let delivered = repository.mark_delivered(created[0].id).await.unwrap();

        assert_eq!(delivered.status, ItemStatus::Delivered);
        assert!(delivered.delivered_date.is_some());
    }

    #[tokio::test]
    async fn status_filter_narrows_listing() {
        let test = setup().await.unwrap();
        let repository = MotorbikeRepository::new(&test.db);

        let created = repository.create_batch(None, 2, &[], None).await.unwrap();
        repository.mark_delivered(created[0].id).await.unwrap();

        let filter = ItemFilter {
            status: Some(ItemStatus::Available),
            ..ItemFilter::default()
        };
        let available = repository.list(&filter).await.unwrap();

        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, created[1].id);
    }
}
