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

pub struct LaptopRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LaptopRepository<'a> {
    /// Creates a new instance of [`LaptopRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates one `available` row per pledged unit.
    ///
    /// Uploaded photos are distributed round-robin across the rows, so a
    /// single photo is shared by the whole batch.
    pub async fn create_batch(
        &self,
        donor_id: Option<Uuid>,
        quantity: u32,
        images: &[String],
        notes: Option<&str>,
    ) -> Result<Vec<entity::laptop::Model>, DbErr> {
        let now = Utc::now().naive_utc();
        let mut created = Vec::with_capacity(quantity as usize);

        for index in 0..quantity as usize {
            let laptop = entity::laptop::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                donor_id: ActiveValue::Set(donor_id),
                student_id: ActiveValue::Set(None),
                brand: ActiveValue::Set(None),
                model: ActiveValue::Set(None),
                specifications: ActiveValue::Set(None),
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

            created.push(laptop.insert(self.db).await?);
        }

        Ok(created)
    }

    pub async fn list(&self, filter: &ItemFilter) -> Result<Vec<entity::laptop::Model>, DbErr> {
        let mut query =
            entity::prelude::Laptop::find().order_by_desc(entity::laptop::Column::CreatedAt);

        if let Some(status) = filter.status {
            query = query.filter(entity::laptop::Column::Status.eq(status));
        }
        if let Some(donor_id) = filter.donor_id {
            query = query.filter(entity::laptop::Column::DonorId.eq(donor_id));
        }
        if let Some(student_id) = filter.student_id {
            query = query.filter(entity::laptop::Column::StudentId.eq(student_id));
        }

        query.all(self.db).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<entity::laptop::Model>, DbErr> {
        entity::prelude::Laptop::find_by_id(id).one(self.db).await
    }

    /// Applies the provided fields to an existing laptop. Absent fields are
    /// left unchanged.
    pub async fn update(
        &self,
        id: Uuid,
        changes: UpdateItemDto,
    ) -> Result<entity::laptop::Model, Error> {
        let laptop = self.get(id).await?.ok_or(RecordError::ItemNotFound(id))?;

        let mut laptop = laptop.into_active_model();

        if let Some(brand) = changes.brand {
            laptop.brand = ActiveValue::Set(Some(brand));
        }
        if let Some(model) = changes.model {
            laptop.model = ActiveValue::Set(Some(model));
        }
        if let Some(specifications) = changes.specifications {
            laptop.specifications = ActiveValue::Set(Some(specifications));
        }
        if let Some(condition) = changes.condition {
            laptop.condition = ActiveValue::Set(Some(condition));
        }
        if let Some(image_url) = changes.image_url {
            laptop.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(notes) = changes.notes {
            laptop.notes = ActiveValue::Set(Some(notes));
        }
        if let Some(status) = changes.status {
            laptop.status = ActiveValue::Set(status);
        }
        laptop.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(laptop.update(self.db).await?)
    }

    /// Assigns the laptop to a student and stamps the assignment date.
    pub async fn assign_to_student(
        &self,
        id: Uuid,
        student_id: Uuid,
    ) -> Result<entity::laptop::Model, Error> {
        let laptop = self.get(id).await?.ok_or(RecordError::ItemNotFound(id))?;

        let mut laptop = laptop.into_active_model();
        let now = Utc::now().naive_utc();
        laptop.student_id = ActiveValue::Set(Some(student_id));
        laptop.status = ActiveValue::Set(ItemStatus::Assigned);
        laptop.assigned_date = ActiveValue::Set(Some(now));
        laptop.updated_at = ActiveValue::Set(now);

        Ok(laptop.update(self.db).await?)
    }

    /// Marks the laptop delivered and stamps the delivery date.
    pub async fn mark_delivered(&self, id: Uuid) -> Result<entity::laptop::Model, Error> {
        let laptop = self.get(id).await?.ok_or(RecordError::ItemNotFound(id))?;

        let mut laptop = laptop.into_active_model();
        let now = Utc::now().naive_utc();
        laptop.status = ActiveValue::Set(ItemStatus::Delivered);
        laptop.delivered_date = ActiveValue::Set(Some(now));
        laptop.updated_at = ActiveValue::Set(now);

        Ok(laptop.update(self.db).await?)
    }

    /// Deletes a laptop
    ///
    /// Returns OK regardless of the laptop existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Laptop::delete_by_id(id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use givebridge_test_utils::{TestBuilder, TestContext, TestError};

    async fn setup() -> Result<TestContext, TestError> {
        TestBuilder::new()
            .with_table(entity::prelude::Laptop)
            .build()
            .await
    }

    mod create_batch_tests {
        use entity::enums::ItemStatus;
        use uuid::Uuid;

        use super::setup;
        use crate::server::data::inventory::laptop::LaptopRepository;

        /// Three units and one photo: every row carries that photo
        #[tokio::test]
        async fn single_image_covers_every_row() {
            let test = setup().await.unwrap();
            let repository = LaptopRepository::new(&test.db);

            let images = vec!["https://cdn.example.org/laptops/one.jpg".to_string()];
            let created = repository
                .create_batch(Some(Uuid::new_v4()), 3, &images, None)
                .await
                .unwrap();

            assert_eq!(created.len(), 3);
            for laptop in &created {
                assert_eq!(laptop.image_url.as_deref(), Some(images[0].as_str()));
                assert_eq!(laptop.status, ItemStatus::Available);
            }
        }

        #[tokio::test]
        async fn multiple_images_cycle_across_rows() {
            let test = setup().await.unwrap();
            let repository = LaptopRepository::new(&test.db);

            let images = vec!["a.jpg".to_string(), "b.jpg".to_string()];
            let created = repository
                .create_batch(None, 3, &images, None)
                .await
                .unwrap();

            let urls: Vec<_> = created
                .iter()
                .map(|l| l.image_url.as_deref().unwrap().to_string())
                .collect();
            assert_eq!(urls, vec!["a.jpg", "b.jpg", "a.jpg"]);
        }
    }

    mod assign_tests {
        use entity::enums::ItemStatus;
        use uuid::Uuid;

        use super::setup;
        use crate::server::{
            data::inventory::laptop::LaptopRepository,
            error::{record::RecordError, Error},
        };

        #[tokio::test]
        async fn assignment_sets_student_and_date() {
            let test = setup().await.unwrap();
            let repository = LaptopRepository::new(&test.db);

            let created = repository.create_batch(None, 1, &[], None).await.unwrap();
            let student_id = Uuid::new_v4();

            let assigned = repository
                .assign_to_student(created[0].id, student_id)
                .await
                .unwrap();

            assert_eq!(assigned.student_id, Some(student_id));
            assert_eq!(assigned.status, ItemStatus::Assigned);
            assert!(assigned.assigned_date.is_some());
        }

        #[tokio::test]
        async fn unknown_item_fails_not_found() {
            let test = setup().await.unwrap();
            let repository = LaptopRepository::new(&test.db);

            let result = repository
                .assign_to_student(Uuid::new_v4(), Uuid::new_v4())
                .await;

            assert!(matches!(
                result,
                Err(Error::RecordError(RecordError::ItemNotFound(_)))
            ));
        }
    }
}
