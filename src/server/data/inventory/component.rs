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

pub struct ComponentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComponentRepository<'a> {
    /// Creates a new instance of [`ComponentRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates one `available` row per pledged unit with round-robin photos.
    ///
    /// Donors pledge a component count without itemizing, so every row in
    /// the batch shares the same `component_type` until staff edit it.
    pub async fn create_batch(
        &self,
        donor_id: Option<Uuid>,
        quantity: u32,
        component_type: &str,
        images: &[String],
        notes: Option<&str>,
    ) -> Result<Vec<entity::component::Model>, DbErr> {
        let now = Utc::now().naive_utc();
        let mut created = Vec::with_capacity(quantity as usize);

        for index in 0..quantity as usize {
            let component = entity::component::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                donor_id: ActiveValue::Set(donor_id),
                student_id: ActiveValue::Set(None),
                component_type: ActiveValue::Set(component_type.to_string()),
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

            created.push(component.insert(self.db).await?);
        }

        Ok(created)
    }

    pub async fn list(
        &self,
        filter: &ItemFilter,
    ) -> Result<Vec<entity::component::Model>, DbErr> {
        let mut query = entity::prelude::Component::find()
            .order_by_desc(entity::component::Column::CreatedAt);

        if let Some(status) = filter.status {
            query = query.filter(entity::component::Column::Status.eq(status));
        }
        if let Some(donor_id) = filter.donor_id {
            query = query.filter(entity::component::Column::DonorId.eq(donor_id));
        }
        if let Some(student_id) = filter.student_id {
            query = query.filter(entity::component::Column::StudentId.eq(student_id));
        }

        query.all(self.db).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<entity::component::Model>, DbErr> {
        entity::prelude::Component::find_by_id(id).one(self.db).await
    }

    /// Applies the provided fields to an existing component. Absent fields
    /// are left unchanged.
    pub async fn update(
        &self,
        id: Uuid,
        changes: UpdateItemDto,
    ) -> Result<entity::component::Model, Error> {
        let component = self.get(id).await?.ok_or(RecordError::ItemNotFound(id))?;

        let mut component = component.into_active_model();

        if let Some(component_type) = changes.component_type {
            component.component_type = ActiveValue::Set(component_type);
        }
        if let Some(brand) = changes.brand {
            component.brand = ActiveValue::Set(Some(brand));
        }
        if let Some(model) = changes.model {
            component.model = ActiveValue::Set(Some(model));
        }
        if let Some(specifications) = changes.specifications {
            component.specifications = ActiveValue::Set(Some(specifications));
        }
        if let Some(condition) = changes.condition {
            component.condition = ActiveValue::Set(Some(condition));
        }
        if let Some(image_url) = changes.image_url {
            component.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(notes) = changes.notes {
            component.notes = ActiveValue::Set(Some(notes));
        }
        if let Some(status) = changes.status {
            component.status = ActiveValue::Set(status);
        }
        component.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(component.update(self.db).await?)
    }

    /// Assigns the component to a student and stamps the assignment date.
    pub async fn assign_to_student(
        &self,
        id: Uuid,
        student_id: Uuid,
    ) -> Result<entity::component::Model, Error> {
        let component = self.get(id).await?.ok_or(RecordError::ItemNotFound(id))?;

        let mut component = component.into_active_model();
        let now = Utc::now().naive_utc();
        component.student_id = ActiveValue::Set(Some(student_id));
        component.status = ActiveValue::Set(ItemStatus::Assigned);
        component.assigned_date = ActiveValue::Set(Some(now));
        component.updated_at = ActiveValue::Set(now);

        Ok(component.update(self.db).await?)
    }

    /// Marks the component delivered and stamps the delivery date.
    pub async fn mark_delivered(&self, id: Uuid) -> Result<entity::component::Model, Error> {
        let component = self.get(id).await?.ok_or(RecordError::ItemNotFound(id))?;

        let mut component = component.into_active_model();
        let now = Utc::now().naive_utc();
        component.status = ActiveValue::Set(ItemStatus::Delivered);
        component.delivered_date = ActiveValue::Set(Some(now));
        component.updated_at = ActiveValue::Set(now);

        Ok(component.update(self.db).await?)
    }

    /// Deletes a component
    ///
    /// Returns OK regardless of the component existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Component::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
