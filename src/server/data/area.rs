use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    model::area::{NewAreaDto, UpdateAreaDto},
    server::{
        data::contains_ci,
        error::{record::RecordError, Error},
    },
};

/// Listing filter for geographic areas.
#[derive(Debug, Clone, Default)]
pub struct AreaFilter {
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

pub struct AreaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AreaRepository<'a> {
    /// Creates a new instance of [`AreaRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewAreaDto) -> Result<entity::area::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let area = entity::area::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(new.name),
            description: ActiveValue::Set(new.description),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        area.insert(self.db).await
    }

    pub async fn list(&self, filter: &AreaFilter) -> Result<Vec<entity::area::Model>, DbErr> {
        let mut query = entity::prelude::Area::find().order_by_asc(entity::area::Column::Name);

        if let Some(is_active) = filter.is_active {
            query = query.filter(entity::area::Column::IsActive.eq(is_active));
        }

        if let Some(search) = &filter.search {
            query = query.filter(contains_ci(entity::area::Column::Name, search));
        }

        query.all(self.db).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<entity::area::Model>, DbErr> {
        entity::prelude::Area::find_by_id(id).one(self.db).await
    }

    /// Applies the provided fields to an existing area. Absent fields are
    /// left unchanged.
    pub async fn update(
        &self,
        id: Uuid,
        changes: UpdateAreaDto,
    ) -> Result<entity::area::Model, Error> {
        let area = self.get(id).await?.ok_or(RecordError::AreaNotFound(id))?;

        let mut area = area.into_active_model();

        if let Some(name) = changes.name {
            area.name = ActiveValue::Set(name);
        }
        if let Some(description) = changes.description {
            area.description = ActiveValue::Set(Some(description));
        }
        area.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(area.update(self.db).await?)
    }

    pub async fn set_active(
        &self,
        id: Uuid,
        is_active: bool,
    ) -> Result<entity::area::Model, Error> {
        let area = self.get(id).await?.ok_or(RecordError::AreaNotFound(id))?;

        let mut area = area.into_active_model();
        area.is_active = ActiveValue::Set(is_active);
        area.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(area.update(self.db).await?)
    }

    /// Deletes an area unless it is still referenced.
    ///
    /// Applications, donors, and students all point at areas; deleting an
    /// area any of them references fails with [`RecordError::AreaInUse`].
    /// Deactivation via [`Self::set_active`] is the non-destructive option.
    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, Error> {
        if self.get(id).await?.is_none() {
            return Err(RecordError::AreaNotFound(id).into());
        }

        if self.is_referenced(id).await? {
            return Err(RecordError::AreaInUse(id).into());
        }

        Ok(entity::prelude::Area::delete_by_id(id).exec(self.db).await?)
    }

    async fn is_referenced(&self, id: Uuid) -> Result<bool, DbErr> {
        let donor_applications = entity::prelude::DonorApplication::find()
            .filter(entity::donor_application::Column::AreaId.eq(id))
            .count(self.db)
            .await?;
        let student_applications = entity::prelude::StudentApplication::find()
            .filter(entity::student_application::Column::AreaId.eq(id))
            .count(self.db)
            .await?;
        let donors = entity::prelude::Donor::find()
            .filter(entity::donor::Column::AreaId.eq(id))
            .count(self.db)
            .await?;
        let students = entity::prelude::Student::find()
            .filter(entity::student::Column::AreaId.eq(id))
            .count(self.db)
            .await?;

        Ok(donor_applications + student_applications + donors + students > 0)
    }
}

#[cfg(test)]
mod tests {
    use givebridge_test_utils::{TestBuilder, TestContext, TestError};

    use crate::model::area::NewAreaDto;

    async fn setup() -> Result<TestContext, TestError> {
        TestBuilder::new().with_core_tables().build().await
    }

    fn new_area(name: &str) -> NewAreaDto {
        NewAreaDto {
            name: name.to_string(),
            description: None,
        }
    }

    mod delete_tests {
        use givebridge_test_utils::fixtures;

        use super::{new_area, setup};
        use crate::server::{
            data::area::AreaRepository,
            error::{record::RecordError, Error},
        };

        #[tokio::test]
        async fn unreferenced_area_is_deleted() {
            let test = setup().await.unwrap();
            let repository = AreaRepository::new(&test.db);

            let area = repository.create(new_area("District 3")).await.unwrap();
            let result = repository.delete(area.id).await.unwrap();

            assert_eq!(result.rows_affected, 1);
        }

        /// A referenced area must survive the delete attempt
        #[tokio::test]
        async fn referenced_area_fails_area_in_use() {
            let test = setup().await.unwrap();
            let repository = AreaRepository::new(&test.db);

            let area = repository.create(new_area("District 3")).await.unwrap();
            fixtures::insert_donor(&test.db, |donor| {
                donor.area_id = sea_orm::ActiveValue::Set(Some(area.id));
            })
            .await
            .unwrap();

            let result = repository.delete(area.id).await;

            assert!(matches!(
                result,
                Err(Error::RecordError(RecordError::AreaInUse(_)))
            ));
            assert!(repository.get(area.id).await.unwrap().is_some());
        }
    }

    mod list_tests {
        use super::{new_area, setup};
        use crate::server::data::area::{AreaFilter, AreaRepository};

        #[tokio::test]
        async fn listing_is_ordered_by_name() {
            let test = setup().await.unwrap();
            let repository = AreaRepository::new(&test.db);

            repository.create(new_area("Thu Duc")).await.unwrap();
            repository.create(new_area("Binh Thanh")).await.unwrap();

            let areas = repository.list(&AreaFilter::default()).await.unwrap();

            let names: Vec<_> = areas.iter().map(|a| a.name.as_str()).collect();
            assert_eq!(names, vec!["Binh Thanh", "Thu Duc"]);
        }

        /// Search casing must not matter regardless of the backend's LIKE
        /// collation.
        #[tokio::test]
        async fn search_is_case_insensitive() {
            let test = setup().await.unwrap();
            let repository = AreaRepository::new(&test.db);

            repository.create(new_area("Thu Duc")).await.unwrap();
            repository.create(new_area("Binh Thanh")).await.unwrap();

            let filter = AreaFilter {
                search: Some("tHu".to_string()),
                ..AreaFilter::default()
            };
            let areas = repository.list(&filter).await.unwrap();

            assert_eq!(areas.len(), 1);
            assert_eq!(areas[0].name, "Thu Duc");
        }
    }
}
