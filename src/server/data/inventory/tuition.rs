use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    model::inventory::UpdateTuitionDto,
    server::error::{record::RecordError, Error},
};

use entity::enums::{SupportFrequency, TuitionStatus};

/// Listing filter for tuition pledges.
#[derive(Debug, Clone, Default)]
pub struct TuitionFilter {
    pub status: Option<TuitionStatus>,
    pub donor_id: Option<Uuid>,
    pub student_id: Option<Uuid>,
}

pub struct TuitionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TuitionRepository<'a> {
    /// Creates a new instance of [`TuitionRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new tuition pledge with status `pledged`.
    pub async fn create_pledge(
        &self,
        donor_id: Option<Uuid>,
        amount: i64,
        frequency: SupportFrequency,
        notes: Option<&str>,
    ) -> Result<entity::tuition_support::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let pledge = entity::tuition_support::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            donor_id: ActiveValue::Set(donor_id),
            student_id: ActiveValue::Set(None),
            amount: ActiveValue::Set(amount),
            frequency: ActiveValue::Set(frequency),
            academic_year: ActiveValue::Set(None),
            semester: ActiveValue::Set(None),
            notes: ActiveValue::Set(notes.map(str::to_string)),
            status: ActiveValue::Set(TuitionStatus::Pledged),
            pledged_date: ActiveValue::Set(now),
            paid_date: ActiveValue::Set(None),
            start_date: ActiveValue::Set(None),
            end_date: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        pledge.insert(self.db).await
    }

    pub async fn list(
        &self,
        filter: &TuitionFilter,
    ) -> Result<Vec<entity::tuition_support::Model>, DbErr> {
        let mut query = entity::prelude::TuitionSupport::find()
            .order_by_desc(entity::tuition_support::Column::CreatedAt);

        if let Some(status) = filter.status {
            query = query.filter(entity::tuition_support::Column::Status.eq(status));
        }
        if let Some(donor_id) = filter.donor_id {
            query = query.filter(entity::tuition_support::Column::DonorId.eq(donor_id));
        }
        if let Some(student_id) = filter.student_id {
            query = query.filter(entity::tuition_support::Column::StudentId.eq(student_id));
        }

        query.all(self.db).await
    }

    pub async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::tuition_support::Model>, DbErr> {
        entity::prelude::TuitionSupport::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Applies the provided fields to an existing pledge. Absent fields are
    /// left unchanged.
    pub async fn update(
        &self,
        id: Uuid,
        changes: UpdateTuitionDto,
    ) -> Result<entity::tuition_support::Model, Error> {
        let pledge = self.get(id).await?.ok_or(RecordError::ItemNotFound(id))?;

        let mut pledge = pledge.into_active_model();

        if let Some(amount) = changes.amount {
            pledge.amount = ActiveValue::Set(amount);
        }
        if let Some(frequency) = changes.frequency {
            pledge.frequency = ActiveValue::Set(frequency);
        }
        if let Some(academic_year) = changes.academic_year {
            pledge.academic_year = ActiveValue::Set(Some(academic_year));
        }
        if let Some(semester) = changes.semester {
            pledge.semester = ActiveValue::Set(Some(semester));
        }
        if let Some(notes) = changes.notes {
            pledge.notes = ActiveValue::Set(Some(notes));
        }
        if let Some(status) = changes.status {
            pledge.status = ActiveValue::Set(status);
        }
        if let Some(start_date) = changes.start_date {
            pledge.start_date = ActiveValue::Set(Some(start_date));
        }
        if let Some(end_date) = changes.end_date {
            pledge.end_date = ActiveValue::Set(Some(end_date));
        }
        pledge.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(pledge.update(self.db).await?)
    }

    /// Assigns the pledge to a student.
    pub async fn assign_to_student(
        &self,
        id: Uuid,
        student_id: Uuid,
    ) -> Result<entity::tuition_support::Model, Error> {
        let pledge = self.get(id).await?.ok_or(RecordError::ItemNotFound(id))?;

        let mut pledge = pledge.into_active_model();
        let now = Utc::now().naive_utc();
        pledge.student_id = ActiveValue::Set(Some(student_id));
        pledge.start_date = ActiveValue::Set(Some(now));
        pledge.updated_at = ActiveValue::Set(now);

        Ok(pledge.update(self.db).await?)
    }

    /// Marks the pledge paid and stamps the payment date.
    pub async fn mark_paid(&self, id: Uuid) -> Result<entity::tuition_support::Model, Error> {
        let pledge = self.get(id).await?.ok_or(RecordError::ItemNotFound(id))?;

        let mut pledge = pledge.into_active_model();
        let now = Utc::now().naive_utc();
        pledge.status = ActiveValue::Set(TuitionStatus::Paid);
        pledge.paid_date = ActiveValue::Set(Some(now));
        pledge.updated_at = ActiveValue::Set(now);

        Ok(pledge.update(self.db).await?)
    }

    /// Deletes a pledge
    ///
    /// Returns OK regardless of the pledge existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::TuitionSupport::delete_by_id(id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use entity::enums::{SupportFrequency, TuitionStatus};
    use givebridge_test_utils::{TestBuilder, TestContext, TestError};

    use crate::server::data::inventory::tuition::TuitionRepository;

    async fn setup() -> Result<TestContext, TestError> {
        TestBuilder::new()
            .with_table(entity::prelude::TuitionSupport)
            .build()
            .await
    }

    #[tokio::test]
    async fn new_pledge_starts_pledged() {
        let test = setup().await.unwrap();
        let repository = TuitionRepository::new(&test.db);

        let pledge = repository
            .create_pledge(None, 5_000_000, SupportFrequency::Recurring, None)
            .await
            .unwrap();

        assert_eq!(pledge.status, TuitionStatus::Pledged);
        assert_eq!(pledge.amount, 5_000_000);
        assert!(pledge.paid_date.is_none());
    }

    #[tokio::test]
    async fn mark_paid_sets_status_and_date() {
        let test = setup().await.unwrap();
        let repository = TuitionRepository::new(&test.db);

        let pledge = repository
            .create_pledge(None, 5_000_000, SupportFrequency::OneTime, None)
            .await
            .unwrap();
        let paid = repository.mark_paid(pledge.id).await.unwrap();

        assert_eq!(paid.status, TuitionStatus::Paid);
        assert!(paid.paid_date.is_some());
    }
}
