use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    model::student::{NewStudentDto, UpdateStudentDto},
    server::{
        data::contains_ci,
        error::{record::RecordError, Error},
    },
};

use entity::enums::SupportType;

/// Listing filter for live students.
///
/// `received` filters on whether every declared need has been satisfied;
/// it is evaluated in memory because it spans four flag pairs.
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub search: Option<String>,
    pub academic_year: Option<String>,
    pub need: Option<SupportType>,
    pub received: Option<bool>,
}

pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new instance of [`StudentRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a student entered directly by staff (no source application).
    pub async fn create(&self, new: &NewStudentDto) -> Result<entity::student::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let student = entity::student::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            application_id: ActiveValue::Set(None),
            full_name: ActiveValue::Set(new.full_name.clone()),
            birth_year: ActiveValue::Set(new.birth_year),
            phone: ActiveValue::Set(new.phone.clone()),
            address: ActiveValue::Set(new.address.clone()),
            facebook_link: ActiveValue::Set(new.facebook_link.clone()),
            area_id: ActiveValue::Set(new.area_id),
            academic_year: ActiveValue::Set(new.academic_year.clone()),
            difficult_situation: ActiveValue::Set(new.difficult_situation.clone()),
            need_laptop: ActiveValue::Set(new.need_laptop),
            laptop_received: ActiveValue::Set(false),
            laptop_received_date: ActiveValue::Set(None),
            need_motorbike: ActiveValue::Set(new.need_motorbike),
            motorbike_received: ActiveValue::Set(false),
            motorbike_received_date: ActiveValue::Set(None),
            need_tuition: ActiveValue::Set(new.need_tuition),
            tuition_supported: ActiveValue::Set(false),
            tuition_support_start_date: ActiveValue::Set(None),
            need_components: ActiveValue::Set(new.need_components),
            components_details: ActiveValue::Set(new.components_details.clone()),
            components_received: ActiveValue::Set(false),
            notes: ActiveValue::Set(new.notes.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        student.insert(self.db).await
    }

    /// Promotes an approved student application into a live student row.
    ///
    /// Copies the applicant and need fields; every received flag starts
    /// false with no date. Callers are responsible for checking
    /// [`Self::find_by_application_id`] first to keep promotion idempotent.
    pub async fn create_from_application(
        &self,
        application: &entity::student_application::Model,
    ) -> Result<entity::student::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let student = entity::student::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            application_id: ActiveValue::Set(Some(application.id)),
            full_name: ActiveValue::Set(application.full_name.clone()),
            birth_year: ActiveValue::Set(application.birth_year),
            phone: ActiveValue::Set(application.phone.clone()),
            address: ActiveValue::Set(application.address.clone()),
            facebook_link: ActiveValue::Set(application.facebook_link.clone()),
            area_id: ActiveValue::Set(application.area_id),
            academic_year: ActiveValue::Set(application.academic_year.clone()),
            difficult_situation: ActiveValue::Set(application.difficult_situation.clone()),
            need_laptop: ActiveValue::Set(application.need_laptop),
            laptop_received: ActiveValue::Set(false),
            laptop_received_date: ActiveValue::Set(None),
            need_motorbike: ActiveValue::Set(application.need_motorbike),
            motorbike_received: ActiveValue::Set(false),
            motorbike_received_date: ActiveValue::Set(None),
            need_tuition: ActiveValue::Set(application.need_tuition),
            tuition_supported: ActiveValue::Set(false),
            tuition_support_start_date: ActiveValue::Set(None),
            need_components: ActiveValue::Set(application.need_components),
            components_details: ActiveValue::Set(application.components_details.clone()),
            components_received: ActiveValue::Set(false),
            notes: ActiveValue::Set(application.notes.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        student.insert(self.db).await
    }

    pub async fn find_by_application_id(
        &self,
        application_id: Uuid,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::ApplicationId.eq(application_id))
            .one(self.db)
            .await
    }

    /// Lists students newest first.
    pub async fn list(
        &self,
        filter: &StudentFilter,
    ) -> Result<Vec<entity::student::Model>, DbErr> {
        let mut query =
            entity::prelude::Student::find().order_by_desc(entity::student::Column::CreatedAt);

        if let Some(academic_year) = &filter.academic_year {
            query = query.filter(entity::student::Column::AcademicYear.eq(academic_year));
        }

        if let Some(need) = filter.need {
            query = query.filter(match need {
                SupportType::Laptop => entity::student::Column::NeedLaptop.eq(true),
                SupportType::Motorbike => entity::student::Column::NeedMotorbike.eq(true),
                SupportType::Tuition => entity::student::Column::NeedTuition.eq(true),
                SupportType::Components => entity::student::Column::NeedComponents.eq(true),
            });
        }

        if let Some(search) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(contains_ci(entity::student::Column::FullName, search))
                    .add(contains_ci(entity::student::Column::Phone, search))
                    .add(contains_ci(entity::student::Column::FacebookLink, search)),
            );
        }

        let students = query.all(self.db).await?;

        Ok(match filter.received {
            Some(received) => students
                .into_iter()
                .filter(|student| student.has_received_all() == received)
                .collect(),
            None => students,
        })
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(id).one(self.db).await
    }

    /// Applies the provided fields to an existing student. Absent fields are
    /// left unchanged.
    pub async fn update(
        &self,
        id: Uuid,
        changes: UpdateStudentDto,
    ) -> Result<entity::student::Model, Error> {
        let student = self
            .get(id)
            .await?
            .ok_or(RecordError::StudentNotFound(id))?;

        let mut student = student.into_active_model();

        if let Some(full_name) = changes.full_name {
            student.full_name = ActiveValue::Set(full_name);
        }
        if let Some(birth_year) = changes.birth_year {
            student.birth_year = ActiveValue::Set(birth_year);
        }
        if let Some(phone) = changes.phone {
            student.phone = ActiveValue::Set(phone);
        }
        if let Some(address) = changes.address {
            student.address = ActiveValue::Set(address);
        }
        if let Some(facebook_link) = changes.facebook_link {
            student.facebook_link = ActiveValue::Set(Some(facebook_link));
        }
        if let Some(area_id) = changes.area_id {
            student.area_id = ActiveValue::Set(Some(area_id));
        }
        if let Some(academic_year) = changes.academic_year {
            student.academic_year = ActiveValue::Set(academic_year);
        }
        if let Some(difficult_situation) = changes.difficult_situation {
            student.difficult_situation = ActiveValue::Set(difficult_situation);
        }
        if let Some(need_laptop) = changes.need_laptop {
            student.need_laptop = ActiveValue::Set(need_laptop);
        }
        if let Some(need_motorbike) = changes.need_motorbike {
            student.need_motorbike = ActiveValue::Set(need_motorbike);
        }
        if let Some(need_tuition) = changes.need_tuition {
            student.need_tuition = ActiveValue::Set(need_tuition);
        }
        if let Some(need_components) = changes.need_components {
            student.need_components = ActiveValue::Set(need_components);
        }
        if let Some(components_details) = changes.components_details {
            student.components_details = ActiveValue::Set(Some(components_details));
        }
        if let Some(notes) = changes.notes {
            student.notes = ActiveValue::Set(Some(notes));
        }
        student.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(student.update(self.db).await?)
    }

    /// Sets or clears the received flag for one support category.
    ///
    /// Marking received stamps the category's date; clearing it also clears
    /// the date. Components track no date in the schema.
    pub async fn mark_received(
        &self,
        id: Uuid,
        support_type: SupportType,
        received: bool,
    ) -> Result<entity::student::Model, Error> {
        let student = self
            .get(id)
            .await?
            .ok_or(RecordError::StudentNotFound(id))?;

        let now = Utc::now().naive_utc();
        let date = received.then_some(now);

        let mut student = student.into_active_model();

        match support_type {
            SupportType::Laptop => {
                student.laptop_received = ActiveValue::Set(received);
                student.laptop_received_date = ActiveValue::Set(date);
            }
            SupportType::Motorbike => {
                student.motorbike_received = ActiveValue::Set(received);
                student.motorbike_received_date = ActiveValue::Set(date);
            }
            SupportType::Tuition => {
                student.tuition_supported = ActiveValue::Set(received);
                student.tuition_support_start_date = ActiveValue::Set(date);
            }
            SupportType::Components => {
                student.components_received = ActiveValue::Set(received);
            }
        }
        student.updated_at = ActiveValue::Set(now);

        Ok(student.update(self.db).await?)
    }

    /// Deletes a student
    ///
    /// Returns OK regardless of the student existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use givebridge_test_utils::{TestBuilder, TestContext, TestError};

    use crate::model::student::NewStudentDto;

    async fn setup() -> Result<TestContext, TestError> {
        TestBuilder::new()
            .with_table(entity::prelude::Student)
            .build()
            .await
    }

    fn new_student(name: &str) -> NewStudentDto {
        NewStudentDto {
            full_name: name.to_string(),
            birth_year: 2004,
            phone: "0911222333".to_string(),
            address: "45 Nguyen Trai".to_string(),
            facebook_link: None,
            area_id: None,
            academic_year: "2025-2026".to_string(),
            difficult_situation: "No computer at home.".to_string(),
            need_laptop: true,
            need_motorbike: false,
            need_tuition: true,
            need_components: false,
            components_details: None,
            notes: None,
        }
    }

    mod mark_received_tests {
        use entity::enums::SupportType;

        use super::{new_student, setup};
        use crate::server::data::people::student::StudentRepository;

        #[tokio::test]
        async fn marking_received_sets_flag_and_date() {
            let test = setup().await.unwrap();
            let repository = StudentRepository::new(&test.db);

            let student = repository.create(&new_student("Le Thi C")).await.unwrap();
            let updated = repository
                .mark_received(student.id, SupportType::Laptop, true)
                .await
                .unwrap();

            assert!(updated.laptop_received);
            assert!(updated.laptop_received_date.is_some());
        }

        #[tokio::test]
        async fn clearing_received_clears_date() {
            let test = setup().await.unwrap();
            let repository = StudentRepository::new(&test.db);

            let student = repository.create(&new_student("Le Thi C")).await.unwrap();
            repository
                .mark_received(student.id, SupportType::Laptop, true)
                .await
                .unwrap();
            let cleared = repository
                .mark_received(student.id, SupportType::Laptop, false)
                .await
                .unwrap();

            assert!(!cleared.laptop_received);
            assert!(cleared.laptop_received_date.is_none());
        }
    }

    mod list_tests {
        use entity::enums::SupportType;

        use super::{new_student, setup};
        use crate::server::data::people::student::{StudentFilter, StudentRepository};

        #[tokio::test]
        async fn need_filter_selects_declared_needs() {
            let test = setup().await.unwrap();
            let repository = StudentRepository::new(&test.db);

            repository.create(&new_student("Needs Laptop")).await.unwrap();

            let mut other = new_student("Needs Motorbike");
            other.need_laptop = false;
            other.need_motorbike = true;
            repository.create(&other).await.unwrap();

            let filter = StudentFilter {
                need: Some(SupportType::Motorbike),
                ..StudentFilter::default()
            };
            let found = repository.list(&filter).await.unwrap();

            assert_eq!(found.len(), 1);
            assert_eq!(found[0].full_name, "Needs Motorbike");
        }

        /// The received filter compares against every declared need
        #[tokio::test]
        async fn received_filter_uses_all_declared_needs() {
            let test = setup().await.unwrap();
            let repository = StudentRepository::new(&test.db);

            let student = repository.create(&new_student("Partial")).await.unwrap();
            repository
                .mark_received(student.id, SupportType::Laptop, true)
                .await
                .unwrap();

            // Laptop received but tuition still outstanding
            let fully_received = StudentFilter {
                received: Some(true),
                ..StudentFilter::default()
            };
            assert!(repository.list(&fully_received).await.unwrap().is_empty());

            repository
                .mark_received(student.id, SupportType::Tuition, true)
                .await
                .unwrap();

            let found = repository.list(&fully_received).await.unwrap();
            assert_eq!(found.len(), 1);
        }

        /// Search casing must not matter regardless of the backend's LIKE
        /// collation.
        #[tokio::test]
        async fn search_is_case_insensitive() {
            let test = setup().await.unwrap();
            let repository = StudentRepository::new(&test.db);

            repository.create(&new_student("Le Thi C")).await.unwrap();
            repository.create(&new_student("Pham Van D")).await.unwrap();

            let filter = StudentFilter {
                search: Some("lE tHi".to_string()),
                ..StudentFilter::default()
            };
            let found = repository.list(&filter).await.unwrap();

            assert_eq!(found.len(), 1);
            assert_eq!(found[0].full_name, "Le Thi C");
        }
    }
}
