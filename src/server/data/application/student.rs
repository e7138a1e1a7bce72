use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    model::application::NewStudentApplicationDto,
    server::{
        data::{application::ApplicationFilter, contains_ci},
        error::{application::ApplicationError, Error},
    },
};

use entity::enums::ApplicationStatus;

pub struct StudentApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentApplicationRepository<'a> {
    /// Creates a new instance of [`StudentApplicationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a new student application with status `pending`.
    pub async fn submit(
        &self,
        new: NewStudentApplicationDto,
    ) -> Result<entity::student_application::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let application = entity::student_application::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            full_name: ActiveValue::Set(new.full_name),
            birth_year: ActiveValue::Set(new.birth_year),
            phone: ActiveValue::Set(new.phone),
            address: ActiveValue::Set(new.address),
            facebook_link: ActiveValue::Set(new.facebook_link),
            area_id: ActiveValue::Set(new.area_id),
            academic_year: ActiveValue::Set(new.academic_year),
            difficult_situation: ActiveValue::Set(new.difficult_situation),
            need_laptop: ActiveValue::Set(new.need_laptop),
            need_motorbike: ActiveValue::Set(new.need_motorbike),
            need_tuition: ActiveValue::Set(new.need_tuition),
            need_components: ActiveValue::Set(new.need_components),
            components_details: ActiveValue::Set(new.components_details),
            status: ActiveValue::Set(ApplicationStatus::Pending),
            rejection_reason: ActiveValue::Set(None),
            verification_notes: ActiveValue::Set(None),
            notes: ActiveValue::Set(new.notes),
            reviewed_at: ActiveValue::Set(None),
            reviewed_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        application.insert(self.db).await
    }

    /// Lists applications newest first, optionally narrowed by status and a
    /// substring search over name, phone, and facebook link.
    pub async fn list(
        &self,
        filter: &ApplicationFilter,
    ) -> Result<Vec<entity::student_application::Model>, DbErr> {
        let mut query = entity::prelude::StudentApplication::find()
            .order_by_desc(entity::student_application::Column::CreatedAt);

        if let Some(status) = filter.status {
            query = query.filter(entity::student_application::Column::Status.eq(status));
        }

        if let Some(search) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(contains_ci(
                        entity::student_application::Column::FullName,
                        search,
                    ))
                    .add(contains_ci(entity::student_application::Column::Phone, search))
                    .add(contains_ci(
                        entity::student_application::Column::FacebookLink,
                        search,
                    )),
            );
        }

        query.all(self.db).await
    }

    pub async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::student_application::Model>, DbErr> {
        entity::prelude::StudentApplication::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Decides a pending application in a single compare-and-swap write.
    ///
    /// Same contract as the donor side: the update is guarded on
    /// `status = 'pending'` and rejections require a non-empty reason.
    pub async fn set_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
        rejection_reason: Option<String>,
        reviewed_by: &str,
    ) -> Result<entity::student_application::Model, Error> {
        let rejection_reason = match status {
            ApplicationStatus::Rejected => {
                let reason = rejection_reason.filter(|r| !r.trim().is_empty());
                Some(reason.ok_or(ApplicationError::RejectionReasonRequired)?)
            }
            _ => None,
        };

        let now = Utc::now().naive_utc();

        let result = entity::prelude::StudentApplication::update_many()
            .col_expr(
                entity::student_application::Column::Status,
                Expr::value(status),
            )
            .col_expr(
                entity::student_application::Column::RejectionReason,
                Expr::value(rejection_reason),
            )
            .col_expr(
                entity::student_application::Column::ReviewedAt,
                Expr::value(Some(now)),
            )
            .col_expr(
                entity::student_application::Column::ReviewedBy,
                Expr::value(Some(reviewed_by.to_string())),
            )
            .col_expr(
                entity::student_application::Column::UpdatedAt,
                Expr::value(now),
            )
            .filter(entity::student_application::Column::Id.eq(id))
            .filter(entity::student_application::Column::Status.eq(ApplicationStatus::Pending))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return match self.get(id).await? {
                Some(_) => Err(ApplicationError::AlreadyDecided(id).into()),
                None => Err(ApplicationError::NotFound(id).into()),
            };
        }

        self.get(id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(id).into())
    }
}

#[cfg(test)]
mod tests {
    use givebridge_test_utils::{TestBuilder, TestContext, TestError};

    use crate::model::application::NewStudentApplicationDto;

    async fn setup() -> Result<TestContext, TestError> {
        TestBuilder::new()
            .with_table(entity::prelude::StudentApplication)
            .build()
            .await
    }

    fn new_application() -> NewStudentApplicationDto {
        NewStudentApplicationDto {
            full_name: "Le Thi C".to_string(),
            birth_year: 2004,
            phone: "0911222333".to_string(),
            address: "45 Nguyen Trai".to_string(),
            facebook_link: None,
            area_id: None,
            academic_year: "2025-2026".to_string(),
            difficult_situation: "Single parent household, no computer at home.".to_string(),
            need_laptop: true,
            need_motorbike: false,
            need_tuition: true,
            need_components: false,
            components_details: None,
            notes: None,
        }
    }

    mod submit_tests {
        use entity::enums::ApplicationStatus;

        use super::{new_application, setup};
        use crate::server::data::application::student::StudentApplicationRepository;

        #[tokio::test]
        async fn submitted_application_is_pending() {
            let test = setup().await.unwrap();
            let repository = StudentApplicationRepository::new(&test.db);

            let application = repository.submit(new_application()).await.unwrap();

            assert_eq!(application.status, ApplicationStatus::Pending);
            assert!(application.rejection_reason.is_none());
        }
    }

    mod list_tests {
        use super::{new_application, setup};
        use crate::server::data::application::{
            student::StudentApplicationRepository, ApplicationFilter,
        };

        /// Staff search in a different case than the stored value still
        /// matches, regardless of the backend's LIKE collation.
        #[tokio::test]
        async fn search_is_case_insensitive() {
            let test = setup().await.unwrap();
            let repository = StudentApplicationRepository::new(&test.db);

            repository.submit(new_application()).await.unwrap();

            let mut other = new_application();
            other.full_name = "Pham Van D".to_string();
            repository.submit(other).await.unwrap();

            let filter = ApplicationFilter {
                search: Some("lE tHi".to_string()),
                status: None,
            };
            let found = repository.list(&filter).await.unwrap();

            assert_eq!(found.len(), 1);
            assert_eq!(found[0].full_name, "Le Thi C");
        }
    }

    mod set_status_tests {
        use entity::enums::ApplicationStatus;

        use super::{new_application, setup};
        use crate::server::{
            data::application::student::StudentApplicationRepository,
            error::{application::ApplicationError, Error},
        };

        #[tokio::test]
        async fn rejection_stores_reason_verbatim() {
            let test = setup().await.unwrap();
            let repository = StudentApplicationRepository::new(&test.db);

            let application = repository.submit(new_application()).await.unwrap();
            let reason = "Outside the supported area.".to_string();
            let decided = repository
                .set_status(
                    application.id,
                    ApplicationStatus::Rejected,
                    Some(reason.clone()),
                    "staff",
                )
                .await
                .unwrap();

            assert_eq!(decided.status, ApplicationStatus::Rejected);
            assert_eq!(decided.rejection_reason, Some(reason));
        }

        #[tokio::test]
        async fn second_decision_fails_already_decided() {
            let test = setup().await.unwrap();
            let repository = StudentApplicationRepository::new(&test.db);

            let application = repository.submit(new_application()).await.unwrap();
            repository
                .set_status(
                    application.id,
                    ApplicationStatus::Rejected,
                    Some("incomplete form".to_string()),
                    "staff",
                )
                .await
                .unwrap();

            let result = repository
                .set_status(application.id, ApplicationStatus::Approved, None, "staff")
                .await;

            assert!(matches!(
                result,
                Err(Error::ApplicationError(ApplicationError::AlreadyDecided(_)))
            ));
        }
    }
}
