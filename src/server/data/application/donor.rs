use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    model::application::NewDonorApplicationDto,
    server::{
        data::{application::ApplicationFilter, contains_ci},
        error::{application::ApplicationError, Error},
    },
};

use entity::enums::{ApplicationStatus, SupportTypeList};

pub struct DonorApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonorApplicationRepository<'a> {
    /// Creates a new instance of [`DonorApplicationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a new donor application with status `pending`.
    pub async fn submit(
        &self,
        new: NewDonorApplicationDto,
    ) -> Result<entity::donor_application::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let application = entity::donor_application::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            full_name: ActiveValue::Set(new.full_name),
            phone: ActiveValue::Set(new.phone),
            address: ActiveValue::Set(new.address),
            facebook_link: ActiveValue::Set(new.facebook_link),
            area_id: ActiveValue::Set(new.area_id),
            support_types: ActiveValue::Set(SupportTypeList(new.support_types)),
            support_frequency: ActiveValue::Set(new.support_frequency),
            support_details: ActiveValue::Set(new.support_details),
            laptop_quantity: ActiveValue::Set(new.laptop_quantity),
            motorbike_quantity: ActiveValue::Set(new.motorbike_quantity),
            components_quantity: ActiveValue::Set(new.components_quantity),
            tuition_amount: ActiveValue::Set(new.tuition_amount),
            tuition_frequency: ActiveValue::Set(new.tuition_frequency),
            status: ActiveValue::Set(ApplicationStatus::Pending),
            rejection_reason: ActiveValue::Set(None),
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
    ) -> Result<Vec<entity::donor_application::Model>, DbErr> {
        let mut query = entity::prelude::DonorApplication::find()
            .order_by_desc(entity::donor_application::Column::CreatedAt);

        if let Some(status) = filter.status {
            query = query.filter(entity::donor_application::Column::Status.eq(status));
        }

        if let Some(search) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(contains_ci(entity::donor_application::Column::FullName, search))
                    .add(contains_ci(entity::donor_application::Column::Phone, search))
                    .add(contains_ci(
                        entity::donor_application::Column::FacebookLink,
                        search,
                    )),
            );
        }

        query.all(self.db).await
    }

    pub async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::donor_application::Model>, DbErr> {
        entity::prelude::DonorApplication::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Decides a pending application in a single compare-and-swap write.
    ///
    /// The update is guarded on `status = 'pending'`, so a second decision
    /// for the same application affects zero rows and maps to
    /// [`ApplicationError::AlreadyDecided`]. Rejections require a non-empty
    /// reason; the reason is stored verbatim.
    pub async fn set_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
        rejection_reason: Option<String>,
        reviewed_by: &str,
    ) -> Result<entity::donor_application::Model, Error> {
        let rejection_reason = match status {
            ApplicationStatus::Rejected => {
                let reason = rejection_reason.filter(|r| !r.trim().is_empty());
                Some(reason.ok_or(ApplicationError::RejectionReasonRequired)?)
            }
            _ => None,
        };

        let now = Utc::now().naive_utc();

        let result = entity::prelude::DonorApplication::update_many()
            .col_expr(entity::donor_application::Column::Status, Expr::value(status))
            .col_expr(
                entity::donor_application::Column::RejectionReason,
                Expr::value(rejection_reason),
            )
            .col_expr(
                entity::donor_application::Column::ReviewedAt,
                Expr::value(Some(now)),
            )
            .col_expr(
                entity::donor_application::Column::ReviewedBy,
                Expr::value(Some(reviewed_by.to_string())),
            )
            .col_expr(entity::donor_application::Column::UpdatedAt, Expr::value(now))
            .filter(entity::donor_application::Column::Id.eq(id))
            .filter(entity::donor_application::Column::Status.eq(ApplicationStatus::Pending))
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
    use entity::enums::{SupportFrequency, SupportType};
    use givebridge_test_utils::{TestBuilder, TestContext, TestError};

    use crate::model::application::NewDonorApplicationDto;

    async fn setup() -> Result<TestContext, TestError> {
        TestBuilder::new()
            .with_table(entity::prelude::DonorApplication)
            .build()
            .await
    }

    fn new_application() -> NewDonorApplicationDto {
        NewDonorApplicationDto {
            full_name: "Tran Van A".to_string(),
            phone: "0912345678".to_string(),
            address: "12 Ly Thuong Kiet".to_string(),
            facebook_link: Some("https://facebook.com/tranvana".to_string()),
            area_id: None,
            support_types: vec![SupportType::Laptop],
            support_frequency: SupportFrequency::OneTime,
            support_details: None,
            laptop_quantity: Some(1),
            motorbike_quantity: None,
            components_quantity: None,
            tuition_amount: None,
            tuition_frequency: None,
            notes: None,
        }
    }

    mod submit_tests {
        use entity::enums::ApplicationStatus;

        use super::{new_application, setup};
        use crate::server::data::application::donor::DonorApplicationRepository;

        /// New submissions always start out pending
        #[tokio::test]
        async fn submitted_application_is_pending() {
            let test = setup().await.unwrap();
            let repository = DonorApplicationRepository::new(&test.db);

            let application = repository.submit(new_application()).await.unwrap();

            assert_eq!(application.status, ApplicationStatus::Pending);
            assert!(application.rejection_reason.is_none());
            assert!(application.reviewed_at.is_none());
        }
    }

    mod list_tests {
        use entity::enums::ApplicationStatus;

        use super::{new_application, setup};
        use crate::server::data::application::{
            donor::DonorApplicationRepository, ApplicationFilter,
        };

        #[tokio::test]
        async fn search_matches_name_phone_or_facebook() {
            let test = setup().await.unwrap();
            let repository = DonorApplicationRepository::new(&test.db);

            repository.submit(new_application()).await.unwrap();

            let mut other = new_application();
            other.full_name = "Nguyen Thi B".to_string();
            other.phone = "0987654321".to_string();
            other.facebook_link = None;
            repository.submit(other).await.unwrap();

            let filter = ApplicationFilter {
                search: Some("0912".to_string()),
                status: None,
            };
            let found = repository.list(&filter).await.unwrap();

            assert_eq!(found.len(), 1);
            assert_eq!(found[0].full_name, "Tran Van A");
        }

        /// Staff search in a different case than the stored value still
        /// matches, regardless of the backend's LIKE collation.
        #[tokio::test]
        async fn search_is_case_insensitive() {
            let test = setup().await.unwrap();
            let repository = DonorApplicationRepository::new(&test.db);

            repository.submit(new_application()).await.unwrap();

            let filter = ApplicationFilter {
                search: Some("tRaN vAn".to_string()),
                status: None,
            };
            let found = repository.list(&filter).await.unwrap();

            assert_eq!(found.len(), 1);
            assert_eq!(found[0].full_name, "Tran Van A");
        }

        #[tokio::test]
        async fn status_filter_excludes_other_statuses() {
            let test = setup().await.unwrap();
            let repository = DonorApplicationRepository::new(&test.db);

            let pending = repository.submit(new_application()).await.unwrap();
            let decided = repository.submit(new_application()).await.unwrap();
            repository
                .set_status(decided.id, ApplicationStatus::Approved, None, "staff")
                .await
                .unwrap();

            let filter = ApplicationFilter {
                search: None,
                status: Some(ApplicationStatus::Pending),
            };
            let found = repository.list(&filter).await.unwrap();

            assert_eq!(found.len(), 1);
            assert_eq!(found[0].id, pending.id);
        }
    }

    mod set_status_tests {
        use entity::enums::ApplicationStatus;
        use uuid::Uuid;

        use super::{new_application, setup};
        use crate::server::{
            data::application::donor::DonorApplicationRepository,
            error::{application::ApplicationError, Error},
        };

        #[tokio::test]
        async fn approves_a_pending_application() {
            let test = setup().await.unwrap();
            let repository = DonorApplicationRepository::new(&test.db);

            let application = repository.submit(new_application()).await.unwrap();
            let decided = repository
                .set_status(application.id, ApplicationStatus::Approved, None, "staff")
                .await
                .unwrap();

            assert_eq!(decided.status, ApplicationStatus::Approved);
            assert_eq!(decided.reviewed_by.as_deref(), Some("staff"));
            assert!(decided.reviewed_at.is_some());
        }

        /// A second decision must fail and leave the first untouched
        #[tokio::test]
        async fn second_decision_fails_already_decided() {
            let test = setup().await.unwrap();
            let repository = DonorApplicationRepository::new(&test.db);

            let application = repository.submit(new_application()).await.unwrap();
            repository
                .set_status(application.id, ApplicationStatus::Approved, None, "staff")
                .await
                .unwrap();

            let result = repository
                .set_status(
                    application.id,
                    ApplicationStatus::Rejected,
                    Some("changed our mind".to_string()),
                    "staff",
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::ApplicationError(ApplicationError::AlreadyDecided(_)))
            ));

            let unchanged = repository.get(application.id).await.unwrap().unwrap();
            assert_eq!(unchanged.status, ApplicationStatus::Approved);
            assert!(unchanged.rejection_reason.is_none());
        }

        #[tokio::test]
        async fn rejection_without_reason_fails() {
            let test = setup().await.unwrap();
            let repository = DonorApplicationRepository::new(&test.db);

            let application = repository.submit(new_application()).await.unwrap();

            for reason in [None, Some("   ".to_string())] {
                let result = repository
                    .set_status(application.id, ApplicationStatus::Rejected, reason, "staff")
                    .await;

                assert!(matches!(
                    result,
                    Err(Error::ApplicationError(
                        ApplicationError::RejectionReasonRequired
                    ))
                ));
            }

            let unchanged = repository.get(application.id).await.unwrap().unwrap();
            assert_eq!(unchanged.status, ApplicationStatus::Pending);
        }

        #[tokio::test]
        async fn rejection_reason_is_stored_verbatim() {
            let test = setup().await.unwrap();
            let repository = DonorApplicationRepository::new(&test.db);

            let application = repository.submit(new_application()).await.unwrap();
            let reason = "Duplicate of an earlier submission.".to_string();
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
        async fn unknown_application_fails_not_found() {
            let test = setup().await.unwrap();
            let repository = DonorApplicationRepository::new(&test.db);

            let result = repository
                .set_status(Uuid::new_v4(), ApplicationStatus::Approved, None, "staff")
                .await;

            assert!(matches!(
                result,
                Err(Error::ApplicationError(ApplicationError::NotFound(_)))
            ));
        }
    }
}
