//! Application review and promotion.
//!
//! An application is decided exactly once. The decision itself is a
//! compare-and-swap in the application store, so concurrent reviewers
//! cannot both win; promotion of an approved application into a live
//! record is keyed by `application_id` and checked for an existing row
//! first, so a retried approval never produces a second record.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        application::{
            donor::DonorApplicationRepository, student::StudentApplicationRepository,
        },
        people::{donor::DonorRepository, student::StudentRepository},
    },
    error::Error,
};

use entity::enums::ApplicationStatus;

/// A staff decision on a pending application.
#[derive(Debug, Clone)]
pub enum Decision {
    Approve,
    Reject { reason: String },
}

pub struct ApprovalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApprovalService<'a> {
    /// Creates a new instance of [`ApprovalService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Decides a donor application.
    ///
    /// Approval returns the promoted donor record; if a donor for this
    /// application already exists it is returned unchanged. Rejection
    /// returns `None`. Each call performs exactly one application write
    /// and at most one record write; store errors propagate untouched.
    pub async fn decide_donor(
        &self,
        application_id: Uuid,
        decision: Decision,
        reviewed_by: &str,
    ) -> Result<Option<entity::donor::Model>, Error> {
        let applications = DonorApplicationRepository::new(self.db);
        let donors = DonorRepository::new(self.db);

        match decision {
            Decision::Reject { reason } => {
                applications
                    .set_status(
                        application_id,
                        ApplicationStatus::Rejected,
                        Some(reason),
                        reviewed_by,
                    )
                    .await?;

                Ok(None)
            }
            Decision::Approve => {
                let application = applications
                    .set_status(application_id, ApplicationStatus::Approved, None, reviewed_by)
                    .await?;

                if let Some(existing) = donors.find_by_application_id(application_id).await? {
                    tracing::info!(
                        application_id = %application_id,
                        donor_id = %existing.id,
                        "donor already promoted, returning existing record"
                    );
                    return Ok(Some(existing));
                }

                let donor = donors.create_from_application(&application).await?;

                tracing::info!(
                    application_id = %application_id,
                    donor_id = %donor.id,
                    "donor application approved and promoted"
                );

                Ok(Some(donor))
            }
        }
    }

    /// Decides a student application. Same contract as [`Self::decide_donor`].
    pub async fn decide_student(
        &self,
        application_id: Uuid,
        decision: Decision,
        reviewed_by: &str,
    ) -> Result<Option<entity::student::Model>, Error> {
        let applications = StudentApplicationRepository::new(self.db);
        let students = StudentRepository::new(self.db);

        match decision {
            Decision::Reject { reason } => {
                applications
                    .set_status(
                        application_id,
                        ApplicationStatus::Rejected,
                        Some(reason),
                        reviewed_by,
                    )
                    .await?;

                Ok(None)
            }
            Decision::Approve => {
                let application = applications
                    .set_status(application_id, ApplicationStatus::Approved, None, reviewed_by)
                    .await?;

                if let Some(existing) = students.find_by_application_id(application_id).await? {
                    tracing::info!(
                        application_id = %application_id,
                        student_id = %existing.id,
                        "student already promoted, returning existing record"
                    );
                    return Ok(Some(existing));
                }

                let student = students.create_from_application(&application).await?;

                tracing::info!(
                    application_id = %application_id,
                    student_id = %student.id,
                    "student application approved and promoted"
                );

                Ok(Some(student))
            }
        }
    }
}
