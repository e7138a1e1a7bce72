use givebridge_test_utils::{fixtures, TestError};
use sea_orm::EntityTrait;

use super::setup;
use crate::server::{
    error::{application::ApplicationError, Error},
    service::approval::{ApprovalService, Decision},
};

use entity::enums::ApplicationStatus;

/// Approval promotes the application into a donor carrying its fields
#[tokio::test]
async fn approval_promotes_application() -> Result<(), TestError> {
    let test = setup().await?;
    let application = fixtures::insert_donor_application(&test.db, |_| {}).await?;

    let service = ApprovalService::new(&test.db);
    let donor = service
        .decide_donor(application.id, Decision::Approve, "staff")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(donor.application_id, Some(application.id));
    assert_eq!(donor.full_name, application.full_name);
    assert_eq!(donor.phone, application.phone);
    assert_eq!(donor.support_types, application.support_types);
    assert!(donor.is_active);
    assert!(donor.support_end_date.is_none());

    let decided = entity::prelude::DonorApplication::find_by_id(application.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(decided.status, ApplicationStatus::Approved);
    assert_eq!(decided.reviewed_by.as_deref(), Some("staff"));

    Ok(())
}

/// A second approval must not create a second donor
#[tokio::test]
async fn double_approval_creates_one_donor() -> Result<(), TestError> {
    let test = setup().await?;
    let application = fixtures::insert_donor_application(&test.db, |_| {}).await?;

    let service = ApprovalService::new(&test.db);
    service
        .decide_donor(application.id, Decision::Approve, "staff")
        .await
        .unwrap();

    let second = service
        .decide_donor(application.id, Decision::Approve, "staff")
        .await;
    assert!(matches!(
        second,
        Err(Error::ApplicationError(ApplicationError::AlreadyDecided(_)))
    ));

    let donors = entity::prelude::Donor::find().all(&test.db).await?;
    assert_eq!(donors.len(), 1);

    Ok(())
}

/// Rejecting after approval fails and leaves both rows untouched
#[tokio::test]
async fn reject_after_approve_fails_already_decided() -> Result<(), TestError> {
    let test = setup().await?;
    let application = fixtures::insert_donor_application(&test.db, |_| {}).await?;

    let service = ApprovalService::new(&test.db);
    service
        .decide_donor(application.id, Decision::Approve, "staff")
        .await
        .unwrap();

    let result = service
        .decide_donor(
            application.id,
            Decision::Reject {
                reason: "changed our mind".to_string(),
            },
            "staff",
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::ApplicationError(ApplicationError::AlreadyDecided(_)))
    ));

    let unchanged = entity::prelude::DonorApplication::find_by_id(application.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(unchanged.status, ApplicationStatus::Approved);
    assert!(unchanged.rejection_reason.is_none());

    Ok(())
}

/// Rejection stores the reason and never creates a donor
#[tokio::test]
async fn rejection_creates_no_donor() -> Result<(), TestError> {
    let test = setup().await?;
    let application = fixtures::insert_donor_application(&test.db, |_| {}).await?;

    let service = ApprovalService::new(&test.db);
    let result = service
        .decide_donor(
            application.id,
            Decision::Reject {
                reason: "Duplicate submission.".to_string(),
            },
            "staff",
        )
        .await
        .unwrap();

    assert!(result.is_none());

    let decided = entity::prelude::DonorApplication::find_by_id(application.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(decided.status, ApplicationStatus::Rejected);
    assert_eq!(
        decided.rejection_reason.as_deref(),
        Some("Duplicate submission.")
    );

    let donors = entity::prelude::Donor::find().all(&test.db).await?;
    assert!(donors.is_empty());

    Ok(())
}
