use givebridge_test_utils::{fixtures, TestError};
use sea_orm::EntityTrait;

use super::setup;
use crate::server::service::approval::{ApprovalService, Decision};

use entity::enums::ApplicationStatus;

/// Approval copies the need flags and starts every received flag false
#[tokio::test]
async fn approval_promotes_application_with_clean_flags() -> Result<(), TestError> {
    let test = setup().await?;
    let application = fixtures::insert_student_application(&test.db, |application| {
        application.need_laptop = sea_orm::ActiveValue::Set(true);
        application.need_tuition = sea_orm::ActiveValue::Set(true);
    })
    .await?;

    let service = ApprovalService::new(&test.db);
    let student = service
        .decide_student(application.id, Decision::Approve, "staff")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(student.application_id, Some(application.id));
    assert!(student.need_laptop);
    assert!(student.need_tuition);
    assert!(!student.laptop_received);
    assert!(!student.tuition_supported);
    assert!(student.laptop_received_date.is_none());
    assert!(student.tuition_support_start_date.is_none());

    Ok(())
}

/// The student rejection scenario: status rejected, reason stored verbatim,
/// and no student row exists for the application
#[tokio::test]
async fn rejection_stores_reason_and_creates_no_student() -> Result<(), TestError> {
    let test = setup().await?;
    let application = fixtures::insert_student_application(&test.db, |_| {}).await?;

    let service = ApprovalService::new(&test.db);
    let reason = "Application is missing school enrollment proof.".to_string();
    let result = service
        .decide_student(
            application.id,
            Decision::Reject {
                reason: reason.clone(),
            },
            "staff",
        )
        .await
        .unwrap();

    assert!(result.is_none());

    let decided = entity::prelude::StudentApplication::find_by_id(application.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(decided.status, ApplicationStatus::Rejected);
    assert_eq!(decided.rejection_reason, Some(reason));

    let students = entity::prelude::Student::find().all(&test.db).await?;
    assert!(students.is_empty());

    Ok(())
}

/// A second approval must not create a second student
#[tokio::test]
async fn double_approval_creates_one_student() -> Result<(), TestError> {
    let test = setup().await?;
    let application = fixtures::insert_student_application(&test.db, |_| {}).await?;

    let service = ApprovalService::new(&test.db);
    service
        .decide_student(application.id, Decision::Approve, "staff")
        .await
        .unwrap();
    let _ = service
        .decide_student(application.id, Decision::Approve, "staff")
        .await;

    let students = entity::prelude::Student::find().all(&test.db).await?;
    assert_eq!(students.len(), 1);

    Ok(())
}
