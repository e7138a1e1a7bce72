//! Tests for the decide_donor_application endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use givebridge::{
    model::application::{DecisionAction, DecisionDto},
    server::{
        controller::application::decide_donor_application, data::people::donor::DonorRepository,
    },
};
use uuid::Uuid;

use super::*;

fn approve() -> DecisionDto {
    DecisionDto {
        action: DecisionAction::Approve,
        rejection_reason: None,
        reviewed_by: "admin@example.org".to_string(),
    }
}

/// Approval returns 200, creates the donor record, and publishes change
/// events for both the applications and the donors tables.
#[tokio::test]
async fn approval_promotes_application_and_publishes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let (state, _storage) = test.app_state();
    let mut events = state.events.subscribe();

    let application = fixtures::insert_donor_application(&test.db, |_| {}).await?;

    let result =
        decide_donor_application(State(state.clone()), Path(application.id), Json(approve())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let donor = DonorRepository::new(&test.db)
        .find_by_application_id(application.id)
        .await?
        .unwrap();
    assert_eq!(donor.full_name, application.full_name);

    let first = events.try_recv().unwrap();
    assert_eq!(first.table, "donor_applications");
    assert_eq!(first.id, Some(application.id));
    let second = events.try_recv().unwrap();
    assert_eq!(second.table, "donors");
    assert_eq!(second.id, Some(donor.id));

    Ok(())
}

/// A second decision on the same application conflicts.
#[tokio::test]
async fn second_decision_conflicts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let (state, _storage) = test.app_state();

    let application = fixtures::insert_donor_application(&test.db, |_| {}).await?;

    decide_donor_application(State(state.clone()), Path(application.id), Json(approve()))
        .await
        .unwrap();

    let result =
        decide_donor_application(State(state.clone()), Path(application.id), Json(approve())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Rejecting without a reason is refused before the application changes.
#[tokio::test]
async fn rejection_without_reason_is_unprocessable() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let (state, _storage) = test.app_state();

    let application = fixtures::insert_donor_application(&test.db, |_| {}).await?;

    let decision = DecisionDto {
        action: DecisionAction::Reject,
        rejection_reason: None,
        reviewed_by: "admin@example.org".to_string(),
    };

    let result =
        decide_donor_application(State(state.clone()), Path(application.id), Json(decision)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Deciding an unknown application is a 404.
#[tokio::test]
async fn unknown_application_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let (state, _storage) = test.app_state();

    let result =
        decide_donor_application(State(state.clone()), Path(Uuid::new_v4()), Json(approve())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
