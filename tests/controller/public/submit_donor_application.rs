//! Tests for the submit_donor_application endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::enums::{SupportFrequency, SupportType};
use givebridge::{
    model::application::NewDonorApplicationDto,
    server::{
        controller::public::submit_donor_application,
        data::application::{donor::DonorApplicationRepository, ApplicationFilter},
    },
};

use super::*;

fn submission() -> NewDonorApplicationDto {
    NewDonorApplicationDto {
        full_name: "Tran Van A".to_string(),
        phone: "0912345678".to_string(),
        address: "12 Ly Thuong Kiet".to_string(),
        facebook_link: None,
        area_id: None,
        support_types: vec![SupportType::Laptop],
        support_frequency: SupportFrequency::OneTime,
        support_details: None,
        laptop_quantity: Some(2),
        motorbike_quantity: None,
        components_quantity: None,
        tuition_amount: None,
        tuition_frequency: None,
        notes: None,
    }
}

/// A valid submission lands as a pending application and publishes a change
/// event for the applications table.
#[tokio::test]
async fn valid_submission_files_pending_application() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let (state, _storage) = test.app_state();
    let mut events = state.events.subscribe();

    let result = submit_donor_application(State(state.clone()), Json(submission())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let applications = DonorApplicationRepository::new(&test.db)
        .list(&ApplicationFilter::default())
        .await?;
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].phone, "0912345678");

    let event = events.try_recv().unwrap();
    assert_eq!(event.table, "donor_applications");
    assert_eq!(event.id, Some(applications[0].id));

    Ok(())
}

/// A malformed phone number fails validation before anything is stored, and
/// no event is published.
#[tokio::test]
async fn invalid_phone_is_rejected_without_storing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let (state, _storage) = test.app_state();
    let mut events = state.events.subscribe();

    let mut new = submission();
    new.phone = "12345".to_string();

    let result = submit_donor_application(State(state.clone()), Json(new)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let applications = DonorApplicationRepository::new(&test.db)
        .list(&ApplicationFilter::default())
        .await?;
    assert!(applications.is_empty());
    assert!(events.try_recv().is_err());

    Ok(())
}
