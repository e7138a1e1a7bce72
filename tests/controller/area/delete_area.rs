//! Tests for the delete_area endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use givebridge::server::{controller::area::delete_area, data::area::AreaRepository};
use sea_orm::ActiveValue;

use super::*;

/// Deleting an area still referenced by a donor conflicts and leaves the
/// area in place.
#[tokio::test]
async fn referenced_area_is_not_deletable() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let (state, _storage) = test.app_state();

    let area = fixtures::insert_area(&test.db, |_| {}).await?;
    fixtures::insert_donor(&test.db, |donor| {
        donor.area_id = ActiveValue::Set(Some(area.id));
    })
    .await?;

    let result = delete_area(State(state.clone()), Path(area.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let still_there = AreaRepository::new(&test.db).get(area.id).await?;
    assert!(still_there.is_some());

    Ok(())
}

/// An unreferenced area deletes cleanly.
#[tokio::test]
async fn unreferenced_area_deletes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let (state, _storage) = test.app_state();

    let area = fixtures::insert_area(&test.db, |_| {}).await?;

    let result = delete_area(State(state.clone()), Path(area.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let gone = AreaRepository::new(&test.db).get(area.id).await?;
    assert!(gone.is_none());

    Ok(())
}
