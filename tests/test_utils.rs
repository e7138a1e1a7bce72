//! Shared setup helpers for controller tests.

use givebridge::server::{events::EventBus, model::app::AppState, storage::ObjectStorage};
use givebridge_test_utils::TestContext;
use tempfile::TempDir;

pub trait TestSetupExt {
    /// Builds an [`AppState`] over the test database with a temp-dir object
    /// store. The returned [`TempDir`] owns the storage root and must stay
    /// alive for as long as the state is used.
    fn app_state(&self) -> (AppState, TempDir);
}

impl TestSetupExt for TestContext {
    fn app_state(&self) -> (AppState, TempDir) {
        let dir = tempfile::tempdir().expect("create storage tempdir");
        let state = AppState {
            db: self.db.clone(),
            storage: ObjectStorage::new(dir.path(), "https://cdn.test"),
            events: EventBus::new(),
        };

        (state, dir)
    }
}
