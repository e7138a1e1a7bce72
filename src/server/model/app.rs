use sea_orm::DatabaseConnection;

use crate::server::{events::EventBus, storage::ObjectStorage};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub storage: ObjectStorage,
    pub events: EventBus,
}
