use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

/// A live in-memory SQLite database for one test.
pub struct TestContext {
    pub db: DatabaseConnection,
}

impl TestContext {
    pub async fn new() -> Result<Self, TestError> {
        // A pooled `sqlite::memory:` gives each connection its own private
        // database; cap the pool at one so every query sees the same tables.
        // Foreign keys are off so tests can create only the tables they use.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .map_sqlx_sqlite_opts(|opts| opts.foreign_keys(false));
        let db = Database::connect(options).await?;

        Ok(TestContext { db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
