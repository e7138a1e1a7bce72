use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
///
/// Queues table creation statements and executes them against a fresh
/// in-memory SQLite database during `build()`.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_core_tables: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_core_tables: false,
        }
    }

    /// Add every givebridge table to the test database.
    ///
    /// Covers areas, both application tables, donors, students, the three
    /// physical inventory tables, and tuition pledges.
    pub fn with_core_tables(mut self) -> Self {
        self.include_core_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_core_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Area),
                schema.create_table_from_entity(entity::prelude::DonorApplication),
                schema.create_table_from_entity(entity::prelude::StudentApplication),
                schema.create_table_from_entity(entity::prelude::Donor),
                schema.create_table_from_entity(entity::prelude::Student),
                schema.create_table_from_entity(entity::prelude::Laptop),
                schema.create_table_from_entity(entity::prelude::Motorbike),
                schema.create_table_from_entity(entity::prelude::Component),
                schema.create_table_from_entity(entity::prelude::TuitionSupport),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builder_creates_core_tables() {
        let result = TestBuilder::new().with_core_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn builder_creates_single_table() {
        let result = TestBuilder::new()
            .with_table(entity::prelude::Area)
            .build()
            .await;
        assert!(result.is_ok());
    }
}
