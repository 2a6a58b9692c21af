use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Assembles a throwaway in-memory database for one test.
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let mut test = TestBuilder::new().with_bot_tables().build().await?;
/// let (db, session) = test.db_and_session().await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the table of `entity`. Tables are created in the order they were added, so
    /// add referenced tables first.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let statement = Schema::new(sea_orm::DbBackend::Sqlite).create_table_from_entity(entity);
        self.tables.push(statement);
        self
    }

    /// Queues the `user` and `bot` tables.
    pub fn with_bot_tables(self) -> Self {
        self.with_table(User).with_table(Bot)
    }

    /// Connects to a fresh in-memory database and creates the queued tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with `db` set; the session is created on demand
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.create_tables(self.tables).await?;
        Ok(context)
    }
}
