use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Database and session of a single test.
///
/// Both live in the same in-memory SQLite database, mirroring the application where the
/// session table sits next to the `user` and `bot` tables. Each is created the first time
/// it is asked for.
#[derive(Default)]
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the database, connecting on first use.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        self.db
            .as_ref()
            .ok_or_else(|| TestError::Setup("database connection missing".to_string()))
    }

    /// Runs the given `CREATE TABLE` statements. Used by `TestBuilder::build`.
    pub async fn create_tables(
        &mut self,
        statements: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        let db = self.database().await?;

        for statement in statements {
            db.execute(&statement).await?;
        }

        Ok(())
    }

    /// Returns a session stored in the test database, creating the session table and
    /// the session on first use.
    ///
    /// ```rust,ignore
    /// let session = test.session().await?;
    /// AuthSession::new(session).set_user_id(42).await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let pool = self.database().await?.get_sqlite_connection_pool().clone();
            let store = SqliteStore::new(pool);

            store
                .migrate()
                .await
                .map_err(|e| TestError::Setup(format!("session store migration: {}", e)))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        self.session
            .as_ref()
            .ok_or_else(|| TestError::Setup("session missing".to_string()))
    }

    /// Borrows database and session together, which separate calls cannot do.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (&self.db, &self.session) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(TestError::Setup("test context not initialized".to_string())),
        }
    }
}
