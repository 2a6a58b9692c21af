use thiserror::Error;

/// Failures while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// The session store or context could not be prepared.
    #[error("test setup failed: {0}")]
    Setup(String),
}
