//! Shared fixtures for the bot list's database tests.
//!
//! - `builder::TestBuilder` creates an in-memory SQLite database with the tables a test
//!   asks for
//! - `context::TestContext` hands out that database and a session stored in it
//! - `factory` inserts users and bots with unique ids and plausible defaults
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn owner_can_edit() -> Result<(), AppError> {
//!     let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!     let (owner, bot) = factory::helpers::create_bot_with_owner(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
