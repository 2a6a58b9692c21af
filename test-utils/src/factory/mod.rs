//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let bot = factory::bot::create_bot(&db, &user.discord_id).await?;
//!
//!     // Create with the owner in one go
//!     let (owner, bot) = factory::helpers::create_bot_with_owner(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let bot = factory::bot::BotFactory::new(&db, "123456789")
//!     .name("Custom Bot")
//!     .kind("html")
//!     .approved(true)
//!     .build()
//!     .await?;
//! ```

pub mod bot;
pub mod helpers;
pub mod user;

pub use bot::create_bot;
pub use user::create_user;
