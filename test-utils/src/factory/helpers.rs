//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// First value handed out by `next_snowflake`, large enough to look like a Discord id.
const SNOWFLAKE_BASE: u64 = 100_000_000_000_000_000;

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Gets the next unique Discord-style snowflake id for test data.
///
/// # Returns
/// - `String` - 18 digit decimal id
pub fn next_snowflake() -> String {
    (SNOWFLAKE_BASE + next_id()).to_string()
}

/// Creates a user and a bot owned by that user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, bot))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_bot_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::bot::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let bot = crate::factory::bot::create_bot(db, &user.discord_id).await?;

    Ok((user, bot))
}
