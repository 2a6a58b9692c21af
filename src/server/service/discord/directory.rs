//! Looking up Discord accounts.

use std::sync::Arc;

use serenity::{all::UserId, async_trait, http::Http};

use crate::server::error::AppError;

/// Answers whether a Discord id belongs to a bot account.
#[async_trait]
pub trait BotDirectory: Send + Sync {
    /// # Returns
    /// - `Ok(true)` - The id is a bot account
    /// - `Ok(false)` - The id is a regular user or unknown to Discord
    /// - `Err(AppError)` - Discord could not be asked
    async fn is_bot(&self, id: u64) -> Result<bool, AppError>;
}

/// Directory backed by the Discord REST API.
pub struct DiscordDirectory {
    http: Arc<Http>,
}

impl DiscordDirectory {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl BotDirectory for DiscordDirectory {
    async fn is_bot(&self, id: u64) -> Result<bool, AppError> {
        if id == 0 {
            return Ok(false);
        }

        match self.http.get_user(UserId::new(id)).await {
            Ok(user) => Ok(user.bot),
            // Discord answers 400 for ids that cannot exist and 404 for unknown ones
            Err(serenity::Error::Http(err))
                if matches!(err.status_code().map(|s| s.as_u16()), Some(400 | 404)) =>
            {
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }
}
