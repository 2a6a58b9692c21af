//! Authentication and bot ownership guards.
//!
//! Handlers call these explicitly at the top of their body: `AuthGuard` establishes who
//! the caller is, `bot_access` decides whether that caller may manage a given bot.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{bot::BotRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    i18n::Locale,
    middleware::session::AuthSession,
    model::{bot::Bot, user::User},
};

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged in user holding every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged in user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session points at a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user) = self.current().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user.discord_id,
                            "User attempted a moderation action without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Resolves the logged in user, if any, for pages that are public.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Logged in user
    /// - `Ok(None)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session points at a deleted user
    pub async fn current(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_discord_id(user_id)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(Some(user))
    }
}

/// Outcome of the ownership check for one bot.
#[derive(Debug)]
pub enum BotAccess {
    /// The caller owns the bot or is an admin. Carries the loaded record.
    Allowed(Bot),
    /// The bot exists but belongs to someone else.
    Forbidden,
    NotFound,
}

impl BotAccess {
    /// Turns a refusal into the localized error page.
    pub fn allowed(self, locale: Locale) -> Result<Bot, AppError> {
        match self {
            Self::Allowed(bot) => Ok(bot),
            Self::Forbidden => Err(AppError::Forbidden(locale.text("error_forbidden"))),
            Self::NotFound => Err(AppError::NotFound(locale.text("error_bot_not_found"))),
        }
    }
}

/// Checks whether `user` may manage bot `id`.
///
/// Existence is checked before ownership, so a missing bot is reported as missing to
/// every caller.
pub async fn bot_access(
    db: &DatabaseConnection,
    user: &User,
    id: u64,
) -> Result<BotAccess, AppError> {
    let Some(bot) = BotRepository::new(db).find_by_id(id).await? else {
        return Ok(BotAccess::NotFound);
    };

    if bot.manageable_by(user) {
        Ok(BotAccess::Allowed(bot))
    } else {
        Ok(BotAccess::Forbidden)
    }
}
