use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{bot::BotRepository, user::UserRepository},
    error::AppError,
    i18n::Locale,
    model::{
        bot::{
            ApproveOutcome, Bot, BotContent, BotProfile, CreateBotParam, DescriptionFormat,
            EditOutcome, RemovalReason, RemoveOutcome, SubmitOutcome,
        },
        event::BotEvent,
        user::User,
    },
    service::{
        notification::NotificationDispatcher,
        render::{render_description, RenderedDescription},
    },
    util::token::{generate_token, BOT_TOKEN_BYTES},
};

/// Longest moderation note accepted on removal, in characters.
pub const MAX_REMOVAL_DESCRIPTION_CHARS: usize = 1000;

/// Everything the public bot page shows.
#[derive(Debug, Clone)]
pub struct BotPage {
    pub profile: BotProfile,
    /// Absent when the submitting user has no stored profile.
    pub owner: Option<User>,
    pub editable: bool,
    pub description: RenderedDescription,
}

pub struct BotService<'a> {
    db: &'a DatabaseConnection,
    notifications: &'a NotificationDispatcher,
}

impl<'a> BotService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifications: &'a NotificationDispatcher) -> Self {
        Self { db, notifications }
    }

    /// Lists a new bot owned by `caller`, unapproved and with a fresh token.
    ///
    /// The record is persisted before the announcement is queued.
    ///
    /// # Returns
    /// - `Ok(SubmitOutcome::Created(bot))` - Bot stored
    /// - `Ok(SubmitOutcome::Duplicate)` - A bot with this id is already listed
    /// - `Err(AppError)` - Database error
    pub async fn submit(
        &self,
        caller: &User,
        id: u64,
        content: BotContent,
    ) -> Result<SubmitOutcome, AppError> {
        let param = CreateBotParam {
            id,
            content,
            owner: caller.discord_id,
            token: generate_token(BOT_TOKEN_BYTES),
            timestamp: Utc::now().timestamp_millis(),
        };

        let bot = Bot {
            id: param.id,
            content: param.content.clone(),
            owner: param.owner,
            approved: false,
            token: param.token.clone(),
            timestamp: param.timestamp,
        };

        if !BotRepository::new(self.db).try_insert(param).await? {
            return Ok(SubmitOutcome::Duplicate);
        }

        tracing::info!("User {} submitted bot {}", caller.discord_id, bot.id);

        self.notifications.dispatch(BotEvent::Added {
            actor: caller.discord_id,
            name: bot.content.name.clone(),
            id: bot.id,
        });

        Ok(SubmitOutcome::Created(bot))
    }

    /// Builds the public page of a bot.
    ///
    /// # Returns
    /// - `Ok(Some(BotPage))` - Bot found
    /// - `Ok(None)` - No bot with that id
    pub async fn page(&self, caller: Option<&User>, id: u64) -> Result<Option<BotPage>, AppError> {
        let Some(profile) = BotRepository::new(self.db).find_profile_by_id(id).await? else {
            return Ok(None);
        };

        let owner = UserRepository::new(self.db)
            .find_by_discord_id(profile.owner)
            .await?;

        Ok(Some(BotPage {
            editable: profile.editable_by(caller),
            description: render_description(&profile),
            owner,
            profile,
        }))
    }

    /// Applies an edit to a bot already loaded by the ownership guard.
    ///
    /// Only the content fields are written. An edit that changes nothing performs no
    /// write and sends no announcement.
    pub async fn edit(
        &self,
        caller: &User,
        bot: &Bot,
        content: BotContent,
    ) -> Result<EditOutcome, AppError> {
        if bot.content == content {
            return Ok(EditOutcome::Unchanged);
        }

        let rows = BotRepository::new(self.db)
            .update_content(bot.id, content)
            .await?;
        if rows == 0 {
            return Ok(EditOutcome::Missing);
        }

        tracing::info!("User {} edited bot {}", caller.discord_id, bot.id);

        self.notifications.dispatch(BotEvent::Edited {
            actor: caller.discord_id,
            name: bot.content.name.clone(),
            id: bot.id,
            owner: bot.owner,
        });

        Ok(EditOutcome::Changed)
    }

    /// Deletes a bot loaded by the ownership guard.
    ///
    /// A record removed concurrently is not an error; the deletion is still announced.
    pub async fn delete(&self, caller: &User, bot: &Bot) -> Result<(), AppError> {
        BotRepository::new(self.db).delete(bot.id).await?;

        tracing::info!("User {} deleted bot {}", caller.discord_id, bot.id);

        self.notifications.dispatch(BotEvent::Deleted {
            actor: caller.discord_id,
            name: bot.content.name.clone(),
            id: bot.id,
            owner: bot.owner,
        });

        Ok(())
    }

    /// Replaces the secret token of a bot with a fresh one.
    pub async fn rotate_token(&self, id: u64) -> Result<(), AppError> {
        let rows = BotRepository::new(self.db)
            .set_token(id, generate_token(BOT_TOKEN_BYTES))
            .await?;

        if rows == 0 {
            tracing::warn!("Token rotation found no bot {}", id);
        }

        Ok(())
    }

    /// Approves a pending bot.
    ///
    /// Approving an approved bot changes nothing and is not announced again.
    ///
    /// # Returns
    /// - `Ok(ApproveOutcome::Approved(previous))` - Flag set by this call
    /// - `Ok(ApproveOutcome::AlreadyApproved)` - Nothing to do
    /// - `Ok(ApproveOutcome::NotFound)` - No bot with that id
    pub async fn approve(&self, caller: &User, id: u64) -> Result<ApproveOutcome, AppError> {
        let repo = BotRepository::new(self.db);

        let Some(previous) = repo.find_by_id(id).await? else {
            return Ok(ApproveOutcome::NotFound);
        };

        if !repo.approve(id).await? {
            // Either approved already or deleted since the lookup.
            return Ok(if repo.find_by_id(id).await?.is_some() {
                ApproveOutcome::AlreadyApproved
            } else {
                ApproveOutcome::NotFound
            });
        }

        tracing::info!("Admin {} approved bot {}", caller.discord_id, id);

        self.notifications.dispatch(BotEvent::Approved {
            actor: caller.discord_id,
            name: previous.content.name.clone(),
            id,
            owner: previous.owner,
        });

        Ok(ApproveOutcome::Approved(previous))
    }

    /// Removes a bot for a moderation reason.
    ///
    /// Checks run in order: the bot must exist, both reason and description must be
    /// present with the description within its limit, then the reason must be one of the
    /// fixed keys. Nothing is deleted or announced unless every check passes. The reason
    /// text in the announcement is localized with `locale`.
    pub async fn remove(
        &self,
        caller: &User,
        id: u64,
        reason: Option<&str>,
        description: Option<&str>,
        locale: Locale,
    ) -> Result<RemoveOutcome, AppError> {
        let repo = BotRepository::new(self.db);

        let Some(bot) = repo.find_by_id(id).await? else {
            return Ok(RemoveOutcome::NotFound);
        };

        let (Some(reason), Some(description)) = (reason, description) else {
            return Ok(RemoveOutcome::InvalidReasonOrDescription);
        };
        if description.chars().count() > MAX_REMOVAL_DESCRIPTION_CHARS {
            return Ok(RemoveOutcome::InvalidReasonOrDescription);
        }

        let Some(reason) = RemovalReason::from_key(reason) else {
            return Ok(RemoveOutcome::InvalidReason);
        };

        repo.delete(id).await?;

        tracing::info!(
            "Admin {} removed bot {} for {}",
            caller.discord_id,
            id,
            reason.key()
        );

        self.notifications.dispatch(BotEvent::Removed {
            actor: caller.discord_id,
            name: bot.content.name,
            id,
            owner: bot.owner,
            reason_text: locale.text(&reason.message_key()),
            reason_key: reason.key().to_string(),
            description: description.to_string(),
        });

        Ok(RemoveOutcome::Removed)
    }

    /// Raw long description of an HTML bot, for the sandboxed frame.
    ///
    /// # Returns
    /// - `Ok(Some(html))` - Bot exists and its description is HTML
    /// - `Ok(None)` - Bot missing or described in another format
    pub async fn html_embed(&self, id: u64) -> Result<Option<String>, AppError> {
        let profile = BotRepository::new(self.db).find_profile_by_id(id).await?;

        Ok(profile
            .filter(|profile| profile.content.format == DescriptionFormat::Html)
            .map(|profile| profile.content.long_desc))
    }

    /// Approved bots, newest first.
    pub async fn list_approved(&self) -> Result<Vec<BotProfile>, AppError> {
        BotRepository::new(self.db).get_by_approval(true).await
    }

    /// Bots waiting for moderation, newest first.
    pub async fn list_pending(&self) -> Result<Vec<BotProfile>, AppError> {
        BotRepository::new(self.db).get_by_approval(false).await
    }
}
