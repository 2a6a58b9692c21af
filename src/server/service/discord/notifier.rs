//! Posting moderation messages to Discord.

use std::sync::Arc;

use serenity::{
    all::{ChannelId, CreateAllowedMentions, CreateMessage, ExecuteWebhook, Webhook},
    async_trait,
    http::Http,
};

use crate::server::error::AppError;

/// Destination for human readable moderation messages.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, content: &str) -> Result<(), AppError>;
}

/// Posts as the bot user into a fixed channel.
pub struct DiscordChannelNotifier {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl DiscordChannelNotifier {
    pub fn new(http: Arc<Http>, channel_id: u64) -> Self {
        Self {
            http,
            channel_id: ChannelId::new(channel_id),
        }
    }
}

#[async_trait]
impl Notifier for DiscordChannelNotifier {
    async fn notify(&self, content: &str) -> Result<(), AppError> {
        // Mentions render as names without pinging anyone
        let message = CreateMessage::new()
            .content(content)
            .allowed_mentions(CreateAllowedMentions::new());

        self.channel_id.send_message(&self.http, message).await?;

        Ok(())
    }
}

/// Executes a webhook resolved once at startup.
pub struct DiscordWebhookNotifier {
    http: Arc<Http>,
    webhook: Webhook,
}

impl DiscordWebhookNotifier {
    /// Resolves the webhook behind `url`.
    ///
    /// # Returns
    /// - `Ok(DiscordWebhookNotifier)` - Webhook exists and can be executed
    /// - `Err(AppError::DiscordErr)` - Malformed URL or unknown webhook
    pub async fn from_url(http: Arc<Http>, url: &str) -> Result<Self, AppError> {
        let webhook = Webhook::from_url(&http, url).await?;

        Ok(Self { http, webhook })
    }
}

#[async_trait]
impl Notifier for DiscordWebhookNotifier {
    async fn notify(&self, content: &str) -> Result<(), AppError> {
        let builder = ExecuteWebhook::new()
            .content(content)
            .allowed_mentions(CreateAllowedMentions::new());

        self.webhook.execute(&self.http, false, builder).await?;

        Ok(())
    }
}
