use crate::server::{
    error::{config::ConfigError, AppError},
    util::parse::parse_id_list,
};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Where moderation notifications are posted.
#[derive(Debug, Clone, PartialEq)]
pub enum NotifyTarget {
    /// Post as the bot user into a channel.
    Channel(u64),
    /// Execute a webhook by URL.
    Webhook(String),
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,
    pub discord_bot_token: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    pub notify_target: NotifyTarget,
    /// Discord ids granted admin whenever they log in.
    pub admin_ids: Vec<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let notify_target = match (
            lookup("DISCORD_WEBHOOK_URL").filter(|v| !v.trim().is_empty()),
            lookup("DISCORD_LOG_CHANNEL_ID").filter(|v| !v.trim().is_empty()),
        ) {
            (Some(url), _) => NotifyTarget::Webhook(url),
            (None, Some(channel)) => {
                let channel_id = channel.trim().parse::<u64>().map_err(|e| {
                    ConfigError::InvalidEnvVar {
                        name: "DISCORD_LOG_CHANNEL_ID".to_string(),
                        reason: e.to_string(),
                    }
                })?;
                NotifyTarget::Channel(channel_id)
            }
            (None, None) => {
                return Err(ConfigError::MissingEnvVar(
                    "DISCORD_LOG_CHANNEL_ID or DISCORD_WEBHOOK_URL".to_string(),
                )
                .into())
            }
        };

        let admin_ids = match lookup("ADMIN_IDS") {
            Some(value) => parse_id_list(&value).map_err(|entry| ConfigError::InvalidEnvVar {
                name: "ADMIN_IDS".to_string(),
                reason: format!("'{}' is not a Discord id", entry),
            })?,
            None => Vec::new(),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: lookup("BIND_ADDRESS")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            notify_target,
            admin_ids,
        })
    }

    /// Session cookies are marked secure when the site is served over https.
    pub fn secure_cookies(&self) -> bool {
        self.discord_redirect_url.starts_with("https://")
    }
}
