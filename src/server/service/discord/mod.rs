//! Discord collaborators: the moderation log and the user directory.

pub mod directory;
pub mod notifier;

pub use directory::{BotDirectory, DiscordDirectory};
pub use notifier::{DiscordChannelNotifier, DiscordWebhookNotifier, Notifier};
