//! Moderation events announced to the Discord log.

/// Something that happened to a listed bot.
///
/// Every variant carries the acting user and enough of the bot to identify it after the
/// record itself may be gone.
#[derive(Debug, Clone, PartialEq)]
pub enum BotEvent {
    Added {
        actor: u64,
        name: String,
        id: u64,
    },
    Edited {
        actor: u64,
        name: String,
        id: u64,
        owner: u64,
    },
    Deleted {
        actor: u64,
        name: String,
        id: u64,
        owner: u64,
    },
    Approved {
        actor: u64,
        name: String,
        id: u64,
        owner: u64,
    },
    Removed {
        actor: u64,
        name: String,
        id: u64,
        owner: u64,
        /// Localized reason text.
        reason_text: String,
        reason_key: String,
        description: String,
    },
}

impl BotEvent {
    /// Message content posted to the log channel.
    pub fn message(&self) -> String {
        match self {
            Self::Added { actor, name, id } => {
                format!("<@{}> added `{}` <@{}>", actor, name, id)
            }
            Self::Edited {
                actor,
                name,
                id,
                owner,
            } => format!("<@{}> edited `{}` <@{}> by <@{}>", actor, name, id, owner),
            Self::Deleted {
                actor,
                name,
                id,
                owner,
            } => format!("<@{}> deleted `{}` <@{}> by <@{}>", actor, name, id, owner),
            Self::Approved {
                actor,
                name,
                id,
                owner,
            } => format!("<@{}> approved `{}` <@{}> by <@{}>", actor, name, id, owner),
            Self::Removed {
                actor,
                name,
                id,
                owner,
                reason_text,
                reason_key,
                description,
            } => format!(
                "<@{}> removed `{}` <@{}> by <@{}> for: `{}` ({})\n{}",
                actor, name, id, owner, reason_text, reason_key, description
            ),
        }
    }
}
