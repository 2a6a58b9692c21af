//! Domain models for listed bots.
//!
//! A `Bot` carries the secret token and never leaves the service layer as-is; pages are
//! built from `BotProfile`, which has no token field at all.

use crate::{
    model::bot::{BotDto, BotFormDto},
    server::{
        error::{internal::InternalError, AppError},
        model::user::User,
        util::parse::parse_u64_from_string,
    },
};

/// How a bot's long description is written and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionFormat {
    Markdown,
    Asciidoc,
    Html,
}

impl DescriptionFormat {
    pub const ALL: [DescriptionFormat; 3] = [Self::Markdown, Self::Asciidoc, Self::Html];

    /// Tag stored in the `type` column and used by the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Asciidoc => "asciidoc",
            Self::Html => "html",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.as_str() == tag)
    }
}

/// The user editable part of a bot record.
///
/// Edits replace exactly these fields, so comparing two values tells whether an edit
/// changes anything.
#[derive(Debug, Clone, PartialEq)]
pub struct BotContent {
    pub name: String,
    pub avatar: String,
    pub invite: String,
    pub count: i64,
    pub short_desc: String,
    pub long_desc: String,
    pub format: DescriptionFormat,
}

/// Full bot record including the secret token.
#[derive(Debug, Clone, PartialEq)]
pub struct Bot {
    /// Discord application id.
    pub id: u64,
    pub content: BotContent,
    /// Discord id of the submitting user.
    pub owner: u64,
    pub approved: bool,
    /// 128 hex characters, shown only on the token page.
    pub token: String,
    /// Submission time in epoch milliseconds.
    pub timestamp: i64,
}

impl Bot {
    /// Converts an entity model to a bot domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Bot)` - The converted bot
    /// - `Err(AppError::InternalErr(_))` - Stored id or owner is not a u64, or the stored
    ///   description type is unknown
    pub fn from_entity(entity: entity::bot::Model) -> Result<Self, AppError> {
        let format = DescriptionFormat::parse(&entity.kind).ok_or_else(|| {
            InternalError::UnknownDescriptionFormat {
                bot_id: entity.id.clone(),
                kind: entity.kind.clone(),
            }
        })?;

        Ok(Self {
            id: parse_u64_from_string(entity.id)?,
            owner: parse_u64_from_string(entity.owner)?,
            content: BotContent {
                name: entity.name,
                avatar: entity.avatar,
                invite: entity.invite,
                count: entity.count,
                short_desc: entity.short_desc,
                long_desc: entity.long_desc,
                format,
            },
            approved: entity.approved,
            token: entity.token,
            timestamp: entity.timestamp,
        })
    }

    /// Drops the token.
    pub fn into_profile(self) -> BotProfile {
        BotProfile {
            id: self.id,
            content: self.content,
            owner: self.owner,
            approved: self.approved,
            timestamp: self.timestamp,
        }
    }

    /// Prefills the edit form with the stored values.
    pub fn to_form(&self) -> BotFormDto {
        BotFormDto {
            csrf: String::new(),
            id: self.id.to_string(),
            name: self.content.name.clone(),
            avatar: self.content.avatar.clone(),
            invite: self.content.invite.clone(),
            count: self.content.count.to_string(),
            short_desc: self.content.short_desc.clone(),
            long_desc: self.content.long_desc.clone(),
            kind: self.content.format.as_str().to_string(),
        }
    }

    /// Whether `user` may edit, delete or read the token of this bot.
    pub fn manageable_by(&self, user: &User) -> bool {
        user.discord_id == self.owner || user.admin
    }
}

/// Bot record without its token.
#[derive(Debug, Clone, PartialEq)]
pub struct BotProfile {
    pub id: u64,
    pub content: BotContent,
    pub owner: u64,
    pub approved: bool,
    pub timestamp: i64,
}

impl BotProfile {
    /// Whether the page should offer edit controls to `user`.
    pub fn editable_by(&self, user: Option<&User>) -> bool {
        user.is_some_and(|user| user.discord_id == self.owner || user.admin)
    }

    pub fn into_dto(self) -> BotDto {
        BotDto {
            id: self.id.to_string(),
            name: self.content.name,
            avatar: self.content.avatar,
            invite: self.content.invite,
            count: self.content.count,
            short_desc: self.content.short_desc,
            kind: self.content.format.as_str().to_string(),
            owner: self.owner.to_string(),
            approved: self.approved,
            timestamp: self.timestamp,
        }
    }
}

/// Parameters for inserting a newly submitted bot.
#[derive(Debug, Clone)]
pub struct CreateBotParam {
    pub id: u64,
    pub content: BotContent,
    pub owner: u64,
    pub token: String,
    pub timestamp: i64,
}

/// Fixed set of reasons a moderator can give when removing a bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    Offline,
    Broken,
    Nsfw,
    Abusive,
    Copy,
    Spam,
    Other,
}

impl RemovalReason {
    pub const ALL: [RemovalReason; 7] = [
        Self::Offline,
        Self::Broken,
        Self::Nsfw,
        Self::Abusive,
        Self::Copy,
        Self::Spam,
        Self::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Broken => "broken",
            Self::Nsfw => "nsfw",
            Self::Abusive => "abusive",
            Self::Copy => "copy",
            Self::Spam => "spam",
            Self::Other => "other",
        }
    }

    /// Catalog key of the localized reason text.
    pub fn message_key(&self) -> String {
        format!("remove_{}", self.key())
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|reason| reason.key() == key)
    }
}

/// Result of a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Bot),
    /// A bot with the same id is already listed.
    Duplicate,
}

/// Result of an edit.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    Changed,
    Unchanged,
    /// The record disappeared between loading and writing it.
    Missing,
}

/// Result of an approval.
#[derive(Debug, Clone, PartialEq)]
pub enum ApproveOutcome {
    /// Carries the record as it was before the update.
    Approved(Bot),
    AlreadyApproved,
    NotFound,
}

/// Result of a moderation removal.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
    InvalidReasonOrDescription,
    InvalidReason,
}
